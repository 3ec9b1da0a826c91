//! Runtime configuration (`folioterm.toml`).
//!
//! Every field has a default, so a missing file or an empty table is a
//! fully working configuration. The config path comes from the
//! `FOLIOTERM_CONFIG` environment variable, falling back to
//! `folioterm.toml` in the working directory.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::scrollback::DEFAULT_CAP;

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "FOLIOTERM_CONFIG";

/// Default config file name.
pub const CONFIG_FILE: &str = "folioterm.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolioConfig {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_width")]
    pub screen_width: u32,
    #[serde(default = "default_height")]
    pub screen_height: u32,
    /// Reveal speed of `$ command` echo lines, ms per character.
    #[serde(default = "default_echo_speed")]
    pub echo_speed_ms: u32,
    /// Reveal speed of response blocks, ms per character.
    #[serde(default = "default_response_speed")]
    pub response_speed_ms: u32,
    /// Maximum scrollback entries, permanent header included.
    #[serde(default = "default_scrollback_cap")]
    pub scrollback_cap: usize,
}

fn default_title() -> String {
    "FolioTerm".to_string()
}
fn default_width() -> u32 {
    960
}
fn default_height() -> u32 {
    720
}
fn default_echo_speed() -> u32 {
    5
}
fn default_response_speed() -> u32 {
    15
}
fn default_scrollback_cap() -> usize {
    DEFAULT_CAP
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            screen_width: default_width(),
            screen_height: default_height(),
            echo_speed_ms: default_echo_speed(),
            response_speed_ms: default_response_speed(),
            scrollback_cap: default_scrollback_cap(),
        }
    }
}

/// Smallest workable cap: the two header lines plus one echo/response pair.
const MIN_SCROLLBACK_CAP: usize = 4;

impl FolioConfig {
    /// Parse a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| FolioError::Config(format!("{CONFIG_FILE}: {e}")))?;
        Ok(config.sanitized())
    }

    /// Load from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FolioError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    /// Load from `FOLIOTERM_CONFIG` or `folioterm.toml`. A missing file is
    /// not an error -- defaults apply; a present-but-invalid file is.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        let path = Path::new(&path);
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from_path(path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp values the terminal cannot operate with.
    fn sanitized(mut self) -> Self {
        if self.scrollback_cap < MIN_SCROLLBACK_CAP {
            log::warn!(
                "scrollback_cap {} below minimum, clamping to {MIN_SCROLLBACK_CAP}",
                self.scrollback_cap
            );
            self.scrollback_cap = MIN_SCROLLBACK_CAP;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_terminal_behavior() {
        let c = FolioConfig::default();
        assert_eq!(c.window_title, "FolioTerm");
        assert_eq!(c.screen_width, 960);
        assert_eq!(c.screen_height, 720);
        assert_eq!(c.echo_speed_ms, 5);
        assert_eq!(c.response_speed_ms, 15);
        assert_eq!(c.scrollback_cap, 50);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let c = FolioConfig::from_toml("").unwrap();
        assert_eq!(c, FolioConfig::default());
    }

    #[test]
    fn partial_toml_overrides_selected_fields() {
        let c = FolioConfig::from_toml("response_speed_ms = 30\nscrollback_cap = 100\n").unwrap();
        assert_eq!(c.response_speed_ms, 30);
        assert_eq!(c.scrollback_cap, 100);
        assert_eq!(c.echo_speed_ms, 5);
        assert_eq!(c.window_title, "FolioTerm");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = FolioConfig::from_toml("scrollback_cap = [[[").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("config error"), "{msg}");
        assert!(msg.contains(CONFIG_FILE), "{msg}");
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        assert!(FolioConfig::from_toml("screen_width = \"wide\"").is_err());
    }

    #[test]
    fn tiny_cap_is_clamped() {
        let c = FolioConfig::from_toml("scrollback_cap = 1").unwrap();
        assert_eq!(c.scrollback_cap, 4);
    }

    #[test]
    fn load_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window_title = \"Portfolio\"").unwrap();
        writeln!(file, "echo_speed_ms = 2").unwrap();
        let c = FolioConfig::load_from_path(file.path()).unwrap();
        assert_eq!(c.window_title, "Portfolio");
        assert_eq!(c.echo_speed_ms, 2);
        assert_eq!(c.response_speed_ms, 15);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(FolioConfig::load_from_path(&missing).is_err());
    }

    #[test]
    fn zero_speeds_are_allowed() {
        // Instant reveal is a legitimate configuration.
        let c = FolioConfig::from_toml("echo_speed_ms = 0\nresponse_speed_ms = 0").unwrap();
        assert_eq!(c.echo_speed_ms, 0);
        assert_eq!(c.response_speed_ms, 0);
    }
}
