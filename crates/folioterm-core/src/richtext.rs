//! Rich text runs: plain text, hyperlinks, certificate actions.
//!
//! A line of terminal output is an ordered sequence of runs. Runs are
//! produced once, when the line is authored -- command output passes through
//! the hyperlink scanner exactly one time, and the reveal engine only ever
//! counts characters. Nothing re-parses text per frame.

use std::sync::LazyLock;

use regex::Regex;

/// Hyperlink forms the scanner recognizes: explicit `http(s)` URLs plus the
/// bare `github.com/...` and `linkedin.com/...` shorthands used by the
/// contact block.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://[^\s]+)|(github\.com/[^\s]+)|(linkedin\.com/[^\s]+)").unwrap()
});

/// One styled segment of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Plain text; may span newlines.
    Text(String),
    /// Clickable hyperlink. `label` is the visible text, `url` the target.
    Link { url: String, label: String },
    /// Clickable certificate entry; activating it opens the viewer.
    Action { cert: String, label: String },
}

impl Run {
    /// The visible text of this run.
    pub fn label(&self) -> &str {
        match self {
            Run::Text(text) => text,
            Run::Link { label, .. } | Run::Action { label, .. } => label,
        }
    }

    /// Number of characters this run contributes to the reveal.
    pub fn char_len(&self) -> usize {
        self.label().chars().count()
    }

    /// Whether a fully revealed run responds to pointer clicks.
    pub fn is_clickable(&self) -> bool {
        !matches!(self, Run::Text(_))
    }
}

/// An ordered sequence of runs forming one logical line of output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    runs: Vec<Run>,
}

impl RichText {
    /// A single plain-text run. No hyperlink scanning.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::Text(text.into())],
        }
    }

    /// Build from pre-authored runs.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Split `text` into plain and link runs. Bare `github.com` /
    /// `linkedin.com` labels get an `https://` scheme on their target URL;
    /// the visible label stays as written.
    pub fn scan_links(text: &str) -> Self {
        let mut runs = Vec::new();
        let mut cursor = 0;
        for m in LINK_REGEX.find_iter(text) {
            if m.start() > cursor {
                runs.push(Run::Text(text[cursor..m.start()].to_string()));
            }
            runs.push(Run::Link {
                url: normalize_url(m.as_str()),
                label: m.as_str().to_string(),
            });
            cursor = m.end();
        }
        if cursor < text.len() || runs.is_empty() {
            runs.push(Run::Text(text[cursor..].to_string()));
        }
        Self { runs }
    }

    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Total characters across all runs; the reveal engine's unit.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// The line with styling stripped.
    pub fn flatten(&self) -> String {
        self.runs.iter().map(Run::label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.char_len() == 0
    }

    /// Whether any run opens the certificate viewer.
    pub fn has_actions(&self) -> bool {
        self.runs.iter().any(|r| matches!(r, Run::Action { .. }))
    }
}

/// Turn a link label into an openable URL: labels already carrying a scheme
/// pass through, bare domains get `https://`.
pub fn normalize_url(label: &str) -> String {
    if label.starts_with("http") {
        label.to_string()
    } else {
        format!("https://{label}")
    }
}
