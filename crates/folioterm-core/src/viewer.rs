//! Certificate viewer state.
//!
//! A side panel collaborator of the terminal: the `education` command shows
//! it, and leaving education (any other command, Escape, or a session reset)
//! hides it again and drops the selection. Selection and zoom live here;
//! drawing is in `ui::viewer_panel`.

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.25;

/// Viewer visibility, selection, and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateViewer {
    visible: bool,
    selected: Option<String>,
    zoom: f32,
}

impl Default for CertificateViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateViewer {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: None,
            zoom: 1.0,
        }
    }

    /// Show the panel (placeholder prompt until something is selected).
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the panel and clear the selection. Zoom persists.
    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    /// Select a certificate asset; implies showing the panel.
    pub fn select(&mut self, asset: &str) {
        self.selected = Some(asset.to_string());
        self.visible = true;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The Intern & Team Lead certificate renders side by side with its
    /// recommendation letter.
    pub fn is_dual(&self) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|asset| asset.contains("intern-team-lead"))
    }
}
