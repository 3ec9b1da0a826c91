//! Shared application state for the desktop binary.

use std::collections::HashMap;

use folioterm_core::config::FolioConfig;
use folioterm_core::session::Session;
use folioterm_core::theme::Theme;
use folioterm_core::ui::{CertImage, TerminalView, ViewerPanel};

/// An axis-aligned window region in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Everything the frame loop owns besides the backend.
pub struct AppState {
    pub config: FolioConfig,
    pub theme: Theme,
    pub session: Session,
    pub view: TerminalView,
    pub panel: ViewerPanel,
    /// Generated certificate textures, keyed by asset id.
    pub cert_images: HashMap<String, CertImage>,
}

impl AppState {
    pub fn new(config: FolioConfig) -> Self {
        let session = Session::new(&config);
        Self {
            config,
            theme: Theme::default(),
            session,
            view: TerminalView::new(),
            panel: ViewerPanel::new(),
            cert_images: HashMap::new(),
        }
    }

    /// Window split between the terminal and the viewer panel.
    ///
    /// The viewer claims the right two fifths while visible; the terminal
    /// keeps the rest. With the viewer hidden the terminal owns the whole
    /// window.
    pub fn layout(&self) -> (ScreenRect, Option<ScreenRect>) {
        let w = self.config.screen_width;
        let h = self.config.screen_height;
        if self.session.viewer().is_visible() {
            let viewer_w = w * 2 / 5;
            let term_w = w - viewer_w;
            (
                ScreenRect {
                    x: 0,
                    y: 0,
                    w: term_w,
                    h,
                },
                Some(ScreenRect {
                    x: term_w as i32,
                    y: 0,
                    w: viewer_w,
                    h,
                }),
            )
        } else {
            (ScreenRect { x: 0, y: 0, w, h }, None)
        }
    }
}
