//! Widget layer: the terminal view and the certificate viewer panel.
//!
//! Widgets are immediate-mode: each frame the app hands them a
//! [`DrawContext`](context::DrawContext) and the session state, and they
//! draw into the given rectangle. Click resolution runs the same layout
//! math, so what you see is exactly what you can hit.

pub mod context;
pub mod terminal_view;
pub mod viewer_panel;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use terminal_view::TerminalView;
pub use viewer_panel::{CertImage, ViewerPanel};

/// What a pointer click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A fully revealed hyperlink; `url` is already absolute.
    Link { url: String },
    /// A fully revealed certificate row.
    Certificate { asset: String },
    /// The viewer's `+` button.
    ZoomIn,
    /// The viewer's `-` button.
    ZoomOut,
}
