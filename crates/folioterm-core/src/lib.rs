//! FolioTerm core.
//!
//! Platform-agnostic engine for the terminal-portfolio: the command
//! interpreter, the typed-reveal pipeline, the bounded scrollback, history
//! and completion, the certificate viewer state, and the widget layer that
//! renders it all through the backend traits. This crate has zero platform
//! dependencies.

// Re-exports from folioterm-types (foundation types).
pub use folioterm_types::bitmap_font;
pub use folioterm_types::error;
pub use folioterm_types::input;

pub mod backend;
pub mod commands;
pub mod completion;
pub mod config;
pub mod history;
pub mod interpreter;
pub mod reveal;
pub mod richtext;
pub mod scrollback;
pub mod session;
pub mod theme;
pub mod ui;
pub mod viewer;
