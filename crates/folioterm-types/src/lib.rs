//! Foundation types for FolioTerm.
//!
//! This crate contains the platform-agnostic types shared by every FolioTerm
//! crate: input events, error types, and the bitmap font data consumed by
//! rendering backends.

pub mod bitmap_font;
pub mod error;
pub mod input;
