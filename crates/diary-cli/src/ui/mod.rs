//! UI primitives for the Diary CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, clearing, timezone)
//! - **Theme**: Badge tokens and color palette
//! - **Render**: Entry screens, badges and error messages
//! - **Format**: Timestamp and rule helpers

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;
