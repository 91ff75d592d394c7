#![forbid(unsafe_code)]

//! Layout errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Caller-contract violations rejected by the layout functions.
///
/// Degenerate geometry (zero-size windows, fold bounds outside the window) is
/// never an error; it yields zero-size or clamped output instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid pane weight {weight}: expected {expected}")]
    InvalidWeight { weight: f32, expected: &'static str },

    #[error("two-pane layout requires exactly 2 children, got {count}")]
    InvalidChildCount { count: usize },
}
