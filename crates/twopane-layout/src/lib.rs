#![forbid(unsafe_code)]

//! Pane sizing and two-child placement.
//!
//! # Role in twopane
//! `twopane-layout` turns a [`GeometrySnapshot`] and its [`WindowMode`] into
//! concrete pane sizes, then places exactly two children inside an available
//! box.
//!
//! # Primary responsibilities
//! - **Pane sizes**: hinge-exact sizes when a fold separates the panes,
//!   weighted sizes on large screens, zero sizes in single-screen modes.
//! - **Placement**: [`measure_and_place`] picks a single, equal, or
//!   proportional strategy and returns one [`Rect`] per child.
//!
//! # Failure modes
//! Only caller-contract violations are errors ([`LayoutError`]). Degenerate
//! geometry yields zero-size or clamped output.

pub mod error;
pub mod pane_size;
pub mod two_pane;

pub use error::{LayoutError, Result};
pub use pane_size::{
    DEFAULT_PANE1_WEIGHT, PaneSizes, SplitAxis, foldable_pane_sizes, pane_sizes,
    validate_pane1_weight,
};
pub use two_pane::{
    LayoutStrategy, PaneChild, PaneLayoutContext, PanePlacements, measure_and_place,
};
pub use twopane_core::{GeometrySnapshot, LayoutDirection, Rect, Size, WindowMode};
