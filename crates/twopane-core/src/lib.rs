#![forbid(unsafe_code)]

//! Core: window and fold geometry, size classes, and window-mode classification.
//!
//! # Role in twopane
//! `twopane-core` is the input layer. It owns the immutable
//! [`GeometrySnapshot`](fold::GeometrySnapshot) reported by the platform and
//! the pure classifier that turns a snapshot into one of four
//! [`WindowMode`](window_mode::WindowMode) values.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Rect`](geometry::Rect), [`Size`](geometry::Size) and
//!   [`LayoutDirection`](geometry::LayoutDirection) in layout units.
//! - **Fold**: [`FoldFeature`](fold::FoldFeature) and the snapshot that
//!   carries it.
//! - **Size classes**: compact / medium / expanded buckets per dimension.
//! - **Window mode**: single vs dual, portrait vs landscape, plus the
//!   [`PaneMode`](window_mode::PaneMode) collapse policy.
//!
//! # How it fits in the system
//! `twopane-layout` turns a classified snapshot into pane sizes and child
//! placements; `twopane-nav` uses the single/dual decision to pick between
//! its two navigation representations.

pub mod fold;
pub mod geometry;
pub mod size_class;
pub mod window_mode;

pub use fold::{FoldFeature, FoldOrientation, FoldState, GeometrySnapshot};
pub use geometry::{LayoutDirection, Rect, Size};
pub use size_class::{SizeClassPolicy, SizeClassThresholds, WindowSizeClass};
pub use window_mode::{
    Orientation, PaneMode, WindowClassification, WindowMode, classify, classify_window,
    classify_with, is_single_pane_layout,
};
