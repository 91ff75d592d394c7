#![forbid(unsafe_code)]

//! Fold features and the immutable geometry snapshot.
//!
//! A [`GeometrySnapshot`] is what the platform reports on every geometry
//! change (rotation, fold-state change, resize). It is a plain value: hosts
//! build a fresh one per event and never patch an existing one.
//!
//! # Invariants
//!
//! 1. A snapshot without a fold reports every fold-derived fact at its
//!    default: not horizontal, [`Rect::ZERO`] bounds, [`FoldState::Flat`],
//!    not separating, not occluding. This holds by construction because the
//!    fold is an `Option`.
//! 2. Fold bounds are not validated against the window. Bounds outside the
//!    window are carried as-is and produce degenerate pane sizes downstream.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Direction the fold runs across the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldOrientation {
    /// The fold runs left-to-right, splitting the window top/bottom.
    Horizontal,
    /// The fold runs top-to-bottom, splitting the window left/right.
    Vertical,
}

/// Physical posture of the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldState {
    #[default]
    Flat,
    HalfOpened,
}

/// One fold or hinge reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoldFeature {
    bounds: Rect,
    orientation: FoldOrientation,
    state: FoldState,
    is_separating: bool,
    is_occluding: bool,
}

impl FoldFeature {
    /// Build a fold from explicit platform facts.
    #[must_use]
    pub const fn new(
        bounds: Rect,
        orientation: FoldOrientation,
        state: FoldState,
        is_separating: bool,
        is_occluding: bool,
    ) -> Self {
        Self {
            bounds,
            orientation,
            state,
            is_separating,
            is_occluding,
        }
    }

    /// Derive a fold from its bounds and posture.
    ///
    /// Orientation follows the bounds' aspect (wider than tall is
    /// horizontal). A non-empty bounds is a physical hinge that occludes
    /// content. The fold separates when it occludes or is half-opened.
    #[must_use]
    pub const fn hinge(bounds: Rect, state: FoldState) -> Self {
        let orientation = if bounds.width > bounds.height {
            FoldOrientation::Horizontal
        } else {
            FoldOrientation::Vertical
        };
        let is_occluding = !bounds.is_empty();
        let is_separating = is_occluding || matches!(state, FoldState::HalfOpened);
        Self::new(bounds, orientation, state, is_separating, is_occluding)
    }

    /// Fold bounds in window coordinates.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub const fn orientation(&self) -> FoldOrientation {
        self.orientation
    }

    #[inline]
    pub const fn state(&self) -> FoldState {
        self.state
    }

    #[inline]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self.orientation, FoldOrientation::Horizontal)
    }

    #[inline]
    pub const fn is_separating(&self) -> bool {
        self.is_separating
    }

    #[inline]
    pub const fn is_occluding(&self) -> bool {
        self.is_occluding
    }

    /// Thickness of the fold across the split axis.
    #[inline]
    pub const fn size(&self) -> u16 {
        if self.is_horizontal() {
            self.bounds.height
        } else {
            self.bounds.width
        }
    }
}

/// Immutable description of the window and its fold at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    window: Size,
    #[serde(default)]
    fold: Option<FoldFeature>,
}

impl GeometrySnapshot {
    /// A window with no fold.
    #[must_use]
    pub const fn without_fold(width: u16, height: u16) -> Self {
        Self {
            window: Size::new(width, height),
            fold: None,
        }
    }

    /// A window with a fold.
    #[must_use]
    pub const fn with_fold(width: u16, height: u16, fold: FoldFeature) -> Self {
        Self {
            window: Size::new(width, height),
            fold: Some(fold),
        }
    }

    /// Window size in layout units.
    #[inline]
    pub const fn window(&self) -> Size {
        self.window
    }

    #[inline]
    pub const fn window_width(&self) -> u16 {
        self.window.width
    }

    #[inline]
    pub const fn window_height(&self) -> u16 {
        self.window.height
    }

    /// The fold, if the platform reported one.
    #[inline]
    pub const fn fold(&self) -> Option<&FoldFeature> {
        self.fold.as_ref()
    }

    #[inline]
    pub const fn has_fold(&self) -> bool {
        self.fold.is_some()
    }

    pub fn fold_is_horizontal(&self) -> bool {
        self.fold.is_some_and(|fold| fold.is_horizontal())
    }

    /// Fold bounds, or [`Rect::ZERO`] without a fold.
    pub fn fold_bounds(&self) -> Rect {
        self.fold.map_or(Rect::ZERO, |fold| fold.bounds())
    }

    pub fn fold_state(&self) -> FoldState {
        self.fold.map_or(FoldState::Flat, |fold| fold.state())
    }

    pub fn fold_is_separating(&self) -> bool {
        self.fold.is_some_and(|fold| fold.is_separating())
    }

    pub fn fold_is_occluding(&self) -> bool {
        self.fold.is_some_and(|fold| fold.is_occluding())
    }

    /// Fold thickness along the split axis, zero without a fold.
    pub fn fold_size(&self) -> u16 {
        self.fold.map_or(0, |fold| fold.size())
    }
}
