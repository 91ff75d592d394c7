#![forbid(unsafe_code)]

//! Pane sizing: hinge-exact and weight-proportional splits.
//!
//! [`pane_sizes`] picks one of two algorithms from the window mode and the
//! fold:
//!
//! ```text
//! hinge-exact (vertical fold, LTR)         weighted (DualPortrait, w = 0.4)
//! ┌──────────┬──┬──────────┐              ┌─────────┬──────────────┐
//! │  pane 1  │▓▓│  pane 2  │              │ pane 1  │    pane 2    │
//! │ = left   │▓▓│ = W-right│              │ = W*w   │ = W - pane 1 │
//! └──────────┴──┴──────────┘              └─────────┴──────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. Non-dual window modes always produce [`PaneSizes::ZERO`].
//! 2. Hinge-exact sizes plus the fold thickness cover the split dimension
//!    exactly when the fold lies inside the window.
//! 3. Weighted sizes always sum to the split dimension.
//! 4. [`foldable_pane_sizes`] is zero unless the fold separates, even for a
//!    dual-screen large window.
//!
//! # Failure Modes
//!
//! Only the pane-1 weight is validated. Fold bounds outside the window
//! saturate to zero-size panes instead of failing.

use serde::{Deserialize, Serialize};
use twopane_core::{GeometrySnapshot, LayoutDirection, Size, WindowMode};

use crate::error::{LayoutError, Result};

/// Default large-screen weight for pane 1.
pub const DEFAULT_PANE1_WEIGHT: f32 = 0.5;

/// Axis along which the two panes are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    /// Side by side; widths are split.
    Horizontal,
    /// Stacked; heights are split.
    Vertical,
}

impl SplitAxis {
    /// Split axis for a window mode, `None` for single-screen modes.
    #[must_use]
    pub const fn for_mode(mode: WindowMode) -> Option<Self> {
        match mode {
            WindowMode::DualPortrait => Some(Self::Horizontal),
            WindowMode::DualLandscape => Some(Self::Vertical),
            WindowMode::SinglePortrait | WindowMode::SingleLandscape => None,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub const fn extent(self, size: Size) -> u16 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub const fn cross_extent(self, size: Size) -> u16 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a size from an extent along this axis and one across it.
    #[inline]
    pub const fn size(self, extent: u16, cross: u16) -> Size {
        match self {
            Self::Horizontal => Size::new(extent, cross),
            Self::Vertical => Size::new(cross, extent),
        }
    }
}

/// Sizes of pane 1 and pane 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct PaneSizes {
    pub pane1: Size,
    pub pane2: Size,
}

impl PaneSizes {
    /// Both panes zero-size: no pane geometry applies.
    pub const ZERO: Self = Self {
        pane1: Size::ZERO,
        pane2: Size::ZERO,
    };

    #[inline]
    pub const fn new(pane1: Size, pane2: Size) -> Self {
        Self { pane1, pane2 }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.pane1.width == 0
            && self.pane1.height == 0
            && self.pane2.width == 0
            && self.pane2.height == 0
    }

    /// Sizes as an array indexed by pane.
    #[inline]
    pub const fn as_array(&self) -> [Size; 2] {
        [self.pane1, self.pane2]
    }

    #[inline]
    const fn swapped(self) -> Self {
        Self::new(self.pane2, self.pane1)
    }
}

/// Validate a pane-1 weight: finite and strictly inside `(0, 1)`.
pub fn validate_pane1_weight(weight: f32) -> Result<f32> {
    if weight.is_finite() && weight > 0.0 && weight < 1.0 {
        Ok(weight)
    } else {
        Err(LayoutError::InvalidWeight {
            weight,
            expected: "a value strictly between 0 and 1",
        })
    }
}

/// Compute the two pane sizes for a classified snapshot.
///
/// A separating fold gives hinge-exact sizes and ignores `pane1_weight`
/// (it is still validated). Otherwise a dual-screen mode splits the window
/// by `pane1_weight` along the mode's [`SplitAxis`]. Single-screen modes
/// give [`PaneSizes::ZERO`].
pub fn pane_sizes(
    snapshot: &GeometrySnapshot,
    window_mode: WindowMode,
    pane1_weight: f32,
    direction: LayoutDirection,
) -> Result<PaneSizes> {
    let weight = match validate_pane1_weight(pane1_weight) {
        Ok(weight) => weight,
        Err(err) => {
            tracing::warn!(weight = pane1_weight, "rejected pane 1 weight");
            return Err(err);
        }
    };

    let Some(axis) = SplitAxis::for_mode(window_mode) else {
        return Ok(PaneSizes::ZERO);
    };

    if snapshot.fold_is_separating() {
        return Ok(hinge_pane_sizes(snapshot, direction));
    }

    Ok(weighted_pane_sizes(snapshot.window(), axis, weight))
}

/// Hinge-exact pane sizes, or zero when the fold does not separate.
///
/// Use this when drawing must avoid the hinge: it never falls back to the
/// large-screen weighted split.
#[must_use]
pub fn foldable_pane_sizes(snapshot: &GeometrySnapshot, direction: LayoutDirection) -> PaneSizes {
    if !snapshot.fold_is_separating() {
        return PaneSizes::ZERO;
    }
    hinge_pane_sizes(snapshot, direction)
}

fn hinge_pane_sizes(snapshot: &GeometrySnapshot, direction: LayoutDirection) -> PaneSizes {
    let window = snapshot.window();
    let bounds = snapshot.fold_bounds();

    if snapshot.fold_is_horizontal() {
        PaneSizes::new(
            Size::new(window.width, bounds.top().min(window.height)),
            Size::new(window.width, window.height.saturating_sub(bounds.bottom())),
        )
    } else {
        let sizes = PaneSizes::new(
            Size::new(bounds.left().min(window.width), window.height),
            Size::new(window.width.saturating_sub(bounds.right()), window.height),
        );
        if direction.is_rtl() {
            sizes.swapped()
        } else {
            sizes
        }
    }
}

fn weighted_pane_sizes(window: Size, axis: SplitAxis, weight: f32) -> PaneSizes {
    let total = axis.extent(window);
    let cross = axis.cross_extent(window);
    let first = (f64::from(total) * f64::from(weight)).round();
    // weight < 1 keeps the product within u16; min() guards the rounding edge.
    let first = (first as u16).min(total);
    PaneSizes::new(axis.size(first, cross), axis.size(total - first, cross))
}
