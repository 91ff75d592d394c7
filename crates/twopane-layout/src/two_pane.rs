#![forbid(unsafe_code)]

//! Two-child measurement and placement.
//!
//! [`measure_and_place`] takes exactly two [`PaneChild`] descriptors and the
//! pane sizes computed by [`pane_sizes`](crate::pane_size::pane_sizes) and
//! returns one rectangle per child.
//!
//! # Strategy selection
//!
//! | Condition                                   | Strategy       |
//! |---------------------------------------------|----------------|
//! | window mode is single-screen                | `Single`       |
//! | fold separates (hinge)                      | `Equal`        |
//! | no child declares a weight                  | `Equal`        |
//! | `max_weight * 2 == total_weight`            | `Equal`        |
//! | otherwise                                   | `Proportional` |
//!
//! A hinge always wins over declared weights: the hinge-exact pane sizes
//! are the only correct answer there.
//!
//! # Invariants
//!
//! 1. Undeclared weights count as `1.0`.
//! 2. Child 0 is always placed at the origin of the available box.
//! 3. Child 1 ends at the far edge of the available box along the split
//!    axis, so any hinge gap lies between the two children.
//! 4. Fractional extents are rounded once, when rectangles are produced.

use serde::{Deserialize, Serialize};
use twopane_core::{Rect, Size, WindowMode};

use crate::error::{LayoutError, Result};
use crate::pane_size::{PaneSizes, SplitAxis};

/// Layout-relevant description of one pane child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaneChild {
    #[serde(default)]
    weight: Option<f32>,
}

impl PaneChild {
    /// A child with no declared weight.
    #[must_use]
    pub const fn new() -> Self {
        Self { weight: None }
    }

    /// Declare a weight (builder pattern). Must be finite and positive.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// The declared weight, if any.
    #[inline]
    pub const fn declared_weight(&self) -> Option<f32> {
        self.weight
    }
}

/// Sub-algorithm chosen for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Single-screen window: child 0 fills the box, child 1 is hidden.
    Single,
    /// Each child takes its precomputed pane size.
    Equal,
    /// Each child takes a share of the box proportional to its weight.
    Proportional,
}

/// Inputs for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayoutContext {
    pub window_mode: WindowMode,
    /// Whether the snapshot's fold separates the panes.
    pub hinge_separating: bool,
    pub pane_sizes: PaneSizes,
    /// Constraint box the two children share.
    pub available: Size,
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanePlacements {
    pub strategy: LayoutStrategy,
    /// `None` for [`LayoutStrategy::Single`].
    pub axis: Option<SplitAxis>,
    pub rects: [Rect; 2],
}

impl PanePlacements {
    #[inline]
    pub const fn pane1(&self) -> Rect {
        self.rects[0]
    }

    #[inline]
    pub const fn pane2(&self) -> Rect {
        self.rects[1]
    }
}

/// Extents before rounding.
#[derive(Debug, Clone, Copy)]
struct MeasuredPanes {
    axis: SplitAxis,
    total: u16,
    extents: [f64; 2],
    cross: [u16; 2],
    second_offset: f64,
}

/// Resolve weights, pick a strategy, and place both children.
pub fn measure_and_place(children: &[PaneChild], ctx: &PaneLayoutContext) -> Result<PanePlacements> {
    let [first, second] = children else {
        tracing::warn!(count = children.len(), "rejected two-pane child list");
        return Err(LayoutError::InvalidChildCount {
            count: children.len(),
        });
    };
    for weight in [first, second].iter().filter_map(|c| c.declared_weight()) {
        if !(weight.is_finite() && weight > 0.0) {
            tracing::warn!(weight, "rejected child weight");
            return Err(LayoutError::InvalidWeight {
                weight,
                expected: "a finite value greater than 0",
            });
        }
    }

    let Some(axis) = SplitAxis::for_mode(ctx.window_mode) else {
        tracing::trace!(mode = ctx.window_mode.label(), "single-pane placement");
        return Ok(PanePlacements {
            strategy: LayoutStrategy::Single,
            axis: None,
            rects: [Rect::from_size(ctx.available), Rect::ZERO],
        });
    };

    let declared = first.declared_weight().is_some() || second.declared_weight().is_some();
    let weights = [
        first.declared_weight().unwrap_or(1.0),
        second.declared_weight().unwrap_or(1.0),
    ];
    let total_weight = weights[0] + weights[1];
    let max_weight = weights[0].max(weights[1]);

    let strategy = if ctx.hinge_separating || !declared || max_weight * 2.0 == total_weight {
        LayoutStrategy::Equal
    } else {
        LayoutStrategy::Proportional
    };

    let measured = match strategy {
        LayoutStrategy::Proportional => measure_proportional(axis, ctx.available, weights),
        _ => measure_equal(axis, ctx.available, ctx.pane_sizes),
    };

    tracing::trace!(
        mode = ctx.window_mode.label(),
        ?strategy,
        first_extent = measured.extents[0],
        second_extent = measured.extents[1],
        "measured two-pane layout"
    );

    Ok(PanePlacements {
        strategy,
        axis: Some(axis),
        rects: place(measured),
    })
}

fn measure_equal(axis: SplitAxis, available: Size, sizes: PaneSizes) -> MeasuredPanes {
    let boxes = sizes.as_array().map(|size| size.clamp_to(available));
    let total = axis.extent(available);
    let second = axis.extent(boxes[1]);
    MeasuredPanes {
        axis,
        total,
        extents: [f64::from(axis.extent(boxes[0])), f64::from(second)],
        cross: [axis.cross_extent(boxes[0]), axis.cross_extent(boxes[1])],
        second_offset: f64::from(total.saturating_sub(second)),
    }
}

fn measure_proportional(axis: SplitAxis, available: Size, weights: [f32; 2]) -> MeasuredPanes {
    let extent = axis.extent(available);
    let total = f64::from(extent);
    let cross = axis.cross_extent(available);
    let total_weight = f64::from(weights[0]) + f64::from(weights[1]);
    let share = |weight: f32| total * (f64::from(weight) / total_weight);
    MeasuredPanes {
        axis,
        total: extent,
        extents: [share(weights[0]), share(weights[1])],
        cross: [cross, cross],
        second_offset: total * (1.0 - f64::from(weights[1]) / total_weight),
    }
}

fn place(measured: MeasuredPanes) -> [Rect; 2] {
    let round = |value: f64| value.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    let offset = round(measured.second_offset).min(measured.total);
    // Two halves rounding up together would overrun the box by one unit.
    let second = round(measured.extents[1]).min(measured.total - offset);
    let sizes = [
        measured
            .axis
            .size(round(measured.extents[0]), measured.cross[0]),
        measured.axis.size(second, measured.cross[1]),
    ];
    let second_origin = match measured.axis {
        SplitAxis::Horizontal => (offset, 0),
        SplitAxis::Vertical => (0, offset),
    };
    [
        Rect::from_size(sizes[0]),
        Rect::new(
            second_origin.0,
            second_origin.1,
            sizes[1].width,
            sizes[1].height,
        ),
    ]
}
