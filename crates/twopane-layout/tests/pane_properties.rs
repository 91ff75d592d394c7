#![forbid(unsafe_code)]

//! Property tests for pane sizing and placement.
//!
//! Validates:
//! - A hinge inside the window is accounted exactly: pane + hinge + pane.
//! - Weighted splits cover the window extent without gaps.
//! - Proportional placement keeps both children inside the available box.
//! - A separating hinge always wins over declared child weights.

use proptest::prelude::*;

use twopane_core::{FoldFeature, FoldOrientation, FoldState, Orientation, classify};
use twopane_layout::{
    GeometrySnapshot, LayoutDirection, LayoutStrategy, PaneChild, PaneLayoutContext, Rect, Size,
    SplitAxis, WindowMode, measure_and_place, pane_sizes,
};

// ============================================================================
// Strategy helpers
// ============================================================================

fn separating_fold(bounds: Rect, orientation: FoldOrientation) -> FoldFeature {
    FoldFeature::new(bounds, orientation, FoldState::Flat, true, !bounds.is_empty())
}

/// A window with a full-height vertical hinge somewhere inside it.
fn vertical_hinge_strategy() -> impl Strategy<Value = GeometrySnapshot> {
    (1u16..=4000, 1u16..=4000)
        .prop_flat_map(|(width, height)| (Just(width), Just(height), 0..=width))
        .prop_flat_map(|(width, height, left)| (Just(width), Just(height), Just(left), left..=width))
        .prop_map(|(width, height, left, right)| {
            GeometrySnapshot::with_fold(
                width,
                height,
                separating_fold(Rect::from_edges(left, 0, right, height), FoldOrientation::Vertical),
            )
        })
}

/// A window with a full-width horizontal hinge somewhere inside it.
fn horizontal_hinge_strategy() -> impl Strategy<Value = GeometrySnapshot> {
    (1u16..=4000, 1u16..=4000)
        .prop_flat_map(|(width, height)| (Just(width), Just(height), 0..=height))
        .prop_flat_map(|(width, height, top)| (Just(width), Just(height), Just(top), top..=height))
        .prop_map(|(width, height, top, bottom)| {
            GeometrySnapshot::with_fold(
                width,
                height,
                separating_fold(Rect::from_edges(0, top, width, bottom), FoldOrientation::Horizontal),
            )
        })
}

fn direction_strategy() -> impl Strategy<Value = LayoutDirection> {
    prop_oneof![Just(LayoutDirection::Ltr), Just(LayoutDirection::Rtl)]
}

fn weight_strategy() -> impl Strategy<Value = f32> {
    0.01f32..0.99
}

fn child_weight_strategy() -> impl Strategy<Value = Option<f32>> {
    prop::option::of(0.1f32..10.0)
}

fn child(weight: Option<f32>) -> PaneChild {
    match weight {
        Some(w) => PaneChild::new().weight(w),
        None => PaneChild::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn vertical_hinge_is_accounted_exactly(
        snapshot in vertical_hinge_strategy(),
        weight in weight_strategy(),
        direction in direction_strategy(),
    ) {
        let mode = classify(&snapshot, Orientation::Portrait);
        prop_assert_eq!(mode, WindowMode::DualPortrait);
        let sizes = pane_sizes(&snapshot, mode, weight, direction).unwrap();
        let fold = snapshot.fold_bounds();
        prop_assert_eq!(
            u32::from(sizes.pane1.width) + u32::from(fold.width) + u32::from(sizes.pane2.width),
            u32::from(snapshot.window_width())
        );
        prop_assert_eq!(sizes.pane1.height, snapshot.window_height());
        prop_assert_eq!(sizes.pane2.height, snapshot.window_height());
    }

    #[test]
    fn horizontal_hinge_is_accounted_exactly(
        snapshot in horizontal_hinge_strategy(),
        weight in weight_strategy(),
        direction in direction_strategy(),
    ) {
        let mode = classify(&snapshot, Orientation::Landscape);
        prop_assert_eq!(mode, WindowMode::DualLandscape);
        let sizes = pane_sizes(&snapshot, mode, weight, direction).unwrap();
        let fold = snapshot.fold_bounds();
        prop_assert_eq!(
            u32::from(sizes.pane1.height) + u32::from(fold.height) + u32::from(sizes.pane2.height),
            u32::from(snapshot.window_height())
        );
        // Horizontal hinges are never mirrored.
        prop_assert_eq!(sizes.pane1.height, fold.top());
    }

    #[test]
    fn weighted_split_covers_window(
        width in 0u16..=u16::MAX,
        height in 0u16..=u16::MAX,
        weight in weight_strategy(),
        portrait in any::<bool>(),
    ) {
        let snapshot = GeometrySnapshot::without_fold(width, height);
        let mode = if portrait { WindowMode::DualPortrait } else { WindowMode::DualLandscape };
        let sizes = pane_sizes(&snapshot, mode, weight, LayoutDirection::Ltr).unwrap();
        let axis = SplitAxis::for_mode(mode).unwrap();
        let total = axis.extent(snapshot.window());
        prop_assert_eq!(
            u32::from(axis.extent(sizes.pane1)) + u32::from(axis.extent(sizes.pane2)),
            u32::from(total)
        );
        let expected = (f64::from(total) * f64::from(weight)).round();
        prop_assert!((f64::from(axis.extent(sizes.pane1)) - expected).abs() <= 1.0);
    }

    #[test]
    fn placement_stays_inside_available(
        width in 0u16..=8000,
        height in 0u16..=8000,
        w0 in child_weight_strategy(),
        w1 in child_weight_strategy(),
        portrait in any::<bool>(),
    ) {
        let mode = if portrait { WindowMode::DualPortrait } else { WindowMode::DualLandscape };
        let available = Size::new(width, height);
        let snapshot = GeometrySnapshot::without_fold(width, height);
        let sizes = pane_sizes(&snapshot, mode, 0.5, LayoutDirection::Ltr).unwrap();
        let ctx = PaneLayoutContext {
            window_mode: mode,
            hinge_separating: false,
            pane_sizes: sizes,
            available,
        };
        let placed = measure_and_place(&[child(w0), child(w1)], &ctx).unwrap();
        let bounds = Rect::from_size(available);
        for rect in placed.rects {
            prop_assert!(u32::from(rect.right()) <= u32::from(bounds.right()));
            prop_assert!(u32::from(rect.bottom()) <= u32::from(bounds.bottom()));
        }
        prop_assert_eq!(placed.pane1().x, 0);
        prop_assert_eq!(placed.pane1().y, 0);
    }

    #[test]
    fn hinge_overrides_child_weights(
        snapshot in vertical_hinge_strategy(),
        w0 in child_weight_strategy(),
        w1 in child_weight_strategy(),
    ) {
        let mode = classify(&snapshot, Orientation::Portrait);
        let sizes = pane_sizes(&snapshot, mode, 0.5, LayoutDirection::Ltr).unwrap();
        let ctx = PaneLayoutContext {
            window_mode: mode,
            hinge_separating: true,
            pane_sizes: sizes,
            available: snapshot.window(),
        };
        let placed = measure_and_place(&[child(w0), child(w1)], &ctx).unwrap();
        prop_assert_eq!(placed.strategy, LayoutStrategy::Equal);
        prop_assert_eq!(placed.pane1().size(), sizes.pane1);
        prop_assert_eq!(placed.pane2().size(), sizes.pane2);
        prop_assert_eq!(placed.pane2().right(), snapshot.window_width());
    }
}
