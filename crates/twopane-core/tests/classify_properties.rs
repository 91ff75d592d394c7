#![forbid(unsafe_code)]

//! Property tests for window-mode classification.
//!
//! Validates:
//! - Classification is total and deterministic for arbitrary geometry.
//! - A separating fold alone decides the mode.
//! - Without a separating fold, only the width class and orientation matter.

use proptest::prelude::*;

use twopane_core::{
    FoldFeature, FoldOrientation, FoldState, GeometrySnapshot, Orientation, Rect,
    SizeClassPolicy, WindowMode, WindowSizeClass, classify, classify_window,
};

// ============================================================================
// Strategy helpers
// ============================================================================

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Portrait), Just(Orientation::Landscape)]
}

fn fold_strategy() -> impl Strategy<Value = FoldFeature> {
    (
        any::<u16>(),
        any::<u16>(),
        any::<u16>(),
        any::<u16>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(x, y, w, h, horizontal, half, separating, occluding)| {
            let orientation = if horizontal {
                FoldOrientation::Horizontal
            } else {
                FoldOrientation::Vertical
            };
            let state = if half {
                FoldState::HalfOpened
            } else {
                FoldState::Flat
            };
            FoldFeature::new(
                Rect::new(x, y, w, h),
                orientation,
                state,
                separating,
                occluding,
            )
        })
}

fn snapshot_strategy() -> impl Strategy<Value = GeometrySnapshot> {
    (any::<u16>(), any::<u16>(), prop::option::of(fold_strategy())).prop_map(
        |(width, height, fold)| match fold {
            Some(fold) => GeometrySnapshot::with_fold(width, height, fold),
            None => GeometrySnapshot::without_fold(width, height),
        },
    )
}

fn with_separation(snapshot: GeometrySnapshot, separating: bool) -> GeometrySnapshot {
    match snapshot.fold() {
        Some(fold) => GeometrySnapshot::with_fold(
            snapshot.window_width(),
            snapshot.window_height(),
            FoldFeature::new(
                fold.bounds(),
                fold.orientation(),
                fold.state(),
                separating,
                fold.is_occluding(),
            ),
        ),
        None => snapshot,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn classify_is_total_and_deterministic(
        snapshot in snapshot_strategy(),
        orientation in orientation_strategy(),
    ) {
        let first = classify(&snapshot, orientation);
        prop_assert!(WindowMode::ALL.contains(&first));
        prop_assert_eq!(first, classify(&snapshot, orientation));
    }

    #[test]
    fn separating_fold_decides_alone(
        window in snapshot_strategy(),
        fold in fold_strategy(),
        orientation in orientation_strategy(),
    ) {
        let snapshot = with_separation(
            GeometrySnapshot::with_fold(window.window_width(), window.window_height(), fold),
            true,
        );
        let expected = if snapshot.fold_is_horizontal() {
            WindowMode::DualLandscape
        } else {
            WindowMode::DualPortrait
        };
        prop_assert_eq!(classify(&snapshot, orientation), expected);
    }

    #[test]
    fn without_separation_width_class_decides(
        snapshot in snapshot_strategy(),
        orientation in orientation_strategy(),
    ) {
        let snapshot = with_separation(snapshot, false);
        let mode = classify(&snapshot, orientation);
        let info = classify_window(&snapshot, orientation, &SizeClassPolicy::DEFAULT);
        prop_assert_eq!(info.mode, mode);
        prop_assert_eq!(
            mode.is_dual_screen(),
            info.width_class == WindowSizeClass::Expanded
        );
        prop_assert_eq!(
            classify(&GeometrySnapshot::without_fold(snapshot.window_width(), snapshot.window_height()), orientation),
            mode
        );
    }
}

#[test]
fn every_mode_is_reachable() {
    let hinge_v = FoldFeature::hinge(Rect::from_edges(490, 0, 510, 1000), FoldState::Flat);
    let hinge_h = FoldFeature::hinge(Rect::from_edges(0, 490, 1000, 510), FoldState::Flat);
    let seen = [
        classify(&GeometrySnapshot::without_fold(400, 700), Orientation::Portrait),
        classify(&GeometrySnapshot::without_fold(700, 400), Orientation::Landscape),
        classify(&GeometrySnapshot::with_fold(1000, 1000, hinge_v), Orientation::Portrait),
        classify(&GeometrySnapshot::with_fold(1000, 1000, hinge_h), Orientation::Portrait),
    ];
    assert_eq!(seen, WindowMode::ALL);
}
