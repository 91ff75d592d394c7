#![forbid(unsafe_code)]

//! Snapshot-driven controller.
//!
//! [`TwoPaneController`] is the single consumer of the platform's geometry
//! feed. Each [`apply_snapshot`](TwoPaneController::apply_snapshot) call
//! classifies the snapshot, computes pane sizes, and reconciles navigation.
//!
//! # Invariants
//!
//! 1. A snapshot is applied whole: the new [`LayoutFrame`] is fully computed
//!    before the stored frame or the navigation mode change.
//! 2. A snapshot whose pane sizes cannot be computed is rejected and the
//!    previous frame stays current.
//! 3. Navigation mode always matches `frame.is_single_pane` after a
//!    successful apply.
//!
//! ```text
//! GeometrySnapshot ─► classify_window ─► pane_sizes ─► LayoutFrame
//!                                                          │
//!                          NavigationEngine::update_layout ◄┘
//! ```

use serde::Serialize;
use twopane_core::{
    GeometrySnapshot, Orientation, PaneMode, Size, SizeClassPolicy, WindowClassification,
    WindowMode, classify_window, is_single_pane_layout,
};
use twopane_layout::{
    PaneChild, PaneLayoutContext, PanePlacements, PaneSizes, foldable_pane_sizes,
    measure_and_place, pane_sizes,
};
use twopane_nav::NavigationEngine;

use crate::config::TwoPaneConfig;
use crate::error::Result;

/// Everything derived from one geometry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutFrame {
    pub snapshot: GeometrySnapshot,
    pub classification: WindowClassification,
    pub is_single_pane: bool,
    pub pane_sizes: PaneSizes,
    pub foldable_pane_sizes: PaneSizes,
}

impl LayoutFrame {
    /// Derive a frame. Fails only on an invalid pane-1 weight.
    pub fn compute(
        snapshot: GeometrySnapshot,
        orientation: Orientation,
        config: &TwoPaneConfig,
        policy: &SizeClassPolicy,
    ) -> std::result::Result<Self, twopane_layout::LayoutError> {
        let classification = classify_window(&snapshot, orientation, policy);
        let layout = &config.layout;
        let sizes = pane_sizes(
            &snapshot,
            classification.mode,
            layout.pane1_weight,
            layout.layout_direction,
        )?;
        Ok(Self {
            snapshot,
            classification,
            is_single_pane: is_single_pane_layout(layout.pane_mode, classification.mode),
            pane_sizes: sizes,
            foldable_pane_sizes: foldable_pane_sizes(&snapshot, layout.layout_direction),
        })
    }

    #[inline]
    pub const fn window_mode(&self) -> WindowMode {
        self.classification.mode
    }

    /// Mode the layout engine should present.
    ///
    /// A dual-screen window collapsed by [`PaneMode`] presents as the
    /// single-screen mode of the same orientation.
    pub const fn presented_mode(&self) -> WindowMode {
        if !self.is_single_pane {
            return self.classification.mode;
        }
        match self.classification.orientation {
            Orientation::Portrait => WindowMode::SinglePortrait,
            Orientation::Landscape => WindowMode::SingleLandscape,
        }
    }
}

/// Owns configuration, navigation, and the current layout frame.
#[derive(Debug)]
pub struct TwoPaneController {
    config: TwoPaneConfig,
    policy: SizeClassPolicy,
    navigation: NavigationEngine,
    frame: Option<LayoutFrame>,
    frames_applied: u64,
}

impl TwoPaneController {
    /// Validate `config` and build the navigation engine from it.
    pub fn new(config: TwoPaneConfig) -> Result<Self> {
        let config = config.validated()?;
        let navigation = config.build_navigation_engine()?;
        tracing::debug!(config = %config.to_jsonl(), "controller created");
        Ok(Self {
            policy: config.size_class_policy(),
            config,
            navigation,
            frame: None,
            frames_applied: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &TwoPaneConfig {
        &self.config
    }

    /// The most recently applied frame, `None` before the first snapshot.
    #[inline]
    pub fn frame(&self) -> Option<&LayoutFrame> {
        self.frame.as_ref()
    }

    #[inline]
    pub fn frames_applied(&self) -> u64 {
        self.frames_applied
    }

    #[inline]
    pub fn navigation(&self) -> &NavigationEngine {
        &self.navigation
    }

    /// Navigation commands go through here.
    #[inline]
    pub fn navigation_mut(&mut self) -> &mut NavigationEngine {
        &mut self.navigation
    }

    /// Apply one geometry snapshot.
    ///
    /// On error nothing changes: neither the stored frame nor navigation.
    pub fn apply_snapshot(
        &mut self,
        snapshot: GeometrySnapshot,
        orientation: Orientation,
    ) -> Result<&LayoutFrame> {
        let span = tracing::debug_span!(
            "twopane.apply_snapshot",
            width = snapshot.window_width(),
            height = snapshot.window_height(),
            has_fold = snapshot.has_fold(),
            frame = self.frames_applied,
        );
        let _guard = span.enter();

        let frame = match LayoutFrame::compute(snapshot, orientation, &self.config, &self.policy) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(error = %err, "snapshot rejected");
                return Err(err.into());
            }
        };

        let mode_changed = self
            .navigation
            .set_single_pane(frame.is_single_pane);
        tracing::debug!(
            mode = frame.window_mode().label(),
            single_pane = frame.is_single_pane,
            mode_changed,
            "snapshot applied"
        );

        self.frames_applied += 1;
        Ok(self.frame.insert(frame))
    }

    /// Change the pane collapse policy and reconcile against the current
    /// frame. Returns `true` if the navigation mode changed.
    pub fn set_pane_mode(&mut self, pane_mode: PaneMode) -> bool {
        self.config.layout.pane_mode = pane_mode;
        let Some(frame) = self.frame.as_mut() else {
            return false;
        };
        frame.is_single_pane = is_single_pane_layout(pane_mode, frame.window_mode());
        self.navigation.set_single_pane(frame.is_single_pane)
    }

    /// Measure and place two children for the current frame.
    ///
    /// Before the first snapshot, child 0 fills `available`.
    pub fn layout_children(
        &self,
        children: &[PaneChild],
        available: Size,
    ) -> Result<PanePlacements> {
        let ctx = match &self.frame {
            Some(frame) => PaneLayoutContext {
                window_mode: frame.presented_mode(),
                hinge_separating: frame.classification.fold_is_separating,
                pane_sizes: frame.pane_sizes,
                available,
            },
            None => PaneLayoutContext {
                window_mode: WindowMode::SinglePortrait,
                hinge_separating: false,
                pane_sizes: PaneSizes::ZERO,
                available,
            },
        };
        Ok(measure_and_place(children, &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twopane_core::{FoldFeature, FoldState, Rect};
    use twopane_layout::LayoutStrategy;
    use twopane_nav::PaneSlot;

    use crate::error::{ConfigError, ControllerError};

    fn hinge_snapshot() -> GeometrySnapshot {
        GeometrySnapshot::with_fold(
            1000,
            1000,
            FoldFeature::hinge(Rect::from_edges(490, 0, 510, 1000), FoldState::Flat),
        )
    }

    fn controller() -> TwoPaneController {
        TwoPaneController::new(TwoPaneConfig::default()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = TwoPaneConfig::default();
        config.layout.pane1_weight = 1.5;
        let err = TwoPaneController::new(config).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Config(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn compact_snapshot_stays_single() {
        let mut controller = controller();
        let frame = *controller
            .apply_snapshot(GeometrySnapshot::without_fold(400, 700), Orientation::Portrait)
            .unwrap();
        assert_eq!(frame.window_mode(), WindowMode::SinglePortrait);
        assert!(frame.is_single_pane);
        assert!(frame.pane_sizes.is_zero());
        assert!(controller.navigation().is_single_pane());
        assert_eq!(controller.frames_applied(), 1);
    }

    #[test]
    fn hinge_snapshot_goes_dual() {
        let mut controller = controller();
        let frame = *controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        assert_eq!(frame.window_mode(), WindowMode::DualPortrait);
        assert_eq!(frame.pane_sizes.pane1, Size::new(490, 1000));
        assert_eq!(frame.foldable_pane_sizes, frame.pane_sizes);
        assert_eq!(frame.classification.fold_size, 20);

        let nav = controller.navigation();
        assert_eq!(nav.current_pane1_destination().unwrap(), "list");
        assert_eq!(nav.current_pane2_destination().unwrap(), "detail");
    }

    #[test]
    fn large_screen_has_no_foldable_sizes() {
        let mut controller = controller();
        let frame = *controller
            .apply_snapshot(GeometrySnapshot::without_fold(1200, 800), Orientation::Landscape)
            .unwrap();
        assert_eq!(frame.window_mode(), WindowMode::DualPortrait);
        assert!(frame.classification.is_large_screen());
        assert_eq!(frame.pane_sizes.pane1, Size::new(600, 800));
        assert!(frame.foldable_pane_sizes.is_zero());
    }

    #[test]
    fn pane_mode_collapses_and_restores() {
        let mut controller = controller();
        controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        controller.navigation_mut().navigate_to_pane1("home").unwrap();

        assert!(controller.set_pane_mode(PaneMode::VerticalSingle));
        let nav = controller.navigation();
        assert_eq!(nav.current_single_pane_destination().unwrap(), "home");
        assert_eq!(
            controller.frame().unwrap().presented_mode(),
            WindowMode::SinglePortrait
        );

        assert!(controller.set_pane_mode(PaneMode::TwoPane));
        assert_eq!(
            controller.navigation().current_pane1_destination().unwrap(),
            "list"
        );
    }

    #[test]
    fn collapsed_frame_lays_out_single() {
        let mut config = TwoPaneConfig::default();
        config.layout.pane_mode = PaneMode::SinglePane;
        let mut controller = TwoPaneController::new(config).unwrap();
        controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        let placed = controller
            .layout_children(&[PaneChild::new(), PaneChild::new()], Size::new(1000, 1000))
            .unwrap();
        assert_eq!(placed.strategy, LayoutStrategy::Single);
        assert_eq!(placed.pane1(), Rect::new(0, 0, 1000, 1000));
    }

    #[test]
    fn layout_children_uses_hinge() {
        let mut controller = controller();
        controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        let placed = controller
            .layout_children(
                &[PaneChild::new().weight(3.0), PaneChild::new()],
                Size::new(1000, 1000),
            )
            .unwrap();
        assert_eq!(placed.pane2(), Rect::new(510, 0, 490, 1000));
    }

    #[test]
    fn layout_before_first_snapshot_is_single() {
        let controller = controller();
        let placed = controller
            .layout_children(&[PaneChild::new(), PaneChild::new()], Size::new(300, 200))
            .unwrap();
        assert_eq!(placed.strategy, LayoutStrategy::Single);
        assert_eq!(placed.pane1().size(), Size::new(300, 200));
    }

    #[test]
    fn layout_errors_propagate() {
        let controller = controller();
        let err = controller
            .layout_children(&[PaneChild::new()], Size::new(10, 10))
            .unwrap_err();
        assert!(matches!(err, ControllerError::Layout(_)));
    }

    #[test]
    fn dual_to_single_on_fold_close_keeps_pane1() {
        let mut controller = controller();
        controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        controller
            .navigation_mut()
            .navigate_to("home", Some(PaneSlot::Pane1))
            .unwrap();
        controller
            .apply_snapshot(GeometrySnapshot::without_fold(500, 1000), Orientation::Portrait)
            .unwrap();
        assert_eq!(
            controller.navigation().single_pane_history(),
            [twopane_nav::Route::from("home")]
        );
    }

    #[test]
    fn frame_serializes() {
        let mut controller = controller();
        let frame = *controller
            .apply_snapshot(hinge_snapshot(), Orientation::Portrait)
            .unwrap();
        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json["classification"]["mode"], "dual_portrait");
        assert_eq!(json["is_single_pane"], false);
    }
}
