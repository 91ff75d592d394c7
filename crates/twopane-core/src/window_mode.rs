#![forbid(unsafe_code)]

//! Window-mode classification.
//!
//! [`classify`] maps a [`GeometrySnapshot`] and the device orientation to one
//! of four [`WindowMode`] values. The rules, in priority order:
//!
//! 1. A separating fold decides alone: horizontal fold is `DualLandscape`
//!    (panes stacked top/bottom), vertical fold is `DualPortrait` (panes side
//!    by side). Device orientation is ignored.
//! 2. An `Expanded` width is a large screen split along its shorter
//!    dimension: portrait gives `DualLandscape`, landscape gives
//!    `DualPortrait`. This is the opposite mapping from a physical fold.
//! 3. Otherwise the window is single-pane in the device orientation.
//!
//! Non-separating folds contribute nothing; their bounds are ignored.
//! Classification is total: every input yields exactly one mode.

use serde::{Deserialize, Serialize};

use crate::fold::GeometrySnapshot;
use crate::geometry::Size;
use crate::size_class::{SizeClassPolicy, WindowSizeClass};

/// Device orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orientation implied by a window size (square counts as portrait).
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        if size.height >= size.width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    #[inline]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Discrete layout mode derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    SinglePortrait,
    SingleLandscape,
    /// Two panes side by side (vertical divider).
    DualPortrait,
    /// Two panes stacked top/bottom (horizontal divider).
    DualLandscape,
}

impl WindowMode {
    /// All modes.
    pub const ALL: [WindowMode; 4] = [
        WindowMode::SinglePortrait,
        WindowMode::SingleLandscape,
        WindowMode::DualPortrait,
        WindowMode::DualLandscape,
    ];

    #[inline]
    pub const fn is_dual_screen(self) -> bool {
        matches!(self, Self::DualPortrait | Self::DualLandscape)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SinglePortrait => "single_portrait",
            Self::SingleLandscape => "single_landscape",
            Self::DualPortrait => "dual_portrait",
            Self::DualLandscape => "dual_landscape",
        }
    }
}

impl std::fmt::Display for WindowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller policy for collapsing two panes into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneMode {
    /// Always show two panes when the window is dual-screen.
    #[default]
    TwoPane,
    /// Show one pane when the panes would be stacked (`DualLandscape`).
    HorizontalSingle,
    /// Show one pane when the panes would be side by side (`DualPortrait`).
    VerticalSingle,
    /// Always show one pane.
    SinglePane,
}

/// Whether `pane_mode` collapses `window_mode` into a single pane.
#[must_use]
pub const fn is_single_pane_layout(pane_mode: PaneMode, window_mode: WindowMode) -> bool {
    !window_mode.is_dual_screen()
        || matches!(pane_mode, PaneMode::SinglePane)
        || (matches!(pane_mode, PaneMode::HorizontalSingle)
            && matches!(window_mode, WindowMode::DualLandscape))
        || (matches!(pane_mode, PaneMode::VerticalSingle)
            && matches!(window_mode, WindowMode::DualPortrait))
}

/// Classify with the default size-class thresholds.
#[must_use]
pub fn classify(snapshot: &GeometrySnapshot, orientation: Orientation) -> WindowMode {
    classify_with(snapshot, orientation, &SizeClassPolicy::DEFAULT)
}

/// Classify with explicit size-class thresholds.
#[must_use]
pub fn classify_with(
    snapshot: &GeometrySnapshot,
    orientation: Orientation,
    policy: &SizeClassPolicy,
) -> WindowMode {
    let portrait = orientation.is_portrait();
    let mode = if snapshot.fold_is_separating() {
        if snapshot.fold_is_horizontal() {
            WindowMode::DualLandscape
        } else {
            WindowMode::DualPortrait
        }
    } else if policy.width_class(snapshot.window_width()) == WindowSizeClass::Expanded {
        if portrait {
            WindowMode::DualLandscape
        } else {
            WindowMode::DualPortrait
        }
    } else if portrait {
        WindowMode::SinglePortrait
    } else {
        WindowMode::SingleLandscape
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        width = snapshot.window_width(),
        height = snapshot.window_height(),
        separating = snapshot.fold_is_separating(),
        mode = mode.label(),
        "classified window"
    );
    mode
}

/// Window mode plus the derived size-class facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowClassification {
    pub mode: WindowMode,
    pub orientation: Orientation,
    pub width_class: WindowSizeClass,
    pub height_class: WindowSizeClass,
    /// Fold thickness along the split axis, zero without a fold.
    pub fold_size: u16,
    pub fold_is_separating: bool,
}

impl WindowClassification {
    #[inline]
    pub const fn is_dual_screen(&self) -> bool {
        self.mode.is_dual_screen()
    }

    /// A dual-screen window without a separating fold.
    #[inline]
    pub const fn is_large_screen(&self) -> bool {
        self.mode.is_dual_screen() && !self.fold_is_separating
    }
}

/// Classify a snapshot and collect its size-class facts in one pass.
#[must_use]
pub fn classify_window(
    snapshot: &GeometrySnapshot,
    orientation: Orientation,
    policy: &SizeClassPolicy,
) -> WindowClassification {
    let (width_class, height_class) = policy.classify_size(snapshot.window());
    WindowClassification {
        mode: classify_with(snapshot, orientation, policy),
        orientation,
        width_class,
        height_class,
        fold_size: snapshot.fold_size(),
        fold_is_separating: snapshot.fold_is_separating(),
    }
}
