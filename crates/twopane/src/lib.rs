#![forbid(unsafe_code)]

//! twopane public facade crate.
//!
//! Re-exports the stable surface of the member crates and offers a prelude
//! for day-to-day use.
//!
//! ```rust,ignore
//! use twopane::prelude::*;
//!
//! let mut controller = TwoPaneController::new(TwoPaneConfig::default())?;
//! controller.apply_snapshot(snapshot, Orientation::Portrait)?;
//! controller.navigation_mut().navigate_to_pane2("detail")?;
//! ```

// --- Core re-exports -------------------------------------------------------

pub use twopane_core::{
    FoldFeature, FoldOrientation, FoldState, GeometrySnapshot, LayoutDirection, Orientation,
    PaneMode, Rect, Size, SizeClassPolicy, SizeClassThresholds, WindowClassification, WindowMode,
    WindowSizeClass, classify, classify_window, classify_with, is_single_pane_layout,
};

// --- Layout re-exports -----------------------------------------------------

pub use twopane_layout::{
    LayoutError, LayoutStrategy, PaneChild, PaneLayoutContext, PanePlacements, PaneSizes,
    SplitAxis, foldable_pane_sizes, measure_and_place, pane_sizes,
};

// --- Navigation re-exports -------------------------------------------------

pub use twopane_nav::{
    BackStackEntry, NavigationEngine, NavigationError, NavigationEvent, NavigationListener,
    PaneSlot, Route, RouteSet, StartDestinations,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use twopane_runtime::{
    ConfigError, ControllerError, LayoutFrame, TwoPaneConfig, TwoPaneController,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for twopane hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[cfg(feature = "runtime")]
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Standard result type for twopane APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, GeometrySnapshot, NavigationEngine, Orientation, PaneChild, PaneMode, PaneSlot,
        Result, Route, Size, WindowMode,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{TwoPaneConfig, TwoPaneController};

    pub use crate::{core, layout, nav};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use twopane_core as core;
pub use twopane_layout as layout;
pub use twopane_nav as nav;
#[cfg(feature = "runtime")]
pub use twopane_runtime as runtime;
