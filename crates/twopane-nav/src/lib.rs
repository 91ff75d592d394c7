#![forbid(unsafe_code)]

//! Navigation for single-pane and dual-pane presentations.
//!
//! # Role in twopane
//! `twopane-nav` owns the navigation state a two-pane UI needs. In
//! single-pane mode that is one linear history; in dual-pane mode it is two
//! independently addressable [`PaneSlot`]s plus a manual back stack that
//! records every slot assignment for later unwinding.
//!
//! # Primary responsibilities
//! - **Routes**: [`Route`], [`RouteSet`], [`BackStackEntry`].
//! - **Histories**: [`LinearHistory`] and [`ManualBackStack`], each with a
//!   floor that pops never cross.
//! - **Engine**: [`NavigationEngine`] commands, mode reconciliation, and
//!   [`NavigationListener`] notification.
//!
//! # How it fits in the system
//! The host (or `twopane-runtime`'s controller) feeds layout facts through
//! [`NavigationEngine::update_layout`]; the UI binding layer calls the
//! navigation commands and reads the current destinations.

pub mod engine;
pub mod error;
pub mod history;
pub mod route;

pub use engine::{
    NavigationEngine, NavigationEvent, NavigationListener, NavigationState, StartDestinations,
};
pub use error::{NavigationError, Result};
pub use history::{BACK_STACK_FLOOR, LinearHistory, ManualBackStack};
pub use route::{BackStackEntry, PaneSlot, Route, RouteSet};
