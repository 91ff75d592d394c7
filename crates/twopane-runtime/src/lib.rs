#![forbid(unsafe_code)]

//! Runtime: configuration and the snapshot-driven controller.
//!
//! # Role in twopane
//! `twopane-runtime` wires the pure layers together for a host. It loads a
//! [`TwoPaneConfig`] from TOML or JSON, then feeds each geometry snapshot
//! through classification, pane sizing, and navigation reconciliation in one
//! synchronous step.
//!
//! # Concurrency
//! Everything is synchronous. The controller is `Send` and takes `&mut self`
//! for every mutation, so the host's event dispatch serializes snapshots and
//! navigation commands.

pub mod config;
pub mod controller;
pub mod error;

pub use config::{LayoutConfig, NavigationConfig, SizeClassConfig, TwoPaneConfig};
pub use controller::{LayoutFrame, TwoPaneController};
pub use error::{ConfigError, ControllerError, Result};
