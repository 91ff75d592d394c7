#![forbid(unsafe_code)]

//! Dual-representation navigation engine.
//!
//! The engine keeps exactly one of two histories alive, selected by whether
//! the current layout shows one pane or two:
//!
//! - [`NavigationState::SinglePane`]: a [`LinearHistory`] with ordinary
//!   push/pop semantics.
//! - [`NavigationState::DualPane`]: two addressable slots whose current
//!   routes are derived from a [`ManualBackStack`].
//!
//! # Mode transitions
//!
//! ```text
//!            set_single_pane(true)
//!   DualPane ─────────────────────────► SinglePane
//!   history = [current pane1 route]     (pane 2 is dropped)
//!
//!            set_single_pane(false)
//!   SinglePane ───────────────────────► DualPane
//!   back stack = [(pane1_start, Pane1), (pane2_start, Pane2)]
//! ```
//!
//! Both transitions are lossy by construction: a two-slot state cannot be
//! projected onto one route without dropping pane 2, and a linear history
//! cannot be split across two slots.
//!
//! # Failure Modes
//!
//! | Situation                              | Outcome                              |
//! |----------------------------------------|--------------------------------------|
//! | Route not in the destination set       | `Err(UnknownRoute)`, state unchanged |
//! | Dual-pane navigation without a slot    | `Err(MissingSlotForDualPane)`        |
//! | `navigate_up_to` target absent         | `false`, state unchanged             |
//! | `navigate_back` at the history floor   | `false`, state unchanged             |
//! | `navigate_up_to` target in the floor   | `true`, cleared down to the floor    |
//!
//! Listeners are notified only after a change is committed.

use std::fmt;

use serde::Serialize;
use twopane_core::{PaneMode, WindowMode, is_single_pane_layout};

use crate::error::{NavigationError, Result};
use crate::history::{LinearHistory, ManualBackStack};
use crate::route::{BackStackEntry, PaneSlot, Route, RouteSet};

// ============================================================================
// State
// ============================================================================

/// Which history is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NavigationState {
    SinglePane { history: LinearHistory },
    DualPane { back_stack: ManualBackStack },
}

impl NavigationState {
    #[inline]
    pub const fn is_single_pane(&self) -> bool {
        matches!(self, Self::SinglePane { .. })
    }
}

/// Caller-declared start destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartDestinations {
    /// Root of the linear history when the engine starts in single-pane mode.
    pub single_pane: Route,
    pub pane1: Route,
    pub pane2: Route,
}

impl StartDestinations {
    #[must_use]
    pub fn new(
        single_pane: impl Into<Route>,
        pane1: impl Into<Route>,
        pane2: impl Into<Route>,
    ) -> Self {
        Self {
            single_pane: single_pane.into(),
            pane1: pane1.into(),
            pane2: pane2.into(),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Route> {
        [&self.single_pane, &self.pane1, &self.pane2].into_iter()
    }
}

// ============================================================================
// Listeners
// ============================================================================

/// A committed navigation change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// A route was pushed (single pane, `slot` is `None`) or assigned to a slot.
    Navigated {
        route: Route,
        slot: Option<PaneSlot>,
    },
    /// Entries were popped by `navigate_back` or `navigate_up_to`.
    Popped { count: usize },
    /// The engine switched representation.
    ModeChanged { is_single_pane: bool },
}

/// Observer of committed navigation changes.
///
/// Implemented for any `FnMut(&NavigationEvent) + Send` closure.
pub trait NavigationListener: Send {
    fn on_navigation(&mut self, event: &NavigationEvent);
}

impl<F> NavigationListener for F
where
    F: FnMut(&NavigationEvent) + Send,
{
    fn on_navigation(&mut self, event: &NavigationEvent) {
        self(event);
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Owner of navigation state.
///
/// Commands take `&mut self`; the host serializes calls through its own
/// single-threaded dispatch.
pub struct NavigationEngine {
    destinations: RouteSet,
    starts: StartDestinations,
    state: NavigationState,
    listeners: Vec<Box<dyn NavigationListener>>,
}

impl fmt::Debug for NavigationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationEngine")
            .field("destinations", &self.destinations.len())
            .field("starts", &self.starts)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NavigationEngine {
    /// Create an engine in single-pane mode rooted at `starts.single_pane`.
    ///
    /// Every start destination must be in `destinations`.
    pub fn new(destinations: RouteSet, starts: StartDestinations) -> Result<Self> {
        if let Some(route) = starts.iter().find(|r| !destinations.contains(r.as_str())) {
            tracing::warn!(route = %route, "start destination is not a known route");
            return Err(NavigationError::UnknownRoute {
                route: route.clone(),
            });
        }
        let history = LinearHistory::new(starts.single_pane.clone());
        Ok(Self {
            destinations,
            starts,
            state: NavigationState::SinglePane { history },
            listeners: Vec::new(),
        })
    }

    /// Register a listener for committed changes.
    pub fn add_listener(&mut self, listener: impl NavigationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ------------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------------

    #[inline]
    pub fn is_single_pane(&self) -> bool {
        self.state.is_single_pane()
    }

    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[inline]
    pub fn destinations(&self) -> &RouteSet {
        &self.destinations
    }

    #[inline]
    pub fn starts(&self) -> &StartDestinations {
        &self.starts
    }

    /// Current single-pane route, `None` in dual-pane mode.
    pub fn current_single_pane_destination(&self) -> Option<&Route> {
        match &self.state {
            NavigationState::SinglePane { history } => Some(history.current()),
            NavigationState::DualPane { .. } => None,
        }
    }

    /// Route shown in `slot`, `None` in single-pane mode.
    pub fn current_destination(&self, slot: PaneSlot) -> Option<&Route> {
        match &self.state {
            NavigationState::SinglePane { .. } => None,
            NavigationState::DualPane { back_stack } => Some(back_stack.current(slot)),
        }
    }

    pub fn current_pane1_destination(&self) -> Option<&Route> {
        self.current_destination(PaneSlot::Pane1)
    }

    pub fn current_pane2_destination(&self) -> Option<&Route> {
        self.current_destination(PaneSlot::Pane2)
    }

    /// Dual-pane back stack, oldest first. Empty in single-pane mode.
    pub fn manual_back_stack(&self) -> &[BackStackEntry] {
        match &self.state {
            NavigationState::SinglePane { .. } => &[],
            NavigationState::DualPane { back_stack } => back_stack.entries(),
        }
    }

    /// Single-pane history, oldest first. Empty in dual-pane mode.
    pub fn single_pane_history(&self) -> &[Route] {
        match &self.state {
            NavigationState::SinglePane { history } => history.entries(),
            NavigationState::DualPane { .. } => &[],
        }
    }

    // ------------------------------------------------------------------------
    // Mode reconciliation
    // ------------------------------------------------------------------------

    /// Re-derive single/dual presentation from layout facts.
    ///
    /// Returns `true` if the representation changed.
    pub fn update_layout(&mut self, window_mode: WindowMode, pane_mode: PaneMode) -> bool {
        self.set_single_pane(is_single_pane_layout(pane_mode, window_mode))
    }

    /// Switch representation. Returns `true` if it changed.
    ///
    /// Entering single-pane mode resumes on pane 1's current route; entering
    /// dual-pane mode reseeds both slots from the start destinations.
    pub fn set_single_pane(&mut self, single_pane: bool) -> bool {
        if single_pane == self.is_single_pane() {
            return false;
        }

        let next = match &self.state {
            NavigationState::DualPane { back_stack } => NavigationState::SinglePane {
                history: LinearHistory::new(back_stack.current(PaneSlot::Pane1).clone()),
            },
            NavigationState::SinglePane { .. } => NavigationState::DualPane {
                back_stack: ManualBackStack::seeded(
                    self.starts.pane1.clone(),
                    self.starts.pane2.clone(),
                ),
            },
        };
        self.state = next;

        tracing::info!(single_pane, "navigation mode changed");
        self.notify(&NavigationEvent::ModeChanged {
            is_single_pane: single_pane,
        });
        true
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Navigate to `route`.
    ///
    /// Single-pane: pushes onto the linear history; `slot` is ignored.
    /// Dual-pane: assigns `route` to `slot` (required) and records a
    /// back-stack entry.
    pub fn navigate_to(&mut self, route: impl Into<Route>, slot: Option<PaneSlot>) -> Result<()> {
        let route = route.into();
        if !self.destinations.contains(route.as_str()) {
            tracing::warn!(route = %route, "rejected navigation to unknown route");
            return Err(NavigationError::UnknownRoute { route });
        }

        let committed_slot = match &mut self.state {
            NavigationState::SinglePane { history } => {
                history.push(route.clone());
                None
            }
            NavigationState::DualPane { back_stack } => {
                let Some(slot) = slot else {
                    tracing::warn!(route = %route, "rejected dual-pane navigation without a slot");
                    return Err(NavigationError::MissingSlotForDualPane { route });
                };
                back_stack.push(BackStackEntry {
                    route: route.clone(),
                    slot,
                });
                Some(slot)
            }
        };

        tracing::debug!(
            route = %route,
            slot = committed_slot.map(PaneSlot::label),
            mode = self.mode_label(),
            "navigated"
        );
        self.notify(&NavigationEvent::Navigated {
            route,
            slot: committed_slot,
        });
        Ok(())
    }

    /// [`navigate_to`](Self::navigate_to) targeting pane 1.
    pub fn navigate_to_pane1(&mut self, route: impl Into<Route>) -> Result<()> {
        self.navigate_to(route, Some(PaneSlot::Pane1))
    }

    /// [`navigate_to`](Self::navigate_to) targeting pane 2.
    pub fn navigate_to_pane2(&mut self, route: impl Into<Route>) -> Result<()> {
        self.navigate_to(route, Some(PaneSlot::Pane2))
    }

    /// Pop until `target` is on top; with `inclusive`, pop it too.
    ///
    /// Returns `false` without changing anything when `target` is absent.
    /// A target at the floor (the root, or a seed entry) clears everything
    /// above the floor and leaves the floor in place.
    pub fn navigate_up_to(&mut self, target: &str, inclusive: bool) -> bool {
        let popped = match &mut self.state {
            NavigationState::SinglePane { history } => {
                history.pop_up_to(target, inclusive).map(|p| p.len())
            }
            NavigationState::DualPane { back_stack } => {
                back_stack.pop_up_to(target, inclusive).map(|p| p.len())
            }
        };

        match popped {
            Some(count) => {
                tracing::debug!(
                    route = target,
                    inclusive,
                    count,
                    mode = self.mode_label(),
                    "navigated up"
                );
                if count > 0 {
                    self.notify(&NavigationEvent::Popped { count });
                }
                true
            }
            None => {
                tracing::debug!(
                    route = target,
                    inclusive,
                    mode = self.mode_label(),
                    "up navigation missed"
                );
                false
            }
        }
    }

    /// Pop one entry. Returns `false` at the floor so the host can exit.
    pub fn navigate_back(&mut self) -> bool {
        let popped = match &mut self.state {
            NavigationState::SinglePane { history } => history.go_back().is_some(),
            NavigationState::DualPane { back_stack } => back_stack.pop().is_some(),
        };

        if popped {
            tracing::debug!(mode = self.mode_label(), "navigated back");
            self.notify(&NavigationEvent::Popped { count: 1 });
        } else {
            tracing::debug!(mode = self.mode_label(), "back navigation at floor");
        }
        popped
    }

    fn mode_label(&self) -> &'static str {
        if self.is_single_pane() {
            "single_pane"
        } else {
            "dual_pane"
        }
    }

    fn notify(&mut self, event: &NavigationEvent) {
        for listener in &mut self.listeners {
            listener.on_navigation(event);
        }
    }
}
