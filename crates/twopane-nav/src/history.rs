#![forbid(unsafe_code)]

//! The two navigation histories.
//!
//! [`LinearHistory`] backs single-pane presentation: an ordinary push/pop
//! stack of routes. [`ManualBackStack`] backs dual-pane presentation: every
//! slot assignment is appended as a [`BackStackEntry`], and the route a slot
//! currently shows is the most recent entry for that slot.
//!
//! # Invariants
//!
//! 1. A `LinearHistory` is never empty; its first entry is the root.
//! 2. A `ManualBackStack` always holds at least its two seed entries,
//!    `(pane1_start, Pane1)` then `(pane2_start, Pane2)`.
//! 3. Pops never cross the floor. `pop` stops there; `pop_up_to` on a
//!    target at or below the floor clears down to it.
//!
//! ```text
//! ManualBackStack after seeding A/B and navigate_to(C, Pane2):
//! ┌────────────────────────────────────────────┐
//! │ [(A, Pane1), (B, Pane2) | (C, Pane2)]      │
//! │  ^^^^^^^^^^ floor ^^^^^   pane1=A pane2=C  │
//! └────────────────────────────────────────────┘
//! pop() -> (C, Pane2), pane2 restored to B
//! ```

use std::fmt;

use serde::Serialize;

use crate::route::{BackStackEntry, PaneSlot, Route};

/// Number of seed entries a manual back stack never pops below.
pub const BACK_STACK_FLOOR: usize = 2;

// ============================================================================
// LinearHistory
// ============================================================================

/// Single-pane push/pop history. Newest entry at the back.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LinearHistory {
    entries: Vec<Route>,
}

impl fmt::Debug for LinearHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearHistory")
            .field("depth", &self.entries.len())
            .field("current", &self.current().as_str())
            .finish()
    }
}

impl LinearHistory {
    /// A history holding only `root`.
    #[must_use]
    pub fn new(root: impl Into<Route>) -> Self {
        Self {
            entries: vec![root.into()],
        }
    }

    /// The route on top of the history.
    #[must_use]
    pub fn current(&self) -> &Route {
        // Never empty: `new` seeds the root and pops stop above it.
        &self.entries[self.entries.len() - 1]
    }

    /// Oldest first.
    #[inline]
    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    pub fn push(&mut self, route: Route) {
        self.entries.push(route);
    }

    /// Whether [`go_back`](Self::go_back) would succeed.
    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Pop the top entry. Returns `None` at the root.
    pub fn go_back(&mut self) -> Option<Route> {
        if self.can_go_back() {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Pop until `target` is on top, then pop it too when `inclusive`.
    ///
    /// Searches from the top. Returns the popped routes (newest first), or
    /// `None` when `target` is absent. The root is never popped.
    pub fn pop_up_to(&mut self, target: &str, inclusive: bool) -> Option<Vec<Route>> {
        let index = self.entries.iter().rposition(|route| route == target)?;
        let keep = if inclusive { index } else { index + 1 };
        let mut popped = self.entries.split_off(keep.max(1));
        popped.reverse();
        Some(popped)
    }
}

// ============================================================================
// ManualBackStack
// ============================================================================

/// Dual-pane back stack: seed entries plus one entry per slot assignment.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ManualBackStack {
    entries: Vec<BackStackEntry>,
}

impl fmt::Debug for ManualBackStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualBackStack")
            .field("depth", &self.entries.len())
            .field("pane1", &self.current(PaneSlot::Pane1).as_str())
            .field("pane2", &self.current(PaneSlot::Pane2).as_str())
            .finish()
    }
}

impl ManualBackStack {
    /// A stack holding exactly the two seed entries.
    #[must_use]
    pub fn seeded(pane1_start: Route, pane2_start: Route) -> Self {
        Self {
            entries: vec![
                BackStackEntry {
                    route: pane1_start,
                    slot: PaneSlot::Pane1,
                },
                BackStackEntry {
                    route: pane2_start,
                    slot: PaneSlot::Pane2,
                },
            ],
        }
    }

    /// Route currently shown in `slot`: the newest entry for that slot.
    #[must_use]
    pub fn current(&self, slot: PaneSlot) -> &Route {
        let seed = &self.entries[slot.index()];
        self.entries[BACK_STACK_FLOOR..]
            .iter()
            .rev()
            .find(|entry| entry.slot == slot)
            .map_or(&seed.route, |entry| &entry.route)
    }

    /// Oldest first; the first two entries are the seeds.
    #[inline]
    pub fn entries(&self) -> &[BackStackEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: BackStackEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn can_pop(&self) -> bool {
        self.entries.len() > BACK_STACK_FLOOR
    }

    /// Pop one entry above the seeds. Returns `None` at the floor.
    pub fn pop(&mut self) -> Option<BackStackEntry> {
        if self.can_pop() {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Pop until an entry for `target` is on top, then pop it too when
    /// `inclusive`.
    ///
    /// Searches from the top. Returns the popped entries (newest first), or
    /// `None` when `target` is absent. A seed target clears the stack down to
    /// the seeds, which are never popped.
    pub fn pop_up_to(&mut self, target: &str, inclusive: bool) -> Option<Vec<BackStackEntry>> {
        let index = self
            .entries
            .iter()
            .rposition(|entry| entry.route == target)?;
        let keep = if inclusive { index } else { index + 1 };
        let mut popped = self.entries.split_off(keep.max(BACK_STACK_FLOOR));
        popped.reverse();
        Some(popped)
    }
}
