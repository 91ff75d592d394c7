#![forbid(unsafe_code)]

//! Routes, pane slots, and back-stack entries.
//!
//! A [`Route`] is an opaque caller-defined identifier; equality is string
//! equality. A [`RouteSet`] holds the destinations the engine accepts.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a unit of navigable content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(route: &str) -> Self {
        Self(route.to_owned())
    }
}

impl From<String> for Route {
    fn from(route: String) -> Self {
        Self(route)
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Route {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Route {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Route {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One of the two addressable destinations in dual-pane mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneSlot {
    Pane1,
    Pane2,
}

impl PaneSlot {
    pub const ALL: [PaneSlot; 2] = [PaneSlot::Pane1, PaneSlot::Pane2];

    /// Zero-based index, matching child order in the layout engine.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Pane1 => 0,
            Self::Pane2 => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pane1 => "pane1",
            Self::Pane2 => "pane2",
        }
    }
}

impl fmt::Display for PaneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dual-pane navigation event on the manual back stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackStackEntry {
    pub route: Route,
    pub slot: PaneSlot,
}

impl BackStackEntry {
    #[must_use]
    pub fn new(route: impl Into<Route>, slot: PaneSlot) -> Self {
        Self {
            route: route.into(),
            slot,
        }
    }
}

/// Set of valid navigation destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteSet {
    routes: BTreeSet<Route>,
}

impl RouteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a destination. Returns `false` if it was already present.
    pub fn insert(&mut self, route: impl Into<Route>) -> bool {
        self.routes.insert(route.into())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Destinations in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

impl<R: Into<Route>> FromIterator<R> for RouteSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
