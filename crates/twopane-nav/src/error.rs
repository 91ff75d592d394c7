#![forbid(unsafe_code)]

//! Navigation errors.

use thiserror::Error;

use crate::route::Route;

pub type Result<T> = std::result::Result<T, NavigationError>;

/// Caller-contract violations. A rejected command leaves the engine untouched.
///
/// Expected misses (target not on the stack, back at the floor) are not
/// errors; those commands return `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigating to '{route}' in dual-pane mode requires a target pane slot")]
    MissingSlotForDualPane { route: Route },

    #[error("unknown route '{route}'")]
    UnknownRoute { route: Route },
}

impl NavigationError {
    /// The route named by the rejected command.
    #[must_use]
    pub fn route(&self) -> &Route {
        match self {
            Self::MissingSlotForDualPane { route } | Self::UnknownRoute { route } => route,
        }
    }
}
