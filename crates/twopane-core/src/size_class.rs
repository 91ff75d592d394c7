#![forbid(unsafe_code)]

//! Window size classes.
//!
//! Each window dimension falls into one of three [`WindowSizeClass`]
//! buckets. Thresholds are inclusive lower bounds: a width of exactly 600 is
//! `Medium`, exactly 840 is `Expanded`.
//!
//! | Class      | Width        | Height       |
//! |------------|--------------|--------------|
//! | `Compact`  | < 600        | < 480        |
//! | `Medium`   | 600–839      | 480–899      |
//! | `Expanded` | 840+         | 900+         |

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Size bucket for one window dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WindowSizeClass {
    #[default]
    Compact,
    Medium,
    Expanded,
}

impl WindowSizeClass {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WindowSizeClass::Compact => "compact",
            WindowSizeClass::Medium => "medium",
            WindowSizeClass::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for WindowSizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds for one dimension.
///
/// Each field is the minimum value (in layout units) for that class.
/// `Compact` implicitly starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeClassThresholds {
    /// Minimum value for `Medium`.
    pub medium: u16,
    /// Minimum value for `Expanded`.
    pub expanded: u16,
}

impl SizeClassThresholds {
    /// Width thresholds: 600 / 840.
    pub const WIDTH: Self = Self {
        medium: 600,
        expanded: 840,
    };

    /// Height thresholds: 480 / 900.
    pub const HEIGHT: Self = Self {
        medium: 480,
        expanded: 900,
    };

    /// Create thresholds, sanitized to be monotonically non-decreasing.
    pub const fn new(medium: u16, expanded: u16) -> Self {
        let expanded = if expanded < medium { medium } else { expanded };
        Self { medium, expanded }
    }

    /// Whether the thresholds are already monotonic.
    pub const fn is_monotonic(self) -> bool {
        self.medium <= self.expanded
    }

    /// Classify one dimension.
    #[inline]
    pub const fn classify(self, value: u16) -> WindowSizeClass {
        if value >= self.expanded {
            WindowSizeClass::Expanded
        } else if value >= self.medium {
            WindowSizeClass::Medium
        } else {
            WindowSizeClass::Compact
        }
    }
}

/// Width and height thresholds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeClassPolicy {
    pub width: SizeClassThresholds,
    pub height: SizeClassThresholds,
}

impl SizeClassPolicy {
    /// Default thresholds: width 600/840, height 480/900.
    pub const DEFAULT: Self = Self {
        width: SizeClassThresholds::WIDTH,
        height: SizeClassThresholds::HEIGHT,
    };

    #[inline]
    pub const fn width_class(self, width: u16) -> WindowSizeClass {
        self.width.classify(width)
    }

    #[inline]
    pub const fn height_class(self, height: u16) -> WindowSizeClass {
        self.height.classify(height)
    }

    /// Classify both dimensions of a size as `(width, height)`.
    #[inline]
    pub const fn classify_size(self, size: Size) -> (WindowSizeClass, WindowSizeClass) {
        (self.width_class(size.width), self.height_class(size.height))
    }
}

impl Default for SizeClassPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_boundaries() {
        let t = SizeClassThresholds::WIDTH;
        assert_eq!(t.classify(0), WindowSizeClass::Compact);
        assert_eq!(t.classify(599), WindowSizeClass::Compact);
        assert_eq!(t.classify(600), WindowSizeClass::Medium);
        assert_eq!(t.classify(839), WindowSizeClass::Medium);
        assert_eq!(t.classify(840), WindowSizeClass::Expanded);
        assert_eq!(t.classify(u16::MAX), WindowSizeClass::Expanded);
    }

    #[test]
    fn height_boundaries() {
        let t = SizeClassThresholds::HEIGHT;
        assert_eq!(t.classify(479), WindowSizeClass::Compact);
        assert_eq!(t.classify(480), WindowSizeClass::Medium);
        assert_eq!(t.classify(899), WindowSizeClass::Medium);
        assert_eq!(t.classify(900), WindowSizeClass::Expanded);
    }

    #[test]
    fn new_sanitizes_inverted_thresholds() {
        let t = SizeClassThresholds::new(700, 500);
        assert_eq!(t.expanded, 700);
        assert!(t.is_monotonic());
        assert_eq!(t.classify(699), WindowSizeClass::Compact);
        assert_eq!(t.classify(700), WindowSizeClass::Expanded);
    }

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        let t = SizeClassThresholds::WIDTH;
        assert_eq!(t.classify(0), WindowSizeClass::Compact);
        assert_eq!(t.classify(t.medium - 1), WindowSizeClass::Compact);
        assert_eq!(t.classify(t.medium), WindowSizeClass::Medium);
        assert_eq!(t.classify(t.expanded - 1), WindowSizeClass::Medium);
        assert_eq!(t.classify(t.expanded), WindowSizeClass::Expanded);
    }

    #[test]
    fn policy_classifies_both_dimensions() {
        let policy = SizeClassPolicy::default();
        assert_eq!(
            policy.classify_size(Size::new(900, 500)),
            (WindowSizeClass::Expanded, WindowSizeClass::Medium)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(WindowSizeClass::Medium.to_string(), "medium");
        assert!(WindowSizeClass::Compact < WindowSizeClass::Expanded);
    }
}
