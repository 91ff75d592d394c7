#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are device-independent layout units, origin at the top-left of
//! the window.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in layout units.
    pub width: u16,
    /// Height in layout units.
    pub height: u16,
}

impl Rect {
    /// The zero rectangle, used for absent fold bounds.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    ///
    /// Inverted edges produce an empty rectangle.
    #[inline]
    pub const fn from_edges(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> u16 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> u16 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Clamp each dimension so it does not exceed `bounds`.
    #[inline]
    pub const fn clamp_to(self, bounds: Size) -> Size {
        let width = if self.width > bounds.width {
            bounds.width
        } else {
            self.width
        };
        let height = if self.height > bounds.height {
            bounds.height
        } else {
            self.height
        };
        Size::new(width, height)
    }
}

/// Horizontal reading direction of the host layout.
///
/// Right-to-left mirrors pane order across a vertical fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Whether the layout is mirrored.
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
