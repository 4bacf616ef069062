//! Immutable 2D coordinates with distance and interpolation helpers

use std::fmt;

/// A point in the image plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Vertical coordinate (grows downwards)
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared Euclidean distance, for comparisons that don't need the root
    pub fn distance_squared_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Point at `fraction` of the way from this point toward `other`
    ///
    /// A fraction of 0 returns this point and 1 returns `other`.
    pub fn move_toward(self, other: Self, fraction: f64) -> Self {
        Self {
            x: (other.x - self.x).mul_add(fraction, self.x),
            y: (other.y - self.y).mul_add(fraction, self.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
