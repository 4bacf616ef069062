//! Axis-aligned square regions addressed by compass direction

use crate::geometry::{Direction, Point};
use std::fmt;

/// One quarter of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Smaller x, smaller y
    NorthWest,
    /// Larger x, smaller y
    NorthEast,
    /// Smaller x, larger y
    SouthWest,
    /// Larger x, larger y
    SouthEast,
}

impl Quadrant {
    /// All four quadrants in reading order
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];
}

/// Square region between a minimum and a maximum corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    min: Point,
    max: Point,
}

impl Cell {
    /// Create a cell from its minimum corner `(x1, y1)` and maximum corner `(x2, y2)`
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: Point::new(x1, y1),
            max: Point::new(x2, y2),
        }
    }

    /// Corner with the smallest coordinates
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Corner with the largest coordinates
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Midpoint of the cell
    pub fn center(&self) -> Point {
        self.min.move_toward(self.max, 0.5)
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Area covered by the cell
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Corner or edge midpoint lying in `direction` from the centre
    ///
    /// `North` is the midpoint of the top edge, `SouthWest` the bottom-left
    /// corner, and so on.
    pub fn resolve(&self, direction: Direction) -> Point {
        let center = self.center();
        let (dx, dy) = direction.offset();
        let x = match dx {
            i8::MIN..=-1 => self.min.x(),
            0 => center.x(),
            1..=i8::MAX => self.max.x(),
        };
        let y = match dy {
            i8::MIN..=-1 => self.min.y(),
            0 => center.y(),
            1..=i8::MAX => self.max.y(),
        };
        Point::new(x, y)
    }

    /// One of the four equal sub-cells
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let (min, mid, max) = (self.min, self.center(), self.max);
        match quadrant {
            Quadrant::NorthWest => Self::new(min.x(), min.y(), mid.x(), mid.y()),
            Quadrant::NorthEast => Self::new(mid.x(), min.y(), max.x(), mid.y()),
            Quadrant::SouthWest => Self::new(min.x(), mid.y(), mid.x(), max.y()),
            Quadrant::SouthEast => Self::new(mid.x(), mid.y(), max.x(), max.y()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell({}, {}, {}, {})",
            self.min.x(),
            self.min.y(),
            self.max.x(),
            self.max.y()
        )
    }
}
