//! Compass directions used to name the entry and exit sides of a square cell

use std::fmt;

/// One of the eight compass directions
///
/// Cardinal directions resolve to edge midpoints of a cell and diagonal
/// directions resolve to its corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller y
    North,
    /// Towards larger y
    South,
    /// Towards larger x
    East,
    /// Towards smaller x
    West,
    /// Towards larger x and smaller y
    NorthEast,
    /// Towards smaller x and smaller y
    NorthWest,
    /// Towards larger x and larger y
    SouthEast,
    /// Towards smaller x and larger y
    SouthWest,
}

impl Direction {
    /// Every direction, cardinals first
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Whether this is one of N, S, E or W
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }

    /// Whether this is one of NE, NW, SE or SW
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Unit step `(dx, dy)` in image coordinates
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::NorthEast => (1, -1),
            Self::NorthWest => (-1, -1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (-1, 1),
        }
    }

    /// Abbreviated code such as `N` or `SW`
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
