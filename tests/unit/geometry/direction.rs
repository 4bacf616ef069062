//! Tests for compass direction relations and codes

#[cfg(test)]
mod tests {
    use art_path::geometry::Direction;

    // Tests opposite is an involution that negates the offset
    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            let opposite = direction.opposite();
            assert_ne!(opposite, direction);
            assert_eq!(opposite.opposite(), direction);

            let (dx, dy) = direction.offset();
            assert_eq!(opposite.offset(), (-dx, -dy));
        }
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    }

    // Tests cardinal and diagonal split the eight directions evenly
    #[test]
    fn test_cardinal_and_diagonal() {
        let cardinals: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_cardinal())
            .collect();

        assert_eq!(
            cardinals,
            vec![
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West
            ]
        );
        for direction in Direction::ALL {
            assert_ne!(direction.is_cardinal(), direction.is_diagonal());
            let (dx, dy) = direction.offset();
            assert_eq!(direction.is_diagonal(), dx != 0 && dy != 0);
        }
    }

    // Tests north points towards smaller y
    #[test]
    fn test_offsets_use_image_coordinates() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::SouthEast.offset(), (1, 1));
        assert_eq!(Direction::West.offset(), (-1, 0));
    }

    // Tests abbreviated codes used in textual output
    #[test]
    fn test_codes() {
        let codes: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(codes, ["N", "S", "E", "W", "NE", "NW", "SE", "SW"]);
        assert_eq!(Direction::SouthWest.code(), "SW");
    }
}
