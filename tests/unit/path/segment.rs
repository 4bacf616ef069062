//! Tests for the provided methods of the segment contract

#[cfg(test)]
mod tests {
    use crate::assert_close;
    use art_path::geometry::{Cell, Direction, Point};
    use art_path::io::image::{Image, Measurement};
    use art_path::path::{Segment, SquarePath, TrianglePath};

    /// Image with the same darkness everywhere
    struct Flat(f64);

    impl Image for Flat {
        fn measure_triangle(&self, a: Point, b: Point, c: Point) -> Measurement {
            let doubled = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
            Measurement {
                intensity: self.0,
                area: doubled.abs() / 2.0,
            }
        }

        fn measure_cell(&self, cell: &Cell) -> Measurement {
            Measurement {
                intensity: self.0,
                area: cell.area(),
            }
        }
    }

    // Tests length and coordinates derive from entry and exit
    #[test]
    fn test_length_and_coordinates() {
        let path = SquarePath::new(
            Cell::new(0.0, 0.0, 4.0, 4.0),
            Direction::East,
            Direction::East,
        );

        assert_eq!(path.entry(), Point::new(0.0, 2.0));
        assert_eq!(path.exit(), Point::new(4.0, 2.0));
        assert_close(path.length(), 4.0, 1e-12);
        assert_eq!(path.coordinates(), [0.0, 2.0, 4.0, 2.0]);
    }

    // Tests the square width spreads the cell's ink over the segment
    #[test]
    fn test_square_optimal_width() {
        let path = SquarePath::new(
            Cell::new(0.0, 0.0, 4.0, 4.0),
            Direction::East,
            Direction::East,
        );

        // 0.5 * 16 / 4
        assert_close(path.optimal_width(&Flat(0.5)), 2.0, 1e-12);
        assert_close(path.optimal_width(&Flat(0.0)), 0.0, 1e-12);
    }

    // Tests the triangle is measured over its three corners
    #[test]
    fn test_triangle_optimal_width() {
        let path = TrianglePath::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        );

        let measurement = path.measure(&Flat(1.0));
        assert_close(measurement.area, 8.0, 1e-12);

        // 1.0 * 8 / sqrt(8)
        assert_close(path.optimal_width(&Flat(1.0)), 8.0_f64.sqrt(), 1e-12);
    }

    // Tests darker images give wider strokes for the same segment
    #[test]
    fn test_darker_is_wider() {
        let path = SquarePath::new(
            Cell::new(0.0, 0.0, 2.0, 2.0),
            Direction::North,
            Direction::West,
        );

        assert!(path.optimal_width(&Flat(0.9)) > path.optimal_width(&Flat(0.1)));
    }
}
