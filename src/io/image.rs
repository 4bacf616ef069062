//! Measurement of image darkness over triangular and square regions

use crate::geometry::{Cell, Point};
use crate::io::error::{Result, SubdivisionError};
use image::GrayImage;
use ndarray::Array2;
use std::path::Path;

/// Ink sampled over one region of an image
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Mean darkness in `[0, 1]`, where 1 is black
    pub intensity: f64,
    /// Area of the region in geometry units
    pub area: f64,
}

/// Source of intensity and area measurements for subdivision shapes
pub trait Image {
    /// Measure the triangle with corners `a`, `b` and `c`
    fn measure_triangle(&self, a: Point, b: Point, c: Point) -> Measurement;

    /// Measure the square covered by `cell`
    fn measure_cell(&self, cell: &Cell) -> Measurement;
}

/// Darkness grid decoded from a raster file
///
/// One geometry unit is one pixel. A region's intensity is the mean darkness
/// of the pixels whose centres fall inside it; regions too small to contain a
/// pixel centre take the pixel under their centroid.
#[derive(Clone, Debug)]
pub struct RasterImage {
    /// Darkness per pixel indexed by (`row`, `col`)
    darkness: Array2<f64>,
}

impl RasterImage {
    /// Load any format the `image` crate can decode
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be decoded
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        std::fs::metadata(&path_buf).map_err(|e| SubdivisionError::FileSystem {
            path: path_buf.clone(),
            operation: "read metadata",
            source: e,
        })?;
        let img = image::open(&path_buf).map_err(|e| SubdivisionError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Ok(Self::from_luma(&img.to_luma8()))
    }

    /// Build from an 8-bit grayscale buffer, mapping white to 0 and black to 1
    pub fn from_luma(img: &GrayImage) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let mut darkness = Array2::zeros((height, width));

        for (x, y, pixel) in img.enumerate_pixels() {
            let [luma] = pixel.0;
            if let Some(value) = darkness.get_mut((y as usize, x as usize)) {
                *value = 1.0 - f64::from(luma) / 255.0;
            }
        }

        Self { darkness }
    }

    /// Wrap an existing darkness grid indexed by (`row`, `col`)
    pub const fn from_darkness(darkness: Array2<f64>) -> Self {
        Self { darkness }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.darkness.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.darkness.nrows()
    }

    /// Mean darkness of the pixels whose centres satisfy `contains`
    ///
    /// Only pixels overlapping the box `min..max` are visited.
    fn mean_darkness(
        &self,
        min: Point,
        max: Point,
        fallback: Point,
        contains: impl Fn(Point) -> bool,
    ) -> f64 {
        let col_start = clamp_floor(min.x(), self.width());
        let col_end = clamp_ceil(max.x(), self.width());
        let row_start = clamp_floor(min.y(), self.height());
        let row_end = clamp_ceil(max.y(), self.height());

        let mut total = 0.0;
        let mut count = 0_usize;
        for row in row_start..row_end {
            for col in col_start..col_end {
                let centre = Point::new(col as f64 + 0.5, row as f64 + 0.5);
                if contains(centre) {
                    total += self.darkness.get((row, col)).copied().unwrap_or(0.0);
                    count += 1;
                }
            }
        }

        if count > 0 {
            return total / count as f64;
        }

        let row = clamp_floor(fallback.y(), self.height());
        let col = clamp_floor(fallback.x(), self.width());
        self.darkness.get((row, col)).copied().unwrap_or(0.0)
    }
}

impl Image for RasterImage {
    fn measure_triangle(&self, a: Point, b: Point, c: Point) -> Measurement {
        let min = Point::new(a.x().min(b.x()).min(c.x()), a.y().min(b.y()).min(c.y()));
        let max = Point::new(a.x().max(b.x()).max(c.x()), a.y().max(b.y()).max(c.y()));
        let centroid = Point::new(
            (a.x() + b.x() + c.x()) / 3.0,
            (a.y() + b.y() + c.y()) / 3.0,
        );

        let intensity = self.mean_darkness(min, max, centroid, |p| {
            let d1 = cross(a, b, p);
            let d2 = cross(b, c, p);
            let d3 = cross(c, a, p);
            let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            !(has_negative && has_positive)
        });

        Measurement {
            intensity,
            area: cross(a, b, c).abs() / 2.0,
        }
    }

    fn measure_cell(&self, cell: &Cell) -> Measurement {
        let (min, max) = (cell.min(), cell.max());
        let intensity = self.mean_darkness(min, max, cell.center(), |p| {
            p.x() >= min.x() && p.x() < max.x() && p.y() >= min.y() && p.y() < max.y()
        });

        Measurement {
            intensity,
            area: cell.area(),
        }
    }
}

// Twice the signed area of the triangle (o, a, b)
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x() - o.x()).mul_add(b.y() - o.y(), -((a.y() - o.y()) * (b.x() - o.x())))
}

fn clamp_floor(value: f64, len: usize) -> usize {
    if value <= 0.0 {
        return 0;
    }
    (value.floor() as usize).min(len.saturating_sub(1))
}

fn clamp_ceil(value: f64, len: usize) -> usize {
    if value <= 0.0 {
        return 0;
    }
    (value.ceil() as usize).min(len)
}
