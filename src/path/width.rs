//! Conversion of sampled ink into a stroke width

/// Width that spreads a region's ink over a segment of the given length
///
/// The ink carried by a region is its mean intensity times its area. Laying
/// that ink along the segment gives a stroke that grows with darker and
/// larger regions and thins out as the segment gets longer. Returns 0 for a
/// segment with no length.
pub fn stroke_width(intensity: f64, area: f64, length: f64) -> f64 {
    if length <= 0.0 {
        return 0.0;
    }
    intensity * area / length
}
