//! Region brightness from perceptual luminance.

use crate::partition::Region;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;
const MAX_CHANNEL: f64 = 255.0;

/// Mean luminance of the region's pixels, scaled to [0, 1].
///
/// Each pixel contributes `0.2126·R + 0.7152·G + 0.0722·B`.
pub fn region_brightness(region: &Region<'_>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for pixel in region.pixels() {
        let [r, g, b] = pixel.0;
        sum += f64::from(r) * RED_WEIGHT + f64::from(g) * GREEN_WEIGHT + f64::from(b) * BLUE_WEIGHT;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64 / MAX_CHANNEL
}
