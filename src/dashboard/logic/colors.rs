use serde::{Deserialize, Serialize};

/// Renderer-agnostic named colors used by the chart specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Blue,
    Green,
    Red,
    Pink,
    Orange,
    Gray,
    SkyBlue,
    Navy,
}

impl NamedColor {
    /// sRGB triple matching the CSS color of the same name.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Blue => [0, 0, 255],
            Self::Green => [0, 128, 0],
            Self::Red => [255, 0, 0],
            Self::Pink => [255, 192, 203],
            Self::Orange => [255, 165, 0],
            Self::Gray => [128, 128, 128],
            Self::SkyBlue => [135, 206, 235],
            Self::Navy => [0, 0, 128],
        }
    }
}

/// Bar color for a region. Unmapped regions fall back to gray.
pub fn region_color(region: &str) -> NamedColor {
    match region {
        "West" => NamedColor::Blue,
        "Northeast" => NamedColor::Green,
        "Southeast" => NamedColor::Red,
        "Midwest" => NamedColor::Pink,
        "Southwest" => NamedColor::Orange,
        _ => NamedColor::Gray,
    }
}

/// Continuous palettes for the choropleth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    Viridis,
}

// Viridis sampled at ten evenly spaced points.
const VIRIDIS: [[u8; 3]; 10] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 73, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

impl Palette {
    /// Color at position `t` in `[0, 1]`; out-of-range input is clamped.
    #[expect(clippy::indexing_slicing)]
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = match self {
            Self::Viridis => &VIRIDIS,
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f64;
        let (a, b) = (stops[lower], stops[lower + 1]);
        let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }
}
