//! Color map definitions

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::rgb::Rgb;

/// Named color maps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// Black to white
    Gray,
    /// Black through red and yellow to white
    Hot,
    /// Cyan to magenta
    Cool,
    /// Perceptually uniform dark purple to yellow
    Viridis,
}

/// (position, value) anchors for one channel, positions ascending.
type Anchors = &'static [(f64, f64)];

const HOT_RED: Anchors = &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)];
const HOT_GREEN: Anchors = &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)];
const HOT_BLUE: Anchors = &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)];

const VIRIDIS_STOPS: [Rgb; 9] = [
    [0x44, 0x01, 0x54],
    [0x47, 0x2d, 0x7b],
    [0x3b, 0x52, 0x8b],
    [0x2c, 0x72, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x28, 0xae, 0x80],
    [0x5e, 0xc9, 0x62],
    [0xad, 0xdc, 0x30],
    [0xfd, 0xe7, 0x25],
];

fn interpolate(anchors: Anchors, t: f64) -> f64 {
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    anchors.last().map(|&(_, y)| y).unwrap_or(0.0)
}

fn to_level(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn viridis(t: f64) -> Rgb {
    let pos = t * (VIRIDIS_STOPS.len() - 1) as f64;
    let lo = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = pos - lo as f64;
    let (a, b) = (VIRIDIS_STOPS[lo], VIRIDIS_STOPS[lo + 1]);
    let mix = |c: usize| (a[c] as f64 + (b[c] as f64 - a[c] as f64) * frac).round() as u8;
    [mix(0), mix(1), mix(2)]
}

impl ColorMap {
    /// Lower-case name used in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMap::Gray => "gray",
            ColorMap::Hot => "hot",
            ColorMap::Cool => "cool",
            ColorMap::Viridis => "viridis",
        }
    }

    /// Figure title for a rendering under this map.
    pub fn title(&self) -> String {
        match self {
            ColorMap::Gray => "Grayscale Image".to_string(),
            other => format!("Colormap: {}", other.name()),
        }
    }

    /// Maps a normalized value to a color. `t` is clamped to `[0, 1]`; NaN maps like 0.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            ColorMap::Gray => {
                let v = to_level(t);
                [v, v, v]
            }
            ColorMap::Hot => [
                to_level(interpolate(HOT_RED, t)),
                to_level(interpolate(HOT_GREEN, t)),
                to_level(interpolate(HOT_BLUE, t)),
            ],
            ColorMap::Cool => [to_level(t), to_level(1.0 - t), 255],
            ColorMap::Viridis => viridis(t),
        }
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(ColorMap::Gray),
            "hot" => Ok(ColorMap::Hot),
            "cool" => Ok(ColorMap::Cool),
            "viridis" => Ok(ColorMap::Viridis),
            other => Err(PipelineError::InvalidConfig(format!(
                "unknown color map '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ColorMap::Gray.color_at(0.0), [0, 0, 0]);
        assert_eq!(ColorMap::Gray.color_at(1.0), [255, 255, 255]);
        assert_eq!(ColorMap::Hot.color_at(0.0), [11, 0, 0]);
        assert_eq!(ColorMap::Hot.color_at(1.0), [255, 255, 255]);
        assert_eq!(ColorMap::Cool.color_at(0.0), [0, 255, 255]);
        assert_eq!(ColorMap::Cool.color_at(1.0), [255, 0, 255]);
        assert_eq!(ColorMap::Viridis.color_at(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(ColorMap::Viridis.color_at(1.0), [0xfd, 0xe7, 0x25]);
    }

    #[test]
    fn test_hot_ramps_red_before_green() {
        let [r, g, b] = ColorMap::Hot.color_at(0.365079);
        assert_eq!((r, g, b), (255, 0, 0));
        let [r, g, b] = ColorMap::Hot.color_at(0.746032);
        assert_eq!((r, g, b), (255, 255, 0));
    }

    #[test]
    fn test_viridis_hits_middle_stop() {
        assert_eq!(ColorMap::Viridis.color_at(0.5), [0x21, 0x91, 0x8c]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(ColorMap::Cool.color_at(-3.0), ColorMap::Cool.color_at(0.0));
        assert_eq!(ColorMap::Hot.color_at(7.0), ColorMap::Hot.color_at(1.0));
        assert_eq!(ColorMap::Gray.color_at(f64::NAN), [0, 0, 0]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(ColorMap::Gray.title(), "Grayscale Image");
        assert_eq!(ColorMap::Viridis.title(), "Colormap: viridis");
    }

    #[test]
    fn test_parse_names() {
        for map in [ColorMap::Gray, ColorMap::Hot, ColorMap::Cool, ColorMap::Viridis] {
            assert_eq!(map.name().parse::<ColorMap>().unwrap(), map);
        }
        assert!("jet".parse::<ColorMap>().is_err());
    }
}
