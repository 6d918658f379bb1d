//! Pipeline configuration types
//!
//! Every tunable of the reveal pipeline lives here with its default value.

use std::path::PathBuf;

use crate::image_pipeline::colormap::ColorMap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::edit::FractionalRegion;
use crate::image_pipeline::rgb::Rgb;

pub const DEFAULT_INPUT: &str = "secret_image.csv";

/// Region left of center assumed to hold an eye.
pub const LEFT_EYE: FractionalRegion = FractionalRegion::new(0.30, 0.45, 0.20, 0.40);
/// Region right of center assumed to hold an eye.
pub const RIGHT_EYE: FractionalRegion = FractionalRegion::new(0.30, 0.45, 0.60, 0.80);

/// Output file names, relative to the output directory
#[derive(Debug, Clone)]
pub struct OutputFiles {
    pub grayscale: String,
    /// Prefix for color map renderings, followed by the map name and `.png`
    pub colormap_prefix: String,
    pub coordinates: String,
    pub modified: String,
    pub noisy: String,
    pub denoised: String,
    pub comparison: String,
    pub answers: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            grayscale: "grayscale_image.png".to_string(),
            colormap_prefix: "colormap_".to_string(),
            coordinates: "black_pixel_coords.txt".to_string(),
            modified: "modified_image.png".to_string(),
            noisy: "noisy_image.png".to_string(),
            denoised: "denoised_image.png".to_string(),
            comparison: "comparison_denoising.png".to_string(),
            answers: "answers.txt".to_string(),
        }
    }
}

impl OutputFiles {
    pub fn colormap(&self, map: ColorMap) -> String {
        format!("{}{}.png", self.colormap_prefix, map.name())
    }
}

/// Configuration for the grid reveal pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Delimited text file holding the grid
    pub input_path: PathBuf,
    /// Directory receiving every output file; created when missing
    pub output_dir: PathBuf,
    /// Field separator of the input file
    pub delimiter: char,
    /// Maps rendered in addition to the plain grayscale view
    pub colormaps: Vec<ColorMap>,
    /// Integer upscale factor for the rendered views
    pub render_scale: usize,
    /// Draw titles above the rendered views and the comparison halves
    pub titles: bool,
    /// A cell counts as black when `|value| <= zero_tolerance`
    pub zero_tolerance: f64,
    /// Regions whose black pixels get the marker color
    pub eye_regions: Vec<FractionalRegion>,
    /// Fraction of the height where the flipped bottom band begins
    pub mouth_start: f64,
    pub marker_color: Rgb,
    pub border_color: Rgb,
    /// Side length of the mean filter window, odd
    pub filter_window: usize,
    /// Columns between the two halves of the comparison figure
    pub comparison_gap: usize,
    pub comparison_background: Rgb,
    pub files: OutputFiles,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            delimiter: ',',
            colormaps: vec![ColorMap::Hot, ColorMap::Cool, ColorMap::Viridis],
            render_scale: 1,
            titles: true,
            zero_tolerance: 1e-6,
            eye_regions: vec![LEFT_EYE, RIGHT_EYE],
            mouth_start: 0.75,
            marker_color: [255, 0, 0],
            border_color: [0, 0, 255],
            filter_window: 3,
            comparison_gap: 8,
            comparison_background: [255, 255, 255],
            files: OutputFiles::default(),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.render_scale == 0 {
            return Err(PipelineError::InvalidConfig("render scale must be at least 1".into()));
        }
        if self.zero_tolerance.is_nan() || self.zero_tolerance < 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "zero tolerance must be non-negative, got {}",
                self.zero_tolerance
            )));
        }
        if !(0.0..=1.0).contains(&self.mouth_start) {
            return Err(PipelineError::InvalidConfig(format!(
                "mouth start must lie in [0, 1], got {}",
                self.mouth_start
            )));
        }
        if self.filter_window == 0 || self.filter_window % 2 == 0 {
            return Err(PipelineError::InvalidConfig(format!(
                "filter window must be odd and positive, got {}",
                self.filter_window
            )));
        }
        for region in &self.eye_regions {
            region.validate()?;
        }
        Ok(())
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    delimiter: Option<char>,
    colormaps: Option<Vec<ColorMap>>,
    render_scale: Option<usize>,
    titles: Option<bool>,
    zero_tolerance: Option<f64>,
    eye_regions: Option<Vec<FractionalRegion>>,
    mouth_start: Option<f64>,
    marker_color: Option<Rgb>,
    border_color: Option<Rgb>,
    filter_window: Option<usize>,
    comparison_gap: Option<usize>,
    comparison_background: Option<Rgb>,
    files: Option<OutputFiles>,
}

impl PipelineConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn colormaps(mut self, colormaps: Vec<ColorMap>) -> Self {
        self.colormaps = Some(colormaps);
        self
    }

    pub fn render_scale(mut self, scale: usize) -> Self {
        self.render_scale = Some(scale);
        self
    }

    pub fn titles(mut self, enable: bool) -> Self {
        self.titles = Some(enable);
        self
    }

    pub fn zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = Some(tolerance);
        self
    }

    pub fn eye_regions(mut self, regions: Vec<FractionalRegion>) -> Self {
        self.eye_regions = Some(regions);
        self
    }

    pub fn mouth_start(mut self, fraction: f64) -> Self {
        self.mouth_start = Some(fraction);
        self
    }

    pub fn marker_color(mut self, color: Rgb) -> Self {
        self.marker_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Rgb) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn filter_window(mut self, window: usize) -> Self {
        self.filter_window = Some(window);
        self
    }

    pub fn comparison_gap(mut self, gap: usize) -> Self {
        self.comparison_gap = Some(gap);
        self
    }

    pub fn comparison_background(mut self, color: Rgb) -> Self {
        self.comparison_background = Some(color);
        self
    }

    pub fn files(mut self, files: OutputFiles) -> Self {
        self.files = Some(files);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            input_path: self.input_path.unwrap_or(default.input_path),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            delimiter: self.delimiter.unwrap_or(default.delimiter),
            colormaps: self.colormaps.unwrap_or(default.colormaps),
            render_scale: self.render_scale.unwrap_or(default.render_scale),
            titles: self.titles.unwrap_or(default.titles),
            zero_tolerance: self.zero_tolerance.unwrap_or(default.zero_tolerance),
            eye_regions: self.eye_regions.unwrap_or(default.eye_regions),
            mouth_start: self.mouth_start.unwrap_or(default.mouth_start),
            marker_color: self.marker_color.unwrap_or(default.marker_color),
            border_color: self.border_color.unwrap_or(default.border_color),
            filter_window: self.filter_window.unwrap_or(default.filter_window),
            comparison_gap: self.comparison_gap.unwrap_or(default.comparison_gap),
            comparison_background: self
                .comparison_background
                .unwrap_or(default.comparison_background),
            files: self.files.unwrap_or(default.files),
        }
    }
}
