use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    analysis::{analyze, write_coordinates, ZeroPixelAnalysis},
    colormap::{render, ColorMap},
    common::{
        error::{PipelineError, Result},
        timing::{PipelineTimings, Timer},
    },
    config::PipelineConfig,
    filter::mean_filter,
    grid::{DelimitedGridReader, Grid, GridReader},
    output::{load_font, side_by_side, with_title, write_answers, ImageWriter, PngImageWriter},
    rgb::RgbImageData,
};

/// Everything one run computes, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct RevealArtifacts {
    pub grid: Grid,
    /// Grayscale view first, then one per configured color map; titled when a font is set
    pub renders: Vec<(ColorMap, RgbImageData)>,
    pub analysis: ZeroPixelAnalysis,
    /// Number of black pixels painted with the marker color
    pub marked: usize,
    /// Edited image before smoothing
    pub modified: RgbImageData,
    pub denoised: RgbImageData,
    pub comparison: RgbImageData,
    pub timings: PipelineTimings,
}

#[derive(Debug, Clone)]
pub struct RevealSummary {
    pub artifacts: RevealArtifacts,
    /// Files written, in write order
    pub written: Vec<PathBuf>,
}

pub struct GridRevealPipeline<R: GridReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
    title_font: Option<FontVec>,
}

impl GridRevealPipeline<DelimitedGridReader, PngImageWriter> {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let title_font = if config.titles {
            let font = load_font();
            if font.is_none() {
                warn!("No title font found, figures will be saved without titles");
            }
            font
        } else {
            None
        };
        Ok(Self {
            reader: DelimitedGridReader::new(config.delimiter),
            writer: PngImageWriter,
            config,
            title_font,
        })
    }
}

impl<R: GridReader, W: ImageWriter> GridRevealPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            title_font: None,
        }
    }

    /// Font used for figure titles; `None` saves untitled figures.
    pub fn with_title_font(mut self, font: Option<FontVec>) -> Self {
        self.title_font = font;
        self
    }

    fn titled(&self, image: RgbImageData, title: &str) -> Result<RgbImageData> {
        match &self.title_font {
            Some(font) => with_title(&image, title, font),
            None => Ok(image),
        }
    }

    fn edit(&self, grid: &Grid, analysis: &ZeroPixelAnalysis) -> Result<(RgbImageData, usize)> {
        let (height, width) = (grid.height, grid.width);
        let mut image = RgbImageData::from_grid(grid);

        for region in &self.config.eye_regions {
            if region.is_degenerate(height, width) {
                warn!(?region, width, height, "Eye region is empty at this image size");
            }
        }
        let marked = image.mark_regions(
            &analysis.coords,
            &self.config.eye_regions,
            self.config.marker_color,
        );

        let mouth_top = (height as f64 * self.config.mouth_start).floor() as usize;
        image.flip_rows(mouth_top, height)?;

        image.draw_border(self.config.border_color)?;

        info!(marked, mouth_top, "Image edited");
        Ok((image, marked))
    }

    /// Grayscale first, then each configured map once, in configured order.
    fn render_order(&self) -> Vec<ColorMap> {
        let mut order = vec![ColorMap::Gray];
        for &map in &self.config.colormaps {
            if !order.contains(&map) {
                order.push(map);
            }
        }
        order
    }

    /// Runs every stage on in-memory grid text.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8]) -> Result<RevealArtifacts> {
        self.config.validate()?;
        let mut timings = PipelineTimings::new();

        let grid = {
            let _span = tracing::info_span!("load").entered();
            let timer = Timer::start("load");
            let grid = self.reader.read_grid(input_data)?;
            timings.record(timer.stop());
            grid
        };
        info!(width = grid.width, height = grid.height, "Grid loaded");

        let renders = {
            let _span = tracing::info_span!("render").entered();
            let timer = Timer::start("render");
            let renders = self
                .render_order()
                .into_iter()
                .map(|map| {
                    let view = render(&grid, map, self.config.render_scale);
                    Ok((map, self.titled(view, &map.title())?))
                })
                .collect::<Result<Vec<_>>>()?;
            timings.record(timer.stop());
            renders
        };

        let analysis = {
            let _span = tracing::info_span!("analyze").entered();
            let timer = Timer::start("analyze");
            let analysis = analyze(&grid, self.config.zero_tolerance)?;
            timings.record(timer.stop());
            analysis
        };

        let (modified, marked) = {
            let _span = tracing::info_span!("edit").entered();
            let timer = Timer::start("edit");
            let edited = self.edit(&grid, &analysis)?;
            timings.record(timer.stop());
            edited
        };

        let (denoised, comparison) = {
            let _span = tracing::info_span!("filter").entered();
            let timer = Timer::start("filter");
            let denoised = mean_filter(&modified, self.config.filter_window)?;
            let comparison = side_by_side(
                &self.titled(modified.clone(), "Before Denoising")?,
                &self.titled(denoised.clone(), "After Denoising")?,
                self.config.comparison_gap,
                self.config.comparison_background,
            )?;
            timings.record(timer.stop());
            (denoised, comparison)
        };

        Ok(RevealArtifacts {
            grid,
            renders,
            analysis,
            marked,
            modified,
            denoised,
            comparison,
            timings,
        })
    }

    /// Reads the configured input file, processes it and writes every output file.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<RevealSummary> {
        let input_path = &self.config.input_path;
        info!(
            input = %input_path.display(),
            output_dir = %self.config.output_dir.display(),
            "Revealing grid"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut artifacts = self.process(&input_data)?;

        let timer = Timer::start("write");
        let written = {
            let _span = tracing::info_span!("write_outputs").entered();
            self.write_outputs(&artifacts)?
        };
        artifacts.timings.record(timer.stop());
        artifacts.timings.log_summary();

        Ok(RevealSummary { artifacts, written })
    }

    fn write_outputs(&self, artifacts: &RevealArtifacts) -> Result<Vec<PathBuf>> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", dir.display(), e))
        })?;

        let files = &self.config.files;
        let mut written = Vec::new();

        for (map, image) in &artifacts.renders {
            let name = match map {
                ColorMap::Gray => files.grayscale.clone(),
                other => files.colormap(*other),
            };
            written.push(self.save_image(image, &name)?);
        }

        written.push(self.save_text(&files.coordinates, |out| {
            write_coordinates(&artifacts.analysis.coords, out)
        })?);

        written.push(self.save_image(&artifacts.modified, &files.modified)?);
        written.push(self.save_image(&artifacts.modified, &files.noisy)?);
        written.push(self.save_image(&artifacts.denoised, &files.denoised)?);
        written.push(self.save_image(&artifacts.comparison, &files.comparison)?);

        written.push(self.save_text(&files.answers, |out| {
            write_answers(&artifacts.analysis, &files.coordinates, out)
        })?);

        Ok(written)
    }

    fn create_output(path: &Path) -> Result<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|e| PipelineError::OutputWriteError(format!("{}: {}", path.display(), e)))
    }

    fn save_image(&self, image: &RgbImageData, file_name: &str) -> Result<PathBuf> {
        let path = self.config.output_path(file_name);
        let mut output = Self::create_output(&path)?;
        self.writer.write_rgb(image, &mut output)?;
        output.flush()?;
        info!(path = %path.display(), width = image.width, height = image.height, "Saved image");
        Ok(path)
    }

    fn save_text<F>(&self, file_name: &str, write: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let path = self.config.output_path(file_name);
        let mut output = Self::create_output(&path)?;
        write(&mut output)?;
        output.flush()?;
        info!(path = %path.display(), "Saved text");
        Ok(path)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
