use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::rgb::RgbImageData;

/// Encodes RGB8 buffers as PNG.
pub struct PngImageWriter;

impl ImageWriter for PngImageWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let width = u32::try_from(image.width)
            .map_err(|_| PipelineError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| PipelineError::InvalidDimensions(image.width, image.height))?;

        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(&image.data, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
