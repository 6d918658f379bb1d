use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgb::RgbImageData;

pub trait ImageWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write) -> Result<()>;
}
