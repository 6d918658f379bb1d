use anyhow::Context;
use grid_reveal_rs::image_pipeline::{GridRevealPipeline, PipelineConfig};
use grid_reveal_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting grid_reveal...");

    // Optional positional overrides: [input file] [output directory]
    let mut args = std::env::args().skip(1);
    let mut builder = PipelineConfig::builder();
    if let Some(input) = args.next() {
        builder = builder.input_path(input);
    }
    if let Some(output_dir) = args.next() {
        builder = builder.output_dir(output_dir);
    }
    let config = builder.build();

    let pipeline = GridRevealPipeline::new(config).context("invalid pipeline configuration")?;

    info!("Input: {}", pipeline.config().input_path.display());
    info!("Output directory: {}", pipeline.config().output_dir.display());
    info!(
        "Color maps: {}",
        pipeline
            .config()
            .colormaps
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    match pipeline.run() {
        Ok(summary) => {
            info!(
                "Done: {} black pixels, {} files written",
                summary.artifacts.analysis.count(),
                summary.written.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(anyhow::Error::new(e).context("grid reveal failed"))
        }
    }
}
