use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grayscale_restore_rs::image_pipeline::{
    preview, FileRestorePipeline, RasterWriter, RestorationConfig, TiffCompression,
    TiffRasterWriter,
};
use grayscale_restore_rs::logger::{self, error, info};

/// Restore a degraded grayscale TIFF: noise reduction, median denoising, then sharpening.
#[derive(Parser, Debug)]
#[command(name = "grayscale-restore", version)]
struct Args {
    /// Input 8 or 16-bit grayscale TIFF
    input: PathBuf,

    /// Output 8-bit grayscale TIFF
    output: PathBuf,

    /// Mean (box) kernel size, positive and odd
    #[arg(long, default_value_t = 1)]
    mean_kernel: usize,

    /// Median kernel size, positive and odd
    #[arg(long, default_value_t = 1)]
    median_kernel: usize,

    /// Number of recursive mean passes
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Neighborhood median window, positive and odd
    #[arg(long, default_value_t = 5)]
    denoise_window: usize,

    /// Sharpening strength
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    strength: f32,

    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Also write an original-vs-restored preview TIFF here
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Longest side of each half of the preview, in pixels
    #[arg(long, default_value_t = 512)]
    preview_size: usize,

    /// Log per-step timings
    #[arg(long)]
    timings: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = RestorationConfig::builder()
        .mean_kernel(args.mean_kernel)
        .median_kernel(args.median_kernel)
        .recursive_iterations(args.iterations)
        .denoise_window(args.denoise_window)
        .sharpening_strength(args.strength)
        .build()?;

    let compression = TiffCompression::from(args.compression);
    let pipeline = FileRestorePipeline::new(config, compression)?;

    info!("Restoration pipeline initialized");
    info!("Configuration: {:?}", pipeline.config());
    info!("Compression: {:?}", compression);

    let report = match pipeline.restore_file(&args.input, &args.output) {
        Ok(report) => report,
        Err(e) => {
            error!("Restoration failed: {}", e);
            return Err(e.into());
        }
    };
    info!("Wrote {}", args.output.display());

    if args.timings {
        report.timings.log_summary();
    }

    if let Some(preview_path) = &args.preview {
        let original = preview::resize_to_fit(&report.original, args.preview_size)?;
        let restored = preview::resize_to_fit(&report.restored, args.preview_size)?;
        let view = preview::side_by_side(&original, &restored, 16)?;

        let mut file = std::fs::File::create(preview_path)?;
        TiffRasterWriter::new(compression).write_raster(&view, &mut file)?;
        info!("Wrote preview {}", preview_path.display());
    }

    Ok(())
}
