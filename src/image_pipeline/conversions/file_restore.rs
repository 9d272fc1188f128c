use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    codec::{RasterReader, RasterWriter, TiffCompression, TiffRasterReader, TiffRasterWriter},
    common::error::{RestorationError, Result},
    raster::Raster,
    restoration::{RestorationConfig, RestorationPipeline, StageTimings, Timer},
};

/// What a file restoration produced: the decoded input, the restored raster
/// and the time spent in each step.
#[derive(Debug, Clone)]
pub struct RestoreReport {
    pub original: Raster,
    pub restored: Raster,
    pub timings: StageTimings,
}

pub struct FileRestorePipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    pipeline: RestorationPipeline,
}

impl FileRestorePipeline<TiffRasterReader, TiffRasterWriter> {
    pub fn new(config: RestorationConfig, compression: TiffCompression) -> Result<Self> {
        Self::with_custom(TiffRasterReader, TiffRasterWriter::new(compression), config)
    }
}

impl<R: RasterReader, W: RasterWriter> FileRestorePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RestorationConfig) -> Result<Self> {
        Ok(Self {
            reader,
            writer,
            pipeline: RestorationPipeline::new(config)?,
        })
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn restore(&self, input_data: &[u8], output: &mut dyn Write) -> Result<RestoreReport> {
        let mut timings = StageTimings::new();

        let timer = Timer::start("decode");
        let original = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };
        timer.record(&mut timings);

        let (restored, stage_timings) = self.pipeline.run_with_timings(&original)?;
        timings.extend(&stage_timings);

        let timer = Timer::start("encode");
        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_raster(&restored, output)?;
        }
        timer.record(&mut timings);

        info!(
            width = restored.width(),
            height = restored.height(),
            "File restoration complete"
        );
        Ok(RestoreReport {
            original,
            restored,
            timings,
        })
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn restore_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<RestoreReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Restoring file"
        );

        let mut timings = StageTimings::new();

        let timer = Timer::start("read_input_file");
        let input_data = std::fs::read(input_path).map_err(|e| {
            RestorationError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        timer.record(&mut timings);

        // Encode into memory so a failed restore leaves nothing on disk.
        let mut encoded = Vec::new();
        let mut report = self.restore(&input_data, &mut encoded)?;
        timings.extend(&report.timings);

        let timer = Timer::start("write_output_file");
        std::fs::write(output_path, &encoded).map_err(|e| {
            RestorationError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        timer.record(&mut timings);

        report.timings = timings;

        Ok(report)
    }

    pub fn config(&self) -> &RestorationConfig {
        self.pipeline.config()
    }

    pub fn set_config(&mut self, config: RestorationConfig) -> Result<()> {
        self.pipeline.set_config(config)
    }
}
