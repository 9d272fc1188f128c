use grayscale_restore_rs::image_pipeline::{
    FileRestorePipeline, Raster, RasterReader, RasterWriter, RestorationConfig,
    RestorationError, RestorationPipeline, TiffCompression, TiffRasterReader, TiffRasterWriter,
};

fn speckled(width: usize, height: usize) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        if (x * 31 + y * 17) % 23 == 0 { 250 } else { (40 + x + y) as u8 }
    })
    .unwrap()
}

#[test]
fn restores_tiff_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.tiff");
    let output_path = dir.path().join("output.tiff");

    let image = speckled(48, 40);
    let mut input_file = std::fs::File::create(&input_path).unwrap();
    TiffRasterWriter::new(TiffCompression::Lzw)
        .write_raster(&image, &mut input_file)
        .unwrap();
    drop(input_file);

    let config = RestorationConfig::new(3, 3, 2, 5, 0.5).unwrap();
    let pipeline = FileRestorePipeline::new(config.clone(), TiffCompression::None).unwrap();
    let report = pipeline.restore_file(&input_path, &output_path).unwrap();

    assert_eq!(report.original, image);

    let written = std::fs::read(&output_path).unwrap();
    let decoded = TiffRasterReader.read_raster(&written).unwrap();
    assert_eq!(decoded, report.restored);

    let expected = RestorationPipeline::new(config).unwrap().run(&image).unwrap();
    assert_eq!(decoded, expected);

    assert!(report.timings.get_step("read_input_file").is_some());
    assert!(report.timings.get_step("encode").is_some());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.tiff");
    let mut input_file = std::fs::File::create(&input_path).unwrap();
    TiffRasterWriter::default()
        .write_raster(&speckled(16, 16), &mut input_file)
        .unwrap();
    drop(input_file);

    let pipeline =
        FileRestorePipeline::new(RestorationConfig::reference(), TiffCompression::None).unwrap();
    let result = pipeline.restore_file(&input_path, dir.path().join("missing").join("out.tiff"));

    assert!(matches!(result, Err(RestorationError::OutputWriteError(_))));
}

#[test]
fn failed_restore_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("small.tiff");
    let output_path = dir.path().join("output.tiff");
    let mut input_file = std::fs::File::create(&input_path).unwrap();
    TiffRasterWriter::default()
        .write_raster(&speckled(4, 4), &mut input_file)
        .unwrap();
    drop(input_file);

    let pipeline =
        FileRestorePipeline::new(RestorationConfig::reference(), TiffCompression::None).unwrap();
    let result = pipeline.restore_file(&input_path, &output_path);

    assert!(matches!(result, Err(RestorationError::DimensionMismatch(_))));
    assert!(!output_path.exists());
}

#[test]
fn undecodable_input_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("garbage.tiff");
    let output_path = dir.path().join("output.tiff");
    std::fs::write(&input_path, b"not a tiff at all").unwrap();

    let pipeline =
        FileRestorePipeline::new(RestorationConfig::reference(), TiffCompression::None).unwrap();
    let result = pipeline.restore_file(&input_path, &output_path);

    assert!(matches!(result, Err(RestorationError::DecodeError(_))));
    assert!(!output_path.exists());
}
