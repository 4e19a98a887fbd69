use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use maskscan_core::classification::infrastructure::classifier_loader;
use maskscan_core::codec::image_codec;
use maskscan_core::detection::domain::face_locator::FaceLocator;
use maskscan_core::detection::infrastructure::seeta_face_locator::SeetaFaceLocator;
use maskscan_core::pipeline::mask_scan_use_case::MaskScanUseCase;
use maskscan_core::pipeline::report::{HealthReport, ScanReport};
use maskscan_core::shared::constants::{
    ANNOTATED_JPEG_QUALITY, DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_STEP, FACE_MODEL_NAME,
};
use maskscan_core::shared::frame::Frame;
use maskscan_core::shared::model_locator;

/// Face-mask detection for still images.
#[derive(Parser)]
#[command(name = "maskscan")]
struct Cli {
    /// Input image file (base64 text when --base64 is set).
    input: Option<PathBuf>,

    /// Annotated output image, written as JPEG.
    output: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Treat the input file as base64 text (a data-URL prefix is allowed).
    #[arg(long)]
    base64: bool,

    /// Mask classifier artifact, checked before the default locations.
    #[arg(long)]
    mask_model: Option<PathBuf>,

    /// Face detector model file, checked before the default locations.
    #[arg(long)]
    face_model: Option<PathBuf>,

    /// Detector pyramid scale step (must be greater than 1.0).
    #[arg(long, default_value_t = DEFAULT_SCALE_STEP)]
    scale_step: f32,

    /// Minimum neighboring-window support per face candidate.
    #[arg(long, default_value_t = DEFAULT_MIN_NEIGHBORS)]
    min_neighbors: u32,

    /// Embed the annotated JPEG as a data URL in the report.
    #[arg(long)]
    embed_image: bool,

    /// Print classifier readiness as JSON and exit.
    #[arg(long)]
    health: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let classifier = classifier_loader::load_classifier(cli.mask_model.as_deref());

    if cli.health {
        let health = HealthReport::new(classifier.is_ready());
        println!("{}", serde_json::to_string(&health)?);
        return Ok(());
    }

    let locator = build_locator(&cli)?;
    let mut scanner = MaskScanUseCase::new(locator, classifier);
    if !scanner.classifier_ready() {
        log::warn!("no mask classifier loaded; every verdict uses the fallback policy");
    }

    let input = cli.input.as_ref().unwrap();
    let mut frame = read_frame(input, cli.base64)?;

    let detections = scanner.execute(&mut frame)?;
    log::info!("{} face(s) found", detections.len());

    if let Some(output) = &cli.output {
        write_annotated(output, &frame)?;
        log::info!("Annotated image written to {}", output.display());
    }

    let image = if cli.embed_image {
        let jpeg = image_codec::encode_jpeg(&frame, ANNOTATED_JPEG_QUALITY)?;
        Some(image_codec::to_data_url(&jpeg))
    } else {
        None
    };

    let report = ScanReport::new(detections, image);
    let text = serde_json::to_string_pretty(&report)?;
    match &cli.report {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }

    Ok(())
}

fn read_frame(input: &Path, base64: bool) -> Result<Frame, Box<dyn std::error::Error>> {
    if base64 {
        let text = std::fs::read_to_string(input)?;
        Ok(image_codec::decode_base64_image(&text)?)
    } else {
        let bytes = std::fs::read(input)?;
        Ok(image_codec::decode_image(&bytes)?)
    }
}

fn write_annotated(path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let jpeg = image_codec::encode_jpeg(frame, ANNOTATED_JPEG_QUALITY)?;
    std::fs::write(path, jpeg)?;
    Ok(())
}

fn build_locator(cli: &Cli) -> Result<Box<dyn FaceLocator>, Box<dyn std::error::Error>> {
    let mut candidates = Vec::new();
    if let Some(path) = &cli.face_model {
        candidates.push(path.clone());
    }
    candidates.extend(model_locator::default_candidates(FACE_MODEL_NAME));

    let model_path = model_locator::locate(&candidates)
        .ok_or("face detector model not found; pass --face-model")?;
    log::info!("face detector model: {}", model_path.display());

    Ok(Box::new(SeetaFaceLocator::with_tuning(
        &model_path,
        cli.scale_step,
        cli.min_neighbors,
    )?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.input.is_none() && !cli.health {
        return Err("Input image is required unless --health is used".into());
    }
    if let Some(input) = &cli.input {
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
    }
    if cli.scale_step <= 1.0 {
        return Err(format!(
            "Scale step must be greater than 1.0, got {}",
            cli.scale_step
        )
        .into());
    }
    if cli.min_neighbors == 0 {
        return Err("Minimum neighbor threshold must be at least 1".into());
    }
    Ok(())
}
