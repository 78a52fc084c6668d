use std::{env, fs, path::PathBuf};

use formset::labels::{label_path_for, read_label_file, write_label_file};
use formset::pipeline::augment_page;
use formset::AugmentConfig;
use image::ImageReader;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;

#[cfg(feature = "tracing")]
use formset::core::init_tracing;

#[derive(Debug, Deserialize)]
struct ExampleConfig {
    image_path: String,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    augment: AugmentConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    let _ = formset::core::init_with_level(log::LevelFilter::Info);

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmpdata/augment_config.json"));

    let cfg: ExampleConfig = {
        let raw = fs::read_to_string(&config_path)?;
        serde_json::from_str(&raw)?
    };

    let image_path = PathBuf::from(&cfg.image_path);
    let img = ImageReader::open(&image_path)?.decode()?.to_rgb8();
    let boxes = read_label_file(&label_path_for(&image_path))?;
    log::info!(
        "loaded {} ({}x{}) with {} boxes",
        image_path.display(),
        img.width(),
        img.height(),
        boxes.len()
    );

    let output_dir = PathBuf::from(cfg.output_dir.as_deref().unwrap_or("augmented"));
    fs::create_dir_all(&output_dir)?;

    let mut rng = SmallRng::seed_from_u64(cfg.seed.unwrap_or(0));
    let samples = augment_page(&img, &boxes, &cfg.augment, &mut rng)?;

    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    for (i, sample) in samples.iter().enumerate() {
        let out_img = output_dir.join(format!("{stem}_aug{i:02}.png"));
        sample.image.save(&out_img)?;
        write_label_file(&label_path_for(&out_img), &sample.boxes)?;
        log::info!("{}: {} boxes", out_img.display(), sample.boxes.len());
    }

    println!("wrote {} augmented samples to {}", samples.len(), output_dir.display());
    Ok(())
}
