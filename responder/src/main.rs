use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use disaster_response::analysis::reporting;
use disaster_response::cli::cli::Args;
use disaster_response::config::constants::DATASET_DOWNLOAD_URL;
use disaster_response::config::response_config::ResponseConfig;
use disaster_response::core::assessment::Responder;
use disaster_response::data::climate_loader;
use disaster_response::utils::errors::ResponseError;
use disaster_response::utils::logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.enable_timing(), args.debug_logging())?;

    let mut config = match args.config() {
        Some(path) => ResponseConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => ResponseConfig::default(),
    };
    if let Some(stride) = args.sample_stride() {
        config.sample_stride = stride;
    }

    let dataset = match climate_loader::load_dataset(args.dataset(), config.sample_stride) {
        Ok(dataset) => dataset,
        Err(ResponseError::MissingDataset(path)) => {
            eprintln!("Dataset not found: {}", path.display());
            eprintln!("Download the Jena Climate Dataset from:");
            eprintln!("  {}", DATASET_DOWNLOAD_URL);
            eprintln!("and extract it to:");
            eprintln!("  {}", path.display());
            std::process::exit(1);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("failed to load climate dataset")),
    };
    info!(
        path = %dataset.path().display(),
        records = dataset.len(),
        "analyzing latest climate record"
    );

    let latest = dataset.latest().context("latest climate record is unusable")?;
    let responder = Responder::from_config(config, args.allow_fallback())?;

    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = responder.assess(&latest.reading, latest.recorded_at, &mut rng)?;

    if args.json() {
        println!("{}", reporting::render_json(&report)?);
    } else {
        reporting::print_report(&report);
    }

    logging::print_timing_report();
    Ok(())
}
