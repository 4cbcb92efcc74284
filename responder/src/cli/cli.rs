use clap::Parser;

use crate::config::constants::DEFAULT_DATASET_PATH;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classifies the latest climate record and plans an evacuation route", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
    dataset: String,

    #[arg(short, long, help = "JSON file overriding safe zones and scale constants")]
    config: Option<String>,

    #[arg(long, help = "Random seed for a reproducible current position")]
    seed: Option<u64>,

    #[arg(long, help = "Keep every Nth dataset row (overrides the config value)")]
    sample_stride: Option<usize>,

    #[arg(long, default_value_t = false, help = "Print the report as JSON")]
    json: bool,

    #[arg(long, default_value_t = false, help = "Substitute a placeholder route when no safe zones are configured")]
    allow_fallback: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn sample_stride(&self) -> Option<usize> {
        self.sample_stride
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn allow_fallback(&self) -> bool {
        self.allow_fallback
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["disaster-response"]);
        assert_eq!(args.dataset(), DEFAULT_DATASET_PATH);
        assert!(args.config().is_none());
        assert!(args.seed().is_none());
        assert!(!args.json());
        assert!(!args.allow_fallback());
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "disaster-response",
            "--dataset",
            "climate.csv",
            "--seed",
            "42",
            "--sample-stride",
            "1",
            "--json",
            "--allow-fallback",
        ]);
        assert_eq!(args.dataset(), "climate.csv");
        assert_eq!(args.seed(), Some(42));
        assert_eq!(args.sample_stride(), Some(1));
        assert!(args.json());
        assert!(args.allow_fallback());
    }
}
