use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::sensor_reading::SensorReading;
use crate::utils::errors::{ResponseError, Result};
use crate::utils::logging::{self, OperationCategory};

const JENA_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const PROGRESS_TICK_ROWS: usize = 10_000;

// Column names as published in the Jena Climate dataset
#[derive(Debug, Deserialize)]
struct ClimateRow {
    #[serde(rename = "Date Time", default)]
    date_time: Option<String>,
    #[serde(rename = "p (mbar)")]
    pressure: f64,
    #[serde(rename = "T (degC)")]
    temperature: f64,
    #[serde(rename = "rh (%)")]
    humidity: f64,
    #[serde(rename = "wv (m/s)")]
    wind_speed: f64,
    #[serde(rename = "Tdew (degC)")]
    dew_point: f64,
    #[serde(rename = "wd (deg)", default)]
    wind_direction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimateRecord {
    pub recorded_at: Option<NaiveDateTime>,
    pub reading: SensorReading,
}

#[derive(Debug, Clone)]
pub struct ClimateDataset {
    path: PathBuf,
    records: Vec<ClimateRecord>,
    total_rows: usize,
}

impl ClimateDataset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sampled records, oldest first.
    pub fn records(&self) -> &[ClimateRecord] {
        &self.records
    }

    /// Rows in the file before sampling.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent sampled record, validated for classification.
    pub fn latest(&self) -> Result<&ClimateRecord> {
        let record = self
            .records
            .last()
            .ok_or_else(|| ResponseError::EmptyDataset(self.path.clone()))?;
        record.reading.validate()?;
        Ok(record)
    }
}

fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    match NaiveDateTime::parse_from_str(raw, JENA_TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            warn!(value = raw, error = %e, "unparseable record timestamp");
            None
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading climate records...");
    spinner
}

/// Loads a Jena-format climate CSV, keeping every `stride`-th row starting
/// with the first. The raw data is sampled every ten minutes, so a stride of
/// 6 yields hourly records.
pub fn load_dataset<P: AsRef<Path>>(csv_path: P, stride: usize) -> Result<ClimateDataset> {
    let _timing = logging::start_timing("load_dataset", OperationCategory::DataLoad);
    let path = csv_path.as_ref();

    if !path.exists() {
        return Err(ResponseError::MissingDataset(absolute(path)));
    }
    if stride == 0 {
        return Err(ResponseError::InvalidConfig("sample stride must be at least 1".to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let spinner = loading_spinner();
    let mut records = Vec::new();
    let mut total_rows = 0;

    let headers = reader.headers()?.clone();
    let mut raw = StringRecord::new();
    let mut index = 0;

    // Only sampled rows are parsed; bad cells elsewhere never reach classification
    while reader.read_record(&mut raw)? {
        let row_index = index;
        index += 1;
        total_rows += 1;
        if row_index % PROGRESS_TICK_ROWS == 0 {
            spinner.set_message(format!("Loading climate records... {}", row_index));
        }
        if row_index % stride != 0 {
            continue;
        }

        let row: ClimateRow = raw.deserialize(Some(&headers))?;
        records.push(ClimateRecord {
            recorded_at: parse_timestamp(row.date_time.as_deref()),
            reading: SensorReading::new(
                row.pressure,
                row.temperature,
                row.humidity,
                row.wind_speed,
                row.dew_point,
                row.wind_direction,
            ),
        });
    }
    spinner.finish_and_clear();

    if records.is_empty() {
        return Err(ResponseError::EmptyDataset(absolute(path)));
    }

    info!(
        path = %path.display(),
        total_rows,
        sampled = records.len(),
        stride,
        "loaded climate records"
    );

    Ok(ClimateDataset {
        path: path.to_path_buf(),
        records,
        total_rows,
    })
}
