use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DATA_DIR: &str = "fstar_scout";
const HISTORY_FILE: &str = "forecast_history.json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One forecast made for a player, optionally joined with what actually
/// happened (1/0 flags filled in later by the analyst).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "YSP_Score")]
    pub ysp_score: f64,
    #[serde(default, rename = "Fit_Score")]
    pub fit_score: Option<f64>,
    #[serde(rename = "Prediction_Date")]
    pub prediction_date: String,
    #[serde(default, rename = "Actual_Progress")]
    pub actual_progress: Option<u8>,
    #[serde(default, rename = "Actual_Transfer")]
    pub actual_transfer: Option<u8>,
    #[serde(default, rename = "Upload_Timestamp")]
    pub upload_timestamp: Option<String>,
}

/// Score bands used to group forecasts: (0,60], (60,75], (75,85], (85,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YspCategory {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl YspCategory {
    pub const ALL: [YspCategory; 4] = [
        YspCategory::Low,
        YspCategory::Medium,
        YspCategory::High,
        YspCategory::VeryHigh,
    ];

    pub fn from_score(score: f64) -> Option<YspCategory> {
        if !(0.0..=100.0).contains(&score) {
            return None;
        }
        Some(if score <= 60.0 {
            YspCategory::Low
        } else if score <= 75.0 {
            YspCategory::Medium
        } else if score <= 85.0 {
            YspCategory::High
        } else {
            YspCategory::VeryHigh
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            YspCategory::Low => "Low",
            YspCategory::Medium => "Medium",
            YspCategory::High => "High",
            YspCategory::VeryHigh => "Very High",
        }
    }
}

/// Outcome rates for one score band, as percentages over the records that
/// carry the corresponding actual flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: YspCategory,
    pub samples: usize,
    pub progress_rate: Option<f64>,
    pub transfer_rate: Option<f64>,
}

pub fn category_breakdown(records: &[ForecastRecord]) -> Vec<CategoryBreakdown> {
    YspCategory::ALL
        .iter()
        .map(|&category| {
            let in_band: Vec<&ForecastRecord> = records
                .iter()
                .filter(|r| YspCategory::from_score(r.ysp_score) == Some(category))
                .collect();
            CategoryBreakdown {
                category,
                samples: in_band.len(),
                progress_rate: flag_rate(in_band.iter().map(|r| r.actual_progress)),
                transfer_rate: flag_rate(in_band.iter().map(|r| r.actual_transfer)),
            }
        })
        .collect()
}

/// Share of records where "potential score clears `threshold`" agreed
/// with the recorded progress flag. `None` when no record has the flag.
pub fn progress_accuracy(records: &[ForecastRecord], threshold: f64) -> Option<f64> {
    prediction_accuracy(
        records
            .iter()
            .map(|r| (r.ysp_score >= threshold, r.actual_progress)),
    )
}

/// Same agreement rate for the fit score against the transfer flag.
/// Records with no fit score are skipped.
pub fn transfer_accuracy(records: &[ForecastRecord], threshold: f64) -> Option<f64> {
    prediction_accuracy(records.iter().filter_map(|r| {
        r.fit_score
            .map(|fit| (fit >= threshold, r.actual_transfer))
    }))
}

fn prediction_accuracy(pairs: impl Iterator<Item = (bool, Option<u8>)>) -> Option<f64> {
    let mut hits = 0usize;
    let mut total = 0usize;
    for (predicted, actual) in pairs {
        let Some(actual) = actual else { continue };
        total += 1;
        if predicted == (actual != 0) {
            hits += 1;
        }
    }
    if total == 0 {
        None
    } else {
        Some(hits as f64 / total as f64 * 100.0)
    }
}

fn flag_rate(flags: impl Iterator<Item = Option<u8>>) -> Option<f64> {
    let mut set = 0usize;
    let mut total = 0usize;
    for flag in flags.flatten() {
        total += 1;
        if flag != 0 {
            set += 1;
        }
    }
    if total == 0 {
        None
    } else {
        Some(set as f64 / total as f64 * 100.0)
    }
}

/// Append new forecasts to the on-disk history, stamping each row with
/// the upload time. Best-effort load of whatever history already exists.
pub fn append_history(rows: &[ForecastRecord]) -> Result<()> {
    let Some(path) = history_path() else {
        return Ok(());
    };
    append_history_at(&path, rows)
}

pub fn append_history_at(path: &Path, rows: &[ForecastRecord]) -> Result<()> {
    let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let mut history = load_history_from(path);
    history.extend(rows.iter().cloned().map(|mut row| {
        row.upload_timestamp = Some(stamp.clone());
        row
    }));
    save_history_to(path, &history)
}

pub fn load_history() -> Vec<ForecastRecord> {
    match history_path() {
        Some(path) => load_history_from(&path),
        None => Vec::new(),
    }
}

/// A missing or unparseable file reads as an empty history; the next
/// save starts over rather than erroring out.
pub fn load_history_from(path: &Path) -> Vec<ForecastRecord> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<ForecastRecord>>(&raw).unwrap_or_default()
}

pub fn save_history(records: &[ForecastRecord]) -> Result<()> {
    let Some(path) = history_path() else {
        return Ok(());
    };
    save_history_to(&path, records)
}

pub fn save_history_to(path: &Path, records: &[ForecastRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(records).context("serialize forecast history")?;
    fs::write(&tmp, json).context("write forecast history")?;
    fs::rename(&tmp, &path).context("swap forecast history")?;
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CACHE_HOME")
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(DATA_DIR).join(HISTORY_FILE));
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".cache")
            .join(DATA_DIR)
            .join(HISTORY_FILE),
    )
}
