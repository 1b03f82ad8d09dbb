use crate::config::Config;
use crate::error::{NounListError, Result};
use crate::scanner::ScanOutcome;
use crate::writer::noun_writer::WriteSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub extraction_summary: ExtractionSummary,
    pub first_noun: String,
    pub extraction_time: DateTime<Utc>,
    pub config_used: ConfigSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub lines_read: usize,
    pub nouns_accepted: usize,
    pub records_written: usize,
    pub bytes_written: u64,
    pub write_duration: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub marker: String,
    pub noun_length: usize,
    pub exclude_patterns: Vec<String>,
    pub destination: PathBuf,
}

impl From<&Config> for ConfigSnapshot {
    fn from(config: &Config) -> Self {
        Self {
            marker: config.filter.marker.clone(),
            noun_length: config.filter.noun_length,
            exclude_patterns: config.filter.exclude_patterns.clone(),
            destination: config.output.destination.clone(),
        }
    }
}

impl ExtractionReport {
    pub fn new(
        source: &Path,
        outcome: &ScanOutcome,
        write_summary: &WriteSummary,
        config: &Config,
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: config.output.destination.clone(),
            extraction_summary: ExtractionSummary {
                lines_read: outcome.lines_read,
                nouns_accepted: outcome.nouns.len(),
                records_written: write_summary.records_written,
                bytes_written: write_summary.bytes_written,
                write_duration: write_summary.duration,
            },
            first_noun: outcome.first_noun().to_string(),
            extraction_time: Utc::now(),
            config_used: ConfigSnapshot::from(config),
        }
    }

    /// Sidecar path for the persisted report, `<destination>.report.json`.
    pub fn report_path(destination: &Path) -> PathBuf {
        let mut name = destination
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "nouns".to_string());
        name.push_str(".report.json");

        destination.with_file_name(name)
    }

    pub fn save_json(&self) -> Result<PathBuf> {
        let report_path = Self::report_path(&self.destination);
        let json_content =
            serde_json::to_string_pretty(self).map_err(|e| NounListError::Config {
                message: format!("Failed to serialize report to JSON: {}", e),
            })?;

        fs::write(&report_path, json_content).map_err(NounListError::Io)?;

        Ok(report_path)
    }
}
