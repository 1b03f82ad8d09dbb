pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod ui;
pub mod writer;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, FilterConfig, OutputConfig};
pub use error::{NounListError, Result, UserFriendlyError};

// Core functionality re-exports
pub use scanner::{DictionaryScanner, EntryFilter, ScanOutcome, ScanStatistics};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};
pub use writer::{ConfigSnapshot, ExtractionReport, ExtractionSummary, NounWriter, WriteSummary};

use std::path::Path;

/// Main library interface for NounList functionality
pub struct NounList {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl NounList {
    /// Create a new NounList instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create NounList instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Extract nouns from a source dictionary file.
    ///
    /// Scans the source, fails if nothing qualifies, writes the destination
    /// records, prints the count and the first accepted noun, and returns the
    /// full report.
    pub fn extract_nouns(&self, source: &Path) -> Result<ExtractionReport> {
        self.output_formatter
            .start_operation("Starting noun extraction");

        // Step 1: Scan the source dictionary
        let outcome = self.scan_dictionary(source)?;

        self.output_formatter.info(&format!(
            "Accepted {} nouns from {} lines",
            outcome.nouns.len(),
            outcome.lines_read
        ));

        // Step 2: Write destination records
        let write_summary = self.write_records(&outcome)?;

        // Step 3: The primary console contract, count then first noun
        self.output_formatter
            .print_result(outcome.nouns.len(), outcome.first_noun());

        // Step 4: Build the report, optionally persisted as a JSON sidecar
        let report = ExtractionReport::new(source, &outcome, &write_summary, &self.config);

        if self.config.output.generate_report {
            let report_path = report.save_json()?;
            self.output_formatter
                .info(&format!("Saved report: {}", report_path.display()));
        }

        // Display summary
        self.output_formatter
            .print_extraction_summary(&report.extraction_summary);

        Ok(report)
    }

    /// Scan the source dictionary with a progress spinner
    fn scan_dictionary(&self, source: &Path) -> Result<ScanOutcome> {
        self.output_formatter.start_operation("Scanning dictionary");

        let spinner = self
            .progress_manager
            .create_spinner(&format!("Scanning {}", source.display()));

        let scanner = DictionaryScanner::new(&self.config.filter);
        let result = scanner.scan_file(source);

        match &result {
            Ok(outcome) => {
                ui::progress::finish_progress_with_summary(
                    &spinner,
                    &format!("Scanned {} lines", outcome.lines_read),
                    spinner.elapsed(),
                );

                let stats = scanner.get_statistics(outcome);
                self.output_formatter.debug(&stats.display_summary());
            }
            Err(_) => spinner.abandon_with_message("Scan failed".to_string()),
        }

        result
    }

    /// Write the destination records with progress tracking
    fn write_records(&self, outcome: &ScanOutcome) -> Result<WriteSummary> {
        self.output_formatter.start_operation("Writing noun records");

        let record_progress = self
            .progress_manager
            .create_record_progress(outcome.nouns.len() as u64);
        let progress_callback = {
            let pb = record_progress.clone();
            move |written: usize| {
                pb.set_position(written as u64);
            }
        };

        let writer = NounWriter::new(&self.config.output.destination);
        let write_summary = writer.write_nouns(&outcome.nouns, Some(&progress_callback))?;

        ui::progress::finish_progress_with_summary(
            &record_progress,
            &format!("Wrote {} records", write_summary.records_written),
            write_summary.duration,
        );

        self.output_formatter.success(&format!(
            "Wrote {} records to {}",
            write_summary.records_written,
            writer.get_destination().display()
        ));

        Ok(write_summary)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(NounListError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Get progress manager reference
    pub fn progress_manager(&self) -> &ProgressManager {
        &self.progress_manager
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &NounListError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract nouns with minimal setup
pub fn extract_nouns_simple(
    source: &Path,
    destination: Option<&Path>,
    verbose: bool,
) -> Result<ExtractionReport> {
    let mut config = Config::default();

    if let Some(destination) = destination {
        config.output.destination = destination.to_path_buf();
    }

    let nounlist = NounList::new(
        config,
        OutputMode::Human,
        if verbose { 1 } else { 0 },
        false,
    );

    nounlist.extract_nouns(source)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_DICTIONARY: &str = "Haus/N,Substantiv,Neutrum\n\
                                     Katze/N,Substantiv,Femininum\n\
                                     /Nfehler\n\
                                     Hunde/N,Substantiv,Plural\n\
                                     ab/VB\n";

    fn create_workspace() -> (TempDir, std::path::PathBuf, Config) {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("german.dic");
        fs::write(&source, SAMPLE_DICTIONARY).unwrap();

        let mut config = Config::default();
        config.output.destination = temp_dir.path().join("nouns.dic");

        (temp_dir, source, config)
    }

    #[test]
    fn test_nounlist_creation() {
        let config = Config::default();
        let nounlist = NounList::new(config, OutputMode::Human, 1, false);

        assert_eq!(nounlist.config().filter.marker, "/N");
        assert_eq!(nounlist.config().filter.noun_length, 5);
    }

    #[test]
    fn test_extract_nouns_end_to_end() {
        let (_temp_dir, source, config) = create_workspace();
        let destination = config.output.destination.clone();

        let nounlist = NounList::new(config, OutputMode::Plain, 0, true);
        let report = nounlist.extract_nouns(&source).unwrap();

        assert_eq!(report.extraction_summary.nouns_accepted, 3);
        assert_eq!(report.first_noun, "HAUS");

        let contents = fs::read_to_string(&destination).unwrap();
        assert_eq!(contents, "\"HAUS\",\n\"KATZE\",\n\"HUNDE\",\n");
    }

    #[test]
    fn test_extract_nouns_report_sidecar() {
        let (temp_dir, source, mut config) = create_workspace();
        config.output.generate_report = true;

        let nounlist = NounList::new(config, OutputMode::Plain, 0, true);
        nounlist.extract_nouns(&source).unwrap();

        assert!(temp_dir.path().join("nouns.dic.report.json").exists());
    }

    #[test]
    fn test_extract_nouns_empty_result_is_error() {
        let (temp_dir, _source, config) = create_workspace();
        let empty_source = temp_dir.path().join("verbs.dic");
        fs::write(&empty_source, "laufen/V\nrennen/V\n").unwrap();
        let destination = config.output.destination.clone();

        let nounlist = NounList::new(config, OutputMode::Plain, 0, true);
        let err = nounlist.extract_nouns(&empty_source).unwrap_err();

        assert!(matches!(err, NounListError::NoNounsFound { .. }));
        // Nothing is written when the scan comes up empty
        assert!(!destination.exists());
    }

    #[test]
    fn test_extract_nouns_simple() {
        let (temp_dir, source, _config) = create_workspace();
        let destination = temp_dir.path().join("simple.dic");

        let report = extract_nouns_simple(&source, Some(&destination), false).unwrap();

        assert_eq!(report.extraction_summary.records_written, 3);
        assert!(destination.exists());
    }

    #[test]
    fn test_version_info() {
        let version = version_info();
        assert!(!version.is_empty());
    }
}
