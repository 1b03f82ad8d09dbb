use crate::config::{CliOverrides, Config, DEFAULT_SOURCE};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nounlist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract noun entries from dictionary word lists")]
#[command(
    long_about = "NounList scans a tagged dictionary word list, collects every entry marked \
                       as a noun whose uppercased spelling has the requested length, and writes \
                       them as quoted array-literal records for embedding in generated sources."
)]
#[command(after_help = "EXAMPLES:\n  \
    nounlist\n  \
    nounlist german.dic --output nouns.dic\n  \
    nounlist hunspell-de.dic --length 6 --marker /N --verbose\n  \
    nounlist german.dic --exclude '^#','^%' --report\n\n\
    For more information, visit: https://github.com/user/nounlist")]
pub struct Cli {
    /// Source dictionary file, one tagged entry per line
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Destination file for the generated noun records (defaults to nouns.dic)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marker substring that tags a noun entry
    #[arg(short, long, value_parser = validate_marker)]
    pub marker: Option<String>,

    /// Required character length of an accepted noun
    #[arg(short, long, help = "Noun length after uppercasing, in characters")]
    pub length: Option<usize>,

    /// Regex patterns for lines to skip entirely
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Write a JSON extraction report next to the destination file
    #[arg(long, help = "Write <destination>.report.json after extraction")]
    pub report: bool,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Show what would be extracted without actually doing it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_marker(self.marker.clone())
            .with_noun_length(self.length)
            .with_exclude_patterns(self.exclude.clone())
            .with_destination(self.output.clone())
            .with_generate_report(if self.report { Some(true) } else { None })
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

pub fn validate_marker(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        return Err("Marker must not be empty".to_string());
    }

    if s.chars().any(|c| c == '\n' || c == '\r') {
        return Err("Marker must not contain line breaks".to_string());
    }

    if s.len() > 16 {
        return Err("Marker must be 16 bytes or less".to_string());
    }

    Ok(s.to_string())
}
