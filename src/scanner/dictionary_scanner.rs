use crate::config::FilterConfig;
use crate::error::{NounListError, Result};
use crate::scanner::entry_filter::EntryFilter;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Result of one pass over the source dictionary. Nouns keep the order in
/// which they were first encountered; duplicates are preserved.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub nouns: Vec<String>,
    pub lines_read: usize,
}

impl ScanOutcome {
    /// The first accepted noun. Guaranteed present: a scan that accepts
    /// nothing fails with NoNounsFound instead of returning an outcome.
    pub fn first_noun(&self) -> &str {
        &self.nouns[0]
    }
}

pub struct DictionaryScanner {
    filter: EntryFilter,
}

impl DictionaryScanner {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            filter: EntryFilter::new(config),
        }
    }

    /// Reads the source dictionary line by line and collects every entry the
    /// filter accepts. The file handle is scoped to this call.
    pub fn scan_file<P: AsRef<Path>>(&self, source: P) -> Result<ScanOutcome> {
        let source = source.as_ref();

        if source.is_dir() {
            return Err(NounListError::InvalidPath {
                path: format!("{} is a directory", source.display()),
            });
        }

        let file = File::open(source).map_err(|e| NounListError::SourceUnreadable {
            path: source.display().to_string(),
            source: e,
        })?;

        let reader = BufReader::new(file);
        let mut nouns = Vec::new();
        let mut lines_read = 0;

        for line in reader.lines() {
            let line = line.map_err(|e| NounListError::SourceUnreadable {
                path: source.display().to_string(),
                source: e,
            })?;
            lines_read += 1;

            if let Some(noun) = self.filter.accept(&line) {
                nouns.push(noun);
            }
        }

        if nouns.is_empty() {
            return Err(NounListError::NoNounsFound {
                marker: self.filter.get_marker().to_string(),
                length: self.filter.get_noun_length(),
            });
        }

        Ok(ScanOutcome { nouns, lines_read })
    }

    pub fn get_statistics(&self, outcome: &ScanOutcome) -> ScanStatistics {
        ScanStatistics {
            lines_read: outcome.lines_read,
            nouns_accepted: outcome.nouns.len(),
            first_noun: outcome.nouns.first().cloned(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanStatistics {
    pub lines_read: usize,
    pub nouns_accepted: usize,
    pub first_noun: Option<String>,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Scan Results:\n  Lines read: {}\n  Nouns accepted: {}\n",
            self.lines_read, self.nouns_accepted
        );

        if let Some(ref first) = self.first_noun {
            summary.push_str(&format!("  First noun: {}\n", first));
        }

        summary
    }
}
