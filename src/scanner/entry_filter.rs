use crate::config::FilterConfig;
use regex::Regex;

/// Per-line accept/reject decision for dictionary entries.
///
/// A line qualifies when the marker occurs at a position strictly greater
/// than zero (a marker at the start of the line means an empty word) and the
/// uppercased text before the marker has exactly the configured length.
pub struct EntryFilter {
    marker: String,
    noun_length: usize,
    exclude_patterns: Vec<Regex>,
}

impl EntryFilter {
    pub fn new(config: &FilterConfig) -> Self {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            marker: config.marker.clone(),
            noun_length: config.noun_length,
            exclude_patterns,
        }
    }

    /// Runs one source line through the full filter. Returns the uppercased
    /// noun when the line qualifies.
    pub fn accept(&self, line: &str) -> Option<String> {
        if self.matches_any_pattern(line) {
            return None;
        }

        let candidate = self.candidate(line)?;
        let noun = candidate.to_uppercase();

        // Length is measured in characters after case folding, so a sharp-s
        // expanding to SS counts as two.
        if noun.chars().count() == self.noun_length {
            Some(noun)
        } else {
            None
        }
    }

    /// Text preceding the first marker occurrence, or None when the marker is
    /// absent or sits at position zero.
    pub fn candidate<'a>(&self, line: &'a str) -> Option<&'a str> {
        match line.find(&self.marker) {
            Some(index) if index > 0 => Some(&line[..index]),
            _ => None,
        }
    }

    pub fn matches_any_pattern(&self, line: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(line))
    }

    pub fn get_marker(&self) -> &str {
        &self.marker
    }

    pub fn get_noun_length(&self) -> usize {
        self.noun_length
    }
}

impl Default for EntryFilter {
    fn default() -> Self {
        let config = FilterConfig::default();
        Self::new(&config)
    }
}
