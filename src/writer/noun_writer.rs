use crate::error::{NounListError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of the write phase.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub records_written: usize,
    pub bytes_written: u64,
    pub duration: Duration,
}

/// Writes accepted nouns to the destination file, one quoted record per line.
///
/// The destination is truncated on every run, so re-running against an
/// unchanged source produces a byte-identical file.
pub struct NounWriter {
    destination: PathBuf,
}

impl NounWriter {
    pub fn new<P: Into<PathBuf>>(destination: P) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn get_destination(&self) -> &Path {
        &self.destination
    }

    /// Truncates the destination and writes every noun as `"<NOUN>",` followed
    /// by a newline. The file handle is scoped to this call.
    pub fn write_nouns(
        &self,
        nouns: &[String],
        progress_callback: Option<&dyn Fn(usize)>,
    ) -> Result<WriteSummary> {
        let start_time = Instant::now();

        let file =
            File::create(&self.destination).map_err(|e| NounListError::DestinationUnwritable {
                path: self.destination.display().to_string(),
                source: e,
            })?;
        let mut writer = BufWriter::new(file);

        let mut bytes_written: u64 = 0;
        for (index, noun) in nouns.iter().enumerate() {
            let record = format!("\"{}\",", noun);
            writeln!(writer, "{}", record).map_err(|e| NounListError::DestinationUnwritable {
                path: self.destination.display().to_string(),
                source: e,
            })?;
            bytes_written += record.len() as u64 + 1;

            if let Some(callback) = progress_callback {
                callback(index + 1);
            }
        }

        writer
            .flush()
            .map_err(|e| NounListError::DestinationUnwritable {
                path: self.destination.display().to_string(),
                source: e,
            })?;

        Ok(WriteSummary {
            records_written: nouns.len(),
            bytes_written,
            duration: start_time.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn nouns(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_records_are_quoted_literals_with_trailing_comma() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("nouns.dic");

        let writer = NounWriter::new(&destination);
        let summary = writer
            .write_nouns(&nouns(&["HAUS", "KATZE", "HUNDE"]), None)
            .unwrap();

        let contents = fs::read_to_string(&destination).unwrap();
        assert_eq!(contents, "\"HAUS\",\n\"KATZE\",\n\"HUNDE\",\n");
        assert_eq!(summary.records_written, 3);
        assert_eq!(summary.bytes_written, contents.len() as u64);
    }

    #[test]
    fn test_destination_is_truncated_each_run() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("nouns.dic");
        fs::write(&destination, "\"STALE\",\n\"LINES\",\n\"LEFT\",\n\"OVER\",\n").unwrap();

        let writer = NounWriter::new(&destination);
        writer.write_nouns(&nouns(&["HAUS"]), None).unwrap();

        let contents = fs::read_to_string(&destination).unwrap();
        assert_eq!(contents, "\"HAUS\",\n");
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("nouns.dic");

        let writer = NounWriter::new(&destination);
        writer.write_nouns(&nouns(&["HAUS", "KATZE"]), None).unwrap();
        let first = fs::read(&destination).unwrap();

        writer.write_nouns(&nouns(&["HAUS", "KATZE"]), None).unwrap();
        let second = fs::read(&destination).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_destination_is_destination_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("no-such-dir").join("nouns.dic");

        let writer = NounWriter::new(&destination);
        let err = writer.write_nouns(&nouns(&["HAUS"]), None).unwrap_err();

        assert!(matches!(err, NounListError::DestinationUnwritable { .. }));
    }
}
