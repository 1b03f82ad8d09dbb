pub mod dictionary_scanner;
pub mod entry_filter;

pub use dictionary_scanner::{DictionaryScanner, ScanOutcome, ScanStatistics};
pub use entry_filter::EntryFilter;
