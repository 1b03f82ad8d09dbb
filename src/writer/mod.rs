pub mod noun_writer;
pub mod report;

pub use noun_writer::{NounWriter, WriteSummary};
pub use report::{ConfigSnapshot, ExtractionReport, ExtractionSummary};
