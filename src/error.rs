use thiserror::Error;

#[derive(Error, Debug)]
pub enum NounListError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read source dictionary: {path}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write destination file: {path}")]
    DestinationUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No nouns found for marker {marker:?} with length {length}")]
    NoNounsFound { marker: String, length: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid exclude pattern: {pattern}")]
    InvalidPattern { pattern: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for NounListError {
    fn user_message(&self) -> String {
        match self {
            NounListError::SourceUnreadable { path, source } => {
                format!("Cannot read source dictionary {}: {}", path, source)
            }
            NounListError::DestinationUnwritable { path, source } => {
                format!("Cannot write destination file {}: {}", path, source)
            }
            NounListError::NoNounsFound { marker, length } => {
                format!(
                    "No entries tagged with {:?} produced a {}-letter noun",
                    marker, length
                )
            }
            NounListError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            NounListError::InvalidPattern { pattern } => {
                format!("Invalid exclude pattern: {}", pattern)
            }
            NounListError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            NounListError::SourceUnreadable { .. } => Some(
                "Check that the dictionary file exists and is readable. Pass a different path as the first argument (default: german.dic).".to_string()
            ),
            NounListError::DestinationUnwritable { .. } => Some(
                "Ensure the destination directory exists and you have write permission, or choose a different path with --output.".to_string()
            ),
            NounListError::NoNounsFound { .. } => Some(
                "Verify the dictionary uses the expected tag format (e.g. Haus/N,...). A different marker can be set with --marker, a different word length with --length.".to_string()
            ),
            NounListError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            NounListError::InvalidPattern { .. } => Some(
                "Exclude patterns must be valid regular expressions (e.g. '^#' to skip comment lines).".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for NounListError {
    fn from(error: toml::de::Error) -> Self {
        NounListError::Config {
            message: error.to_string(),
        }
    }
}

impl From<regex::Error> for NounListError {
    fn from(error: regex::Error) -> Self {
        NounListError::InvalidPattern {
            pattern: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NounListError>;
