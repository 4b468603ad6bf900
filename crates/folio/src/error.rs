//! Error types for folio
//!
//! Rendering never fails: missing collaborators and missing item fields
//! degrade to empty output. Only the edges (configuration files, names
//! typed by a user, serialisation) can produce a [`FolioError`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        /// Configuration file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A catalog name did not match any known catalog
    #[error("Unknown catalog: {name} (expected one of: {expected})")]
    UnknownCatalog {
        /// Name that was given
        name: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// Serialising output failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FolioError {
    /// Wrap an I/O error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_catalog_message() {
        let err = FolioError::UnknownCatalog {
            name: "recipes".to_string(),
            expected: "workspace, hobbies".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown catalog: recipes (expected one of: workspace, hobbies)"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = FolioError::io(
            "site.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().starts_with("I/O error on site.json"));
    }
}
