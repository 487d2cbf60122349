//! All error types for the locaudit crate.
//!
//! These are returned from all fallible operations (parsing, serialization,
//! discovery, auditing).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base language file not found: {0}")]
    MissingBaseFile(PathBuf),

    #[error("no keys found in base language file: {0}")]
    EmptyBaseKeySet(PathBuf),

    #[error("no language directories found under: {0}")]
    NoLanguages(PathBuf),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_missing_base_file_error() {
        let error = Error::MissingBaseFile(PathBuf::from("en.lproj/Localizable.strings"));
        assert!(error.to_string().contains("base language file not found"));
        assert!(error.to_string().contains("Localizable.strings"));
    }

    #[test]
    fn test_empty_base_key_set_error() {
        let error = Error::EmptyBaseKeySet(PathBuf::from("en.lproj/Localizable.strings"));
        assert!(error.to_string().contains("no keys found"));
    }

    #[test]
    fn test_no_languages_error() {
        let error = Error::NoLanguages(PathBuf::from("Resources"));
        assert!(error.to_string().contains("no language directories"));
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("bad language code");
        assert_eq!(error.to_string(), "validation error: bad language code");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("test"));
    }
}
