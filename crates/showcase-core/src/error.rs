//! Error types for Showcase Core
//!
//! The helpers themselves define no failure modes of their own; these
//! variants cover the plumbing around them:
//! - Filesystem failures while creating the scoped temp file
//! - Configuration loading and validation
//! - Scoped resource acquisition/release

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Main showcase error type
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// Generic I/O failure (usually writing program output)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Creating or writing the scoped temp file failed
    #[error("temp file {path:?}: {source}")]
    TempFile {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Scoped resource failed to acquire or release
    #[error("resource {name} failed: {reason}")]
    Resource {
        /// Resource name
        name: String,
        /// What went wrong
        reason: String,
    },
}

impl ShowcaseError {
    /// Create a configuration error
    #[inline]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a resource error
    #[inline]
    pub fn resource(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resource {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error came from configuration
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::ConfigParse(_))
    }

    /// Check if the error came from the filesystem
    #[inline]
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::TempFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ShowcaseError::config("radius must be finite");
        assert!(err.to_string().contains("configuration error"));
        assert!(err.is_config());
        assert!(!err.is_io());
    }

    #[test]
    fn resource_error_display() {
        let err = ShowcaseError::resource("demo", "already held");
        assert_eq!(err.to_string(), "resource demo failed: already held");
    }

    #[test]
    fn temp_file_error_is_io() {
        let err = ShowcaseError::TempFile {
            path: PathBuf::from("temp.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_io());
        assert!(err.to_string().contains("temp.txt"));
    }

    #[test]
    fn io_error_converts() {
        let err: ShowcaseError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }
}
