//! Errors raised while loading, saving or checking presets.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// File system failures keep the offending path next to the I/O error;
/// TOML and validation errors convert in with `?`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A preset file could not be read.
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// File that was being read.
        path: PathBuf,
        /// Cause.
        #[source]
        source: std::io::Error,
    },

    /// A preset file could not be written.
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// Cause.
        #[source]
        source: std::io::Error,
    },

    /// The presets directory could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Cause.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid preset TOML.
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The preset could not be encoded as TOML.
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No factory or user preset has this name.
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// A user preset name that cannot be used as a file name in the presets
    /// directory (empty, hidden, or containing a path separator).
    #[error("invalid preset name '{0}': use a plain file name without path separators")]
    InvalidPresetName(String),

    /// Parameter values outside their ranges.
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// [`ConfigError::ReadFile`] for `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// [`ConfigError::WriteFile`] for `path`.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// [`ConfigError::CreateDir`] for `path`.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;
    use std::io::ErrorKind;
    use std::path::Path;

    fn denied() -> std::io::Error {
        std::io::Error::new(ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn io_helpers_keep_path_and_source() {
        let cases = [
            (ConfigError::read_file("/presets/a.toml", denied()), "failed to read file"),
            (ConfigError::write_file("/presets/a.toml", denied()), "failed to write file"),
            (ConfigError::create_dir("/presets", denied()), "failed to create directory"),
        ];
        for (err, prefix) in cases {
            let msg = err.to_string();
            assert!(msg.starts_with(prefix), "got: {msg}");
            assert!(msg.contains("/presets"), "got: {msg}");
            assert!(msg.ends_with("denied"), "got: {msg}");
            assert!(err.source().is_some());
        }

        let err = ConfigError::write_file("/presets/b.toml", denied());
        assert!(
            matches!(err, ConfigError::WriteFile { ref path, .. } if path == Path::new("/presets/b.toml"))
        );
    }

    #[test]
    fn toml_errors_convert() {
        fn parse(text: &str) -> Result<toml::Value, ConfigError> {
            Ok(toml::from_str(text)?)
        }
        let err = parse("gain_db = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }

    #[test]
    fn validation_wraps_inner_message() {
        let err: ConfigError = ValidationError::UnknownParameter("drive".to_string()).into();
        assert_eq!(err.to_string(), "validation failed: unknown parameter: drive");
    }

    #[test]
    fn name_errors_have_no_source() {
        let err = ConfigError::PresetNotFound("crunchy".to_string());
        assert_eq!(err.to_string(), "preset not found: crunchy");
        assert!(err.source().is_none());

        let err = ConfigError::InvalidPresetName("../x".to_string());
        assert!(err.to_string().contains("'../x'"));
        assert!(err.source().is_none());
    }
}
