// SPDX-License-Identifier: MPL-2.0
//! Errors raised while loading the controller's configuration and
//! translations.
//!
//! None of these are fatal: callers log them and fall back to defaults.
//! Positioning itself never fails.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading the config file failed.
    Io(String),
    /// The config file could not be parsed.
    Config(String),
    /// An embedded `.ftl` file is unusable.
    Translation { file: String, reason: String },
}

impl Error {
    pub(crate) fn translation(file: &str, reason: impl Into<String>) -> Self {
        Error::Translation {
            file: file.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation { file, reason } => {
                write!(f, "Translation Error in {}: {}", file, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_maps_to_io() {
        let missing = std::fs::read_to_string("/definitely/not/here/settings.toml").unwrap_err();
        let err: Error = missing.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_controller_section_maps_to_config() {
        let parse = toml::from_str::<toml::Table>("[controller]\nstart_with_camera = = true")
            .unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Config Error: "));
    }

    #[test]
    fn translation_error_names_the_file() {
        let err = Error::translation("fr.ftl", "2 syntax errors");
        assert_eq!(err.to_string(), "Translation Error in fr.ftl: 2 syntax errors");
    }
}
