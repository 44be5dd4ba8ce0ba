// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::config::consts::{MISSING_NAME, NO_CONTENTS, STREAMING_NOT_SUPPORTED};

/// Errors raised while building an engine factory.
///
/// These are fatal: a factory that fails validation never produces a node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The factory configuration has no `name`, or an empty one.
    #[error("{}", MISSING_NAME)]
    MissingName,
}

/// Reasons a pipeline file cannot become an engine record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{}", STREAMING_NOT_SUPPORTED)]
    Streaming,

    #[error("{}", NO_CONTENTS)]
    NoContents,
}

/// Errors from loading a node settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported settings format '{0}', expected .yaml, .yml or .toml")]
    UnsupportedFormat(String),

    #[error("Unknown {kind} '{name}'")]
    Unknown { kind: &'static str, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ConfigurationError::MissingName.to_string(), "Expected `name` in `configuration`");
        assert_eq!(ConversionError::Streaming.to_string(), "Streaming not supported");
    }
}
