// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors an engine reports through its completion signal.

use thiserror::Error;

/// Error object handed back by an engine run.
///
/// Any of these turns the invocation into an engine failure, whatever
/// status the engine would otherwise have reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Unrecoverable problem with the call itself.
    #[error("{0}")]
    Fatal(String),

    /// An ignore pattern could not be compiled.
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    InvalidIgnorePattern { pattern: String, reason: String },

    /// A plugin rejected the options it was registered with.
    #[error("Invalid options for plugin '{plugin}': {reason}")]
    InvalidPluginOptions { plugin: String, reason: String },
}
