// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-file errors surfaced by a pipeline node.
//!
//! Every variant carries the factory name so downstream consumers can tell
//! which node produced it. None of them stop the node: the next file is
//! processed as usual.

use thiserror::Error;

use crate::config::consts::STREAMING_NOT_SUPPORTED;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    /// A stream-backed file reached the node. No engine call was made.
    #[error("{plugin}: {}", STREAMING_NOT_SUPPORTED)]
    UnsupportedInputKind { plugin: String },

    /// The engine returned an error, a failure status, or both.
    #[error("{plugin}: {message}")]
    EngineFailure {
        plugin: String,
        message: String,
        report: String,
    },

    /// The engine panicked or its task was torn down mid-run.
    #[error("{plugin}: {message}")]
    EngineCrash {
        plugin: String,
        message: String,
        report: String,
    },
}

impl NodeError {
    /// Name of the factory that produced this error.
    pub fn plugin(&self) -> &str {
        match self {
            NodeError::UnsupportedInputKind { plugin }
            | NodeError::EngineFailure { plugin, .. }
            | NodeError::EngineCrash { plugin, .. } => plugin,
        }
    }

    /// The message without the factory label.
    pub fn message(&self) -> &str {
        match self {
            NodeError::UnsupportedInputKind { .. } => STREAMING_NOT_SUPPORTED,
            NodeError::EngineFailure { message, .. } | NodeError::EngineCrash { message, .. } => {
                message
            }
        }
    }

    /// Diagnostic output captured before the failure, if the engine ran.
    pub fn report(&self) -> Option<&str> {
        match self {
            NodeError::UnsupportedInputKind { .. } => None,
            NodeError::EngineFailure { report, .. } | NodeError::EngineCrash { report, .. } => {
                Some(report)
            }
        }
    }
}
