// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.

use std::fmt::Display;
use tracing::Span;

pub mod engine;
pub mod node;

/// A log message that knows its own level and fields.
pub trait StructuredLog: Display {
    /// Emit the event at the message's level.
    fn log(&self);

    /// A span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
