// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory capture stream for engine reports.
//!
//! A `DiagnosticSink` is a cheap handle: clones write into the same buffer.
//! The adapter creates a fresh one for every invocation, so two invocations
//! never see each other's output. Callers may also hand one in as
//! `streamError` to receive every report a node produces.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Default)]
pub struct DiagnosticSink {
    buffer: Arc<Mutex<String>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the sink.
    pub fn write(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// True when both handles write into the same buffer.
    pub fn same_sink(&self, other: &DiagnosticSink) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("len", &self.contents().len())
            .finish()
    }
}
