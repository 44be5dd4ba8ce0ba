// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::config::consts::{LOCKED_ALWAYS_STRINGIFY, LOCKED_OUTPUT, LOCKED_SILENTLY_IGNORE};
use crate::diagnostics::DiagnosticSink;

/// One layer of engine settings.
///
/// Every field is optional so layers can be stacked: a field set in a
/// stronger layer replaces the weaker value wholesale (no deep merging of
/// lists or maps).
///
/// # Example
/// ```yaml
/// frail: true
/// quiet: true
/// ignorePatterns: ["**/ignored.md"]
/// settings:
///   headingStyle: atx-closed
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// Working directory for file discovery. Locked.
    pub cwd: Option<PathBuf>,
    /// Files the engine should discover itself. Locked.
    pub files: Option<Vec<PathBuf>>,
    /// Extension filter for discovered files. Locked.
    pub extensions: Option<Vec<String>>,
    /// Write results to the output stream. Locked.
    pub out: Option<bool>,
    /// Write results back to disk. Locked to `false`.
    pub output: Option<bool>,
    /// Input stream override. Locked.
    pub stream_in: Option<String>,
    /// Output stream override. Locked.
    #[serde(skip)]
    pub stream_out: Option<DiagnosticSink>,
    /// Receives a copy of every report the node produces.
    #[serde(skip)]
    pub stream_error: Option<DiagnosticSink>,
    pub silently_ignore: Option<bool>,
    pub always_stringify: Option<bool>,
    /// Only report files with messages.
    pub quiet: Option<bool>,
    /// Only report fatal messages.
    pub silent: Option<bool>,
    /// Treat warnings as a failed run.
    pub frail: Option<bool>,
    /// Path hint for input that does not come from a real file.
    pub file_path: Option<String>,
    /// Glob patterns for files the engine should skip.
    pub ignore_patterns: Option<Vec<String>>,
    /// Free-form settings passed to the engine.
    pub settings: Option<Map<String, Value>>,
}

impl EngineOptions {
    /// Stack `stronger` on top of `self`.
    pub fn overlay(self, stronger: EngineOptions) -> EngineOptions {
        EngineOptions {
            cwd: stronger.cwd.or(self.cwd),
            files: stronger.files.or(self.files),
            extensions: stronger.extensions.or(self.extensions),
            out: stronger.out.or(self.out),
            output: stronger.output.or(self.output),
            stream_in: stronger.stream_in.or(self.stream_in),
            stream_out: stronger.stream_out.or(self.stream_out),
            stream_error: stronger.stream_error.or(self.stream_error),
            silently_ignore: stronger.silently_ignore.or(self.silently_ignore),
            always_stringify: stronger.always_stringify.or(self.always_stringify),
            quiet: stronger.quiet.or(self.quiet),
            silent: stronger.silent.or(self.silent),
            frail: stronger.frail.or(self.frail),
            file_path: stronger.file_path.or(self.file_path),
            ignore_patterns: stronger.ignore_patterns.or(self.ignore_patterns),
            settings: stronger.settings.or(self.settings),
        }
    }

    /// Force the locked fields, whatever earlier layers set.
    ///
    /// The engine must only ever see the single record the adapter injects,
    /// so every path and IO selector is cleared.
    pub fn locked(self) -> EngineOptions {
        EngineOptions {
            silently_ignore: Some(LOCKED_SILENTLY_IGNORE),
            always_stringify: Some(LOCKED_ALWAYS_STRINGIFY),
            output: Some(LOCKED_OUTPUT),
            cwd: None,
            files: None,
            extensions: None,
            out: None,
            stream_in: None,
            stream_out: None,
            ..self
        }
    }

    /// True when none of the path or IO selectors are set.
    pub fn is_isolated(&self) -> bool {
        self.cwd.is_none()
            && self.files.is_none()
            && self.extensions.is_none()
            && self.out.is_none()
            && self.stream_in.is_none()
            && self.stream_out.is_none()
    }

    pub fn is_frail(&self) -> bool {
        self.frail.unwrap_or(false)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }

    pub fn is_silent(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.as_ref().and_then(|settings| settings.get(key))
    }
}
