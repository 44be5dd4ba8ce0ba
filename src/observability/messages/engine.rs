// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine invocations.
//!
//! One invocation produces `InvocationDispatched` followed by exactly one of
//! `InvocationCompleted` or `InvocationFailed`.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// An engine call was issued for one file.
///
/// # Log Level
/// `debug!` - Per-file detail
///
/// # Example
/// ```
/// use engine_node::observability::messages::engine::InvocationDispatched;
///
/// let msg = InvocationDispatched {
///     node: "gulp-example",
///     engine: "local-markdown",
///     path: "readme.md",
///     input_size: 16,
///     plugin_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct InvocationDispatched<'a> {
    pub node: &'a str,
    pub engine: &'a str,
    pub path: &'a str,
    pub input_size: usize,
    pub plugin_count: usize,
}

impl Display for InvocationDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' dispatched '{}' to engine '{}': input_size={} bytes, plugins={}",
            self.node, self.path, self.engine, self.input_size, self.plugin_count
        )
    }
}

impl StructuredLog for InvocationDispatched<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            engine = self.engine,
            path = self.path,
            input_size = self.input_size,
            plugin_count = self.plugin_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "invocation",
            span_name = name,
            node = self.node,
            engine = self.engine,
            path = self.path,
        )
    }
}

/// The engine finished a file successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct InvocationCompleted<'a> {
    pub node: &'a str,
    pub path: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' completed '{}': input={} bytes, output={} bytes, duration={:?}",
            self.node, self.path, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            node = self.node,
            path = self.path,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation_completed",
            span_name = name,
            node = self.node,
            path = self.path,
            duration = ?self.duration,
        )
    }
}

/// The engine failed or crashed on a file.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvocationFailed<'a> {
    pub node: &'a str,
    pub path: &'a str,
    pub message: &'a str,
    pub crashed: bool,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let kind = if self.crashed { "crashed" } else { "failed" };
        write!(f, "Engine {} on '{}' in node '{}': {}", kind, self.path, self.node, self.message)
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            node = self.node,
            path = self.path,
            crashed = self.crashed,
            error = self.message,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "invocation_failed",
            span_name = name,
            node = self.node,
            path = self.path,
            crashed = self.crashed,
        )
    }
}
