// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline node lifecycle and file routing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A node was created from a factory.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct NodeCreated<'a> {
    pub node: &'a str,
    pub engine: &'a str,
}

impl Display for NodeCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' created for engine '{}'", self.node, self.engine)
    }
}

impl StructuredLog for NodeCreated<'_> {
    fn log(&self) {
        tracing::debug!(node = self.node, engine = self.engine, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("node", span_name = name, node = self.node, engine = self.engine)
    }
}

/// Plugins were added to a node's registry.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct PluginRegistered<'a> {
    pub node: &'a str,
    pub plugin_count: usize,
}

impl Display for PluginRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' registry now holds {} plugin(s)",
            self.node, self.plugin_count
        )
    }
}

impl StructuredLog for PluginRegistered<'_> {
    fn log(&self) {
        tracing::debug!(node = self.node, plugin_count = self.plugin_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "plugin_registered",
            span_name = name,
            node = self.node,
            plugin_count = self.plugin_count,
        )
    }
}

/// A file was refused before reaching the engine.
///
/// # Log Level
/// `warn!` - The file is dropped from the output
pub struct FileRejected<'a> {
    pub node: &'a str,
    pub path: &'a str,
    pub reason: &'a str,
}

impl Display for FileRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' rejected '{}': {}", self.node, self.path, self.reason)
    }
}

impl StructuredLog for FileRejected<'_> {
    fn log(&self) {
        tracing::warn!(node = self.node, path = self.path, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "file_rejected",
            span_name = name,
            node = self.node,
            path = self.path,
        )
    }
}

/// A file without contents was emitted unchanged.
///
/// # Log Level
/// `trace!` - Routine routing
pub struct FilePassedThrough<'a> {
    pub node: &'a str,
    pub path: &'a str,
}

impl Display for FilePassedThrough<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' passed '{}' through without contents", self.node, self.path)
    }
}

impl StructuredLog for FilePassedThrough<'_> {
    fn log(&self) {
        tracing::trace!(node = self.node, path = self.path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("file_passed_through", span_name = name, node = self.node, path = self.path)
    }
}
