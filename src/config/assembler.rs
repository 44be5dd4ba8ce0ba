// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration assembly for engine calls.
//!
//! Three layers feed every call, weakest first:
//!
//! ```text
//! per-call options  <  factory options  <  locked fields
//! ```
//!
//! The first two are merged once, when a node is created, into a
//! `NodeConfiguration`. Each invocation then derives its own
//! `CallConfiguration` from that snapshot, the node's plugin registry and a
//! fresh diagnostic sink.

use std::fmt;
use std::sync::Arc;

use crate::config::{EngineOptions, PluginRegistry};
use crate::diagnostics::DiagnosticSink;
use crate::errors::ConfigurationError;
use crate::file::EngineRecord;
use crate::traits::Engine;

/// Reject a factory name that cannot label errors.
pub fn validate_name(name: &str) -> Result<(), ConfigurationError> {
    if name.is_empty() {
        return Err(ConfigurationError::MissingName);
    }
    Ok(())
}

/// Merged settings of one node. Fixed for the node's lifetime.
#[derive(Debug, Clone)]
pub struct NodeConfiguration {
    name: String,
    options: EngineOptions,
}

impl NodeConfiguration {
    pub fn merge(name: impl Into<String>, per_call: EngineOptions, factory: &EngineOptions) -> Self {
        Self {
            name: name.into(),
            options: per_call.overlay(factory.clone()).locked(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

/// Everything one engine run gets to see.
pub struct CallConfiguration<E: Engine> {
    /// The engine this call is meant for.
    pub engine: Arc<E>,
    /// Factory name, for labeling.
    pub name: String,
    /// Snapshot of the node options, locked fields applied.
    pub options: EngineOptions,
    /// Shared handle to the node's plugins.
    pub plugins: PluginRegistry<E::Plugin>,
    /// Capture stream private to this call.
    pub diagnostics: DiagnosticSink,
    /// The records to process. The adapter always injects exactly one.
    pub files: Vec<EngineRecord>,
}

impl<E: Engine> CallConfiguration<E> {
    pub fn with_record(mut self, record: EngineRecord) -> Self {
        self.files = vec![record];
        self
    }
}

impl<E: Engine> fmt::Debug for CallConfiguration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallConfiguration")
            .field("engine", &self.engine.name())
            .field("name", &self.name)
            .field("options", &self.options)
            .field("plugins", &self.plugins)
            .field("files", &self.files.len())
            .finish()
    }
}

/// Build the configuration for one call.
///
/// Pure apart from cloning handles: the registry is shared, never copied,
/// and the sink is whatever the caller passes in.
pub fn assemble<E: Engine>(
    engine: &Arc<E>,
    node: &NodeConfiguration,
    registry: &PluginRegistry<E::Plugin>,
    sink: DiagnosticSink,
) -> CallConfiguration<E> {
    CallConfiguration {
        engine: Arc::clone(engine),
        name: node.name().to_string(),
        options: node.options().clone(),
        plugins: registry.clone(),
        diagnostics: sink,
        files: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::SpyEngine;
    use crate::file::RecordValue;
    use std::path::PathBuf;

    fn hostile_options() -> EngineOptions {
        EngineOptions {
            cwd: Some(PathBuf::from("/etc")),
            files: Some(vec![PathBuf::from("other.md")]),
            extensions: Some(vec!["txt".to_string()]),
            out: Some(true),
            output: Some(true),
            stream_in: Some("stdin".to_string()),
            stream_out: Some(DiagnosticSink::new()),
            silently_ignore: Some(false),
            always_stringify: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(""), Err(ConfigurationError::MissingName));
        assert!(validate_name("gulp-example").is_ok());
    }

    #[test]
    fn test_factory_layer_beats_per_call_layer() {
        let per_call = EngineOptions {
            frail: Some(false),
            quiet: Some(true),
            ..Default::default()
        };
        let factory = EngineOptions {
            frail: Some(true),
            ..Default::default()
        };

        let node = NodeConfiguration::merge("lint", per_call, &factory);
        assert_eq!(node.options().frail, Some(true));
        assert_eq!(node.options().quiet, Some(true));
    }

    #[test]
    fn test_locked_fields_win_over_every_layer() {
        let cases = vec![
            ("per-call only", hostile_options(), EngineOptions::default()),
            ("factory only", EngineOptions::default(), hostile_options()),
            ("both", hostile_options(), hostile_options()),
        ];

        for (label, per_call, factory) in cases {
            let node = NodeConfiguration::merge("lint", per_call, &factory);
            let options = node.options();
            assert!(options.is_isolated(), "{}", label);
            assert_eq!(options.output, Some(false), "{}", label);
            assert_eq!(options.silently_ignore, Some(true), "{}", label);
            assert_eq!(options.always_stringify, Some(true), "{}", label);
        }
    }

    #[test]
    fn test_assemble_shares_registry_and_uses_given_sink() {
        let engine = Arc::new(SpyEngine::new());
        let registry = PluginRegistry::new();
        let node = NodeConfiguration::merge("lint", hostile_options(), &EngineOptions::default());
        let sink = DiagnosticSink::new();

        let call = assemble(&engine, &node, &registry, sink.clone())
            .with_record(EngineRecord::new("readme.md", RecordValue::Bytes(Vec::new())));

        assert!(call.plugins.same_registry(&registry));
        assert!(call.diagnostics.same_sink(&sink));
        assert!(call.options.is_isolated());
        assert_eq!(call.files.len(), 1);
        assert_eq!(call.name, "lint");
    }
}
