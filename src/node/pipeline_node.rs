// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::config::consts::{PIPE_CAPACITY, STREAMING_NOT_SUPPORTED};
use crate::config::{NodeConfiguration, Pluggable, PluginRegistry};
use crate::errors::{ConversionError, NodeError};
use crate::file::{from_engine_record, to_engine_record, EngineRecord, PipelineFile};
use crate::node::invocation::{Completion, Disposition, Invocation};
use crate::observability::messages::engine::{InvocationCompleted, InvocationDispatched, InvocationFailed};
use crate::observability::messages::node::{FilePassedThrough, FileRejected, PluginRegistered};
use crate::observability::messages::StructuredLog;
use crate::traits::Engine;

struct NodeShared<E: Engine> {
    engine: Arc<E>,
    config: NodeConfiguration,
    plugins: PluginRegistry<E::Plugin>,
}

/// A transform stage wrapping one engine.
///
/// Cloning a node is cheap and yields a handle to the same node: same
/// configuration, same plugin registry.
pub struct PipelineNode<E: Engine> {
    shared: Arc<NodeShared<E>>,
}

impl<E: Engine> Clone for PipelineNode<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<E: Engine> PipelineNode<E> {
    pub(crate) fn new(engine: Arc<E>, config: NodeConfiguration) -> Self {
        Self {
            shared: Arc::new(NodeShared {
                engine,
                config,
                plugins: PluginRegistry::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        self.shared.config.name()
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.shared.engine
    }

    pub fn configuration(&self) -> &NodeConfiguration {
        &self.shared.config
    }

    pub fn plugins(&self) -> &PluginRegistry<E::Plugin> {
        &self.shared.plugins
    }

    /// Add a plugin or preset to this node. Returns the node for chaining.
    pub fn register(&self, pluggable: Pluggable<E::Plugin>) -> &Self {
        self.shared.plugins.push(pluggable);
        PluginRegistered {
            node: self.name(),
            plugin_count: self.shared.plugins.len(),
        }
        .log();
        self
    }

    /// Register a plugin without options.
    pub fn use_plugin(&self, plugin: Arc<E::Plugin>) -> &Self {
        self.register(Pluggable::plugin(plugin))
    }

    /// Register a plugin with options.
    pub fn use_with(&self, plugin: Arc<E::Plugin>, options: Vec<Value>) -> &Self {
        self.register(Pluggable::with_options(plugin, options))
    }

    /// Process one file.
    ///
    /// Stream-backed files are rejected and files without contents are
    /// returned as-is; neither reaches the engine. Anything else costs
    /// exactly one engine call.
    pub async fn transform(&self, file: PipelineFile) -> Result<PipelineFile, NodeError> {
        let path = file.path.display().to_string();

        let record = match Disposition::of(&file) {
            Disposition::Reject => {
                FileRejected {
                    node: self.name(),
                    path: &path,
                    reason: STREAMING_NOT_SUPPORTED,
                }
                .log();
                return Err(NodeError::UnsupportedInputKind {
                    plugin: self.name().to_string(),
                });
            }
            Disposition::PassThrough => {
                FilePassedThrough {
                    node: self.name(),
                    path: &path,
                }
                .log();
                return Ok(file);
            }
            Disposition::Dispatch => match self.engine_record(&file)? {
                Some(record) => record,
                None => return Ok(file),
            },
        };

        let input_size = record.value.len();
        let invocation = Invocation::prepare(
            &self.shared.engine,
            &self.shared.config,
            &self.shared.plugins,
            record,
        );
        let dispatched = InvocationDispatched {
            node: self.name(),
            engine: self.shared.engine.name(),
            path: &path,
            input_size,
            plugin_count: self.shared.plugins.len(),
        };
        dispatched.log();
        let span = dispatched.span("transform");

        let start = Instant::now();
        match invocation.dispatch().instrument(span).await {
            Completion::Success { record, report } => {
                self.forward_report(&report);
                let output_size = record.value.len();
                let mut file = from_engine_record(record, file);
                file.report = Some(report).filter(|report| !report.is_empty());
                InvocationCompleted {
                    node: self.name(),
                    path: &path,
                    input_size,
                    output_size,
                    duration: start.elapsed(),
                }
                .log();
                Ok(file)
            }
            Completion::EngineFailure { message, report } => {
                self.forward_report(&report);
                self.log_failure(&path, &message, false);
                Err(NodeError::EngineFailure {
                    plugin: self.name().to_string(),
                    message,
                    report,
                })
            }
            Completion::EngineCrash { message, report } => {
                self.forward_report(&report);
                self.log_failure(&path, &message, true);
                Err(NodeError::EngineCrash {
                    plugin: self.name().to_string(),
                    message,
                    report,
                })
            }
        }
    }

    /// Attach the node to an upstream channel.
    ///
    /// Each file is processed on its own task as soon as it arrives, so
    /// results come out in completion order rather than arrival order. The
    /// returned channel closes once upstream is closed and every in-flight
    /// file has finished.
    pub fn pipe(&self, mut upstream: mpsc::Receiver<PipelineFile>) -> mpsc::Receiver<Result<PipelineFile, NodeError>> {
        let (tx, rx) = mpsc::channel(PIPE_CAPACITY);
        let node = self.clone();

        tokio::spawn(async move {
            while let Some(file) = upstream.recv().await {
                let node = node.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = node.transform(file).await;
                    if tx.send(result).await.is_err() {
                        tracing::debug!(node = node.name(), "Downstream closed, dropping result");
                    }
                });
            }
        });

        rx
    }

    /// Convert a file for dispatch. `None` means it has nothing to process.
    fn engine_record(&self, file: &PipelineFile) -> Result<Option<EngineRecord>, NodeError> {
        match to_engine_record(file) {
            Ok(record) => Ok(Some(record)),
            Err(ConversionError::NoContents) => Ok(None),
            Err(ConversionError::Streaming) => Err(NodeError::UnsupportedInputKind {
                plugin: self.name().to_string(),
            }),
        }
    }

    fn forward_report(&self, report: &str) {
        if let Some(stream_error) = &self.shared.config.options().stream_error {
            stream_error.write(report);
        }
    }

    fn log_failure(&self, path: &str, message: &str, crashed: bool) {
        InvocationFailed {
            node: self.name(),
            path,
            message,
            crashed,
        }
        .log();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::SpyEngine;
    use crate::config::EngineOptions;

    fn node() -> PipelineNode<SpyEngine> {
        let config = NodeConfiguration::merge("spy", EngineOptions::default(), &EngineOptions::default());
        PipelineNode::new(Arc::new(SpyEngine::new()), config)
    }

    #[test]
    fn test_conversion_errors_keep_their_meaning() {
        let node = node();

        let empty = node.engine_record(&PipelineFile::new("empty.md")).unwrap();
        assert!(empty.is_none());

        let stream = PipelineFile::with_stream("stream.md", &b""[..]);
        let error = node.engine_record(&stream).unwrap_err();
        assert!(matches!(error, NodeError::UnsupportedInputKind { plugin } if plugin == "spy"));

        let record = node.engine_record(&PipelineFile::with_buffer("a.md", "text")).unwrap();
        assert_eq!(record.map(|r| r.value.len()), Some(4));
    }
}
