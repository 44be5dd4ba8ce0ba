// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::CallConfiguration;
use crate::errors::EngineError;

/// Status flag an engine reports when it completes without an error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Success,
    Failure,
}

/// The batch text-processing engine a node adapts.
///
/// The adapter treats the engine as opaque: it hands over one call
/// configuration holding exactly one record and waits for a single
/// completion. The engine may rewrite the records in `call.files` and
/// should write its human-readable report to `call.diagnostics`.
#[async_trait]
pub trait Engine: Send + Sync + Sized + 'static {
    /// What `PipelineNode::register` accepts for this engine.
    type Plugin: ?Sized + Send + Sync + 'static;

    fn name(&self) -> &str;

    async fn run(&self, call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError>;
}
