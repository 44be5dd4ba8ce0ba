// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-file engine invocation.
//!
//! ```text
//! Idle ──stream──▶ Reject      (no engine call)
//!  │   ──null────▶ PassThrough (no engine call)
//!  └───buffer───▶ Dispatched ──▶ Success | EngineFailure | EngineCrash
//! ```
//!
//! An `Invocation` owns its record, its call configuration and its sink.
//! `dispatch` consumes it, so a prepared invocation reaches the engine at
//! most once.

use std::sync::Arc;
use tokio::task::JoinError;

use crate::config::consts::{ENGINE_CANCELLED, RECORD_LOST, UNSUCCESSFUL_RUNNING};
use crate::config::{assemble, CallConfiguration, NodeConfiguration, PluginRegistry};
use crate::diagnostics::DiagnosticSink;
use crate::file::{Contents, EngineRecord, PipelineFile};
use crate::traits::{Engine, EngineStatus};

/// What a node does with an incoming file before any engine work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Reject,
    PassThrough,
    Dispatch,
}

impl Disposition {
    pub fn of(file: &PipelineFile) -> Self {
        match file.contents {
            Contents::Stream(_) => Disposition::Reject,
            Contents::Null => Disposition::PassThrough,
            Contents::Buffer(_) => Disposition::Dispatch,
        }
    }
}

/// Outcome of one dispatched engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Success { record: EngineRecord, report: String },
    EngineFailure { message: String, report: String },
    EngineCrash { message: String, report: String },
}

impl Completion {
    /// Map the engine's completion signal onto an outcome.
    ///
    /// An error object wins over the status flag; a failure status with no
    /// error object gets the generic message.
    fn classify<E: Engine>(
        joined: Result<(CallConfiguration<E>, Result<EngineStatus, crate::errors::EngineError>), JoinError>,
        report: String,
    ) -> Self {
        match joined {
            Ok((mut call, Ok(EngineStatus::Success))) => match call.files.pop() {
                Some(record) => Completion::Success { record, report },
                None => Completion::EngineFailure {
                    message: RECORD_LOST.to_string(),
                    report,
                },
            },
            Ok((_, Ok(EngineStatus::Failure))) => Completion::EngineFailure {
                message: UNSUCCESSFUL_RUNNING.to_string(),
                report,
            },
            Ok((_, Err(error))) => Completion::EngineFailure {
                message: error.to_string(),
                report,
            },
            Err(error) => Completion::EngineCrash {
                message: panic_message(error),
                report,
            },
        }
    }
}

/// One prepared engine call for one file.
pub struct Invocation<E: Engine> {
    call: CallConfiguration<E>,
    sink: DiagnosticSink,
}

impl<E: Engine> Invocation<E> {
    /// Build the call configuration around a fresh sink and the record.
    pub fn prepare(
        engine: &Arc<E>,
        node: &NodeConfiguration,
        registry: &PluginRegistry<E::Plugin>,
        record: EngineRecord,
    ) -> Self {
        let sink = DiagnosticSink::new();
        let call = assemble(engine, node, registry, sink.clone()).with_record(record);
        Self { call, sink }
    }

    pub fn call(&self) -> &CallConfiguration<E> {
        &self.call
    }

    /// Run the engine once and classify its completion.
    ///
    /// The engine runs on its own task so a panic inside it is contained and
    /// reported as a crash instead of tearing down the node.
    pub async fn dispatch(self) -> Completion {
        let Invocation { mut call, sink } = self;

        let handle = tokio::spawn(async move {
            let engine = Arc::clone(&call.engine);
            let result = engine.run(&mut call).await;
            (call, result)
        });

        let joined = handle.await;
        Completion::classify(joined, sink.contents())
    }
}

fn panic_message(error: JoinError) -> String {
    if !error.is_panic() {
        return ENGINE_CANCELLED.to_string();
    }

    let payload = error.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Engine panicked".to_string()
    }
}
