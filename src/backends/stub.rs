// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::config::CallConfiguration;
use crate::errors::EngineError;
use crate::file::RecordValue;
use crate::traits::{Engine, EngineStatus};

/// What a `SpyEngine` saw during one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub paths: Vec<String>,
    pub input: String,
    pub plugins: Vec<String>,
}

/// An engine that uppercases text and remembers every call.
///
/// Plugins are plain names. A record with a numeric `delayMs` entry in its
/// data sleeps that long before completing.
pub struct SpyEngine {
    calls: AtomicUsize,
    observations: Mutex<Vec<Observation>>,
}

impl SpyEngine {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            observations: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn observations(&self) -> Vec<Observation> {
        self.observations.lock().unwrap().clone()
    }
}

#[async_trait]
impl Engine for SpyEngine {
    type Plugin = str;

    fn name(&self) -> &str {
        "spy"
    }

    async fn run(&self, call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let plugins: Vec<String> = call
            .plugins
            .snapshot()
            .iter()
            .map(|entry| entry.plugin().to_string())
            .collect();
        let delay = call
            .files
            .first()
            .and_then(|record| record.data.get("delayMs"))
            .and_then(Value::as_u64);
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        let mut input = String::new();
        for record in call.files.iter_mut() {
            input = record.value.as_text().unwrap_or_default().into_owned();
            record.value = RecordValue::Text(input.to_uppercase());
            record.data.insert("plugins".to_string(), json!(plugins));
            call.diagnostics.write(&format!("{}: processed\n", record.display_path()));
        }

        self.observations.lock().unwrap().push(Observation {
            paths: call.files.iter().map(|r| r.display_path()).collect(),
            input,
            plugins,
        });

        Ok(EngineStatus::Success)
    }
}

/// An engine that always returns an error object.
pub struct FailingEngine {
    message: String,
}

impl FailingEngine {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Engine for FailingEngine {
    type Plugin = str;

    fn name(&self) -> &str {
        "failing"
    }

    async fn run(&self, call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError> {
        call.diagnostics.write("failing engine report\n");
        Err(EngineError::Fatal(self.message.clone()))
    }
}

/// An engine that only reports a failure status.
pub struct StatusEngine;

#[async_trait]
impl Engine for StatusEngine {
    type Plugin = str;

    fn name(&self) -> &str {
        "status"
    }

    async fn run(&self, _call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError> {
        Ok(EngineStatus::Failure)
    }
}

/// An engine that panics mid-run.
pub struct PanickingEngine;

#[async_trait]
impl Engine for PanickingEngine {
    type Plugin = str;

    fn name(&self) -> &str {
        "panicking"
    }

    async fn run(&self, call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError> {
        if !call.files.is_empty() {
            panic!("engine exploded");
        }
        Ok(EngineStatus::Success)
    }
}
