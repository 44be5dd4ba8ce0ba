// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::path::PathBuf;
use std::str::Utf8Error;

/// The value an engine works on. Engines may replace bytes with text.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Bytes(Vec<u8>),
    Text(String),
}

impl RecordValue {
    pub fn as_text(&self) -> Result<Cow<'_, str>, Utf8Error> {
        match self {
            RecordValue::Bytes(bytes) => std::str::from_utf8(bytes).map(Cow::Borrowed),
            RecordValue::Text(text) => Ok(Cow::Borrowed(text)),
        }
    }

    /// Normalize to bytes. Text is encoded as UTF-8.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RecordValue::Bytes(bytes) => bytes,
            RecordValue::Text(text) => text.into_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordValue::Bytes(bytes) => bytes.len(),
            RecordValue::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Fatal,
}

/// A diagnostic the engine attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub reason: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub rule_id: Option<String>,
    pub source: Option<String>,
    pub severity: Severity,
}

impl Message {
    pub fn new(reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            reason: reason.into(),
            line: None,
            column: None,
            rule_id: None,
            source: None,
            severity,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn origin(mut self, source: impl Into<String>, rule_id: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.rule_id = Some(rule_id.into());
        self
    }
}

/// Input record for one engine run.
///
/// Built fresh from a pipeline file for every invocation and owned by that
/// invocation alone.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineRecord {
    pub value: RecordValue,
    pub path: PathBuf,
    pub data: Map<String, Value>,
    pub messages: Vec<Message>,
}

impl EngineRecord {
    pub fn new(path: impl Into<PathBuf>, value: RecordValue) -> Self {
        Self {
            value,
            path: path.into(),
            data: Map::new(),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record a fatal message.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.push(Message::new(reason, Severity::Fatal));
    }

    pub fn has_fatal(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Fatal)
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Warning)
    }

    /// Path as shown in reports.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_normalization() {
        assert_eq!(RecordValue::Text("h1".to_string()).into_bytes(), b"h1".to_vec());
        assert_eq!(RecordValue::Bytes(vec![0xff]).into_bytes(), vec![0xff]);
        assert!(RecordValue::Bytes(vec![0xff]).as_text().is_err());
    }

    #[test]
    fn test_message_severity_queries() {
        let mut record = EngineRecord::new("readme.md", RecordValue::Text(String::new()));
        assert!(!record.has_fatal());

        record.push(Message::new("Remove 1 line before node", Severity::Warning).at(4, 1));
        assert!(record.has_warnings());
        assert!(!record.has_fatal());

        record.fail("Cannot parse");
        assert!(record.has_fatal());
    }
}
