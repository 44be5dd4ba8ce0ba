// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncRead;

/// Payload of a pipeline file.
pub enum Contents {
    /// No contents at all. Such files pass through a node untouched.
    Null,
    /// Fully materialized bytes.
    Buffer(Vec<u8>),
    /// A lazily read stream. Nodes reject these.
    Stream(Box<dyn AsyncRead + Send + Unpin>),
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contents::Null => write!(f, "Null"),
            Contents::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            Contents::Stream(_) => write!(f, "Stream"),
        }
    }
}

/// One logical file travelling through the build pipeline.
///
/// On success a node replaces `contents` and `data` and stores the engine
/// report in `report`. On failure the file is not emitted at all.
#[derive(Debug)]
pub struct PipelineFile {
    pub path: PathBuf,
    pub contents: Contents,
    pub data: Map<String, Value>,
    pub report: Option<String>,
}

impl PipelineFile {
    /// A file with no contents.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Null,
            data: Map::new(),
            report: None,
        }
    }

    pub fn with_buffer(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Contents::Buffer(bytes.into()),
            ..Self::new(path)
        }
    }

    pub fn with_stream(path: impl Into<PathBuf>, stream: impl AsyncRead + Send + Unpin + 'static) -> Self {
        Self {
            contents: Contents::Stream(Box::new(stream)),
            ..Self::new(path)
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_null(&self) -> bool {
        matches!(self.contents, Contents::Null)
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self.contents, Contents::Buffer(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.contents, Contents::Stream(_))
    }

    /// Buffer contents, if the file has any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Buffer contents as text, lossily decoded.
    pub fn text(&self) -> Option<String> {
        self.bytes()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
