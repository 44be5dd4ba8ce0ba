// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fixed values used by the adapter.

/// Raised when a factory is created without a usable name.
pub const MISSING_NAME: &str = "Expected `name` in `configuration`";

/// Message for stream-backed files.
pub const STREAMING_NOT_SUPPORTED: &str = "Streaming not supported";

/// Message used when the engine signals failure without an error object.
pub const UNSUCCESSFUL_RUNNING: &str = "Unsuccessful running";

/// Conversion was asked for a file with no contents.
pub const NO_CONTENTS: &str = "File has no contents";

/// The engine finished successfully but handed back no record.
pub const RECORD_LOST: &str = "Engine completed without returning the file";

/// A cancelled engine task that did not panic.
pub const ENGINE_CANCELLED: &str = "Engine task was cancelled";

/// Locked: non-matching files are skipped without a report.
pub const LOCKED_SILENTLY_IGNORE: bool = true;

/// Locked: the engine always serializes the processed tree.
pub const LOCKED_ALWAYS_STRINGIFY: bool = true;

/// Locked: the engine never writes files itself.
pub const LOCKED_OUTPUT: bool = false;

/// Buffer size of the channel returned by `PipelineNode::pipe`.
pub const PIPE_CAPACITY: usize = 16;
