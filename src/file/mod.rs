// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! File representations on both sides of the adapter.
//!
//! * `PipelineFile` - what flows through the build pipeline
//! * `EngineRecord` - what the engine reads and mutates
//! * `convert` - the mapping between the two

mod convert;
mod pipeline_file;
mod record;

pub use convert::{from_engine_record, to_engine_record};
pub use pipeline_file::{Contents, PipelineFile};
pub use record::{EngineRecord, Message, RecordValue, Severity};
