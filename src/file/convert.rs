// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConversionError;
use crate::file::{Contents, EngineRecord, PipelineFile, RecordValue};

/// Build an engine record from a pipeline file.
///
/// The file itself is left untouched; the record gets its own copy of the
/// contents and metadata.
pub fn to_engine_record(file: &PipelineFile) -> Result<EngineRecord, ConversionError> {
    match &file.contents {
        Contents::Stream(_) => Err(ConversionError::Streaming),
        Contents::Null => Err(ConversionError::NoContents),
        Contents::Buffer(bytes) => {
            let mut record = EngineRecord::new(file.path.clone(), RecordValue::Bytes(bytes.clone()));
            record.data = file.data.clone();
            Ok(record)
        }
    }
}

/// Write an engine record back onto its pipeline file.
///
/// Contents become bytes; metadata is replaced, not merged.
pub fn from_engine_record(record: EngineRecord, mut file: PipelineFile) -> PipelineFile {
    file.contents = Contents::Buffer(record.value.into_bytes());
    file.data = record.data;
    file
}
