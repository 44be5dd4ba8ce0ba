// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lint rules the local engine runs before any plugin.

pub mod no_consecutive_blank_lines;

pub use no_consecutive_blank_lines::NoConsecutiveBlankLines;

use crate::backends::local::markdown::Document;
use crate::file::EngineRecord;

/// Source label attached to rule messages.
pub const RULE_SOURCE: &str = "remark-lint";

pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;

    /// Inspect the tree and attach messages to the record.
    fn check(&self, tree: &Document, record: &mut EngineRecord);
}
