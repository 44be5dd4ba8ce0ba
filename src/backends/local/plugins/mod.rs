// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Plugins for the local engine.
//!
//! A plugin may transform the tree, supply a compiler, or both. Transforms
//! run in registration order; the compiler of the last plugin that offers
//! one is used.

pub mod html;
pub mod slug;

pub use html::HtmlPlugin;
pub use slug::SlugPlugin;

use serde_json::Value;

use crate::backends::local::markdown::Document;
use crate::errors::EngineError;
use crate::file::EngineRecord;

pub trait LocalPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(&self, _tree: &mut Document, _record: &mut EngineRecord, _options: &[Value]) -> Result<(), EngineError> {
        Ok(())
    }

    fn compile(&self, _tree: &Document, _options: &[Value]) -> Option<String> {
        None
    }
}
