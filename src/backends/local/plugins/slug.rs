// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

use super::LocalPlugin;
use crate::backends::local::markdown::Document;
use crate::errors::EngineError;
use crate::file::EngineRecord;

/// Gives every heading a GitHub-style id.
///
/// Options: an optional object `{"prefix": "..."}` prepended to each id.
/// The ids are also recorded in the record data under `headingIds`.
pub struct SlugPlugin;

impl SlugPlugin {
    fn prefix(&self, options: &[Value]) -> Result<String, EngineError> {
        let Some(first) = options.first() else {
            return Ok(String::new());
        };
        match first.get("prefix") {
            None => Ok(String::new()),
            Some(Value::String(prefix)) => Ok(prefix.clone()),
            Some(other) => Err(EngineError::InvalidPluginOptions {
                plugin: self.name().to_string(),
                reason: format!("`prefix` must be a string, got {}", other),
            }),
        }
    }
}

impl LocalPlugin for SlugPlugin {
    fn name(&self) -> &'static str {
        "slug"
    }

    fn transform(&self, tree: &mut Document, record: &mut EngineRecord, options: &[Value]) -> Result<(), EngineError> {
        let prefix = self.prefix(options)?;
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut ids = Vec::new();

        for (text, id) in tree.headings_mut() {
            let base = slugify(text);
            let count = counts.entry(base.clone()).or_insert(0);
            let mut slug = base.clone();
            while seen.contains(&slug) {
                *count += 1;
                slug = format!("{}-{}", base, count);
            }
            seen.insert(slug.clone());

            let full = format!("{}{}", prefix, slug);
            ids.push(full.clone());
            *id = Some(full);
        }

        record.data.insert("headingIds".to_string(), json!(ids));
        Ok(())
    }
}

/// Lowercase, drop punctuation, turn spaces into dashes.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
