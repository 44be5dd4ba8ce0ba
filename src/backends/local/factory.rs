// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::plugins::{HtmlPlugin, LocalPlugin, SlugPlugin};
use super::rules::{NoConsecutiveBlankLines, Rule};

/// Factory for local plugins and lint rules, looked up by name.
pub struct LocalPluginFactory;

impl LocalPluginFactory {
    /// Create a plugin by name:
    /// - "slug" -> SlugPlugin
    /// - "html" -> HtmlPlugin
    pub fn create_plugin(name: &str) -> Result<Arc<dyn LocalPlugin>, String> {
        match name {
            "slug" => Ok(Arc::new(SlugPlugin)),
            "html" => Ok(Arc::new(HtmlPlugin)),
            _ => Err(format!("Unknown local plugin: '{}'", name)),
        }
    }

    /// Create a lint rule by id.
    pub fn create_rule(name: &str) -> Result<Arc<dyn Rule>, String> {
        match name {
            "no-consecutive-blank-lines" => Ok(Arc::new(NoConsecutiveBlankLines)),
            _ => Err(format!("Unknown lint rule: '{}'", name)),
        }
    }

    pub fn list_available_plugins() -> Vec<&'static str> {
        vec!["slug", "html"]
    }

    pub fn list_available_rules() -> Vec<&'static str> {
        vec!["no-consecutive-blank-lines"]
    }

    pub fn is_plugin_available(name: &str) -> bool {
        Self::list_available_plugins().contains(&name)
    }

    pub fn is_rule_available(name: &str) -> bool {
        Self::list_available_rules().contains(&name)
    }
}
