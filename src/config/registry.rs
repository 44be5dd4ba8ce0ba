// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A registered plugin together with the options it was registered with.
pub struct PluginEntry<P: ?Sized> {
    plugin: Arc<P>,
    options: Vec<Value>,
}

impl<P: ?Sized> PluginEntry<P> {
    pub fn new(plugin: Arc<P>, options: Vec<Value>) -> Self {
        Self { plugin, options }
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl<P: ?Sized> Clone for PluginEntry<P> {
    fn clone(&self) -> Self {
        Self {
            plugin: Arc::clone(&self.plugin),
            options: self.options.clone(),
        }
    }
}

/// Something that can be handed to `PipelineNode::register`.
pub enum Pluggable<P: ?Sized> {
    /// A single plugin and its options.
    Plugin(Arc<P>, Vec<Value>),
    /// An ordered group of plugins registered together.
    Preset(Vec<Pluggable<P>>),
}

impl<P: ?Sized> Pluggable<P> {
    pub fn plugin(plugin: Arc<P>) -> Self {
        Pluggable::Plugin(plugin, Vec::new())
    }

    pub fn with_options(plugin: Arc<P>, options: Vec<Value>) -> Self {
        Pluggable::Plugin(plugin, options)
    }

    pub fn preset(items: Vec<Pluggable<P>>) -> Self {
        Pluggable::Preset(items)
    }

    fn flatten_into(self, entries: &mut Vec<PluginEntry<P>>) {
        match self {
            Pluggable::Plugin(plugin, options) => entries.push(PluginEntry::new(plugin, options)),
            Pluggable::Preset(items) => {
                for item in items {
                    item.flatten_into(entries);
                }
            }
        }
    }
}

/// Ordered, append-only list of plugins owned by one pipeline node.
///
/// Cloning the registry clones the handle, not the list: every invocation
/// reads the same entries, so a registration made between two files applies
/// to the second one. Registration order is execution order.
pub struct PluginRegistry<P: ?Sized> {
    entries: Arc<RwLock<Vec<PluginEntry<P>>>>,
}

impl<P: ?Sized> PluginRegistry<P> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a plugin or preset. Presets are flattened in order.
    ///
    /// No validation happens here; a bad plugin is for the engine to report.
    pub fn push(&self, pluggable: Pluggable<P>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        pluggable.flatten_into(&mut entries);
    }

    /// Point-in-time view of the registered entries.
    pub fn snapshot(&self) -> Vec<PluginEntry<P>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both handles refer to the same list.
    pub fn same_registry(&self, other: &PluginRegistry<P>) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<P: ?Sized> Default for PluginRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Clone for PluginRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<P: ?Sized> fmt::Debug for PluginRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugin_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(registry: &PluginRegistry<str>) -> Vec<String> {
        registry
            .snapshot()
            .iter()
            .map(|entry| entry.plugin().to_string())
            .collect()
    }

    #[test]
    fn test_registration_order_is_kept() {
        let registry: PluginRegistry<str> = PluginRegistry::new();
        registry.push(Pluggable::plugin(Arc::from("slug")));
        registry.push(Pluggable::with_options(Arc::from("html"), vec![json!({"sanitize": false})]));

        assert_eq!(names(&registry), vec!["slug", "html"]);
        assert_eq!(registry.snapshot()[1].options(), &[json!({"sanitize": false})]);
    }

    #[test]
    fn test_presets_are_flattened_in_place() {
        let registry: PluginRegistry<str> = PluginRegistry::new();
        registry.push(Pluggable::plugin(Arc::from("first")));
        registry.push(Pluggable::preset(vec![
            Pluggable::plugin(Arc::from("a")),
            Pluggable::preset(vec![Pluggable::plugin(Arc::from("b"))]),
        ]));
        registry.push(Pluggable::plugin(Arc::from("last")));

        assert_eq!(names(&registry), vec!["first", "a", "b", "last"]);
    }

    #[test]
    fn test_clones_share_entries() {
        let registry: PluginRegistry<str> = PluginRegistry::new();
        let handle = registry.clone();
        handle.push(Pluggable::plugin(Arc::from("late")));

        assert_eq!(registry.len(), 1);
        assert!(registry.same_registry(&handle));
        assert!(!registry.same_registry(&PluginRegistry::new()));
    }
}
