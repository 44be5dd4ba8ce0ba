// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use glob::Pattern;
use std::path::Path;
use std::sync::Arc;

use super::markdown::{Document, HeadingStyle};
use super::plugins::LocalPlugin;
use super::reporter::{report, ReportOptions};
use super::rules::{NoConsecutiveBlankLines, Rule};
use crate::config::{CallConfiguration, EngineOptions, PluginEntry};
use crate::errors::EngineError;
use crate::file::{EngineRecord, RecordValue};
use crate::traits::{Engine, EngineStatus};

/// Reported when a path hint is combined with real files.
pub const FILE_PATH_CONFLICT: &str =
    "Do not pass both `--file-path` and real files.\nDid you mean to pass stdin instead of files?";

/// In-process markdown engine.
///
/// Per record: parse, run the configured rules, run plugin transforms in
/// registration order, then compile. Reports for every processed record go
/// to the call's diagnostic sink.
pub struct LocalEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl LocalEngine {
    /// An engine with no lint rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// An engine with every built-in rule enabled.
    pub fn with_default_rules() -> Self {
        Self::new().with_rule(Arc::new(NoConsecutiveBlankLines))
    }

    pub fn with_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    fn process(&self, record: &mut EngineRecord, plugins: &[PluginEntry<dyn LocalPlugin>], options: &EngineOptions) {
        let text = match record.value.as_text() {
            Ok(text) => text.into_owned(),
            Err(error) => {
                record.fail(format!("Cannot process file as UTF-8: {}", error));
                return;
            }
        };

        let mut tree = Document::parse(&text);
        for rule in &self.rules {
            rule.check(&tree, record);
        }

        for entry in plugins {
            if let Err(error) = entry.plugin().transform(&mut tree, record, entry.options()) {
                record.fail(error.to_string());
                return;
            }
        }

        if !options.always_stringify.unwrap_or(false) && plugins.is_empty() {
            return;
        }

        let style = HeadingStyle::from_setting(options.setting("headingStyle").and_then(|v| v.as_str()));
        let compiled = plugins
            .iter()
            .rev()
            .find_map(|entry| entry.plugin().compile(&tree, entry.options()))
            .unwrap_or_else(|| tree.to_markdown(style));
        record.value = RecordValue::Text(compiled);
    }
}

impl Default for LocalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Engine for LocalEngine {
    type Plugin = dyn LocalPlugin;

    fn name(&self) -> &str {
        "local-markdown"
    }

    async fn run(&self, call: &mut CallConfiguration<Self>) -> Result<EngineStatus, EngineError> {
        let options = &call.options;
        if options.file_path.is_some() && !call.files.is_empty() {
            return Err(EngineError::Fatal(FILE_PATH_CONFLICT.to_string()));
        }

        let ignore = compile_patterns(options.ignore_patterns.as_deref().unwrap_or_default())?;
        let silently_ignore = options.silently_ignore.unwrap_or(false);
        let plugins = call.plugins.snapshot();

        let mut processed = Vec::new();
        for (index, record) in call.files.iter_mut().enumerate() {
            let skipped = is_ignored(&record.path, &ignore) || !matches_extension(&record.path, options);
            if skipped {
                if !silently_ignore {
                    record.fail("Cannot process specified file: it's ignored");
                    processed.push(index);
                }
                continue;
            }

            self.process(record, &plugins, options);
            processed.push(index);
        }

        let reported: Vec<&EngineRecord> = processed.iter().map(|&index| &call.files[index]).collect();
        let output = report(
            reported.iter().copied(),
            ReportOptions {
                quiet: options.is_quiet(),
                silent: options.is_silent(),
            },
        );
        call.diagnostics.write(&output);

        let failed = reported.iter().any(|record| record.has_fatal())
            || (options.is_frail() && reported.iter().any(|record| record.has_warnings()));

        if failed {
            Ok(EngineStatus::Failure)
        } else {
            Ok(EngineStatus::Success)
        }
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, EngineError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|error| EngineError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                reason: error.to_string(),
            })
        })
        .collect()
}

fn is_ignored(path: &Path, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches_path(path))
}

fn matches_extension(path: &Path, options: &EngineOptions) -> bool {
    let Some(extensions) = &options.extensions else {
        return true;
    };
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.trim_start_matches('.') == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::plugins::{HtmlPlugin, SlugPlugin};
    use crate::config::{assemble, NodeConfiguration, Pluggable, PluginRegistry};
    use crate::diagnostics::DiagnosticSink;
    use serde_json::json;

    const INPUT: &str = "# h1\n\n\n## h2\n";
    const REPORT: &str = "readme.md\n  4:1  warning  Remove 1 line before node  no-consecutive-blank-lines  remark-lint\n\n⚠ 1 warning\n";

    fn call(
        engine: &Arc<LocalEngine>,
        options: EngineOptions,
        registry: &PluginRegistry<dyn LocalPlugin>,
        path: &str,
    ) -> CallConfiguration<LocalEngine> {
        let node = NodeConfiguration::merge("local", options, &EngineOptions::default());
        assemble(engine, &node, registry, DiagnosticSink::new())
            .with_record(EngineRecord::new(path, RecordValue::Bytes(INPUT.as_bytes().to_vec())))
    }

    fn text(call: &CallConfiguration<LocalEngine>) -> String {
        call.files[0].value.as_text().unwrap().into_owned()
    }

    #[tokio::test]
    async fn test_stringifies_and_reports() {
        let engine = Arc::new(LocalEngine::with_default_rules());
        let mut call = call(&engine, EngineOptions::default(), &PluginRegistry::new(), "readme.md");

        let status = engine.run(&mut call).await.unwrap();

        assert_eq!(status, EngineStatus::Success);
        assert_eq!(text(&call), "# h1\n\n## h2\n");
        assert_eq!(call.diagnostics.contents(), REPORT);
    }

    #[tokio::test]
    async fn test_plugins_run_in_order() {
        let engine = Arc::new(LocalEngine::with_default_rules());
        let registry: PluginRegistry<dyn LocalPlugin> = PluginRegistry::new();
        registry.push(Pluggable::plugin(Arc::new(SlugPlugin)));
        registry.push(Pluggable::plugin(Arc::new(HtmlPlugin)));
        let mut call = call(&engine, EngineOptions::default(), &registry, "readme.md");

        engine.run(&mut call).await.unwrap();

        assert_eq!(text(&call), "<h1 id=\"h1\">h1</h1>\n<h2 id=\"h2\">h2</h2>\n");
        assert_eq!(call.files[0].data.get("headingIds"), Some(&json!(["h1", "h2"])));
    }

    #[tokio::test]
    async fn test_frail_turns_warnings_into_failure() {
        let engine = Arc::new(LocalEngine::with_default_rules());
        let options = EngineOptions {
            frail: Some(true),
            ..Default::default()
        };
        let mut call = call(&engine, options, &PluginRegistry::new(), "readme.md");

        assert_eq!(engine.run(&mut call).await.unwrap(), EngineStatus::Failure);
        assert_eq!(call.diagnostics.contents(), REPORT);
    }

    #[tokio::test]
    async fn test_file_path_with_real_files_is_fatal() {
        let engine = Arc::new(LocalEngine::new());
        let options = EngineOptions {
            file_path: Some("!".to_string()),
            ..Default::default()
        };
        let mut call = call(&engine, options, &PluginRegistry::new(), "readme.md");

        let error = engine.run(&mut call).await.unwrap_err();
        assert!(error.to_string().starts_with("Do not pass both `--file-path` and real files"));
    }

    #[tokio::test]
    async fn test_ignored_file_is_untouched_and_unreported() {
        let engine = Arc::new(LocalEngine::with_default_rules());
        let options = EngineOptions {
            ignore_patterns: Some(vec!["**/ignored.md".to_string(), "ignored.md".to_string()]),
            ..Default::default()
        };
        let mut call = call(&engine, options, &PluginRegistry::new(), "ignored.md");

        assert_eq!(engine.run(&mut call).await.unwrap(), EngineStatus::Success);
        assert_eq!(text(&call), INPUT);
        assert_eq!(call.diagnostics.contents(), "");
    }

    #[tokio::test]
    async fn test_invalid_ignore_pattern() {
        let engine = Arc::new(LocalEngine::new());
        let options = EngineOptions {
            ignore_patterns: Some(vec!["[".to_string()]),
            ..Default::default()
        };
        let mut call = call(&engine, options, &PluginRegistry::new(), "readme.md");

        let error = engine.run(&mut call).await.unwrap_err();
        assert!(matches!(error, EngineError::InvalidIgnorePattern { pattern, .. } if pattern == "["));
    }

    #[tokio::test]
    async fn test_plugin_option_error_fails_the_file() {
        let engine = Arc::new(LocalEngine::new());
        let registry: PluginRegistry<dyn LocalPlugin> = PluginRegistry::new();
        registry.push(Pluggable::with_options(Arc::new(SlugPlugin), vec![json!({"prefix": false})]));
        let mut call = call(&engine, EngineOptions::default(), &registry, "readme.md");

        assert_eq!(engine.run(&mut call).await.unwrap(), EngineStatus::Failure);
        assert!(call.diagnostics.contents().contains("Invalid options for plugin 'slug'"));
        assert_eq!(text(&call), INPUT);
    }

    #[tokio::test]
    async fn test_heading_style_setting() {
        let engine = Arc::new(LocalEngine::new());
        let mut settings = serde_json::Map::new();
        settings.insert("headingStyle".to_string(), json!("atx-closed"));
        let options = EngineOptions {
            settings: Some(settings),
            ..Default::default()
        };
        let mut call = call(&engine, options, &PluginRegistry::new(), "readme.md");

        engine.run(&mut call).await.unwrap();
        assert_eq!(text(&call), "# h1 #\n\n## h2 ##\n");
    }
}
