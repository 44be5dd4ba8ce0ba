// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::EngineOptions;
use crate::errors::SettingsError;

/// Settings for a node built by the command line tool.
///
/// # Example
/// ```yaml
/// name: markdown-html
/// options:
///   frail: false
///   ignorePatterns: ["**/ignored.md"]
/// rules: [no-consecutive-blank-lines]
/// plugins:
///   - slug
///   - name: html
/// ```
#[derive(Debug, Deserialize)]
pub struct NodeSettings {
    pub name: String,
    /// Factory-level options.
    #[serde(default)]
    pub options: EngineOptions,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<PluginSetting>,
}

/// A plugin by name, optionally with options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PluginSetting {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        options: Vec<Value>,
    },
}

impl PluginSetting {
    pub fn name(&self) -> &str {
        match self {
            PluginSetting::Name(name) | PluginSetting::Detailed { name, .. } => name,
        }
    }

    pub fn options(&self) -> &[Value] {
        match self {
            PluginSetting::Name(_) => &[],
            PluginSetting::Detailed { options, .. } => options,
        }
    }
}

/// Load node settings from a YAML or TOML file, picked by extension.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<NodeSettings, SettingsError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let content = fs::read_to_string(path)?;

    match extension.as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        "toml" => Ok(toml::from_str(&content)?),
        other => Err(SettingsError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn parse_basic_settings() {
        let yaml = r#"
name: markdown-html
options:
  frail: true
rules: [no-consecutive-blank-lines]
plugins:
  - slug
  - name: html
  - name: slug
    options: [{prefix: "user-content-"}]
"#;

        let settings: NodeSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.name, "markdown-html");
        assert!(settings.options.is_frail());
        assert_eq!(settings.rules, vec!["no-consecutive-blank-lines"]);
        assert_eq!(settings.plugins.len(), 3);
        assert_eq!(settings.plugins[0], PluginSetting::Name("slug".to_string()));
        assert_eq!(settings.plugins[1].name(), "html");
        assert!(settings.plugins[1].options().is_empty());
        assert_eq!(settings.plugins[2].options(), &[json!({"prefix": "user-content-"})]);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: lint\nplugins: [html]").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.name, "lint");
        assert_eq!(settings.plugins, vec![PluginSetting::Name("html".to_string())]);
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "name = \"lint\"\nrules = [\"no-consecutive-blank-lines\"]\n\n[options]\nquiet = true"
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.name, "lint");
        assert!(settings.options.is_quiet());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let file = Builder::new().suffix(".ini").tempfile().unwrap();
        let result = load_settings(file.path());
        assert!(matches!(result, Err(SettingsError::UnsupportedFormat(ext)) if ext == "ini"));
    }
}
