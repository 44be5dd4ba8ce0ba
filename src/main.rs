// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine_node::backends::local::{LocalEngine, LocalPluginFactory};
use engine_node::config::consts::PIPE_CAPACITY;
use engine_node::config::{load_settings, EngineOptions, NodeSettings, Pluggable};
use engine_node::diagnostics::DiagnosticSink;
use engine_node::errors::SettingsError;
use engine_node::file::PipelineFile;
use engine_node::node::{create_factory, FactoryConfig, PipelineNode};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <settings.yaml|settings.toml> <file.md> [file.md ...]", args[0]);
        eprintln!("Example: {} configs/markdown-html.yaml README.md", args[0]);
        std::process::exit(2);
    }

    let settings = load_settings(&args[1]).with_context(|| format!("Failed to load settings from {}", args[1]))?;
    let reports = DiagnosticSink::new();
    let node = build_node(settings, reports.clone())?;

    let (tx, rx) = mpsc::channel(PIPE_CAPACITY);
    let mut results = node.pipe(rx);

    let files = read_inputs(&args[2..]).await?;

    tokio::spawn(async move {
        for file in files {
            if tx.send(file).await.is_err() {
                break;
            }
        }
    });

    let mut failures = 0;
    while let Some(result) = results.recv().await {
        match result {
            Ok(file) => {
                if let Some(text) = file.text() {
                    println!("==> {} <==", file.path().display());
                    print!("{}", text);
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("❌ {}", e);
            }
        }
    }

    eprint!("{}", reports.contents());

    if failures > 0 {
        bail!("{} file(s) failed", failures);
    }
    Ok(())
}

/// Read every input up front. An unreadable input stops the run.
async fn read_inputs(paths: &[String]) -> Result<Vec<PipelineFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read input {}", path))?;
        files.push(PipelineFile::with_buffer(path, bytes));
    }
    Ok(files)
}

fn build_node(settings: NodeSettings, reports: DiagnosticSink) -> Result<PipelineNode<LocalEngine>> {
    let mut engine = LocalEngine::new();
    for rule in &settings.rules {
        let rule = LocalPluginFactory::create_rule(rule).map_err(|_| SettingsError::Unknown {
            kind: "rule",
            name: rule.clone(),
        })?;
        engine = engine.with_rule(rule);
    }

    let factory = create_factory(FactoryConfig::new(settings.name, engine).with_options(settings.options))?;
    let node = factory.node(EngineOptions {
        stream_error: Some(reports),
        ..Default::default()
    });

    let mut plugins = Vec::new();
    for setting in &settings.plugins {
        let plugin = LocalPluginFactory::create_plugin(setting.name()).map_err(|_| SettingsError::Unknown {
            kind: "plugin",
            name: setting.name().to_string(),
        })?;
        plugins.push(Pluggable::with_options(plugin, setting.options().to_vec()));
    }
    if !plugins.is_empty() {
        node.register(Pluggable::preset(plugins));
    }

    Ok(node)
}
