// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{validate_name, EngineOptions, NodeConfiguration};
use crate::errors::ConfigurationError;
use crate::node::PipelineNode;
use crate::observability::messages::node::NodeCreated;
use crate::observability::messages::StructuredLog;
use crate::traits::Engine;

/// What a caller supplies once, when wrapping an engine.
pub struct FactoryConfig<E: Engine> {
    /// Labels every error the resulting nodes surface. Must not be empty.
    pub name: String,
    pub engine: Arc<E>,
    /// Defaults that win over per-call options.
    pub options: EngineOptions,
}

impl<E: Engine> FactoryConfig<E> {
    pub fn new(name: impl Into<String>, engine: E) -> Self {
        Self {
            name: name.into(),
            engine: Arc::new(engine),
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }
}

/// Produces pipeline nodes around one engine.
///
/// # Examples
/// ```rust
/// use engine_node::backends::local::LocalEngine;
/// use engine_node::config::EngineOptions;
/// use engine_node::node::{EngineFactory, FactoryConfig};
///
/// let factory = EngineFactory::new(FactoryConfig::new("markdown", LocalEngine::new())).unwrap();
/// let node = factory.node(EngineOptions::default());
/// assert_eq!(node.name(), "markdown");
///
/// assert!(EngineFactory::new(FactoryConfig::new("", LocalEngine::new())).is_err());
/// ```
pub struct EngineFactory<E: Engine> {
    name: String,
    engine: Arc<E>,
    options: EngineOptions,
}

impl<E: Engine> EngineFactory<E> {
    /// Validate the factory configuration. Fails if the name is empty.
    pub fn new(config: FactoryConfig<E>) -> Result<Self, ConfigurationError> {
        validate_name(&config.name)?;
        Ok(Self {
            name: config.name,
            engine: config.engine,
            options: config.options,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Create a node with its own registry. Never calls the engine.
    pub fn node(&self, per_call: EngineOptions) -> PipelineNode<E> {
        let config = NodeConfiguration::merge(self.name.clone(), per_call, &self.options);
        NodeCreated {
            node: &self.name,
            engine: self.engine.name(),
        }
        .log();
        PipelineNode::new(Arc::clone(&self.engine), config)
    }
}

/// Shorthand for `EngineFactory::new`.
pub fn create_factory<E: Engine>(config: FactoryConfig<E>) -> Result<EngineFactory<E>, ConfigurationError> {
    EngineFactory::new(config)
}
