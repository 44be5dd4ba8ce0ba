// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod invocation;
pub mod pipeline_node;

pub use factory::{create_factory, EngineFactory, FactoryConfig};
pub use invocation::{Completion, Disposition, Invocation};
pub use pipeline_node::PipelineNode;
