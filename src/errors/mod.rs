// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod engine;
mod node;

pub use config::{ConfigurationError, ConversionError, SettingsError};
pub use engine::EngineError;
pub use node::NodeError;
