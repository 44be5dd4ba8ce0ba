// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod assembler;
mod loader;
mod options;
mod registry;

pub mod consts;

pub use assembler::{assemble, validate_name, CallConfiguration, NodeConfiguration};
pub use loader::{load_settings, NodeSettings, PluginSetting};
pub use options::EngineOptions;
pub use registry::{Pluggable, PluginEntry, PluginRegistry};
