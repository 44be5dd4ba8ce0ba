// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod engine;
pub mod factory;
pub mod markdown;
pub mod plugins;
pub mod reporter;
pub mod rules;

pub use engine::LocalEngine;
pub use factory::LocalPluginFactory;
pub use plugins::{HtmlPlugin, LocalPlugin, SlugPlugin};
