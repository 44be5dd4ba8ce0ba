// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Engine backends.
//!
//! ## Local Backend
//! An in-process markdown engine:
//! - **Parsing**: ATX headings and paragraphs, with source lines tracked
//! - **Linting**: Rules attach positioned warnings to each record
//! - **Plugins**: Heading slugs and an HTML compiler, created by name
//!
//! ## Stub Backend (Test-Only)
//! Engines for exercising the node machinery (only available in test builds):
//! - **SpyEngine**: Records every call and uppercases its input
//! - **FailingEngine**: Completes with an error object
//! - **StatusEngine**: Completes with an unsuccessful status
//! - **PanickingEngine**: Crashes mid-run
//!
//! # Examples
//!
//! ```rust
//! use engine_node::backends::local::{LocalEngine, LocalPlugin, LocalPluginFactory};
//!
//! let engine = LocalEngine::new()
//!     .with_rule(LocalPluginFactory::create_rule("no-consecutive-blank-lines")?);
//! let slug = LocalPluginFactory::create_plugin("slug")?;
//! assert_eq!(slug.name(), "slug");
//! assert_eq!(engine.rule_ids(), vec!["no-consecutive-blank-lines"]);
//! # Ok::<(), String>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
