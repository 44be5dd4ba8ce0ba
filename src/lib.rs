// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;     // engine backends
pub mod config;       // options, registry, call assembly
pub mod diagnostics;  // per-invocation report sinks
pub mod errors;       // error handling
pub mod file;         // pipeline files and engine records
pub mod node;         // factory and pipeline nodes
pub mod observability;
pub mod traits;       // engine contract
