// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log lines are built from small message structs that implement `Display`
//! and `StructuredLog`, so the same event always renders the same way and
//! carries the same fields:
//!
//! * `messages::node` - node creation, plugin registration, file routing
//! * `messages::engine` - engine dispatch and completion
//!
//! # Usage
//!
//! ```rust
//! use engine_node::observability::messages::node::FileRejected;
//! use engine_node::observability::messages::StructuredLog;
//!
//! let msg = FileRejected {
//!     node: "gulp-example",
//!     path: "readme.md",
//!     reason: "Streaming not supported",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
