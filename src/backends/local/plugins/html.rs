// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::LocalPlugin;
use crate::backends::local::markdown::{Block, Document};

/// Compiles the tree to HTML instead of markdown.
pub struct HtmlPlugin;

impl LocalPlugin for HtmlPlugin {
    fn name(&self) -> &'static str {
        "html"
    }

    fn compile(&self, tree: &Document, _options: &[Value]) -> Option<String> {
        let mut html = String::new();
        for node in &tree.nodes {
            match &node.block {
                Block::Heading { depth, text, id } => {
                    let id = id
                        .as_ref()
                        .map(|id| format!(" id=\"{}\"", escape(id)))
                        .unwrap_or_default();
                    html.push_str(&format!("<h{depth}{id}>{}</h{depth}>\n", escape(text)));
                }
                Block::Paragraph { text } => {
                    html.push_str(&format!("<p>{}</p>\n", escape(text)));
                }
            }
        }
        Some(html)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
