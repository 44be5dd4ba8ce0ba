// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A small markdown tree: ATX headings and paragraphs, with line positions.

/// Block content of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        depth: u8,
        text: String,
        id: Option<String>,
    },
    Paragraph {
        text: String,
    },
}

/// A block plus the 1-based lines it spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub block: Block,
    pub start_line: usize,
    pub end_line: usize,
}

/// How headings are written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    #[default]
    Atx,
    /// `# Title #`
    AtxClosed,
}

impl HeadingStyle {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("atx-closed") => HeadingStyle::AtxClosed,
            _ => HeadingStyle::Atx,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let mut nodes = Vec::new();
        let mut paragraph: Option<(Vec<&str>, usize)> = None;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;

            if line.trim().is_empty() {
                if let Some((lines, start)) = paragraph.take() {
                    nodes.push(paragraph_node(lines, start, line_number - 1));
                }
                continue;
            }

            if let Some((depth, heading)) = parse_heading(line) {
                if let Some((lines, start)) = paragraph.take() {
                    nodes.push(paragraph_node(lines, start, line_number - 1));
                }
                nodes.push(Node {
                    block: Block::Heading {
                        depth,
                        text: heading,
                        id: None,
                    },
                    start_line: line_number,
                    end_line: line_number,
                });
                continue;
            }

            match paragraph.as_mut() {
                Some((lines, _)) => lines.push(line.trim_end()),
                None => paragraph = Some((vec![line.trim_end()], line_number)),
            }
        }

        if let Some((lines, start)) = paragraph.take() {
            let end = start + lines.len() - 1;
            nodes.push(paragraph_node(lines, start, end));
        }

        Self { nodes }
    }

    pub fn to_markdown(&self, style: HeadingStyle) -> String {
        let blocks: Vec<String> = self
            .nodes
            .iter()
            .map(|node| match &node.block {
                Block::Heading { depth, text, .. } => {
                    let marker = "#".repeat(*depth as usize);
                    match style {
                        HeadingStyle::Atx => format!("{} {}", marker, text),
                        HeadingStyle::AtxClosed => format!("{} {} {}", marker, text, marker),
                    }
                }
                Block::Paragraph { text } => text.clone(),
            })
            .collect();

        if blocks.is_empty() {
            return String::new();
        }
        format!("{}\n", blocks.join("\n\n"))
    }

    pub fn headings_mut(&mut self) -> impl Iterator<Item = (&String, &mut Option<String>)> {
        self.nodes.iter_mut().filter_map(|node| match &mut node.block {
            Block::Heading { text, id, .. } => Some((&*text, id)),
            Block::Paragraph { .. } => None,
        })
    }
}

fn paragraph_node(lines: Vec<&str>, start: usize, end: usize) -> Node {
    Node {
        block: Block::Paragraph {
            text: lines.join("\n"),
        },
        start_line: start,
        end_line: end,
    }
}

fn parse_heading(line: &str) -> Option<(u8, String)> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }

    let depth = trimmed.chars().take_while(|c| *c == '#').count();
    if depth == 0 || depth > 6 {
        return None;
    }

    let rest = &trimmed[depth..];
    if !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }

    Some((depth as u8, strip_closing_sequence(rest.trim()).to_string()))
}

/// Drop an optional closing `#` run. It only counts when it is the whole
/// text or follows whitespace.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.is_empty() {
        ""
    } else if without.ends_with(|c: char| c == ' ' || c == '\t') {
        without.trim_end()
    } else {
        text
    }
}
