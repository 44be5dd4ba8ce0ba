// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Human-readable reports for engine records.
//!
//! ```text
//! readme.md
//!   4:1  warning  Remove 1 line before node  no-consecutive-blank-lines  remark-lint
//!
//! ⚠ 1 warning
//! ```

use crate::file::{EngineRecord, Message, Severity};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Skip files without reportable messages.
    pub quiet: bool,
    /// Only fatal messages are reportable.
    pub silent: bool,
}

/// Render a report for the given records. Empty when nothing is reportable.
pub fn report<'a>(records: impl IntoIterator<Item = &'a EngineRecord>, options: ReportOptions) -> String {
    let mut sections = Vec::new();
    let mut fatal = 0;
    let mut warnings = 0;

    for record in records {
        let messages: Vec<&Message> = record
            .messages
            .iter()
            .filter(|m| !options.silent || m.severity == Severity::Fatal)
            .collect();

        if messages.is_empty() {
            if !options.quiet {
                sections.push((format!("{}: no issues found\n", record.display_path()), false));
            }
            continue;
        }

        for message in &messages {
            match message.severity {
                Severity::Fatal => fatal += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => {}
            }
        }
        sections.push((file_section(&record.display_path(), &messages), true));
    }

    let mut output = String::new();
    for (section, has_messages) in &sections {
        output.push_str(section);
        if *has_messages {
            output.push('\n');
        }
    }

    if let Some(summary) = summary(fatal, warnings) {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}

fn file_section(path: &str, messages: &[&Message]) -> String {
    let rows: Vec<[String; 5]> = messages
        .iter()
        .map(|m| {
            [
                position(m),
                label(m.severity).to_string(),
                m.reason.clone(),
                m.rule_id.clone().unwrap_or_default(),
                m.source.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut section = format!("{}\n", path);
    for row in &rows {
        let mut line = String::from(" ");
        for (width, cell) in widths.iter().zip(row.iter()) {
            line.push_str(" ");
            line.push_str(cell);
            line.push_str(&" ".repeat(width - cell.chars().count()));
            line.push(' ');
        }
        section.push_str(line.trim_end());
        section.push('\n');
    }
    section
}

fn position(message: &Message) -> String {
    match (message.line, message.column) {
        (Some(line), Some(column)) => format!("{}:{}", line, column),
        (Some(line), None) => format!("{}:1", line),
        _ => "1:1".to_string(),
    }
}

fn label(severity: Severity) -> &'static str {
    match severity {
        Severity::Fatal => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn summary(fatal: usize, warnings: usize) -> Option<String> {
    let mut parts = Vec::new();
    if fatal > 0 {
        parts.push(format!("✖ {} error{}", fatal, if fatal == 1 { "" } else { "s" }));
    }
    if warnings > 0 {
        parts.push(format!("⚠ {} warning{}", warnings, if warnings == 1 { "" } else { "s" }));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
