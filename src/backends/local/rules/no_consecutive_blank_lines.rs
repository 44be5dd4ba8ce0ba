// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{Rule, RULE_SOURCE};
use crate::backends::local::markdown::Document;
use crate::file::{EngineRecord, Message, Severity};

/// Warns when sibling blocks are separated by more than one blank line.
pub struct NoConsecutiveBlankLines;

impl Rule for NoConsecutiveBlankLines {
    fn id(&self) -> &'static str {
        "no-consecutive-blank-lines"
    }

    fn check(&self, tree: &Document, record: &mut EngineRecord) {
        for pair in tree.nodes.windows(2) {
            let blank = pair[1].start_line.saturating_sub(pair[0].end_line + 1);
            if blank <= 1 {
                continue;
            }

            let extra = blank - 1;
            let plural = if extra == 1 { "" } else { "s" };
            record.push(
                Message::new(format!("Remove {} line{} before node", extra, plural), Severity::Warning)
                    .at(pair[1].start_line, 1)
                    .origin(RULE_SOURCE, self.id()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::RecordValue;

    fn check(text: &str) -> Vec<Message> {
        let mut record = EngineRecord::new("readme.md", RecordValue::Text(text.to_string()));
        NoConsecutiveBlankLines.check(&Document::parse(text), &mut record);
        record.messages
    }

    #[test]
    fn test_single_blank_line_is_fine() {
        assert!(check("# h1\n\n## h2\n").is_empty());
        assert!(check("# h1\n## h2\n").is_empty());
    }

    #[test]
    fn test_two_blank_lines_warn_at_next_node() {
        let messages = check("# h1\n\n\n## h2\n");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].reason, "Remove 1 line before node");
        assert_eq!((messages[0].line, messages[0].column), (Some(4), Some(1)));
        assert_eq!(messages[0].rule_id.as_deref(), Some("no-consecutive-blank-lines"));
        assert_eq!(messages[0].source.as_deref(), Some("remark-lint"));
    }

    #[test]
    fn test_plural_reason() {
        let messages = check("para\n\n\n\n\ntext\n");
        assert_eq!(messages[0].reason, "Remove 3 lines before node");
    }
}
