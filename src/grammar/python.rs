/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      grammar/python.rs
 * Purpose:   The generic (Python-like) pattern table.
 *
 * License:
 * This file is part of the Glint highlighting engine.
 *
 * Glint is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use super::{PatternEntry, PatternTable};
use crate::token::TokenKind;
use std::sync::OnceLock;

/// The closed reserved-word set of the generic grammar.
///
/// The tokenizer matches these with a trailing word boundary, so a keyword
/// is never recognized inside a longer identifier.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "break", "case", "class", "continue", "def",
    "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
    "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// The generic pattern table. Built once, shared immutably.
///
/// Entry order is significant: keywords before constants, triple-quoted
/// strings before single-quoted ones, comments before numbers. The
/// triple-quote entry carries `(?s)` so its policy is the same wherever the
/// tokenizer is invoked; the document tokenizer still splits on line breaks
/// first, so a string spanning lines degrades per line.
///
/// Diff mode is on: a leading `+`/`-` marks the line added/removed.
pub fn table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        PatternTable::new(
            "python",
            true,
            vec![
                PatternEntry::keywords(TokenKind::Keyword, KEYWORDS),
                PatternEntry::regex(TokenKind::Constant, "False|True"),
                PatternEntry::regex(TokenKind::String, r#"(?s:'''.*?'''|""".*?""")"#),
                PatternEntry::regex(TokenKind::String, r#"'.*?'|".*?""#),
                PatternEntry::regex(TokenKind::Operator, r"[=+\-*/%&|<>!]"),
                PatternEntry::regex(TokenKind::Parenthesis, r"[\[\](){}]"),
                PatternEntry::regex(TokenKind::Special, "[;,:.]"),
                PatternEntry::regex(TokenKind::Comment, "#.*"),
                PatternEntry::regex(TokenKind::Number, "[0-9]|[1-9][0-9]+"),
                PatternEntry::regex(TokenKind::Identifier, "[a-zA-Z_][a-zA-Z_0-9]*"),
                PatternEntry::regex(TokenKind::Whitespace, r"\s+"),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_requires_word_boundary() {
        let table = table();
        let (kind, len) = table.match_prefix("classify = 1").unwrap();
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(len, "classify".len());

        let (kind, len) = table.match_prefix("class Foo").unwrap();
        assert_eq!(kind, TokenKind::Keyword);
        assert_eq!(len, "class".len());
    }

    #[test]
    fn keyword_entry_shadows_constant_entry_for_exact_literals() {
        // `True` is in both the keyword list and the constant pattern; the
        // keyword entry comes first.
        let (kind, _) = table().match_prefix("True").unwrap();
        assert_eq!(kind, TokenKind::Keyword);
    }

    #[test]
    fn strings_match_minimally() {
        let (kind, len) = table().match_prefix("'a' + 'b'").unwrap();
        assert_eq!(kind, TokenKind::String);
        assert_eq!(len, "'a'".len());
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let (kind, len) = table().match_prefix("# note: x = 1").unwrap();
        assert_eq!(kind, TokenKind::Comment);
        assert_eq!(len, "# note: x = 1".len());
    }

    #[test]
    fn diff_mode_is_enabled() {
        assert!(table().diff_mode());
    }
}
