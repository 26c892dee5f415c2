/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      grammar/prolog.rs
 * Purpose:   The clause/fact (Prolog-like) pattern table.
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

/// The clause pattern table. Built once, shared immutably.
///
/// Ordering constraints:
/// - the `false`/`true` literal entry precedes the atom entry, so the two
///   fixed words are not reclassified as plain atoms;
/// - the atom entry takes lowercase starts only, leaving uppercase starts
///   to the variable entry behind it.
///
/// Atoms lex as `Constant`, variables as `Identifier`. Diff mode is off
/// for this table.
pub fn table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        PatternTable::new(
            "prolog",
            false,
            vec![
                PatternEntry::regex(TokenKind::Operator, "[=]"),
                PatternEntry::regex(TokenKind::Parenthesis, "[()]"),
                PatternEntry::regex(TokenKind::Bracket, r"[\[\]]"),
                PatternEntry::regex(TokenKind::Special, r"[.,!\-]|:-|\?-"),
                PatternEntry::regex(TokenKind::Comment, "%.*"),
                PatternEntry::regex(TokenKind::Number, "[0-9]|[1-9][0-9]+"),
                PatternEntry::regex(TokenKind::Constant, "false|true"),
                PatternEntry::regex(TokenKind::Constant, "[a-z][a-zA-Z_0-9]*"),
                PatternEntry::regex(TokenKind::Identifier, "[A-Z][a-zA-Z_0-9]*"),
                PatternEntry::regex(TokenKind::Whitespace, r"\s+"),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_are_constants_and_variables_are_identifiers() {
        let table = table();
        let (kind, len) = table.match_prefix("parent(X)").unwrap();
        assert_eq!(kind, TokenKind::Constant);
        assert_eq!(len, "parent".len());

        let (kind, len) = table.match_prefix("X = 1").unwrap();
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(len, 1);
    }

    #[test]
    fn fixed_literals_precede_the_atom_entry() {
        // Both entries classify as Constant; this pins the literal entry's
        // place in the order so reordering the table is caught.
        let (kind, len) = table().match_prefix("true.").unwrap();
        assert_eq!(kind, TokenKind::Constant);
        assert_eq!(len, "true".len());
    }

    #[test]
    fn clause_markers_lex_as_special() {
        let table = table();
        let (kind, len) = table.match_prefix(":- use_module.").unwrap();
        assert_eq!(kind, TokenKind::Special);
        assert_eq!(len, 2);

        let (kind, len) = table.match_prefix("?- parent(X).").unwrap();
        assert_eq!(kind, TokenKind::Special);
        assert_eq!(len, 2);

        let (kind, len) = table.match_prefix("!.").unwrap();
        assert_eq!(kind, TokenKind::Special);
        assert_eq!(len, 1);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let (kind, len) = table().match_prefix("% facts below").unwrap();
        assert_eq!(kind, TokenKind::Comment);
        assert_eq!(len, "% facts below".len());
    }

    #[test]
    fn diff_mode_is_disabled() {
        assert!(!table().diff_mode());
    }
}
