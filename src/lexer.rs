/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   The line and document tokenizers: applies a pattern table to
 *            source text and produces classified token sequences.
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

use crate::grammar::PatternTable;
use crate::token::{DiffMark, Line, Token};

/// Tokenizes a full source text against one pattern table.
///
/// The text is split on `'\n'`, preserving the exact line set: a source
/// ending in a line break yields a trailing empty line. Each line is lexed
/// independently, in order, so the output has the same line count and
/// order as the input.
///
/// # Parameters
/// - `source`: the raw text to tokenize. Callers that read from an outer
///   page trim it first; this function takes it verbatim.
/// - `table`: the lexical grammar to apply.
///
/// # Returns
/// One `Line` per input line.
pub fn tokenize(source: &str, table: &PatternTable) -> Vec<Line> {
    source.split('\n').map(|line| tokenize_line(line, table)).collect()
}

/// Tokenizes a single source line.
///
/// # Behavior
/// 1. An empty line produces no tokens and no background.
/// 2. If the table has diff mode and the line starts with `+` or `-`, the
///    marker is recorded as the line's background tag and stripped before
///    lexing the remainder.
/// 3. The remainder is scanned with first-match-wins table lookups. Every
///    match appends one token and advances the cursor past the matched
///    text.
/// 4. If no entry matches a non-empty remainder, scanning stops there: the
///    tokens consumed so far are returned and the unmatched suffix is
///    dropped. No error is raised.
///
/// Concatenating the returned tokens' text reproduces the marker-stripped
/// line exactly whenever the whole line matched.
pub fn tokenize_line(line: &str, table: &PatternTable) -> Line {
    if line.is_empty() {
        return Line::empty();
    }

    let mut background = None;
    let mut rest = line;

    if table.diff_mode() {
        if let Some(stripped) = rest.strip_prefix('+') {
            background = Some(DiffMark::Added);
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('-') {
            background = Some(DiffMark::Removed);
            rest = stripped;
        }
    }

    let mut tokens = Vec::new();
    while !rest.is_empty() {
        match table.match_prefix(rest) {
            Some((kind, len)) => {
                tokens.push(Token::new(kind, &rest[..len]));
                rest = &rest[len..];
            }
            // Unmatched remainder: stop, keep what we have.
            None => break,
        }
    }

    Line { background, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{prolog, python};
    use crate::token::TokenKind;

    fn python_kinds(line: &str) -> Vec<(TokenKind, String)> {
        tokenize_line(line, python::table())
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        let line = tokenize_line("", python::table());
        assert!(line.tokens.is_empty());
        assert_eq!(line.background, None);
    }

    #[test]
    fn fully_matched_line_is_lossless() {
        let source = "def greet(name):  # say hello";
        let line = tokenize_line(source, python::table());
        let rebuilt: String = line.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn tokenization_is_deterministic() {
        let source = "while x < 10: x = x + 1";
        let first = tokenize_line(source, python::table());
        let second = tokenize_line(source, python::table());
        assert_eq!(first, second);
    }

    #[test]
    fn added_marker_is_stripped_and_recorded() {
        let marked = tokenize_line("+x = 1", python::table());
        let plain = tokenize_line("x = 1", python::table());
        assert_eq!(marked.background, Some(DiffMark::Added));
        assert_eq!(marked.tokens, plain.tokens);
    }

    #[test]
    fn removed_marker_is_stripped_and_recorded() {
        let marked = tokenize_line("-x = 1", python::table());
        assert_eq!(marked.background, Some(DiffMark::Removed));
        assert_eq!(marked.tokens[0].text, "x");
    }

    #[test]
    fn marker_only_line_has_background_and_no_tokens() {
        let line = tokenize_line("+", python::table());
        assert_eq!(line.background, Some(DiffMark::Added));
        assert!(line.tokens.is_empty());
    }

    #[test]
    fn markers_are_ignored_without_diff_mode() {
        // The clause table has diff mode off; a leading `-` is an ordinary
        // special token there.
        let line = tokenize_line("-a.", prolog::table());
        assert_eq!(line.background, None);
        assert_eq!(line.tokens[0].kind, TokenKind::Special);
        assert_eq!(line.tokens[0].text, "-");
    }

    #[test]
    fn unmatched_suffix_is_dropped_silently() {
        // `@` matches no entry of the generic table.
        let line = tokenize_line("x = @deco", python::table());
        let texts: Vec<&str> = line.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", " ", "=", " "]);
    }

    #[test]
    fn keyword_is_not_matched_inside_identifier() {
        let tokens = python_kinds("classify = 1");
        assert_eq!(tokens[0], (TokenKind::Identifier, "classify".to_string()));

        let tokens = python_kinds("class Foo");
        assert_eq!(tokens[0], (TokenKind::Keyword, "class".to_string()));
    }

    #[test]
    fn digit_runs_tokenize_one_digit_per_token() {
        // The number entry's single-digit arm is tried first, so runs of
        // digits come out one per token.
        let tokens = python_kinds("42");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, "4".to_string()),
                (TokenKind::Number, "2".to_string()),
            ]
        );
    }

    #[test]
    fn triple_quoted_string_on_one_line() {
        let tokens = python_kinds("'''doc''' + 1");
        assert_eq!(tokens[0], (TokenKind::String, "'''doc'''".to_string()));
    }

    #[test]
    fn document_preserves_line_count_and_order() {
        let lines = tokenize("a = 1\nb = 2\n", python::table());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].tokens[0].text, "a");
        assert_eq!(lines[1].tokens[0].text, "b");
        assert!(lines[2].tokens.is_empty());
    }

    #[test]
    fn clause_line_lexes_atoms_variables_and_markers() {
        let line = tokenize_line("parent(X, anna).", prolog::table());
        let kinds: Vec<TokenKind> = line.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Constant,    // parent
                TokenKind::Parenthesis, // (
                TokenKind::Identifier,  // X
                TokenKind::Special,     // ,
                TokenKind::Whitespace,  // ' '
                TokenKind::Constant,    // anna
                TokenKind::Parenthesis, // )
                TokenKind::Special,     // .
            ]
        );
    }
}
