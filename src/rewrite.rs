/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      rewrite.rs
 * Purpose:   Token-stream post-processing: reclassifies the name token of
 *            `class`/`def` definition triples.
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

use crate::token::{Line, Token, TokenKind};

/// Applies the definition rewrite to every line of a document.
///
/// The pass is line-scoped: a definition whose name sits on a different
/// line than its keyword is never reclassified.
pub fn rewrite_lines(lines: Vec<Line>) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| Line {
            background: line.background,
            tokens: rewrite(line.tokens),
        })
        .collect()
}

/// Scans a flat token sequence with a 3-token window.
///
/// At index `i`:
/// - keyword `class` at `i` and an identifier at `i + 2` → tokens `i` and
///   `i + 1` pass through unchanged, the identifier is re-emitted as a
///   `ClassDef` token, and the window advances by 3;
/// - keyword `def` likewise, producing `FunctionDef`;
/// - anything else passes through unchanged, advancing by 1.
///
/// Lookahead past the end of the stream never matches, so a triple cut off
/// by the end of a line is left as-is. The middle token is not inspected;
/// only positions `i` and `i + 2` decide the match.
pub fn rewrite(tokens: Vec<Token>) -> Vec<Token> {
    let mut processed = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let first = &tokens[i];

        let def_kind = if first.kind == TokenKind::Keyword {
            match first.text.as_str() {
                "class" => Some(TokenKind::ClassDef),
                "def" => Some(TokenKind::FunctionDef),
                _ => None,
            }
        } else {
            None
        };

        let name_follows = tokens
            .get(i + 2)
            .is_some_and(|third| third.kind == TokenKind::Identifier);

        match def_kind {
            Some(kind) if name_follows => {
                processed.push(tokens[i].clone());
                processed.push(tokens[i + 1].clone());
                processed.push(Token::new(kind, tokens[i + 2].text.clone()));
                i += 3;
            }
            _ => {
                processed.push(first.clone());
                i += 1;
            }
        }
    }

    processed
}
