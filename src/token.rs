/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical data model shared by the tokenizer, the
 *            definition rewriter and the markup renderer.
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

use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** assigned by a pattern
/// table.
///
/// The set is closed: every recognizer in every table maps to one of these
/// values, and the renderer carries a style class for each of them.
///
/// # Pipeline Role
/// ```text
/// Source Line → Pattern Table → TokenKind → Rewriter → Renderer
/// ```
///
/// `ClassDef` and `FunctionDef` are never produced by a pattern table
/// directly; they are assigned by the definition rewriter when it
/// reclassifies the name token of a `class`/`def` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A reserved word of the language.
    Keyword,

    /// A fixed literal word (`True`/`False`, `true`/`false`) or, in the
    /// clause grammar, a lowercase-start atom.
    Constant,

    /// A quoted span, including its delimiters.
    String,

    /// A single operator character.
    Operator,

    /// A round or curly grouping character (the generic grammar folds
    /// square brackets in here as well).
    Parenthesis,

    /// A square grouping character (clause grammar only).
    Bracket,

    /// Punctuation: separators, clause terminators, clause/negation
    /// markers.
    Special,

    /// A line comment, from its marker to the end of the line.
    Comment,

    /// A numeric literal.
    Number,

    /// A user-defined name. In the clause grammar this is an
    /// uppercase-start variable.
    Identifier,

    /// A run of whitespace characters. Preserved so that a line's tokens
    /// concatenate back to the original text.
    Whitespace,

    /// The name token of a `class` definition, assigned by the rewriter.
    ClassDef,

    /// The name token of a `def` definition, assigned by the rewriter.
    FunctionDef,
}

impl TokenKind {
    /// Returns the style-class suffix for this kind.
    ///
    /// The renderer prepends the theme's class prefix, so with the default
    /// theme a keyword token becomes `<span class="highlight-keyword">`.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Constant => "constant",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
            TokenKind::Parenthesis => "parenthesis",
            TokenKind::Bracket => "bracket",
            TokenKind::Special => "special",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::ClassDef => "class-def",
            TokenKind::FunctionDef => "function-def",
        }
    }
}

/// Represents a **single classified token**: a non-empty substring of a
/// source line together with its assigned kind.
///
/// Tokens are immutable once produced. The original text is preserved
/// verbatim so a fully matched line can be reconstructed by concatenating
/// its tokens in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for user-facing output: the raw text only, never
    /// the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The diff polarity of a source line, taken from a leading `+` or `-`
/// marker character.
///
/// The mark itself carries no color; the theme maps it to a concrete
/// background value at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffMark {
    Added,
    Removed,
}

/// One source line's lexical decomposition: an optional diff mark plus the
/// ordered token sequence.
///
/// A document is a `Vec<Line>` whose index is the 0-based source line
/// number; order mirrors the source end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub background: Option<DiffMark>,
    pub tokens: Vec<Token>,
}

impl Line {
    /// An empty line: no tokens, no background.
    pub fn empty() -> Self {
        Self {
            background: None,
            tokens: Vec::new(),
        }
    }
}
