/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      grammar/mod.rs
 * Purpose:   Ordered pattern tables: the lexical grammar definitions the
 *            tokenizer applies to each source line.
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

/// The generic Python-like table: keywords, strings, comments, diff mode.
pub mod python;

/// The clause/fact table: atoms, variables, clause markers, no diff mode.
pub mod prolog;

use crate::token::TokenKind;
use regex::Regex;

/// A recognizer: attempts an anchored match against the start of the
/// remaining text and returns the consumed byte length, or `None`.
///
/// Any callable with this shape can serve as a table entry; the built-in
/// constructors compile `regex` patterns, but the table does not depend on
/// a particular matching engine.
pub type Matcher = Box<dyn Fn(&str) -> Option<usize> + Send + Sync>;

/// One `(kind, recognizer)` pair of a pattern table.
pub struct PatternEntry {
    kind: TokenKind,
    matcher: Matcher,
}

impl PatternEntry {
    /// Builds an entry from an arbitrary matcher.
    pub fn new(kind: TokenKind, matcher: Matcher) -> Self {
        Self { kind, matcher }
    }

    /// Builds an entry from a regex body.
    ///
    /// The body is compiled as `^(?:body)`, so every recognizer is anchored
    /// by construction and cannot match past the current scan position.
    ///
    /// # Panics
    /// Panics if the body does not compile; table contents are fixed at
    /// build time, so a bad pattern is a programming error.
    pub fn regex(kind: TokenKind, body: &str) -> Self {
        let pattern = Regex::new(&format!("^(?:{body})"))
            .unwrap_or_else(|err| panic!("invalid pattern table entry `{body}`: {err}"));
        Self::new(kind, Box::new(move |text| pattern.find(text).map(|m| m.end())))
    }

    /// Builds an entry matching any word of a fixed reserved-word list.
    ///
    /// A trailing word boundary is required so a keyword never matches as
    /// the prefix of a longer identifier (`class` must not match inside
    /// `classify`).
    pub fn keywords(kind: TokenKind, words: &[&str]) -> Self {
        Self::regex(kind, &format!("(?:{})\\b", words.join("|")))
    }
}

/// An ordered, language-specific list of pattern entries.
///
/// Entry order is the disambiguation rule: entries are tried in sequence
/// and the first match wins. Tables are built once per language and shared
/// immutably; tokenizer calls borrow them without synchronization.
pub struct PatternTable {
    name: &'static str,
    diff_mode: bool,
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    pub fn new(name: &'static str, diff_mode: bool, entries: Vec<PatternEntry>) -> Self {
        Self {
            name,
            diff_mode,
            entries,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the tokenizer should honor leading `+`/`-` diff markers for
    /// lines lexed with this table.
    pub fn diff_mode(&self) -> bool {
        self.diff_mode
    }

    /// Tries every entry in table order against the start of `text`.
    ///
    /// # Returns
    /// - `Some((kind, len))` for the first entry that matches a non-empty
    ///   prefix, where `len` is the consumed byte length.
    /// - `None` if no entry matches. The caller's scan loop stops there.
    ///
    /// A zero-length match is treated as no match; it would stall the scan
    /// loop.
    pub fn match_prefix(&self, text: &str) -> Option<(TokenKind, usize)> {
        for entry in &self.entries {
            if let Some(len) = (entry.matcher)(text) {
                if len > 0 {
                    return Some((entry.kind, len));
                }
            }
        }
        None
    }
}

/// Selects one of the two fixed lexical grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Python,
    Prolog,
}

impl Grammar {
    /// The shared pattern table for this grammar.
    pub fn table(self) -> &'static PatternTable {
        match self {
            Grammar::Python => python::table(),
            Grammar::Prolog => prolog::table(),
        }
    }

    /// Whether the definition rewriter applies after tokenization.
    ///
    /// Only the generic grammar has `class`/`def` triples to reclassify.
    pub fn rewrites_definitions(self) -> bool {
        matches!(self, Grammar::Python)
    }

    /// Parses a user-supplied language name, as given to `--lang`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "python" | "py" => Some(Grammar::Python),
            "prolog" | "pl" => Some(Grammar::Prolog),
            _ => None,
        }
    }

    /// Picks a grammar from a file extension. Anything that is not a known
    /// clause-grammar extension falls back to the generic grammar.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pl" | "pro" | "prolog" => Grammar::Prolog,
            _ => Grammar::Python,
        }
    }
}
