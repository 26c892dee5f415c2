/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      render.rs
 * Purpose:   Serializes tokenized lines into styled markup.
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

use crate::theme::Theme;
use crate::token::{Line, Token};

/// HTML-escapes token text before it is interpolated into markup.
///
/// Token text is raw source code; any of `& < > " '` in it would corrupt
/// or inject markup. Class names and theme colors are trusted
/// configuration and are not escaped.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a flat token sequence as one span per token, with no line
/// wrapper (single-block mode).
///
/// Each token becomes `<span class="{prefix}{kind}">{text}</span>` with
/// the kind's style class and the escaped token text.
pub fn render_tokens(tokens: &[Token], theme: &Theme) -> String {
    let mut markup = String::new();
    for token in tokens {
        markup.push_str(&format!(
            r#"<span class="{}{}">{}</span>"#,
            theme.class_prefix,
            token.kind.css_class(),
            escape(&token.text),
        ));
    }
    markup
}

/// Renders one line: its token spans wrapped in a `line`-class container.
///
/// The container carries an inline background-color style only when the
/// line has a diff mark; unmarked lines get no style attribute at all.
pub fn render_line(line: &Line, theme: &Theme) -> String {
    let spans = render_tokens(&line.tokens, theme);
    match line.background {
        Some(mark) => format!(
            r#"<span class="line" style="background-color: {};">{}</span>"#,
            theme.background_color(mark),
            spans,
        ),
        None => format!(r#"<span class="line">{}</span>"#, spans),
    }
}

/// Renders a document: line containers joined with `<br />` in document
/// order.
///
/// Rendering is pure: the same lines and theme always produce the same
/// string.
pub fn render_document(lines: &[Line], theme: &Theme) -> String {
    lines
        .iter()
        .map(|line| render_line(line, theme))
        .collect::<Vec<_>>()
        .join("<br />")
}
