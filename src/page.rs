/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      page.rs
 * Purpose:   Page integration: locates the code blocks of an HTML page and
 *            replaces their contents with rendered markup.
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

use crate::error::GlintError;
use crate::grammar::Grammar;
use crate::theme::Theme;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<code([^>]*)>(.*?)</code>").expect("code block pattern must compile")
    })
}

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"class\s*=\s*"([^"]*)""#).expect("class attribute pattern must compile")
    })
}

/// Reverses the entity escaping applied when source text is embedded in a
/// page, recovering the text content the author wrote.
///
/// `&amp;` is resolved last so an already-escaped sequence unescapes one
/// level only.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Picks the grammar for a code block from its element's class attribute:
/// a `prolog` (or `language-prolog`) class selects the clause grammar,
/// anything else the generic one.
fn grammar_for(attrs: &str) -> Grammar {
    let classes = class_pattern()
        .captures(attrs)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    if classes
        .split_whitespace()
        .any(|class| class == "prolog" || class == "language-prolog")
    {
        Grammar::Prolog
    } else {
        Grammar::Python
    }
}

/// Rewrites every `<code>` block of an HTML page in place.
///
/// Each block's text content is recovered (entity-unescaped, trimmed),
/// highlighted with the grammar picked from its class attribute, and the
/// block's content replaced with the rendered markup. Blocks are
/// independent: one block never affects another.
///
/// # Errors
/// `E_NO_TARGET` if the page contains no code block at all: the
/// integration has nothing to wire up. The rest of the page is returned
/// untouched in the success case.
pub fn rewrite_page(html: &str, theme: &Theme) -> Result<String, GlintError> {
    let pattern = block_pattern();
    if !pattern.is_match(html) {
        return Err(GlintError::missing_target("no <code> block found in page").with_help(
            "wrap highlightable source in <pre><code class=\"...\"> ... </code></pre>",
        ));
    }

    let rewritten = pattern.replace_all(html, |caps: &Captures| {
        let attrs = &caps[1];
        let grammar = grammar_for(attrs);
        let source = unescape(&caps[2]);
        let markup = crate::highlight(&source, grammar, theme);
        format!("<code{attrs}>{markup}</code>")
    });

    Ok(rewritten.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_recovers_text_content() {
        assert_eq!(unescape("a &lt; b &amp;&amp; c &gt; d"), "a < b && c > d");
        // Double-escaped input unescapes one level only.
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn python_block_is_highlighted_with_the_generic_grammar() {
        let page = "<p>intro</p><pre><code>def f():\n    return 1</code></pre>";
        let rewritten = rewrite_page(page, &Theme::default()).unwrap();
        assert!(rewritten.contains("highlight-function-def"));
        assert!(rewritten.contains("<p>intro</p>"));
        assert!(!rewritten.contains("def f():\n"));
    }

    #[test]
    fn prolog_class_selects_the_clause_grammar() {
        let page = r#"<pre><code class="prolog">parent(X).</code></pre>"#;
        let rewritten = rewrite_page(page, &Theme::default()).unwrap();
        // `parent` is an atom, rendered as a constant; the clause grammar
        // has no definition rewriter.
        assert!(rewritten.contains(r#"<span class="highlight-constant">parent</span>"#));
    }

    #[test]
    fn blocks_are_rewritten_independently() {
        let page = concat!(
            r#"<pre><code>x = 1</code></pre>"#,
            r#"<pre><code class="prolog">a.</code></pre>"#,
        );
        let rewritten = rewrite_page(page, &Theme::default()).unwrap();
        assert!(rewritten.contains(r#"<span class="highlight-identifier">x</span>"#));
        assert!(rewritten.contains(r#"<span class="highlight-constant">a</span>"#));
    }

    #[test]
    fn embedded_entities_are_recovered_before_lexing() {
        let page = "<pre><code>a &lt; b</code></pre>";
        let rewritten = rewrite_page(page, &Theme::default()).unwrap();
        // The `<` lexes as an operator and comes back out escaped.
        assert!(rewritten.contains(r#"<span class="highlight-operator">&lt;</span>"#));
    }

    #[test]
    fn page_without_code_blocks_is_a_missing_target() {
        let error = rewrite_page("<p>no code here</p>", &Theme::default()).unwrap_err();
        assert_eq!(error.code, "E_NO_TARGET");
    }
}
