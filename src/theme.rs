/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      theme.rs
 * Purpose:   Style configuration: the class prefix, the diff background
 *            colors, and the default stylesheet for standalone output.
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
use crate::token::DiffMark;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Style configuration consumed by the renderer.
///
/// Every field has a default, and a theme file may set any subset of them:
///
/// ```json
/// { "class_prefix": "hl-" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Prefix for every token span's style class (`highlight-keyword`,
    /// `highlight-string`, …).
    pub class_prefix: String,

    /// Background color for lines marked added (`+`).
    pub added_background: String,

    /// Background color for lines marked removed (`-`).
    pub removed_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            class_prefix: "highlight-".to_string(),
            added_background: "#42934245".to_string(),
            removed_background: "rgba(229, 83, 75, 0.28)".to_string(),
        }
    }
}

impl Theme {
    /// The background color for a diff polarity.
    pub fn background_color(&self, mark: DiffMark) -> &str {
        match mark {
            DiffMark::Added => &self.added_background,
            DiffMark::Removed => &self.removed_background,
        }
    }

    /// Loads a theme from a JSON file. Fields missing from the file keep
    /// their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Theme, GlintError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            GlintError::config(format!("cannot read theme file {}: {err}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            GlintError::config(format!("invalid theme JSON in {}: {err}", path.display()))
                .with_help("accepted fields: class_prefix, added_background, removed_background")
        })
    }
}

/// Stylesheet embedded into standalone HTML output so it is viewable
/// without the hosting blog's CSS. One rule per token class.
pub const DEFAULT_STYLESHEET: &str = "\
body {
    background: #1c1e26;
    color: #e6e6e6;
    font-family: monospace;
}

.code pre {
    padding: 1em;
    background: #23252f;
    border-radius: 6px;
}

.highlight-keyword      { color: #dc8cc3; }
.highlight-constant     { color: #e6a075; }
.highlight-string       { color: #b8d68c; }
.highlight-operator     { color: #c9cce6; }
.highlight-parenthesis  { color: #b3b3b3; }
.highlight-bracket      { color: #b3b3b3; }
.highlight-special      { color: #b3b3b3; }
.highlight-comment      { color: #808c8c; font-style: italic; }
.highlight-number       { color: #d1ae8c; }
.highlight-identifier   { color: #e6e6e6; }
.highlight-class-def    { color: #e6cc8c; font-weight: bold; }
.highlight-function-def { color: #8cbfe6; font-weight: bold; }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_the_fixed_diff_colors() {
        let theme = Theme::default();
        assert_eq!(theme.class_prefix, "highlight-");
        assert_eq!(theme.background_color(DiffMark::Added), "#42934245");
        assert_eq!(
            theme.background_color(DiffMark::Removed),
            "rgba(229, 83, 75, 0.28)"
        );
    }

    #[test]
    fn partial_theme_json_keeps_defaults_for_the_rest() {
        let theme: Theme = serde_json::from_str(r#"{ "class_prefix": "hl-" }"#).unwrap();
        assert_eq!(theme.class_prefix, "hl-");
        assert_eq!(theme.added_background, Theme::default().added_background);
    }

    #[test]
    fn loading_a_missing_file_is_a_config_error() {
        let error = Theme::load("/nonexistent/theme.json").unwrap_err();
        assert_eq!(error.code, "E_CONFIG");
    }

    #[test]
    fn every_token_class_has_a_stylesheet_rule() {
        for class in [
            "keyword",
            "constant",
            "string",
            "operator",
            "parenthesis",
            "bracket",
            "special",
            "comment",
            "number",
            "identifier",
            "class-def",
            "function-def",
        ] {
            assert!(
                DEFAULT_STYLESHEET.contains(&format!(".highlight-{class}")),
                "missing stylesheet rule for {class}"
            );
        }
    }
}
