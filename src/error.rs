/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
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

use std::fmt;

/// The crate's error type, carrying a stable code plus a human-readable
/// message.
///
/// The tokenize/rewrite/render path never produces one of these: lexical
/// failure is silent truncation by design. Errors come from the outer
/// surfaces only (file I/O, theme configuration, page integration, CLI
/// usage), so no source span is carried.
#[derive(Debug, Clone)]
pub struct GlintError {
    /// Stable error code (E_IO, E_CONFIG, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl GlintError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Input or output file could not be read/written.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new("E_IO", message)
    }

    /// Theme/configuration file missing, unreadable or invalid.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new("E_CONFIG", message)
    }

    /// A page integration found none of the elements it wires up.
    pub fn missing_target(message: impl Into<String>) -> Self {
        Self::new("E_NO_TARGET", message)
    }

    /// Bad command-line invocation.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new("E_USAGE", message)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Prints the error to stderr in the crate's diagnostic format:
    ///
    /// ```text
    /// error[E_CONFIG]: invalid theme JSON: expected value at line 1
    /// help: see the Theme struct for the accepted fields
    /// ```
    pub fn report(&self) {
        eprintln!("error[{}]: {}", self.code, self.message);
        if let Some(help) = &self.help {
            eprintln!("help: {help}");
        }
    }
}

impl fmt::Display for GlintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for GlintError {}
