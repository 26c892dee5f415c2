/*
 * ==========================================================================
 * GLINT - Syntax that gleams!
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line entry point: reads a source or page file,
 *            highlights it, and writes markup.
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

use chrono::Local;
use glint::{lexer, page, rewrite, theme, GlintError, Grammar, Theme};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Glint - syntax that gleams

USAGE:
    glint [OPTIONS] <FILE>

OPTIONS:
    --lang <NAME>        Grammar to use: python or prolog
                         (default: picked from the file extension)
    --page               Treat <FILE> as an HTML page and rewrite its
                         <code> blocks in place
    --tokens             Print the tokenized document as JSON instead of
                         markup
    --theme <FILE>       Load style configuration (JSON) from <FILE>
    -o, --output <FILE>  Write output to <FILE> instead of stdout
    -h, --help           Print this help text
    -V, --version        Print version information
";

#[derive(Debug, Default)]
struct Options {
    file: Option<String>,
    lang: Option<String>,
    theme: Option<String>,
    output: Option<String>,
    page: bool,
    tokens: bool,
    help: bool,
    version: bool,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(error) = run(&args) {
        error.report();
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), GlintError> {
    let options = parse_args(args)?;

    if options.help {
        print!("{USAGE}");
        return Ok(());
    }
    if options.version {
        println!("glint {VERSION}");
        return Ok(());
    }

    let file = options.file.clone().ok_or_else(|| {
        GlintError::usage("missing input file").with_help("run `glint --help` for usage")
    })?;

    let theme = match &options.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    let source = fs::read_to_string(&file)
        .map_err(|err| GlintError::io(format!("cannot read {file}: {err}")))?;

    let output = if options.page {
        page::rewrite_page(&source, &theme)?
    } else {
        let grammar = resolve_grammar(options.lang.as_deref(), &file)?;
        if options.tokens {
            dump_tokens(&source, grammar)?
        } else {
            standalone_page(&source, grammar, &theme)
        }
    };

    match &options.output {
        Some(path) => fs::write(path, output)
            .map_err(|err| GlintError::io(format!("cannot write {path}: {err}")))?,
        None => print!("{output}"),
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options, GlintError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            "--page" => options.page = true,
            "--tokens" => options.tokens = true,
            "--lang" => options.lang = Some(option_value(&mut iter, "--lang")?),
            "--theme" => options.theme = Some(option_value(&mut iter, "--theme")?),
            "-o" | "--output" => options.output = Some(option_value(&mut iter, "--output")?),
            other if other.starts_with('-') => {
                return Err(GlintError::usage(format!("unknown option: {other}"))
                    .with_help("run `glint --help` for usage"));
            }
            other => {
                if options.file.is_some() {
                    return Err(GlintError::usage("more than one input file given"));
                }
                options.file = Some(other.to_string());
            }
        }
    }

    Ok(options)
}

fn option_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    name: &str,
) -> Result<String, GlintError> {
    iter.next()
        .map(|value| value.to_string())
        .ok_or_else(|| GlintError::usage(format!("{name} requires a value")))
}

fn resolve_grammar(lang: Option<&str>, file: &str) -> Result<Grammar, GlintError> {
    if let Some(name) = lang {
        return Grammar::from_name(name).ok_or_else(|| {
            GlintError::usage(format!("unknown language: {name}"))
                .with_help("supported languages: python, prolog")
        });
    }
    let extension = Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    Ok(Grammar::from_extension(extension))
}

/// Tokenizes the source and serializes the document as JSON, one record
/// per line, for inspection or downstream tooling.
fn dump_tokens(source: &str, grammar: Grammar) -> Result<String, GlintError> {
    let mut lines = lexer::tokenize(source.trim(), grammar.table());
    if grammar.rewrites_definitions() {
        lines = rewrite::rewrite_lines(lines);
    }
    serde_json::to_string_pretty(&lines)
        .map_err(|err| GlintError::io(format!("cannot serialize tokens: {err}")))
}

/// Wraps the rendered markup in a complete standalone HTML page with the
/// default stylesheet embedded, so the output is viewable without the
/// hosting blog's CSS.
fn standalone_page(source: &str, grammar: Grammar, theme: &Theme) -> String {
    let markup = glint::highlight(source, grammar, theme);
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <style>\n{stylesheet}</style>\n\
         </head>\n\
         <body>\n\
         <!-- generated by glint {VERSION} at {stamp} -->\n\
         <div class=\"code\"><pre><code>{markup}</code></pre></div>\n\
         </body>\n\
         </html>\n",
        stylesheet = theme::DEFAULT_STYLESHEET,
    )
}
