//! Scan-based CSS minification and formatting.
//!
//! Neither transform parses CSS. Both work on character classes and a
//! comment flag, so string literals such as `content: "a;b"` are rewritten
//! like any other text.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*//.*$").unwrap());
static STRUCTURAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,>+~()])\s*").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const INDENT: &str = "  ";

/// A whole-text CSS rewrite. Call sites go through this trait so the
/// scanners can be swapped for a grammar-aware implementation later.
pub trait CssTextTransform {
    fn name(&self) -> &'static str;
    fn apply(&self, css: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl CssTextTransform for Minifier {
    fn name(&self) -> &'static str {
        "minify"
    }

    fn apply(&self, css: &str) -> String {
        minify_css(css)
    }
}

impl CssTextTransform for Formatter {
    fn name(&self) -> &'static str {
        "format"
    }

    fn apply(&self, css: &str) -> String {
        format_css(css)
    }
}

/// Strips comments and every whitespace run that does not separate two
/// tokens. Output is never longer than the input.
pub fn minify_css(css: &str) -> String {
    // Removing one comment can splice a new one together, e.g. `/` `/**/` `*x*/`.
    let mut without_blocks = css.to_string();
    while BLOCK_COMMENT.is_match(&without_blocks) {
        without_blocks = BLOCK_COMMENT.replace_all(&without_blocks, "").into_owned();
    }
    let without_lines = LINE_COMMENT.replace_all(&without_blocks, "");
    let tight = STRUCTURAL_SPACE.replace_all(&without_lines, "$1");
    let collapsed = WHITESPACE_RUN.replace_all(&tight, " ");
    collapsed.trim().to_string()
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn trim_end_in_place(out: &mut String) {
    let len = out.trim_end().len();
    out.truncate(len);
}

/// Re-indents CSS with two-space nesting, one declaration per line.
pub fn format_css(css: &str) -> String {
    let chars: Vec<char> = css.chars().collect();
    let mut out = String::with_capacity(css.len() * 2);
    let mut level: usize = 0;
    let mut in_comment = false;
    let mut pending_space = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if in_comment {
            out.push(c);
            if c == '*' && next == Some('/') {
                out.push('/');
                i += 1;
                in_comment = false;
                out.push('\n');
                push_indent(&mut out, level);
            }
            i += 1;
            continue;
        }

        if c == '/' && next == Some('*') {
            trim_end_in_place(&mut out);
            out.push('\n');
            push_indent(&mut out, level);
            out.push_str("/*");
            in_comment = true;
            pending_space = false;
            i += 2;
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            i += 1;
            continue;
        }

        match c {
            '{' => {
                trim_end_in_place(&mut out);
                out.push_str(" {\n");
                level += 1;
                push_indent(&mut out, level);
            }
            '}' => {
                level = level.saturating_sub(1);
                trim_end_in_place(&mut out);
                out.push('\n');
                push_indent(&mut out, level);
                out.push_str("}\n");
                push_indent(&mut out, level);
            }
            ';' => {
                out.push_str(";\n");
                push_indent(&mut out, level);
            }
            ',' => out.push_str(", "),
            ':' => out.push_str(": "),
            _ => {
                // A gap between two ordinary tokens survives as one space.
                let joins_tokens = out
                    .chars()
                    .last()
                    .is_some_and(|last| !last.is_whitespace() && last != '(')
                    && c != ')';
                if pending_space && joins_tokens {
                    out.push(' ');
                }
                out.push(c);
            }
        }
        pending_space = false;
        i += 1;
    }

    EXCESS_NEWLINES.replace_all(&out, "\n\n").trim().to_string()
}
