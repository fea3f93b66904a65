//! # Tag Scanning
//!
//! A single left-to-right pass over markup that recognises complete opening,
//! closing and self-closing tags and folds them into a stack of open element
//! names.
//!
//! Only complete tags count: a tag still being typed at the cursor (`<sp`)
//! has no closing `>` yet and is ignored. Comments are skipped; doctypes and
//! stray `<` characters produce lexer errors, which are dropped.

use logos::{Lexer, Logos};

/// Markup tokens relevant to tag balancing
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum MarkupToken<'src> {
    #[regex(r"<[a-zA-Z][a-zA-Z0-9-]*[^<>]*>", open_tag)]
    Open(OpenTag<'src>),

    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[^<>]*>", close_tag)]
    Close(&'src str),

    #[regex(r"<!--([^-]|-[^-])*-->", logos::skip)]
    #[regex(r"[^<]+", logos::skip)]
    Ignored,
}

/// An opening tag as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTag<'src> {
    pub name: &'src str,
    pub self_closing: bool,
}

fn tag_name(body: &str) -> &str {
    let end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(body.len());
    &body[..end]
}

fn open_tag<'src>(lex: &mut Lexer<'src, MarkupToken<'src>>) -> OpenTag<'src> {
    let slice = lex.slice();
    OpenTag {
        name: tag_name(&slice[1..]),
        self_closing: slice.ends_with("/>"),
    }
}

fn close_tag<'src>(lex: &mut Lexer<'src, MarkupToken<'src>>) -> &'src str {
    tag_name(&lex.slice()[2..])
}

/// Tokenize markup, dropping anything that is not a complete tag
pub fn tokenize(source: &str) -> Vec<MarkupToken<'_>> {
    MarkupToken::lexer(source).flatten().collect()
}

/// Open, non-void elements enclosing the end of the scanned text, outermost
/// first. Names are lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStack {
    names: Vec<String>,
}

impl TagStack {
    /// Scan `source` from the start. `is_void` decides which opening tags
    /// never take a closing tag.
    pub fn scan(source: &str, is_void: impl Fn(&str) -> bool) -> Self {
        let mut stack = Self::default();

        for token in MarkupToken::lexer(source).flatten() {
            match token {
                MarkupToken::Open(tag) => {
                    let name = tag.name.to_ascii_lowercase();
                    if !tag.self_closing && !is_void(&name) {
                        stack.names.push(name);
                    }
                }
                MarkupToken::Close(name) => {
                    // A mismatched closing tag is ignored, not recovered from
                    if stack
                        .names
                        .last()
                        .is_some_and(|top| top.eq_ignore_ascii_case(name))
                    {
                        stack.names.pop();
                    }
                }
                MarkupToken::Ignored => {}
            }
        }

        stack
    }

    /// Innermost open element
    pub fn top(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
