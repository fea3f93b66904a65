//! # Suggestion Engine
//!
//! Given the text, the cursor and the classified context, produce up to ten
//! completion candidates plus the offset where the word being completed
//! starts.
//!
//! ## Per-context rules
//!
//! - **markup**: inside an unfinished `<...` either complete the tag name or,
//!   once whitespace follows the name, the attribute being typed
//! - **style**: inside a declaration either complete the property name or,
//!   after the `:`, a value from that property's list. A `#` after a
//!   separator opens the color picker instead
//! - **script**: complete keywords and common globals
//!
//! Candidates keep their lexicon order. The engine never fails; anything it
//! cannot make sense of yields an empty list.

use crate::color::{detect_trigger, ColorRequest};
use crate::insertion::Insertion;
use jovibe_lexicon::Lexicon;
use jovibe_scanner::{clamp_offset, trailing_run_start, Context};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Maximum number of candidates returned
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Tag,
    Attribute,
    CssProperty,
    CssValue,
    Keyword,
    ColorTrigger,
}

/// A completion candidate with its insertion template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Text shown in the list
    pub label: String,

    pub kind: SuggestionKind,

    /// Text that replaces the word being completed
    pub insert_text: String,

    /// Cursor position inside `insert_text` after insertion
    pub cursor_offset: usize,
}

impl Suggestion {
    /// `<tag></tag>` with the cursor between the tags, or `<tag>` for void
    /// elements
    pub fn tag(name: &str, is_void: bool) -> Self {
        let open = format!("<{}>", name);
        let cursor_offset = open.len();
        let insert_text = if is_void {
            open
        } else {
            format!("{}</{}>", open, name)
        };
        Self {
            label: name.to_string(),
            kind: SuggestionKind::Tag,
            insert_text,
            cursor_offset,
        }
    }

    /// `name=""` with the cursor between the quotes
    pub fn attribute(name: &str) -> Self {
        let insert_text = format!("{}=\"\"", name);
        Self {
            label: name.to_string(),
            kind: SuggestionKind::Attribute,
            cursor_offset: insert_text.len() - 1,
            insert_text,
        }
    }

    /// `prop: ` with the cursor after the space
    pub fn css_property(name: &str) -> Self {
        Self::ending_at_cursor(name, SuggestionKind::CssProperty, format!("{}: ", name))
    }

    /// `value;` with the cursor after the semicolon
    pub fn css_value(value: &str) -> Self {
        Self::ending_at_cursor(value, SuggestionKind::CssValue, format!("{};", value))
    }

    pub fn keyword(word: &str) -> Self {
        Self::ending_at_cursor(word, SuggestionKind::Keyword, word.to_string())
    }

    /// A picked color, inserted verbatim
    pub fn color(color: &str) -> Self {
        Self::ending_at_cursor(color, SuggestionKind::ColorTrigger, color.to_string())
    }

    fn ending_at_cursor(label: &str, kind: SuggestionKind, insert_text: String) -> Self {
        Self {
            label: label.to_string(),
            kind,
            cursor_offset: insert_text.len(),
            insert_text,
        }
    }

    /// Replace `match_start..cursor` with this suggestion
    pub fn insertion(&self, match_start: usize, cursor: usize) -> Insertion {
        Insertion::replace(
            match_start..cursor.max(match_start),
            self.insert_text.clone(),
            self.cursor_offset,
        )
    }
}

/// What the engine wants the host to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Assistance {
    Suggestions {
        items: Vec<Suggestion>,
        #[serde(rename = "matchStart")]
        match_start: usize,
    },
    ColorPicker(ColorRequest),
}

impl Assistance {
    fn empty(cursor: usize) -> Self {
        Assistance::Suggestions {
            items: Vec::new(),
            match_start: cursor,
        }
    }

    /// The text suggestions, empty for a color-picker request
    pub fn items(&self) -> &[Suggestion] {
        match self {
            Assistance::Suggestions { items, .. } => items,
            Assistance::ColorPicker(_) => &[],
        }
    }

    /// True when there is nothing to show at all
    pub fn is_empty(&self) -> bool {
        matches!(self, Assistance::Suggestions { items, .. } if items.is_empty())
    }

    pub fn color_request(&self) -> Option<&ColorRequest> {
        match self {
            Assistance::ColorPicker(request) => Some(request),
            Assistance::Suggestions { .. } => None,
        }
    }
}

/// Produce suggestions for the cursor position
pub fn suggest(text: &str, cursor: usize, context: Context, lexicon: &Lexicon) -> Assistance {
    let before = &text[..clamp_offset(text, cursor)];

    let assistance = match context {
        Context::Markup => suggest_markup(before, lexicon),
        Context::Style => suggest_style(before, lexicon),
        Context::Script => suggest_script(before, lexicon),
    };

    trace!(
        context = %context,
        count = assistance.items().len(),
        color = assistance.color_request().is_some(),
        "Computed suggestions"
    );
    assistance
}

fn suggest_markup(before: &str, lexicon: &Lexicon) -> Assistance {
    let cursor = before.len();
    let Some(lt) = before.rfind('<') else {
        return Assistance::empty(cursor);
    };
    if before.rfind('>').is_some_and(|gt| gt > lt) {
        return Assistance::empty(cursor);
    }

    let segment = &before[lt..];
    if segment.contains(char::is_whitespace) {
        let start = trailing_run_start(before, is_attribute_char);
        let typed = &before[start..];
        if typed.is_empty() {
            return Assistance::empty(cursor);
        }
        let items = matching(&lexicon.attributes, typed)
            .map(Suggestion::attribute)
            .collect();
        Assistance::Suggestions {
            items,
            match_start: start,
        }
    } else {
        let typed = &segment[1..];
        let items = matching(&lexicon.tags, typed)
            .map(|name| Suggestion::tag(name, lexicon.is_void(name)))
            .collect();
        Assistance::Suggestions {
            items,
            match_start: lt,
        }
    }
}

fn suggest_style(before: &str, lexicon: &Lexicon) -> Assistance {
    let cursor = before.len();
    let declaration_start = before.rfind([';', '{', '}']).map_or(0, |i| i + 1);
    let declaration = &before[declaration_start..];

    match declaration.find(':') {
        Some(colon) => {
            if let Some(request) = detect_trigger(before) {
                return Assistance::ColorPicker(request);
            }

            let property = declaration[..colon].trim().to_ascii_lowercase();
            let value_start = declaration_start + colon + 1;
            let token_start = value_start + trailing_run_start(&before[value_start..], is_value_char);
            let Some(values) = lexicon.values_for(&property) else {
                return Assistance::empty(cursor);
            };

            let items = matching(values, &before[token_start..])
                .map(Suggestion::css_value)
                .collect();
            Assistance::Suggestions {
                items,
                match_start: token_start,
            }
        }
        None => {
            let start = trailing_run_start(before, is_property_char);
            let typed = &before[start..];
            if typed.is_empty() {
                return Assistance::empty(cursor);
            }
            let items = matching(&lexicon.css_properties, typed)
                .map(Suggestion::css_property)
                .collect();
            Assistance::Suggestions {
                items,
                match_start: start,
            }
        }
    }
}

fn suggest_script(before: &str, lexicon: &Lexicon) -> Assistance {
    let start = trailing_run_start(before, is_script_ident_char);
    let typed = &before[start..];
    if typed.is_empty() {
        return Assistance::empty(before.len());
    }
    let items = matching(&lexicon.keywords, typed)
        .map(Suggestion::keyword)
        .collect();
    Assistance::Suggestions {
        items,
        match_start: start,
    }
}

/// Words starting with `typed` (ASCII case-insensitive), in lexicon order
fn matching<'a>(words: &'a [String], typed: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    words
        .iter()
        .map(String::as_str)
        .filter(move |word| starts_with_ignore_case(word, typed))
        .take(MAX_SUGGESTIONS)
}

fn starts_with_ignore_case(word: &str, prefix: &str) -> bool {
    word.len() >= prefix.len()
        && word.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn is_attribute_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')
}

fn is_property_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '#')
}

fn is_script_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$')
}
