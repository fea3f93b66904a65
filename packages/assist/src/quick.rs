//! Quick-insert palettes.
//!
//! One palette per context, shown as a strip of buttons next to the editor.
//! Each action is a templated insertion with a declared cursor rule.

use crate::insertion::{close_nearest_tag, Insertion};
use crate::suggest::Suggestion;
use jovibe_lexicon::Lexicon;
use jovibe_scanner::{clamp_offset, Context};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickKind {
    /// Literal text
    Text,
    /// Element name wrapped as `<tag></tag>` (or `<tag>` when void)
    Tag,
    /// Literal text with a cursor rule
    Snippet,
    /// Close the innermost open element
    SmartClose,
    Indent,
}

/// Where the cursor lands inside the inserted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorRule {
    End,
    /// This many bytes before the end
    Before(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub label: &'static str,
    pub value: &'static str,
    pub kind: QuickKind,
    pub cursor: CursorRule,
}

const fn text(label: &'static str, value: &'static str) -> QuickAction {
    QuickAction { label, value, kind: QuickKind::Text, cursor: CursorRule::End }
}

const fn tag(name: &'static str) -> QuickAction {
    QuickAction { label: name, value: name, kind: QuickKind::Tag, cursor: CursorRule::End }
}

const fn snippet(label: &'static str, value: &'static str, before: usize) -> QuickAction {
    QuickAction { label, value, kind: QuickKind::Snippet, cursor: CursorRule::Before(before) }
}

const INDENT: QuickAction =
    QuickAction { label: "Indent", value: "  ", kind: QuickKind::Indent, cursor: CursorRule::End };

const CLOSE_TAG: QuickAction =
    QuickAction { label: "Close Tag", value: "", kind: QuickKind::SmartClose, cursor: CursorRule::End };

const BLOCK: &str = "{\n  \n}";

pub const MARKUP_ACTIONS: &[QuickAction] = &[
    INDENT,
    CLOSE_TAG,
    text("<", "<"),
    text(">", ">"),
    text("/", "/"),
    text("=", "="),
    text("\"", "\""),
    tag("div"),
    tag("span"),
    snippet("class", "class=\"\"", 1),
    snippet("id", "id=\"\"", 1),
    tag("a"),
    tag("img"),
    tag("p"),
    tag("ul"),
    tag("li"),
    tag("br"),
    tag("style"),
    tag("script"),
];

pub const STYLE_ACTIONS: &[QuickAction] = &[
    INDENT,
    snippet("{ }", BLOCK, 2),
    text(":", ": "),
    text(";", ";"),
    text(".", "."),
    text("#", "#"),
    text("px", "px"),
    text("%", "%"),
    text("rem", "rem"),
    text("!imp", "!important"),
    text("flex", "display: flex;"),
    text("grid", "display: grid;"),
    text("color", "color: "),
    text("bg", "background: "),
    text("margin", "margin: "),
    text("padding", "padding: "),
];

pub const SCRIPT_ACTIONS: &[QuickAction] = &[
    INDENT,
    snippet("{ }", BLOCK, 2),
    snippet("( )", "()", 1),
    snippet("[ ]", "[]", 1),
    text("=>", " => "),
    text("=", " = "),
    text(".", "."),
    text(";", ";"),
    text("const", "const "),
    text("let", "let "),
    // Cursor lands where the function name goes
    snippet("func", "function () {\n  \n}", 9),
    // Cursor lands inside the condition
    snippet("if", "if () {\n  \n}", 8),
    snippet("else", "else {\n  \n}", 2),
    text("return", "return "),
    snippet("log", "console.log()", 1),
];

/// The palette for a context
pub fn quick_actions(context: Context) -> &'static [QuickAction] {
    match context {
        Context::Markup => MARKUP_ACTIONS,
        Context::Style => STYLE_ACTIONS,
        Context::Script => SCRIPT_ACTIONS,
    }
}

impl QuickAction {
    /// The insertion this action performs at `cursor`
    pub fn insertion(&self, text: &str, cursor: usize, lexicon: &Lexicon) -> Insertion {
        let cursor = clamp_offset(text, cursor);
        match self.kind {
            QuickKind::SmartClose => close_nearest_tag(text, cursor, lexicon),
            QuickKind::Tag => {
                Suggestion::tag(self.value, lexicon.is_void(self.value)).insertion(cursor, cursor)
            }
            QuickKind::Text | QuickKind::Snippet | QuickKind::Indent => {
                let offset = match self.cursor {
                    CursorRule::End => self.value.len(),
                    CursorRule::Before(n) => self.value.len().saturating_sub(n),
                };
                Insertion::at(cursor, self.value, offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(action: &QuickAction, text: &str) -> (String, usize) {
        let lexicon = Lexicon::builtin();
        action.insertion(text, text.len(), &lexicon).apply_with_cursor(text)
    }

    fn find(context: Context, label: &str) -> &'static QuickAction {
        quick_actions(context)
            .iter()
            .find(|action| action.label == label)
            .unwrap()
    }

    #[test]
    fn test_palettes_start_with_indent() {
        for context in Context::ALL {
            assert_eq!(quick_actions(context)[0].kind, QuickKind::Indent);
        }
    }

    #[test]
    fn test_attribute_snippet_cursor_between_quotes() {
        let (text, cursor) = run(find(Context::Markup, "class"), "<div ");
        assert_eq!(text, "<div class=\"\"");
        assert_eq!(&text[cursor..], "\"");
    }

    #[test]
    fn test_block_snippet_cursor_before_closing_brace() {
        let (text, cursor) = run(find(Context::Style, "{ }"), "p ");
        assert_eq!(text, "p {\n  \n}");
        assert_eq!(&text[cursor..], "\n}");
    }

    #[test]
    fn test_if_snippet_cursor_inside_condition() {
        let (text, cursor) = run(find(Context::Script, "if"), "");
        assert_eq!(&text[..cursor], "if (");
        let (text, cursor) = run(find(Context::Script, "func"), "");
        assert_eq!(&text[..cursor], "function ");
    }

    #[test]
    fn test_tag_action_wraps() {
        let (text, cursor) = run(find(Context::Markup, "div"), "");
        assert_eq!(text, "<div></div>");
        assert_eq!(cursor, 5);
        let (text, _) = run(find(Context::Markup, "br"), "");
        assert_eq!(text, "<br>");
    }

    #[test]
    fn test_smart_close_action() {
        let (text, _) = run(find(Context::Markup, "Close Tag"), "<ul><li>item");
        assert_eq!(text, "<ul><li>item</li>");
        let (text, _) = run(find(Context::Markup, "Close Tag"), "");
        assert_eq!(text, ">");
    }
}
