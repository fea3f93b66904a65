//! End-to-end assistance over a combined page

use jovibe_assist::{close_nearest_tag, quick_actions, suggest, Assistance, QuickKind};
use jovibe_lexicon::Lexicon;
use jovibe_scanner::{classify, Context};

const PAGE: &str = "<html>\n<head>\n  <style>\n    body { color: |STYLE }\n  </style>\n</head>\n<body>\n  <div class=\"app\">\n    <p>|MARKUP\n  </div>\n  <script>\n    cons|SCRIPT\n  </script>\n</body>\n</html>\n";

fn cursor_at(marker: &str) -> (String, usize) {
    let cursor = PAGE.find(marker).unwrap();
    (PAGE.replacen(marker, "", 1), cursor)
}

#[test]
fn test_style_value_suggestions_in_page() {
    let (text, cursor) = cursor_at("|STYLE");
    let lexicon = Lexicon::builtin();
    assert_eq!(classify(&text, cursor), Context::Style);
    let result = suggest(&text, cursor, Context::Style, &lexicon);
    assert!(result.items().iter().any(|s| s.label == "white"));
    assert!(matches!(result, Assistance::Suggestions { match_start, .. } if match_start == cursor));
}

#[test]
fn test_script_suggestions_in_page() {
    let (text, cursor) = cursor_at("|SCRIPT");
    let lexicon = Lexicon::builtin();
    let context = classify(&text, cursor);
    assert_eq!(context, Context::Script);
    let result = suggest(&text, cursor, context, &lexicon);
    let first = &result.items()[0];
    let (edited, after) = first.insertion(cursor - 4, cursor).apply_with_cursor(&text);
    assert!(edited.contains("    const\n"));
    assert_eq!(&edited[after - 5..after], "const");
}

#[test]
fn test_smart_close_inside_paragraph() {
    let (text, cursor) = cursor_at("|MARKUP");
    let lexicon = Lexicon::builtin();
    assert_eq!(classify(&text, cursor), Context::Markup);
    let insertion = close_nearest_tag(&text, cursor, &lexicon);
    assert_eq!(insertion.text, "</p>");
}

#[test]
fn test_quick_palettes_follow_context() {
    let (text, cursor) = cursor_at("|MARKUP");
    let palette = quick_actions(classify(&text, cursor));
    assert!(palette.iter().any(|a| a.kind == QuickKind::SmartClose));

    let (text, cursor) = cursor_at("|SCRIPT");
    let palette = quick_actions(classify(&text, cursor));
    assert!(palette.iter().all(|a| a.kind != QuickKind::SmartClose));
    assert!(palette.iter().any(|a| a.value == "console.log()"));
}

#[test]
fn test_assistance_serializes_with_type_tag() {
    let lexicon = Lexicon::builtin();
    let text = "a { color: #ab";
    let json = serde_json::to_value(suggest(text, text.len(), Context::Style, &lexicon)).unwrap();
    assert_eq!(json["type"], "colorPicker");
    assert_eq!(json["partial"], "#ab");

    let json = serde_json::to_value(suggest("<sp", 3, Context::Markup, &lexicon)).unwrap();
    assert_eq!(json["type"], "suggestions");
    assert_eq!(json["matchStart"], 0);
    assert_eq!(json["items"][0]["insertText"], "<span></span>");
}
