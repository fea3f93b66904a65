//! Byte offsets inside Rust, UTF-16 indices on the JavaScript side

use jovibe_assist::{Assistance, ColorRequest, Suggestion};
use jovibe_editor::Overlay;
use jovibe_scanner::byte_to_utf16;

fn suggestion(item: &Suggestion) -> Suggestion {
    Suggestion {
        cursor_offset: byte_to_utf16(&item.insert_text, item.cursor_offset),
        ..item.clone()
    }
}

fn color_request(text: &str, request: &ColorRequest) -> ColorRequest {
    ColorRequest {
        partial: request.partial.clone(),
        start: byte_to_utf16(text, request.start),
    }
}

pub fn assistance(text: &str, assistance: &Assistance) -> Assistance {
    match assistance {
        Assistance::Suggestions { items, match_start } => Assistance::Suggestions {
            items: items.iter().map(suggestion).collect(),
            match_start: byte_to_utf16(text, *match_start),
        },
        Assistance::ColorPicker(request) => Assistance::ColorPicker(color_request(text, request)),
    }
}

pub fn overlay(text: &str, overlay: &Overlay) -> Overlay {
    match overlay {
        Overlay::Hidden => Overlay::Hidden,
        Overlay::Suggestions {
            items,
            match_start,
            selected,
        } => Overlay::Suggestions {
            items: items.iter().map(suggestion).collect(),
            match_start: byte_to_utf16(text, *match_start),
            selected: *selected,
        },
        Overlay::ColorPicker(request) => Overlay::ColorPicker(color_request(text, request)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_converted_after_astral_chars() {
        // '😀' is four bytes and two UTF-16 units
        let text = "😀<sp";
        let converted = assistance(
            text,
            &Assistance::Suggestions {
                items: vec![Suggestion::tag("span", false)],
                match_start: 4,
            },
        );
        assert!(matches!(converted, Assistance::Suggestions { match_start: 2, .. }));
    }

    #[test]
    fn test_cursor_offset_inside_insert_text() {
        let item = Suggestion::keyword("é");
        assert_eq!(suggestion(&item).cursor_offset, 1);
    }
}
