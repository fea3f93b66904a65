//! Caret measurement through the mirror protocol

use jovibe_caret::{
    caret_position, CaretError, ComputedStyle, MarkerOffset, MirrorStyle, MirrorSurface,
    MonospaceSurface,
};

#[test]
fn test_monospace_caret_rows_and_columns() {
    let mut surface = MonospaceSurface::new(10.0, 20.0).with_padding(5.0).with_border(1.0);
    let text = "<div>\n  <p>hi</p>\n</div>";

    let start = caret_position(&mut surface, text, 0).unwrap();
    assert_eq!((start.top, start.left), (6.0, 6.0));
    assert_eq!(start.line_height, 20.0);

    let cursor = text.find("hi").unwrap();
    let inside = caret_position(&mut surface, text, cursor).unwrap();
    assert_eq!(inside.top, 6.0 + 20.0);
    assert_eq!(inside.left, 6.0 + 5.0 * 10.0);

    assert!(!surface.is_mounted());
}

#[test]
fn test_caret_at_end_of_document() {
    let mut surface = MonospaceSurface::new(8.0, 16.0).with_padding(0.0);
    let text = "ab\n";
    let end = caret_position(&mut surface, text, text.len()).unwrap();
    assert_eq!((end.top, end.left), (16.0, 0.0));

    let clamped = caret_position(&mut surface, text, 99).unwrap();
    assert_eq!(clamped, end);
}

#[test]
fn test_caret_is_deterministic() {
    let mut surface = MonospaceSurface::default();
    let text = "const a = 1;\n\tlet b = '日本';";
    for cursor in 0..=text.len() {
        let first = caret_position(&mut surface, text, cursor);
        let second = caret_position(&mut surface, text, cursor);
        assert_eq!(first, second);
    }
}

/// Records the mirror protocol and fails where asked
#[derive(Default)]
struct ScriptedSurface {
    metrics: bool,
    fail_measure: bool,
    mounted: bool,
    unmounts: usize,
    last_mount: Option<(String, String, String)>,
}

impl MirrorSurface for ScriptedSurface {
    fn computed_style(&self) -> Option<ComputedStyle> {
        self.metrics.then(|| {
            ComputedStyle::new()
                .with("border-top-width", "2px")
                .with("border-left-width", "3px")
                .with("font-size", "10px")
                .with("line-height", "normal")
        })
    }

    fn mount_mirror(&mut self, style: &MirrorStyle, before: &str, marker: &str) -> Result<(), CaretError> {
        self.mounted = true;
        self.last_mount = Some((style.to_css(), before.to_string(), marker.to_string()));
        Ok(())
    }

    fn marker_offset(&self) -> Result<MarkerOffset, CaretError> {
        if self.fail_measure {
            return Err(CaretError::Measure("detached".to_string()));
        }
        Ok(MarkerOffset { top: 40.0, left: 7.0 })
    }

    fn unmount_mirror(&mut self) {
        self.mounted = false;
        self.unmounts += 1;
    }
}

#[test]
fn test_mirror_receives_split_text() {
    let mut surface = ScriptedSurface {
        metrics: true,
        ..Default::default()
    };
    let position = caret_position(&mut surface, "hello world", 5).unwrap();
    assert_eq!(position.top, 42.0);
    assert_eq!(position.left, 10.0);
    assert!((position.line_height - 12.0).abs() < 1e-9);

    let (css, before, marker) = surface.last_mount.clone().unwrap();
    assert_eq!(before, "hello");
    assert_eq!(marker, " world");
    assert!(css.contains("white-space: pre;"));
    assert_eq!(surface.unmounts, 1);

    caret_position(&mut surface, "hello", 5).unwrap();
    assert_eq!(surface.last_mount.unwrap().2, ".");
}

#[test]
fn test_mirror_unmounted_when_measure_fails() {
    let mut surface = ScriptedSurface {
        metrics: true,
        fail_measure: true,
        ..Default::default()
    };
    let result = caret_position(&mut surface, "abc", 1);
    assert!(matches!(result, Err(CaretError::Measure(_))));
    assert!(!surface.mounted);
    assert_eq!(surface.unmounts, 1);
}

#[test]
fn test_missing_metrics_never_mounts() {
    let mut surface = ScriptedSurface::default();
    assert_eq!(
        caret_position(&mut surface, "abc", 1),
        Err(CaretError::MetricsUnavailable)
    );
    assert!(surface.last_mount.is_none());
    assert_eq!(surface.unmounts, 0);
}
