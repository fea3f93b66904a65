//! Integration tests for the edit session

use jovibe_assist::quick_actions;
use jovibe_caret::MonospaceSurface;
use jovibe_editor::{
    EditSession, EditorConfig, EditorError, ImagePayload, Overlay, ProjectSnapshot, RewriteError,
    RewriteRequest, RewriteResponse, DEFAULT_SOURCE_DOC,
};
use jovibe_lexicon::Lexicon;
use jovibe_scanner::Context;

fn session() -> EditSession {
    EditSession::new("project-1", Lexicon::builtin(), EditorConfig::default())
}

#[test]
fn test_rewrite_success_is_one_undo_step() -> anyhow::Result<()> {
    let mut s = session();
    let typed = format!("{}<!-- note -->", DEFAULT_SOURCE_DOC);
    s.on_input(typed.clone(), typed.len(), 0);

    let mut seen = None;
    let mut collaborator = |request: &RewriteRequest| -> Result<RewriteResponse, RewriteError> {
        seen = Some(request.clone());
        Ok(RewriteResponse {
            source_doc: "<p>rewritten</p>".to_string(),
            summary: "Replaced everything".to_string(),
        })
    };

    let summary = s.request_rewrite(&mut collaborator, "make it short", None)?;
    assert_eq!(summary, "Replaced everything");
    assert_eq!(s.text(), "<p>rewritten</p>");

    let request = seen.expect("collaborator called");
    assert_eq!(request.document, typed);
    assert!(request.history.is_empty());

    let chat = s.chat_history();
    assert_eq!(chat.len(), 2);
    assert_eq!(chat[0].content, "make it short");
    assert_eq!(chat[1].content, "Replaced everything");

    assert!(s.undo());
    assert_eq!(s.text(), typed);
    assert!(s.undo());
    assert_eq!(s.text(), DEFAULT_SOURCE_DOC);
    Ok(())
}

#[test]
fn test_rewrite_failure_rolls_back_conversation() {
    let mut s = session();
    let mut failing = |_: &RewriteRequest| -> Result<RewriteResponse, RewriteError> {
        Err(RewriteError::Collaborator("offline".to_string()))
    };

    let image = ImagePayload {
        data: "AAAA".to_string(),
        mime_type: "image/png".to_string(),
    };
    let result = s.request_rewrite(&mut failing, "add a header", Some(image));

    assert!(matches!(result, Err(EditorError::Rewrite(RewriteError::Collaborator(_)))));
    assert!(s.chat_history().is_empty());
    assert_eq!(s.text(), DEFAULT_SOURCE_DOC);
    assert!(!s.can_undo());
}

#[test]
fn test_rewrite_with_empty_summary_is_rejected() {
    let mut s = session();
    let mut empty = |_: &RewriteRequest| -> Result<RewriteResponse, RewriteError> {
        Ok(RewriteResponse {
            source_doc: "<p></p>".to_string(),
            summary: String::new(),
        })
    };
    let err = s.request_rewrite(&mut empty, "x", None).unwrap_err();
    assert!(matches!(err, EditorError::Rewrite(RewriteError::MissingFields)));
    assert_eq!(s.text(), DEFAULT_SOURCE_DOC);
}

#[test]
fn test_reset_to_template_clears_chat_and_is_undoable() {
    let mut s = session();
    s.on_input("<p>mine</p>", 0, 0);
    let mut ok = |_: &RewriteRequest| -> Result<RewriteResponse, RewriteError> {
        Ok(RewriteResponse {
            source_doc: "<p>theirs</p>".to_string(),
            summary: "ok".to_string(),
        })
    };
    s.request_rewrite(&mut ok, "change", None).unwrap();

    s.reset_to_template();
    assert_eq!(s.text(), DEFAULT_SOURCE_DOC);
    assert!(s.chat_history().is_empty());
    assert!(s.undo());
    assert_eq!(s.text(), "<p>theirs</p>");
}

#[test]
fn test_reset_during_pending_edit_undoes_to_committed_text() {
    let mut s = EditSession::new("p", Lexicon::builtin(), EditorConfig::default());
    s.on_input("orig", 4, 0);
    s.tick(800);
    s.on_input("orig!", 5, 1_000);

    s.reset_to_template();
    assert!(s.undo());
    assert_eq!(s.text(), "orig");
    assert!(s.redo());
    assert_eq!(s.text(), DEFAULT_SOURCE_DOC);
}

#[test]
fn test_snapshot_round_trip_restores_history() {
    let mut s = session();
    s.on_input("<main></main>", 6, 0);
    let snapshot = s.snapshot();
    assert_eq!(snapshot.source_doc, "<main></main>");
    assert_eq!(snapshot.history.undo_levels(), 1);

    let json = snapshot.to_json().unwrap();
    let mut restored = EditSession::from_snapshot(
        ProjectSnapshot::from_json(&json).unwrap(),
        Lexicon::builtin(),
        EditorConfig::default(),
    );
    assert_eq!(restored.text(), "<main></main>");
    assert!(restored.undo());
    assert_eq!(restored.text(), DEFAULT_SOURCE_DOC);
}

#[test]
fn test_quick_actions_follow_context() {
    let mut s = session();
    let text = "<script>\n";
    s.on_input(text, text.len(), 0);
    assert_eq!(s.context(), Context::Script);

    let log = quick_actions(s.context())
        .iter()
        .find(|a| a.value == "console.log()")
        .unwrap();
    s.quick_action(log, 10);
    assert_eq!(s.text(), "<script>\nconsole.log()");
    assert_eq!(&s.text()[s.cursor()..], ")");
}

#[test]
fn test_caret_for_overlay() {
    let mut s = session();
    let text = "<div>\n  <sp";
    s.on_input(text, text.len(), 0);
    assert!(matches!(s.overlay(), Overlay::Suggestions { .. }));

    let mut surface = MonospaceSurface::new(10.0, 20.0).with_padding(0.0);
    let caret = s.caret(&mut surface).unwrap();
    assert_eq!((caret.top, caret.left), (20.0, 50.0));
}

#[test]
fn test_close_tag_in_session() {
    let mut s = session();
    let text = "<ul><li>one";
    s.on_input(text, text.len(), 0);
    s.close_tag(5);
    assert_eq!(s.text(), "<ul><li>one</li>");
    assert_eq!(s.cursor(), s.text().len());
}
