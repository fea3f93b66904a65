//! # Edit Session
//!
//! Per-keystroke coordination for one open project: the document manager,
//! the classified context, the suggestion/color overlay and the rewrite
//! conversation.
//!
//! Every input event re-classifies the cursor and recomputes assistance
//! synchronously. Overlays are placed by the host using [`EditSession::caret`]
//! and are dismissed whenever the surface scrolls.

use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::manager::DocumentManager;
use crate::rewrite::{ChatTurn, ImagePayload, RewriteCollaborator, RewriteRequest};
use crate::snapshot::ProjectSnapshot;
use crate::template::DEFAULT_SOURCE_DOC;
use jovibe_assist::{close_nearest_tag, suggest, Assistance, ColorRequest, Insertion, QuickAction, Suggestion};
use jovibe_caret::{caret_position, CaretPosition, MirrorSurface};
use jovibe_lexicon::Lexicon;
use jovibe_scanner::{classify, Context};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What floats over the editor at the cursor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Overlay {
    #[default]
    Hidden,

    #[serde(rename_all = "camelCase")]
    Suggestions {
        items: Vec<Suggestion>,
        match_start: usize,
        selected: usize,
    },

    ColorPicker(ColorRequest),
}

impl Overlay {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Overlay::Hidden)
    }

    fn from_assistance(assistance: Assistance) -> Self {
        match assistance {
            Assistance::Suggestions { items, .. } if items.is_empty() => Overlay::Hidden,
            Assistance::Suggestions { items, match_start } => Overlay::Suggestions {
                items,
                match_start,
                selected: 0,
            },
            Assistance::ColorPicker(request) => Overlay::ColorPicker(request),
        }
    }
}

pub struct EditSession {
    pub id: String,
    pub name: String,
    manager: DocumentManager,
    lexicon: Lexicon,
    context: Context,
    overlay: Overlay,
    chat: Vec<ChatTurn>,
}

impl EditSession {
    /// Session over the starter document
    pub fn new(id: impl Into<String>, lexicon: Lexicon, config: EditorConfig) -> Self {
        Self::from_snapshot(ProjectSnapshot::new(id), lexicon, config)
    }

    pub fn from_snapshot(snapshot: ProjectSnapshot, lexicon: Lexicon, config: EditorConfig) -> Self {
        let mut manager = DocumentManager::new(String::new(), config);
        manager.restore(snapshot.source_doc, snapshot.history);
        let mut session = Self {
            id: snapshot.id,
            name: snapshot.name,
            manager,
            lexicon,
            context: Context::default(),
            overlay: Overlay::Hidden,
            chat: snapshot.chat_history,
        };
        session.reclassify();
        session
    }

    pub fn text(&self) -> &str {
        self.manager.text()
    }

    pub fn cursor(&self) -> usize {
        self.manager.cursor()
    }

    pub fn version(&self) -> u64 {
        self.manager.document().version()
    }

    pub fn context(&self) -> Context {
        self.context
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn chat_history(&self) -> &[ChatTurn] {
        &self.chat
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn manager(&self) -> &DocumentManager {
        &self.manager
    }

    pub fn can_undo(&self) -> bool {
        self.manager.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.manager.can_redo()
    }

    /// A keystroke or paste replaced the text
    pub fn on_input(&mut self, text: impl Into<String>, cursor: usize, now_ms: u64) -> &Overlay {
        self.manager.apply(text, cursor, now_ms);
        self.refresh();
        &self.overlay
    }

    /// The cursor moved without a text change
    pub fn on_cursor(&mut self, cursor: usize) -> &Overlay {
        self.manager.set_cursor(cursor);
        self.refresh();
        &self.overlay
    }

    pub fn on_scroll(&mut self) {
        self.dismiss();
    }

    pub fn dismiss(&mut self) {
        self.overlay = Overlay::Hidden;
    }

    /// Move the highlighted suggestion, wrapping at both ends
    pub fn select_next(&mut self) {
        if let Overlay::Suggestions { items, selected, .. } = &mut self.overlay {
            *selected = (*selected + 1) % items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if let Overlay::Suggestions { items, selected, .. } = &mut self.overlay {
            *selected = (*selected + items.len() - 1) % items.len();
        }
    }

    /// Accept the suggestion at `index`, or the highlighted one. Returns
    /// whether anything was inserted.
    pub fn accept_suggestion(&mut self, index: Option<usize>, now_ms: u64) -> bool {
        let Overlay::Suggestions {
            items,
            match_start,
            selected,
        } = &self.overlay
        else {
            return false;
        };
        let Some(suggestion) = items.get(index.unwrap_or(*selected)) else {
            return false;
        };

        debug!(label = %suggestion.label, "Accepted suggestion");
        let insertion = suggestion.insertion(*match_start, self.cursor());
        self.dismiss();
        self.apply_insertion(&insertion, now_ms);
        true
    }

    /// Replace the partial color with a picked one
    pub fn accept_color(&mut self, color: &str, now_ms: u64) -> bool {
        let Overlay::ColorPicker(request) = &self.overlay else {
            return false;
        };
        let insertion = request.accept(color, self.cursor());
        self.dismiss();
        self.apply_insertion(&insertion, now_ms);
        true
    }

    pub fn quick_action(&mut self, action: &QuickAction, now_ms: u64) {
        let insertion = action.insertion(self.text(), self.cursor(), &self.lexicon);
        self.apply_insertion(&insertion, now_ms);
        self.refresh();
    }

    pub fn close_tag(&mut self, now_ms: u64) {
        let insertion = close_nearest_tag(self.text(), self.cursor(), &self.lexicon);
        self.dismiss();
        self.apply_insertion(&insertion, now_ms);
    }

    /// Caret position for overlay placement
    pub fn caret<S: MirrorSurface + ?Sized>(&self, surface: &mut S) -> Result<CaretPosition, EditorError> {
        Ok(caret_position(surface, self.text(), self.cursor())?)
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.manager.tick(now_ms)
    }

    pub fn flush(&mut self) -> bool {
        self.manager.flush()
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.manager.undo();
        if changed {
            self.dismiss();
            self.reclassify();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.manager.redo();
        if changed {
            self.dismiss();
            self.reclassify();
        }
        changed
    }

    /// Ask `collaborator` to rewrite the document.
    ///
    /// The user turn is shown immediately. On success the new document
    /// becomes one undo step and the summary is appended as a model turn.
    /// On failure the conversation is restored and the document is left
    /// untouched.
    pub fn request_rewrite<C>(
        &mut self,
        collaborator: &mut C,
        instruction: &str,
        image: Option<ImagePayload>,
    ) -> Result<String, EditorError>
    where
        C: RewriteCollaborator + ?Sized,
    {
        self.manager.flush();
        let prior_len = self.chat.len();
        let request = RewriteRequest {
            instruction: instruction.to_string(),
            document: self.text().to_string(),
            history: self.chat.clone(),
            image,
        };
        self.chat.push(ChatTurn::user(instruction, request.image.as_ref()));

        let response = match collaborator.rewrite(&request).and_then(|r| r.validate()) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Rewrite failed");
                self.chat.truncate(prior_len);
                return Err(e.into());
            }
        };

        self.manager.commit_snapshot(response.source_doc);
        self.chat.push(ChatTurn::model(response.summary.clone()));
        self.dismiss();
        self.reclassify();
        info!(version = self.version(), "Applied rewrite");
        Ok(response.summary)
    }

    /// Back to the starter document with an empty conversation; undoable
    pub fn reset_to_template(&mut self) {
        self.manager.commit_snapshot(DEFAULT_SOURCE_DOC);
        self.chat.clear();
        self.dismiss();
        self.reclassify();
    }

    /// Commit any pending edit and capture the project
    pub fn snapshot(&mut self) -> ProjectSnapshot {
        self.manager.flush();
        ProjectSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            source_doc: self.manager.committed().to_string(),
            history: self.manager.history().clone(),
            chat_history: self.chat.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: ProjectSnapshot) {
        self.id = snapshot.id;
        self.name = snapshot.name;
        self.manager.restore(snapshot.source_doc, snapshot.history);
        self.chat = snapshot.chat_history;
        self.dismiss();
        self.reclassify();
    }

    fn apply_insertion(&mut self, insertion: &Insertion, now_ms: u64) {
        let (text, cursor) = insertion.apply_with_cursor(self.text());
        self.manager.apply(text, cursor, now_ms);
        self.reclassify();
    }

    fn refresh(&mut self) {
        self.reclassify();
        let assistance = suggest(self.text(), self.cursor(), self.context, &self.lexicon);
        self.overlay = Overlay::from_assistance(assistance);
    }

    fn reclassify(&mut self) {
        let context = classify(self.text(), self.cursor());
        if context != self.context {
            debug!(from = %self.context, to = %context, "Context changed");
            self.context = context;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> EditSession {
        let mut session = EditSession::new("test", Lexicon::builtin(), EditorConfig::default());
        session.restore(ProjectSnapshot {
            source_doc: text.to_string(),
            ..ProjectSnapshot::new("test")
        });
        session
    }

    #[test]
    fn test_new_session_uses_template() {
        let session = EditSession::new("p", Lexicon::builtin(), EditorConfig::default());
        assert_eq!(session.text(), DEFAULT_SOURCE_DOC);
        assert_eq!(session.context(), Context::Markup);
        assert!(!session.overlay().is_visible());
    }

    #[test]
    fn test_typing_shows_and_accepting_hides_suggestions() {
        let mut s = session("");
        let overlay = s.on_input("<sp", 3, 0).clone();
        assert!(matches!(overlay, Overlay::Suggestions { match_start: 0, .. }));

        assert!(s.accept_suggestion(None, 10));
        assert_eq!(s.text(), "<span></span>");
        assert_eq!(s.cursor(), 6);
        assert!(!s.overlay().is_visible());
    }

    #[test]
    fn test_selection_wraps() {
        let mut s = session("");
        s.on_input("<", 1, 0);
        s.select_previous();
        let Overlay::Suggestions { items, selected, .. } = s.overlay() else {
            panic!("expected suggestions");
        };
        assert_eq!(*selected, items.len() - 1);
        s.select_next();
        assert!(matches!(s.overlay(), Overlay::Suggestions { selected: 0, .. }));
    }

    #[test]
    fn test_scroll_dismisses_overlay() {
        let mut s = session("");
        s.on_input("<d", 2, 0);
        assert!(s.overlay().is_visible());
        s.on_scroll();
        assert!(!s.overlay().is_visible());
        assert!(!s.accept_suggestion(None, 0));
    }

    #[test]
    fn test_color_picker_flow() {
        let mut s = session("<style>");
        let text = "<style>p { color: #f";
        s.on_input(text, text.len(), 0);
        assert_eq!(s.context(), Context::Style);
        assert!(matches!(s.overlay(), Overlay::ColorPicker(_)));

        assert!(s.accept_color("#ff0000", 5));
        assert_eq!(s.text(), "<style>p { color: #ff0000");
        assert_eq!(s.cursor(), s.text().len());
    }

    #[test]
    fn test_keystrokes_debounce_into_one_undo_step() {
        let mut s = session("");
        s.on_input("<", 1, 0);
        s.on_input("<p", 2, 100);
        s.on_input("<p>", 3, 200);
        assert!(s.tick(1_000));
        assert!(s.undo());
        assert_eq!(s.text(), "");
        assert!(s.redo());
        assert_eq!(s.text(), "<p>");
    }
}
