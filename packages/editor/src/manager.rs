//! # Document & History Manager
//!
//! Owns the live document, the last committed text and the undo history.
//!
//! ```text
//! keystroke ──► apply() ──► live text (visible immediately)
//!                  │
//!                  └─ restart quiescence timer
//!
//! tick(now) ──► timer due && live != committed ──► history.record(committed)
//!                                                  committed = live
//! ```
//!
//! A burst of keystrokes inside one quiescence window becomes a single undo
//! step. Non-debounced rewrites go through `commit_snapshot` and always form
//! exactly one step.

use crate::config::EditorConfig;
use crate::document::Document;
use crate::history::History;
use crate::quiescence::QuiescenceTimer;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DocumentManager {
    document: Document,
    committed: String,
    history: History,
    timer: QuiescenceTimer,
}

impl DocumentManager {
    pub fn new(text: impl Into<String>, config: EditorConfig) -> Self {
        let document = Document::new(text);
        Self {
            committed: document.text().to_string(),
            document,
            history: History::with_limit(config.history_limit),
            timer: QuiescenceTimer::new(config.quiescence_ms),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The live (visible) text
    pub fn text(&self) -> &str {
        self.document.text()
    }

    pub fn cursor(&self) -> usize {
        self.document.cursor()
    }

    /// The text as of the last committed undo step
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether a debounced edit is waiting to be committed
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.has_uncommitted_edit()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && !self.has_uncommitted_edit()
    }

    /// Update the live text and restart the quiescence timer
    pub fn apply(&mut self, text: impl Into<String>, cursor: usize, now_ms: u64) {
        self.document.set(text, cursor);
        self.timer.restart(now_ms);
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.document.set_cursor(cursor);
    }

    /// Commit the pending edit if its quiescence window has elapsed.
    /// Returns whether a history entry was recorded.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.timer.is_due(now_ms) {
            return false;
        }
        self.timer.cancel();
        self.commit_live()
    }

    /// Commit a pending debounced edit immediately
    pub fn flush(&mut self) -> bool {
        if !self.timer.is_pending() {
            return false;
        }
        self.timer.cancel();
        self.commit_live()
    }

    /// Replace the document as a single undo step, bypassing the debounce.
    ///
    /// A pending debounced edit is folded into the step: undo returns to the
    /// last committed text, the same entry the timer would have recorded.
    pub fn commit_snapshot(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        self.timer.cancel();

        if text == self.committed {
            if text == self.document.text() {
                return false;
            }
            self.show_committed(text);
            return true;
        }

        let previous = std::mem::replace(&mut self.committed, text.clone());
        self.history.record(previous);

        let cursor = self.document.cursor();
        self.document.set(text, cursor);
        debug!(undo_levels = self.history.undo_levels(), "Committed snapshot");
        true
    }

    /// Step back one entry. A pending debounced edit is committed first so
    /// it can be redone.
    pub fn undo(&mut self) -> bool {
        self.flush();
        let current = self.committed.clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.show_committed(previous);
                debug!(undo_levels = self.history.undo_levels(), "Undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.flush();
        let current = self.committed.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.show_committed(next);
                debug!(redo_levels = self.history.redo_levels(), "Redo");
                true
            }
            None => false,
        }
    }

    /// Replace all state, e.g. when switching projects
    pub fn restore(&mut self, text: impl Into<String>, history: History) {
        let limit = self.history.limit();
        self.timer.cancel();
        self.committed = String::new();
        self.show_committed(text.into());
        self.history = history;
        self.history.set_limit(limit);
    }

    fn has_uncommitted_edit(&self) -> bool {
        self.timer.is_pending() && self.document.text() != self.committed
    }

    fn commit_live(&mut self) -> bool {
        if self.document.text() == self.committed {
            return false;
        }
        let live = self.document.text().to_string();
        let previous = std::mem::replace(&mut self.committed, live);
        self.history.record(previous);
        debug!(undo_levels = self.history.undo_levels(), "Committed edit");
        true
    }

    fn show_committed(&mut self, text: String) {
        let cursor = self.document.cursor();
        self.document.set(text.clone(), cursor);
        self.committed = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HISTORY_LIMIT;

    fn manager() -> DocumentManager {
        DocumentManager::new("a", EditorConfig::default())
    }

    #[test]
    fn test_burst_commits_once() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        m.apply("abc", 3, 300);
        m.apply("abcd", 4, 600);
        assert!(!m.tick(1_000));
        assert_eq!(m.text(), "abcd");
        assert!(!m.can_redo());

        assert!(m.tick(1_400));
        assert_eq!(m.history().past().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(m.committed(), "abcd");
        assert!(!m.tick(5_000));
    }

    #[test]
    fn test_edit_reverted_before_quiescence_records_nothing() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        m.apply("a", 1, 100);
        assert!(!m.tick(900));
        assert!(!m.can_undo());
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        m.tick(800);
        m.apply("abc", 3, 1_000);
        m.tick(1_800);

        assert!(m.undo());
        assert_eq!(m.text(), "ab");
        assert!(m.undo());
        assert_eq!(m.text(), "a");
        assert!(!m.undo());

        assert!(m.redo());
        assert_eq!(m.text(), "ab");
        assert_eq!(m.history().future().collect::<Vec<_>>(), vec!["abc"]);
    }

    #[test]
    fn test_undo_flushes_pending_edit() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        assert!(m.can_undo());
        assert!(m.undo());
        assert_eq!(m.text(), "a");
        assert!(m.redo());
        assert_eq!(m.text(), "ab");
    }

    #[test]
    fn test_commit_snapshot_is_one_step_with_pending_edit() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        assert!(m.commit_snapshot("rewritten"));
        assert!(!m.is_pending());
        assert_eq!(m.history().past().collect::<Vec<_>>(), vec!["a"]);
        assert!(!m.tick(10_000));

        assert!(m.undo());
        assert_eq!(m.text(), "a");
        assert!(!m.undo());
        assert_eq!(m.text(), "a");
        assert!(m.redo());
        assert_eq!(m.text(), "rewritten");
    }

    #[test]
    fn test_undos_return_to_text_before_edits_and_snapshot() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        m.tick(800);
        m.apply("abc", 3, 1_000);
        m.commit_snapshot("rewritten");

        while m.undo() {}
        assert_eq!(m.text(), "a");
    }

    #[test]
    fn test_commit_snapshot_back_to_committed_drops_pending_edit() {
        let mut m = manager();
        m.apply("ab", 2, 0);
        assert!(m.commit_snapshot("a"));
        assert_eq!(m.text(), "a");
        assert!(!m.is_pending());
        assert!(!m.can_undo());
    }

    #[test]
    fn test_commit_snapshot_same_text_is_noop() {
        let mut m = manager();
        assert!(!m.commit_snapshot("a"));
        assert!(!m.can_undo());
    }

    #[test]
    fn test_new_commit_after_undo_clears_future() {
        let mut m = manager();
        m.commit_snapshot("b");
        m.undo();
        assert!(m.can_redo());
        m.apply("ax", 2, 0);
        m.tick(800);
        assert!(!m.can_redo());
    }

    #[test]
    fn test_history_limit() {
        let mut m = DocumentManager::new(
            "0",
            EditorConfig {
                history_limit: 3,
                ..EditorConfig::default()
            },
        );
        for i in 1..=5 {
            m.commit_snapshot(i.to_string());
        }
        assert_eq!(m.history().past().collect::<Vec<_>>(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_default_history_limit_caps_past() {
        let mut m = DocumentManager::new("0", EditorConfig::default());
        for i in 1..=75 {
            m.apply(i.to_string(), 1, i * 1_000);
            m.tick(i * 1_000 + 800);
        }
        assert_eq!(m.history().undo_levels(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(m.history().past().next(), Some("25"));
        assert_eq!(m.history().past().last(), Some("74"));

        let mut undos = 0;
        while m.undo() {
            undos += 1;
        }
        assert_eq!(undos, 50);
        assert_eq!(m.text(), "25");
    }

    #[test]
    fn test_restore_replaces_state() {
        let mut m = manager();
        m.apply("pending", 7, 0);
        m.restore("restored", History::from_parts(vec!["old".into()], vec![], 50));
        assert_eq!(m.text(), "restored");
        assert_eq!(m.committed(), "restored");
        assert!(!m.is_pending());
        assert!(m.undo());
        assert_eq!(m.text(), "old");
    }
}
