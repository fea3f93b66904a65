use jovibe_assist::{quick_actions, QuickAction};
use jovibe_editor::{EditSession, EditorConfig, ProjectSnapshot, RewriteRequest, RewriteResponse};
use jovibe_lexicon::Lexicon;
use jovibe_preview::{ConsoleHost, FrameId};
use jovibe_scanner::{byte_to_utf16, utf16_to_byte, Context};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod convert;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_context(label: &str) -> Context {
    Context::ALL
        .into_iter()
        .find(|context| context.label() == label)
        .unwrap_or_default()
}

/// Language context at a UTF-16 cursor: "html", "css" or "javascript"
#[wasm_bindgen(js_name = classify)]
pub fn classify_js(text: &str, cursor: usize) -> String {
    jovibe_scanner::classify(text, utf16_to_byte(text, cursor))
        .label()
        .to_string()
}

/// Suggestions at a UTF-16 cursor as JSON, offsets in UTF-16 units
#[wasm_bindgen(js_name = suggest)]
pub fn suggest_js(text: &str, cursor: usize) -> Result<String, JsValue> {
    let cursor = utf16_to_byte(text, cursor);
    let context = jovibe_scanner::classify(text, cursor);
    let assistance = jovibe_assist::suggest(text, cursor, context, &Lexicon::builtin());
    to_json(&convert::assistance(text, &assistance))
}

/// Name of the innermost open element before the cursor
#[wasm_bindgen(js_name = closingTagFor)]
pub fn closing_tag_for_js(text: &str, cursor: usize) -> Option<String> {
    let cursor = utf16_to_byte(text, cursor);
    jovibe_assist::closing_tag_for(&text[..cursor], &Lexicon::builtin())
}

/// Inject the console bridge into a preview document
#[wasm_bindgen(js_name = instrument)]
pub fn instrument_js(document: &str) -> String {
    jovibe_preview::instrument(document)
}

/// Quick-insert palette for "html", "css" or "javascript" as JSON
#[wasm_bindgen(js_name = quickActions)]
pub fn quick_actions_js(context: &str) -> Result<String, JsValue> {
    to_json(&quick_actions(parse_context(context)))
}

/// Edit session for one project
#[wasm_bindgen]
pub struct EditorHandle {
    session: EditSession,
}

#[wasm_bindgen]
impl EditorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(id: &str) -> EditorHandle {
        EditorHandle {
            session: EditSession::new(id, Lexicon::builtin(), EditorConfig::default()),
        }
    }

    /// Restore from a project snapshot
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(json: &str) -> Result<EditorHandle, JsValue> {
        let snapshot = ProjectSnapshot::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(EditorHandle {
            session: EditSession::from_snapshot(snapshot, Lexicon::builtin(), EditorConfig::default()),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.session.text().to_string()
    }

    /// Cursor in UTF-16 units
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        byte_to_utf16(self.session.text(), self.session.cursor())
    }

    #[wasm_bindgen(getter)]
    pub fn context(&self) -> String {
        self.session.context().label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.session.version() as f64
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    /// The current overlay as JSON
    pub fn overlay(&self) -> Result<String, JsValue> {
        to_json(&convert::overlay(self.session.text(), self.session.overlay()))
    }

    /// Text changed; returns the overlay to show
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&mut self, text: &str, cursor: usize, now_ms: f64) -> Result<String, JsValue> {
        let cursor = utf16_to_byte(text, cursor);
        self.session.on_input(text, cursor, now_ms as u64);
        self.overlay()
    }

    #[wasm_bindgen(js_name = onCursor)]
    pub fn on_cursor(&mut self, cursor: usize) -> Result<String, JsValue> {
        let cursor = utf16_to_byte(self.session.text(), cursor);
        self.session.on_cursor(cursor);
        self.overlay()
    }

    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self) {
        self.session.on_scroll();
    }

    pub fn dismiss(&mut self) {
        self.session.dismiss();
    }

    #[wasm_bindgen(js_name = selectNext)]
    pub fn select_next(&mut self) {
        self.session.select_next();
    }

    #[wasm_bindgen(js_name = selectPrevious)]
    pub fn select_previous(&mut self) {
        self.session.select_previous();
    }

    /// Accept the suggestion at `index`, or the highlighted one when absent
    #[wasm_bindgen(js_name = acceptSuggestion)]
    pub fn accept_suggestion(&mut self, index: Option<usize>, now_ms: f64) -> bool {
        self.session.accept_suggestion(index, now_ms as u64)
    }

    #[wasm_bindgen(js_name = acceptColor)]
    pub fn accept_color(&mut self, color: &str, now_ms: f64) -> bool {
        self.session.accept_color(color, now_ms as u64)
    }

    /// Run the quick action at `index` of the current context's palette
    #[wasm_bindgen(js_name = quickAction)]
    pub fn quick_action(&mut self, index: usize, now_ms: f64) -> bool {
        let action: Option<QuickAction> = quick_actions(self.session.context()).get(index).copied();
        match action {
            Some(action) => {
                self.session.quick_action(&action, now_ms as u64);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = closeTag)]
    pub fn close_tag(&mut self, now_ms: f64) {
        self.session.close_tag(now_ms as u64);
    }

    /// Drive the quiescence timer; true when an undo step was recorded
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.session.tick(now_ms as u64)
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    #[wasm_bindgen(js_name = resetToTemplate)]
    pub fn reset_to_template(&mut self) {
        self.session.reset_to_template();
    }

    /// Apply the reply of an external rewrite. On error the conversation is
    /// rolled back and the message is suitable for display.
    #[wasm_bindgen(js_name = applyRewrite)]
    pub fn apply_rewrite(&mut self, instruction: &str, response_json: &str) -> Result<String, JsValue> {
        let mut collaborator = |_: &RewriteRequest| RewriteResponse::from_json(response_json);
        self.session
            .request_rewrite(&mut collaborator, instruction, None)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn snapshot(&mut self) -> Result<String, JsValue> {
        self.session
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = chatHistory)]
    pub fn chat_history(&self) -> Result<String, JsValue> {
        to_json(&self.session.chat_history())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl EditorHandle {
    /// Caret position of the session cursor inside `textarea`, already
    /// adjusted for its scroll offsets. Returns `undefined` when the
    /// textarea cannot be measured.
    pub fn caret(&self, textarea: web_sys::HtmlTextAreaElement) -> Result<Option<String>, JsValue> {
        let mut surface = DomSurface::new(textarea);
        match self.session.caret(&mut surface) {
            Ok(position) => {
                let visible = position.in_viewport(surface.scroll_top(), surface.scroll_left());
                to_json(&visible).map(Some)
            }
            Err(jovibe_editor::EditorError::Caret(jovibe_caret::CaretError::MetricsUnavailable)) => Ok(None),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }
}

/// Host side of the preview console
#[wasm_bindgen]
pub struct PreviewHandle {
    host: ConsoleHost,
    srcdoc: String,
}

#[wasm_bindgen]
impl PreviewHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PreviewHandle {
        PreviewHandle {
            host: ConsoleHost::new(),
            srcdoc: String::new(),
        }
    }

    /// Instrument a document for a fresh frame; returns the frame id
    pub fn load(&mut self, document: &str) -> f64 {
        let frame = self.host.load(document);
        self.srcdoc = frame.srcdoc;
        frame.id.get() as f64
    }

    /// The document to mount in the preview frame
    #[wasm_bindgen(getter)]
    pub fn srcdoc(&self) -> String {
        self.srcdoc.clone()
    }

    /// Feed a `message` event payload (as JSON) posted by `frame`
    pub fn receive(&mut self, frame: f64, json: &str) -> bool {
        self.host.receive_json(FrameId::from_raw(frame as u64), json)
    }

    /// The transcript as JSON
    pub fn messages(&self) -> Result<String, JsValue> {
        to_json(&self.host.messages())
    }

    /// The transcript as display lines
    pub fn lines(&self) -> Vec<String> {
        self.host
            .messages()
            .iter()
            .map(|message| format!("{} [{}] {}", message.timestamp, message.kind, message.display()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.host.clear();
    }
}

impl Default for PreviewHandle {
    fn default() -> Self {
        Self::new()
    }
}
