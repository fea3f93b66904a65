//! Mirror surface backed by the browser DOM

use jovibe_caret::{CaretError, ComputedStyle, MarkerOffset, MirrorStyle, MirrorSurface, MIRRORED_PROPERTIES};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

pub struct DomSurface {
    textarea: HtmlTextAreaElement,
    mirror: Option<(HtmlElement, HtmlElement)>,
}

impl DomSurface {
    pub fn new(textarea: HtmlTextAreaElement) -> Self {
        Self {
            textarea,
            mirror: None,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        f64::from(self.textarea.scroll_top())
    }

    pub fn scroll_left(&self) -> f64 {
        f64::from(self.textarea.scroll_left())
    }

    fn document(&self) -> Option<Document> {
        self.textarea.owner_document()
    }

    fn create(&self, document: &Document, tag: &str) -> Result<HtmlElement, CaretError> {
        document
            .create_element(tag)
            .map_err(|e| CaretError::Mount(format!("{:?}", e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CaretError::Mount(format!("<{}> is not an HTML element", tag)))
    }
}

impl MirrorSurface for DomSurface {
    fn computed_style(&self) -> Option<ComputedStyle> {
        let window = self.document()?.default_view()?;
        let declaration = window.get_computed_style(&self.textarea).ok()??;

        let style = MIRRORED_PROPERTIES
            .iter()
            .filter_map(|property| {
                declaration
                    .get_property_value(property)
                    .ok()
                    .map(|value| (property.to_string(), value))
            })
            .collect();
        Some(style)
    }

    fn mount_mirror(&mut self, style: &MirrorStyle, before: &str, marker: &str) -> Result<(), CaretError> {
        let document = self
            .document()
            .ok_or_else(|| CaretError::Mount("textarea is detached".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| CaretError::Mount("document has no body".to_string()))?;

        let div = self.create(&document, "div")?;
        div.set_attribute("style", &style.to_css())
            .map_err(|e| CaretError::Mount(format!("{:?}", e)))?;
        div.set_text_content(Some(before));

        let span = self.create(&document, "span")?;
        span.set_text_content(Some(marker));
        div.append_child(&span)
            .map_err(|e| CaretError::Mount(format!("{:?}", e)))?;
        body.append_child(&div)
            .map_err(|e| CaretError::Mount(format!("{:?}", e)))?;

        self.mirror = Some((div, span));
        Ok(())
    }

    fn marker_offset(&self) -> Result<MarkerOffset, CaretError> {
        let (_, span) = self
            .mirror
            .as_ref()
            .ok_or_else(|| CaretError::Measure("mirror not mounted".to_string()))?;
        Ok(MarkerOffset {
            top: f64::from(span.offset_top()),
            left: f64::from(span.offset_left()),
        })
    }

    fn unmount_mirror(&mut self) {
        if let Some((div, _)) = self.mirror.take() {
            div.remove();
        }
    }
}
