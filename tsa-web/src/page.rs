//! The live document as a `tsa_core` page and form host.

use log::warn;
use tsa_core::dom::{Form, FormHost, Page, SubmitEvent, SubmitHandler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlAnchorElement, HtmlCanvasElement, HtmlFormElement};

/// Handle to the current `document`.
#[derive(Clone)]
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    /// The page of the running window, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// The canvas with this id, if present and actually a canvas.
    pub fn canvas(&self, id: &str) -> Option<HtmlCanvasElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn try_click_download(&self, href: &str, filename: &str) -> Result<(), JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_href(href);
        anchor.set_download(filename);

        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        Ok(())
    }
}

impl Page for BrowserPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn replace_content(&self, id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn click_download_link(&self, href: &str, filename: &str) {
        if let Err(e) = self.try_click_download(href, filename) {
            warn!("Download of {} failed: {:?}", filename, e);
        }
    }
}

/// A `<form>` element with constraint validation.
#[derive(Clone)]
pub struct BrowserForm(HtmlFormElement);

impl Form for BrowserForm {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!("Could not add class {} to form: {:?}", class, e);
        }
    }
}

struct BrowserSubmit(Event);

impl SubmitEvent for BrowserSubmit {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

impl FormHost for BrowserPage {
    type Form = BrowserForm;

    fn forms_with_class(&self, class: &str) -> Vec<BrowserForm> {
        let Ok(nodes) = self.document.query_selector_all(&format!("form.{}", class)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
            .map(BrowserForm)
            .collect()
    }

    fn on_submit(&self, form: BrowserForm, handler: SubmitHandler<BrowserForm>) {
        let target = form.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            handler(&target, &BrowserSubmit(event));
        });
        if let Err(e) = form
            .0
            .add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
        {
            warn!("Could not attach submit listener: {:?}", e);
        }
        // Listeners stay for the lifetime of the page.
        listener.forget();
    }
}
