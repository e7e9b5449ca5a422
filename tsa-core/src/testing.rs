//! Recording fakes for the `dom`, chart and table seams.

use crate::chart::{ChartConfig, ChartRenderer};
use crate::dom::{Form, FormHost, Page, SubmitEvent, SubmitHandler};
use crate::table::{TableOptions, TableRenderer};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A DOM mutation observed by `FakePage`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ReplaceContent { id: String, html: String },
    DownloadClicked { href: String, filename: String },
}

/// In-memory page: a set of element ids and their contents.
#[derive(Default)]
pub struct FakePage {
    elements: RefCell<HashMap<String, String>>,
    pub mutations: RefCell<Vec<Mutation>>,
}

impl FakePage {
    pub fn with_elements(ids: &[&str]) -> Self {
        let page = Self::default();
        for id in ids {
            page.elements.borrow_mut().insert(id.to_string(), String::new());
        }
        page
    }

    pub fn content(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }
}

impl Page for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn replace_content(&self, id: &str, html: &str) -> bool {
        let mut elements = self.elements.borrow_mut();
        match elements.get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                self.mutations.borrow_mut().push(Mutation::ReplaceContent {
                    id: id.to_string(),
                    html: html.to_string(),
                });
                true
            }
            None => false,
        }
    }

    fn click_download_link(&self, href: &str, filename: &str) {
        self.mutations.borrow_mut().push(Mutation::DownloadClicked {
            href: href.to_string(),
            filename: filename.to_string(),
        });
    }
}

/// Chart renderer that records every configuration it is given.
#[derive(Default)]
pub struct RecordingCharts {
    pub rendered: RefCell<Vec<(String, ChartConfig)>>,
}

impl ChartRenderer for RecordingCharts {
    type Surface = String;

    fn render(&self, surface: &String, config: &ChartConfig) {
        self.rendered
            .borrow_mut()
            .push((surface.clone(), config.clone()));
    }
}

/// Table renderer that records every enhanced element id.
#[derive(Default)]
pub struct RecordingTables {
    pub enhanced: RefCell<Vec<(String, TableOptions)>>,
}

impl TableRenderer for RecordingTables {
    fn enhance(&self, element_id: &str, options: &TableOptions) {
        self.enhanced
            .borrow_mut()
            .push((element_id.to_string(), options.clone()));
    }
}

#[derive(Default)]
pub struct FakeEvent {
    pub prevented: Cell<bool>,
    pub stopped: Cell<bool>,
}

impl SubmitEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

/// Form handle sharing its class list with the test.
#[derive(Clone)]
pub struct FakeForm {
    pub valid: bool,
    pub marker: String,
    pub classes: Rc<RefCell<Vec<String>>>,
}

impl FakeForm {
    pub fn new(marker: &str, valid: bool) -> Self {
        Self {
            valid,
            marker: marker.to_string(),
            classes: Rc::new(RefCell::new(vec![marker.to_string()])),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

impl Form for FakeForm {
    fn check_validity(&self) -> bool {
        self.valid
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }
}

/// Holds forms and the submit handlers registered on them.
#[derive(Default)]
pub struct FakeFormHost {
    pub forms: Vec<FakeForm>,
    handlers: RefCell<Vec<(FakeForm, SubmitHandler<FakeForm>)>>,
}

impl FakeFormHost {
    pub fn new(forms: Vec<FakeForm>) -> Self {
        Self {
            forms,
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatch a submit to the `index`th registered form.
    pub fn submit(&self, index: usize) -> FakeEvent {
        let event = FakeEvent::default();
        let handlers = self.handlers.borrow();
        let (form, handler) = &handlers[index];
        handler(form, &event);
        event
    }
}

impl FormHost for FakeFormHost {
    type Form = FakeForm;

    fn forms_with_class(&self, class: &str) -> Vec<FakeForm> {
        self.forms
            .iter()
            .filter(|form| form.marker == class)
            .cloned()
            .collect()
    }

    fn on_submit(&self, form: FakeForm, handler: SubmitHandler<FakeForm>) {
        self.handlers.borrow_mut().push((form, handler));
    }
}
