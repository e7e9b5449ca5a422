//! Seams between the dashboard logic and the document it runs in.
//!
//! `tsa-web` implements these over `web_sys::Document`; tests use the
//! recording fakes in `crate::testing`.

/// The parts of a document the initializers, the exporter and the
/// detail loader need.
pub trait Page {
    /// Whether an element with this id is present.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the inner HTML of the element with this id.
    /// Returns false when no such element exists.
    fn replace_content(&self, id: &str, html: &str) -> bool;

    /// Append an anchor with `href` and `download` set to the body,
    /// click it, then remove it again.
    fn click_download_link(&self, href: &str, filename: &str);
}

/// A submit event that can be suppressed.
pub trait SubmitEvent {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// A form with browser constraint validation.
pub trait Form {
    /// Run the form's built-in constraint check.
    fn check_validity(&self) -> bool;
    fn add_class(&self, class: &str);
}

/// Called with the form and the event on every submit.
pub type SubmitHandler<F> = Box<dyn Fn(&F, &dyn SubmitEvent)>;

/// A document whose forms can be discovered and listened to.
pub trait FormHost {
    type Form: Form;

    /// All forms carrying the given class.
    fn forms_with_class(&self, class: &str) -> Vec<Self::Form>;

    /// Register `handler` for submit events on `form`.
    fn on_submit(&self, form: Self::Form, handler: SubmitHandler<Self::Form>);
}
