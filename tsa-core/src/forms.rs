//! Submit-time validation for Bootstrap forms.

use crate::dom::{Form, FormHost, SubmitEvent};
use log::debug;

/// Class marking forms that should be validated on submit.
pub const NEEDS_VALIDATION_CLASS: &str = "needs-validation";

/// Class added after a submit attempt so field-level styles apply.
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

/// What a submit handler did with the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid; the submit goes ahead.
    Allowed,
    /// The form was invalid; default action and propagation were stopped.
    Suppressed,
}

/// Handle one submit of `form`.
pub fn handle_submit<F: Form + ?Sized>(form: &F, event: &dyn SubmitEvent) -> SubmitOutcome {
    let outcome = if form.check_validity() {
        SubmitOutcome::Allowed
    } else {
        event.prevent_default();
        event.stop_propagation();
        SubmitOutcome::Suppressed
    };
    form.add_class(WAS_VALIDATED_CLASS);
    outcome
}

/// Attach validation to every `.needs-validation` form on the host.
///
/// Call once at startup. Returns the number of forms wired; zero is fine.
pub fn initialize_form_validation<H: FormHost>(host: &H) -> usize {
    let forms = host.forms_with_class(NEEDS_VALIDATION_CLASS);
    let count = forms.len();
    for form in forms {
        host.on_submit(
            form,
            Box::new(|form: &H::Form, event: &dyn SubmitEvent| {
                handle_submit(form, event);
            }),
        );
    }
    debug!("Form validation attached to {} form(s)", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeEvent, FakeForm, FakeFormHost};

    #[test]
    fn invalid_submit_is_suppressed_and_marked() {
        let form = FakeForm::new(NEEDS_VALIDATION_CLASS, false);
        let event = FakeEvent::default();

        assert_eq!(handle_submit(&form, &event), SubmitOutcome::Suppressed);
        assert!(event.prevented.get());
        assert!(event.stopped.get());
        assert!(form.has_class(WAS_VALIDATED_CLASS));
    }

    #[test]
    fn valid_submit_goes_ahead_but_is_marked() {
        let form = FakeForm::new(NEEDS_VALIDATION_CLASS, true);
        let event = FakeEvent::default();

        assert_eq!(handle_submit(&form, &event), SubmitOutcome::Allowed);
        assert!(!event.prevented.get());
        assert!(!event.stopped.get());
        assert!(form.has_class(WAS_VALIDATED_CLASS));
    }

    #[test]
    fn only_marked_forms_are_wired() {
        let host = FakeFormHost::new(vec![
            FakeForm::new(NEEDS_VALIDATION_CLASS, false),
            FakeForm::new("search", false),
            FakeForm::new(NEEDS_VALIDATION_CLASS, true),
        ]);

        assert_eq!(initialize_form_validation(&host), 2);
        assert_eq!(host.listener_count(), 2);

        let invalid = host.submit(0);
        assert!(invalid.prevented.get());
        let valid = host.submit(1);
        assert!(!valid.prevented.get());

        assert!(host.forms[0].has_class(WAS_VALIDATED_CLASS));
        assert!(!host.forms[1].has_class(WAS_VALIDATED_CLASS));
        assert!(host.forms[2].has_class(WAS_VALIDATED_CLASS));
    }

    #[test]
    fn no_forms_is_a_no_op() {
        let host = FakeFormHost::default();
        assert_eq!(initialize_form_validation(&host), 0);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn repeated_submits_keep_a_single_marker() {
        let form = FakeForm::new(NEEDS_VALIDATION_CLASS, false);
        handle_submit(&form, &FakeEvent::default());
        handle_submit(&form, &FakeEvent::default());
        let count = form
            .classes
            .borrow()
            .iter()
            .filter(|c| *c == WAS_VALIDATED_CLASS)
            .count();
        assert_eq!(count, 1);
    }
}
