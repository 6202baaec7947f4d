//! Submission Form Store
//!
//! Backs the portal's [`FormStore`] with Leptos signals so the shared
//! workflow drives the add-achievement page.

use leptos::*;

use edurev::portal::{FormStore, Notice, SubmissionForm};

use super::global::GlobalState;

/// Form state owned by the add-achievement page
#[derive(Clone, Copy)]
pub struct SignalFormStore {
    pub form: RwSignal<SubmissionForm>,
    pub submitting: RwSignal<bool>,
    pub file_input: NodeRef<html::Input>,
    global: GlobalState,
}

impl SignalFormStore {
    /// Empty form, created when the page mounts
    pub fn new(global: GlobalState) -> Self {
        Self {
            form: create_rw_signal(SubmissionForm::default()),
            submitting: create_rw_signal(false),
            file_input: create_node_ref(),
            global,
        }
    }
}

impl SignalFormStore {
    /// False once the owning page has unmounted and its signals are gone
    fn is_mounted(&self) -> bool {
        self.submitting.try_with_untracked(|_| ()).is_some()
    }
}

// A submission can finish after the page unmounts, so every access here
// tolerates disposed signals.
impl FormStore for SignalFormStore {
    fn form(&self) -> SubmissionForm {
        self.form.try_get_untracked().unwrap_or_default()
    }

    fn replace_form(&self, form: SubmissionForm) {
        let _ = self.form.try_set(form);
    }

    fn is_submitting(&self) -> bool {
        self.submitting.try_get_untracked().unwrap_or(false)
    }

    fn set_submitting(&self, submitting: bool) {
        let _ = self.submitting.try_set(submitting);
    }

    fn reset_file_input(&self) {
        if !self.is_mounted() {
            return;
        }
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    fn notify(&self, notice: Notice) {
        self.global.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DataSource;
    use edurev::portal::FormField;

    #[test]
    fn test_store_edits_while_mounted() {
        let runtime = create_runtime();
        let store = SignalFormStore::new(GlobalState::new(DataSource::Fixtures));

        store.replace_form(store.form().with_field(FormField::StudentName, "Asha Kamau"));
        store.set_submitting(true);
        store.reset_file_input();

        assert_eq!(store.form().student_name, "Asha Kamau");
        assert!(store.is_submitting());
        runtime.dispose();
    }

    #[test]
    fn test_submission_finishing_after_unmount_is_harmless() {
        let runtime = create_runtime();
        let global = GlobalState::new(DataSource::Fixtures);
        let (store, unmount) = as_child_of_current_owner(SignalFormStore::new)(global);
        store.set_submitting(true);

        // Navigating away disposes the page while the gateway is waiting
        drop(unmount);

        // What the success path does once the delay ends
        store.replace_form(SubmissionForm::default());
        store.reset_file_input();
        store.set_submitting(false);

        assert!(!store.is_submitting());
        assert_eq!(store.form(), SubmissionForm::default());
        // Global state lives on
        assert!(!global.menu_open.get_untracked());
        runtime.dispose();
    }
}
