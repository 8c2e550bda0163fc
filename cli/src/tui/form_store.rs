// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use roadmap_core::{EventDraft, FieldErrors};

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait EventFormLike {
    fn form(&self) -> &EventFormStore;
}

/// State behind the "add event" modal: the four raw fields, the validation
/// flags of the last rejected save, and whether the user submitted.
///
/// Field actions clear their own error flag, so a highlighted field turns
/// normal again the moment the user edits it; the other fields keep both
/// their values and their flags.
#[derive(Debug, Default)]
pub struct EventFormStore {
    pub data: EventFormData,
    pub errors: FieldErrors,

    /// Whether the user submit the changes
    pub submit: bool,
}

#[derive(Debug, Default)]
pub struct EventFormData {
    pub day_one: String,
    pub day_two: String,
    pub title: String,
    pub description: String,
}

impl EventFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw payload to hand to the event store.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            day_one: self.data.day_one.clone(),
            day_two: self.data.day_two.clone(),
            title: self.data.title.clone(),
            description: self.data.description.clone(),
        }
    }

    /// Marks the fields a rejected save flagged, and withdraws the submit.
    pub fn reject(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.submit = false;
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateDayOne(v) => {
                let mut that = that.borrow_mut();
                that.data.day_one = v.clone();
                that.errors.day_one = false;
            }
            Action::UpdateDayTwo(v) => {
                let mut that = that.borrow_mut();
                that.data.day_two = v.clone();
                that.errors.day_two = false;
            }
            Action::UpdateTitle(v) => {
                let mut that = that.borrow_mut();
                that.data.title = v.clone();
                that.errors.title = false;
            }
            Action::UpdateDescription(v) => {
                let mut that = that.borrow_mut();
                that.data.description = v.clone();
            }
            Action::SubmitChanges => {
                let mut that = that.borrow_mut();
                that.submit = true;
            }
            _ => {}
        }));
        dispatcher.register(callback);
    }
}

impl EventFormLike for EventFormStore {
    fn form(&self) -> &EventFormStore {
        self
    }
}

pub trait NameFormLike {
    fn name_form(&self) -> &NameFormStore;
}

/// State behind the display-name modal: one free-form field, no validation
/// (an empty name just falls back to the default in the document title).
#[derive(Debug, Default)]
pub struct NameFormStore {
    pub name: String,

    /// Whether the user submit the changes
    pub submit: bool,
}

impl NameFormStore {
    pub fn new(name: String) -> Self {
        Self {
            name,
            submit: false,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateName(v) => {
                that.borrow_mut().name = v.clone();
            }
            Action::SubmitChanges => {
                that.borrow_mut().submit = true;
            }
            _ => {}
        }));
        dispatcher.register(callback);
    }
}

impl NameFormLike for NameFormStore {
    fn name_form(&self) -> &NameFormStore {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(store: &Rc<RefCell<EventFormStore>>, action: Action) {
        let mut dispatcher = Dispatcher::new();
        EventFormStore::register_to(store.clone(), &mut dispatcher);
        dispatcher.dispatch(&action);
    }

    #[test]
    fn test_update_clears_own_error_flag_only() {
        let store = Rc::new(RefCell::new(EventFormStore::new()));
        store.borrow_mut().errors = FieldErrors {
            day_one: true,
            day_two: true,
            title: true,
        };

        dispatch(&store, Action::UpdateDayOne("3".to_string()));

        let store = store.borrow();
        assert_eq!(store.data.day_one, "3");
        assert!(!store.errors.day_one);
        assert!(store.errors.day_two);
        assert!(store.errors.title);
    }

    #[test]
    fn test_submit_sets_flag_and_reject_withdraws_it() {
        let store = Rc::new(RefCell::new(EventFormStore::new()));
        dispatch(&store, Action::SubmitChanges);
        assert!(store.borrow().submit);

        store.borrow_mut().reject(FieldErrors {
            title: true,
            ..Default::default()
        });
        assert!(!store.borrow().submit);
        assert!(store.borrow().errors.title);
    }

    #[test]
    fn test_draft_copies_all_fields() {
        let store = EventFormStore {
            data: EventFormData {
                day_one: "1".to_string(),
                day_two: "5".to_string(),
                title: "Trip".to_string(),
                description: "Beach".to_string(),
            },
            ..Default::default()
        };

        let draft = store.draft();
        assert_eq!(draft.day_one, "1");
        assert_eq!(draft.day_two, "5");
        assert_eq!(draft.title, "Trip");
        assert_eq!(draft.description, "Beach");
    }

    #[test]
    fn test_name_store_updates() {
        let store = Rc::new(RefCell::new(NameFormStore::new("Ben".to_string())));
        let mut dispatcher = Dispatcher::new();
        NameFormStore::register_to(store.clone(), &mut dispatcher);

        dispatcher.dispatch(&Action::UpdateName("Alice".to_string()));
        dispatcher.dispatch(&Action::SubmitChanges);

        assert_eq!(store.borrow().name, "Alice");
        assert!(store.borrow().submit);
    }
}
