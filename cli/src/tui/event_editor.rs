// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use roadmap_core::{Month, sanitize_day_input};

use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_page::Modal;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::form_store::EventFormLike;

/// The "add event" modal for one month: two day fields, a title and an
/// optional description, wrapped in bordered chrome.
pub fn new_event_editor<S: EventFormLike + 'static>(month: Month) -> Modal<S, Form<S>> {
    Modal::new(format!("New event in {month}"), new_event_form()).with_error(error_message::<S>)
}

pub fn new_event_form<S: EventFormLike + 'static>() -> Form<S> {
    Form::new(vec![
        Box::new(Input::<S, DayOneAccess>::new("Day one")),
        Box::new(Input::<S, DayTwoAccess>::new("Day two")),
        Box::new(Input::<S, TitleAccess>::new("Title (required)")),
        Box::new(Input::<S, DescriptionAccess>::new("Description (optional)")),
    ])
}

/// The inline message mirrors the field flags: dates first, then title.
fn error_message<S: EventFormLike>(store: &S) -> Option<&'static str> {
    let errors = store.form().errors;
    if errors.day_one || errors.day_two {
        Some("Please fill in both dates")
    } else if errors.title {
        Some("Please enter a title")
    } else {
        None
    }
}

struct DayOneAccess;

impl<S: EventFormLike> Access<S, String> for DayOneAccess {
    fn get(store: &Rc<RefCell<S>>) -> String {
        store.borrow().form().data.day_one.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        // Keystrokes are filtered here, at the input layer; the store only
        // ever sees empty or 1-2 digit day values.
        let sanitized = sanitize_day_input(&value);
        let accepted = sanitized == value;
        dispatcher.dispatch(&Action::UpdateDayOne(sanitized));
        accepted
    }

    fn error(store: &Rc<RefCell<S>>) -> bool {
        store.borrow().form().errors.day_one
    }
}

struct DayTwoAccess;

impl<S: EventFormLike> Access<S, String> for DayTwoAccess {
    fn get(store: &Rc<RefCell<S>>) -> String {
        store.borrow().form().data.day_two.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        let sanitized = sanitize_day_input(&value);
        let accepted = sanitized == value;
        dispatcher.dispatch(&Action::UpdateDayTwo(sanitized));
        accepted
    }

    fn error(store: &Rc<RefCell<S>>) -> bool {
        store.borrow().form().errors.day_two
    }
}

struct TitleAccess;

impl<S: EventFormLike> Access<S, String> for TitleAccess {
    fn get(store: &Rc<RefCell<S>>) -> String {
        store.borrow().form().data.title.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(&Action::UpdateTitle(value));
        true
    }

    fn error(store: &Rc<RefCell<S>>) -> bool {
        store.borrow().form().errors.title
    }
}

struct DescriptionAccess;

impl<S: EventFormLike> Access<S, String> for DescriptionAccess {
    fn get(store: &Rc<RefCell<S>>) -> String {
        store.borrow().form().data.description.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(&Action::UpdateDescription(value));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form_store::EventFormStore;
    use roadmap_core::FieldErrors;

    fn store_and_dispatcher() -> (Rc<RefCell<EventFormStore>>, Dispatcher) {
        let store = Rc::new(RefCell::new(EventFormStore::new()));
        let mut dispatcher = Dispatcher::new();
        EventFormStore::register_to(store.clone(), &mut dispatcher);
        (store, dispatcher)
    }

    #[test]
    fn test_day_access_sanitizes_keystrokes() {
        let (store, mut dispatcher) = store_and_dispatcher();

        let accepted = <DayOneAccess as Access<EventFormStore, String>>::set(
            &mut dispatcher,
            "3a".to_string(),
        );
        assert!(!accepted);
        assert_eq!(store.borrow().data.day_one, "3");

        let accepted = <DayOneAccess as Access<EventFormStore, String>>::set(
            &mut dispatcher,
            "31".to_string(),
        );
        assert!(accepted);
        assert_eq!(store.borrow().data.day_one, "31");
    }

    #[test]
    fn test_day_access_caps_at_two_digits() {
        let (store, mut dispatcher) = store_and_dispatcher();

        let accepted = <DayTwoAccess as Access<EventFormStore, String>>::set(
            &mut dispatcher,
            "123".to_string(),
        );
        assert!(!accepted);
        assert_eq!(store.borrow().data.day_two, "12");
    }

    #[test]
    fn test_title_access_accepts_anything() {
        let (store, mut dispatcher) = store_and_dispatcher();

        let accepted = <TitleAccess as Access<EventFormStore, String>>::set(
            &mut dispatcher,
            "Trip to the beach!".to_string(),
        );
        assert!(accepted);
        assert_eq!(store.borrow().data.title, "Trip to the beach!");
    }

    #[test]
    fn test_error_message_prefers_dates() {
        let mut store = EventFormStore::new();
        store.errors = FieldErrors {
            day_one: true,
            day_two: false,
            title: true,
        };
        assert_eq!(error_message(&store), Some("Please fill in both dates"));

        store.errors = FieldErrors {
            title: true,
            ..Default::default()
        };
        assert_eq!(error_message(&store), Some("Please enter a title"));

        store.errors = FieldErrors::default();
        assert_eq!(error_message(&store), None);
    }
}
