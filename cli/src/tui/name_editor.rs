// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_page::Modal;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::form_store::NameFormLike;

/// One-field modal for the display name shown in the header and used in
/// the exported document title. An empty name is fine, the title falls
/// back to its default.
pub fn new_name_editor<S: NameFormLike + 'static>() -> Modal<S, Form<S>> {
    Modal::new(
        "Your name".to_string(),
        Form::new(vec![Box::new(Input::<S, NameAccess>::new("Name"))]),
    )
}

struct NameAccess;

impl<S: NameFormLike> Access<S, String> for NameAccess {
    fn get(store: &Rc<RefCell<S>>) -> String {
        store.borrow().name_form().name.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(&Action::UpdateName(value));
        true
    }
}
