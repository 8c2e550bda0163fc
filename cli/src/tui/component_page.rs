// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Bordered overlay wrapping a single inner component, drawn on top of the
/// timeline. The bottom border shows either the key instructions or, when
/// the store reports one, an inline error message.
pub struct Modal<S, C: Component<S>> {
    title: String,
    inner: C,
    error: fn(&S) -> Option<&'static str>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> Modal<S, C> {
    pub fn new(title: String, inner: C) -> Self {
        Self {
            title,
            inner,
            error: |_| None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn with_error(mut self, error: fn(&S) -> Option<&'static str>) -> Self {
        self.error = error;
        self
    }

    fn block(&self) -> Block {
        Block::bordered().border_set(border::ROUNDED)
    }
}

impl<S, C: Component<S>> Component<S> for Modal<S, C> {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let bottom = match (self.error)(&store.borrow()) {
            Some(message) => Line::from(format!(" {message} ").red().bold()),
            None => instructions(),
        };
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(bottom.centered())
            .white();

        Clear.render(area, buf);
        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &Rc<RefCell<S>>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, key) {
            return Some(msg);
        }

        match key {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &Rc<RefCell<S>>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &Rc<RefCell<S>>) {
        self.inner.deactivate(dispatcher, store);
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Prev ".into(),
        "<Up>".blue().bold(),
        " Next ".into(),
        "<Down>".blue().bold(),
        " Save ".into(),
        "<Enter>".blue().bold(),
        " Cancel ".into(),
        "<Esc> ".blue().bold(),
    ])
}
