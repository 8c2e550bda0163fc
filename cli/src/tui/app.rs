// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, path::PathBuf, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph};
use roadmap_core::{EventStore, Month, build_document};

use crate::pdf;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::Form;
use crate::tui::component_page::Modal;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::new_event_editor;
use crate::tui::form_store::{EventFormStore, NameFormStore};
use crate::tui::name_editor::new_name_editor;
use crate::tui::timeline::{month_offset, timeline_lines};

/// What a finished session leaves behind for the summary printout.
///
/// The store itself is handed out because the session was its only owner;
/// it dies with the caller.
pub struct SessionReport {
    pub store: EventStore,
    pub name: String,
    pub exported: bool,
}

/// Runs the interactive timeline session until the user quits.
pub fn run_session(name: String, output: PathBuf) -> Result<SessionReport, Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = App::new(name, output).run(&mut terminal);
    ratatui::restore();
    result
}

struct App {
    store: EventStore,
    name: String,
    output: PathBuf,

    editing: bool,
    selected: Month,
    scroll: u16,
    status: Option<Status>,
    exported: bool,

    modal: Option<ModalKind>,
    modal_area: Rect,
}

enum ModalKind {
    Event {
        month: Month,
        store: Rc<RefCell<EventFormStore>>,
        dispatcher: Dispatcher,
        view: Modal<EventFormStore, Form<EventFormStore>>,
    },
    Name {
        store: Rc<RefCell<NameFormStore>>,
        dispatcher: Dispatcher,
        view: Modal<NameFormStore, Form<NameFormStore>>,
    },
}

struct Status {
    message: String,
    ok: bool,
}

impl App {
    fn new(name: String, output: PathBuf) -> Self {
        Self {
            store: EventStore::new(),
            name,
            output,
            editing: false,
            selected: Month::January,
            scroll: 0,
            status: None,
            exported: false,
            modal: None,
            modal_area: Rect::default(),
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> Result<SessionReport, Box<dyn Error>> {
        tracing::debug!("timeline session started");
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.on_key(key.code) {
                        break;
                    }
                }
                _ => {}
            }
        }

        tracing::debug!(events = self.store.len(), "timeline session ended");
        Ok(SessionReport {
            store: self.store,
            name: self.name,
            exported: self.exported,
        })
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let owner = match self.name.trim() {
            "" => "Your Name",
            name => name,
        };
        let title = Line::from(format!(" {owner}'s 2025 Roadmap ").bold());
        let mode = match self.editing {
            true => Line::from(" editing ".yellow()),
            false => Line::from(" viewing ".dark_gray()),
        };
        let bottom = match &self.status {
            Some(Status { message, ok: true }) => {
                Line::from(format!(" {message} ").green().bold())
            }
            Some(Status { message, ok: false }) => Line::from(format!(" {message} ").red().bold()),
            None => instructions(self.editing),
        };

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title(mode.right_aligned())
            .title_bottom(bottom.centered());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.autoscroll(inner.height);
        let timeline = Paragraph::new(Text::from(timeline_lines(
            &self.store,
            self.selected,
            self.editing,
        )))
        .scroll((self.scroll, 0));
        frame.render_widget(timeline, inner);

        if let Some(modal) = &self.modal {
            let (width, height) = match modal {
                // four items of three rows, a one-row layout margin on each
                // side, and the border
                ModalKind::Event { .. } => (54, 16),
                ModalKind::Name { .. } => (54, 7),
            };
            let modal_area = centered_rect(area, width, height);
            self.modal_area = modal_area;

            match modal {
                ModalKind::Event { store, view, .. } => {
                    view.render(store, modal_area, frame.buffer_mut());
                    if let Some(position) = view.get_cursor_position(store, modal_area) {
                        frame.set_cursor_position(position);
                    }
                }
                ModalKind::Name { store, view, .. } => {
                    view.render(store, modal_area, frame.buffer_mut());
                    if let Some(position) = view.get_cursor_position(store, modal_area) {
                        frame.set_cursor_position(position);
                    }
                }
            }
        }
    }

    /// Keeps the selected month inside the viewport.
    fn autoscroll(&mut self, viewport: u16) {
        if viewport == 0 {
            return;
        }

        let offset = month_offset(&self.store, self.selected) as u16;
        let end = offset + self.store.events(self.selected).len() as u16 + 2;
        if offset < self.scroll {
            self.scroll = offset;
        } else if end > self.scroll + viewport {
            self.scroll = end - viewport;
        }
    }

    /// Handles one key press; returns whether the session should end.
    fn on_key(&mut self, key: KeyCode) -> bool {
        if self.modal.is_some() {
            self.on_modal_key(key);
            return false;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('e') => {
                self.editing = !self.editing;
                self.status = None;
            }
            KeyCode::Up => self.select(-1),
            KeyCode::Down => self.select(1),
            KeyCode::Enter if self.editing => self.open_event_modal(),
            KeyCode::Char('n') => self.open_name_modal(),
            KeyCode::Char('x') => self.export(),
            _ => {}
        }
        false
    }

    fn on_modal_key(&mut self, key: KeyCode) {
        let area = self.modal_area;
        let Some(modal) = &mut self.modal else {
            return;
        };

        let mut close = false;
        match modal {
            ModalKind::Event {
                month,
                store,
                dispatcher,
                view,
            } => {
                if let Some(Message::Exit) = view.on_key(dispatcher, store, area, key) {
                    if store.borrow().submit {
                        let month = *month;
                        let draft = store.borrow().draft();
                        match self.store.add(month, draft) {
                            Ok(event) => {
                                self.status = Some(Status {
                                    message: format!("Added \"{}\" to {month}", event.title()),
                                    ok: true,
                                });
                                close = true;
                            }
                            // keep the modal open with the failing fields
                            // flagged; the entered values stay put
                            Err(errors) => store.borrow_mut().reject(errors),
                        }
                    } else {
                        close = true;
                    }
                }
            }
            ModalKind::Name {
                store,
                dispatcher,
                view,
            } => {
                if let Some(Message::Exit) = view.on_key(dispatcher, store, area, key) {
                    if store.borrow().submit {
                        self.name = store.borrow().name.clone();
                    }
                    close = true;
                }
            }
        }

        if close {
            self.modal = None;
        }
    }

    fn select(&mut self, delta: isize) {
        let index = (self.selected.index() as isize + delta).clamp(0, 11) as usize;
        if let Some(month) = Month::from_index(index) {
            self.selected = month;
        }
    }

    fn open_event_modal(&mut self) {
        let store = Rc::new(RefCell::new(EventFormStore::new()));
        let mut dispatcher = Dispatcher::new();
        EventFormStore::register_to(store.clone(), &mut dispatcher);

        let mut view = new_event_editor(self.selected);
        view.activate(&mut dispatcher, &store);

        self.status = None;
        self.modal = Some(ModalKind::Event {
            month: self.selected,
            store,
            dispatcher,
            view,
        });
    }

    fn open_name_modal(&mut self) {
        let store = Rc::new(RefCell::new(NameFormStore::new(self.name.clone())));
        let mut dispatcher = Dispatcher::new();
        NameFormStore::register_to(store.clone(), &mut dispatcher);

        let mut view = new_name_editor();
        view.activate(&mut dispatcher, &store);

        self.status = None;
        self.modal = Some(ModalKind::Name {
            store,
            dispatcher,
            view,
        });
    }

    /// Builds the document and writes the PDF without ending the session.
    fn export(&mut self) {
        let blocks = build_document(&self.name, &self.store);
        match pdf::render_to_file(&blocks, &self.output) {
            Ok(()) => {
                self.exported = true;
                self.status = Some(Status {
                    message: format!("Exported to {}", self.output.display()),
                    ok: true,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status = Some(Status {
                    message: format!("Export failed: {e}"),
                    ok: false,
                });
            }
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn instructions(editing: bool) -> Line<'static> {
    if editing {
        Line::from(vec![
            " Month ".into(),
            "<Up/Down>".blue().bold(),
            " Add ".into(),
            "<Enter>".blue().bold(),
            " View ".into(),
            "<E>".blue().bold(),
            " Name ".into(),
            "<N>".blue().bold(),
            " Export ".into(),
            "<X>".blue().bold(),
            " Quit ".into(),
            "<Q> ".blue().bold(),
        ])
    } else {
        Line::from(vec![
            " Edit ".into(),
            "<E>".blue().bold(),
            " Name ".into(),
            "<N>".blue().bold(),
            " Export ".into(),
            "<X>".blue().bold(),
            " Quit ".into(),
            "<Q> ".blue().bold(),
        ])
    }
}
