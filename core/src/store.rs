// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::event::{Event, EventDraft, FieldErrors};
use crate::month::Month;

/// In-memory, append-only store of timeline entries keyed by month.
///
/// Created empty when a session starts and dropped with it; there is no
/// durable identity behind the store. Month keys are created lazily on
/// first insert, and insertion order within a month is the display and
/// export order.
#[derive(Debug, Default)]
pub struct EventStore {
    events: HashMap<Month, Vec<Event>>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `draft` and appends the resulting event under `month`.
    ///
    /// A rejected draft leaves the store untouched (no partial insert) and
    /// reports which fields failed so the form can highlight exactly those
    /// without clearing the rest. On success the only side effect is one
    /// append to that month's list.
    pub fn add(&mut self, month: Month, draft: EventDraft) -> Result<&Event, FieldErrors> {
        let event = draft.validate()?;
        tracing::debug!(%month, title = event.title(), "event added");

        let list = self.events.entry(month).or_default();
        list.push(event);
        Ok(&list[list.len() - 1])
    }

    /// The events recorded for `month`, in insertion order.
    pub fn events(&self, month: Month) -> &[Event] {
        self.events.get(&month).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of events across all months.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Whether the store holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }

    /// Pairs every month, in calendar order, with its (possibly empty)
    /// event list.
    ///
    /// The pairing is derived on the fly from [`Month::ALL`] and the
    /// current contents; nothing is cached.
    pub fn timeline(&self) -> impl Iterator<Item = (Month, &[Event])> {
        Month::ALL.into_iter().map(|month| (month, self.events(month)))
    }
}
