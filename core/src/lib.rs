// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod document;
mod event;
mod month;
mod sanitize;
mod store;

pub use crate::{
    config::{APP_NAME, Config},
    document::{Block, NO_EVENTS, SIGNATURE, build_document},
    event::{Event, EventDraft, FieldErrors},
    month::Month,
    sanitize::{MAX_DAY_LEN, sanitize_day_input},
    store::EventStore,
};
