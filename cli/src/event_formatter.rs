// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use roadmap_core::{Event, EventStore};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

/// One row of the end-of-session summary: an event together with the month
/// it was filed under.
#[derive(Debug, serde::Serialize)]
pub struct SessionEvent<'a> {
    pub month: &'static str,

    #[serde(flatten)]
    pub inner: &'a Event,
}

impl<'a> SessionEvent<'a> {
    /// Flattens the store into rows, months in calendar order, events in
    /// append order.
    pub fn collect(store: &'a EventStore) -> Vec<SessionEvent<'a>> {
        store
            .timeline()
            .flat_map(|(month, events)| {
                events.iter().map(move |event| SessionEvent {
                    month: month.name(),
                    inner: event,
                })
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Month,
                EventColumn::Days,
                EventColumn::Title,
                EventColumn::Description,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [SessionEvent<'a>]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [SessionEvent<'a>],
    formatter: &'a EventFormatter,
}

impl<'a> fmt::Display for Display<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table {
                    columns: &self.formatter.columns,
                    separator: "  ",
                    data: self.events,
                }
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Month,
    Days,
    Title,
    Description,
}

impl Column<SessionEvent<'_>> for EventColumn {
    fn format(&self, data: &SessionEvent<'_>) -> String {
        match self {
            EventColumn::Month => data.month.to_string(),
            EventColumn::Days => format!("{} - {}", data.inner.day_one(), data.inner.day_two()),
            EventColumn::Title => data.inner.title().to_string(),
            EventColumn::Description => data.inner.description().to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Days => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _data: &SessionEvent<'_>) -> Option<Color> {
        match self {
            EventColumn::Month => Some(Color::Blue),
            EventColumn::Days => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::{EventDraft, Month};

    fn store() -> EventStore {
        let mut store = EventStore::new();
        store
            .add(
                Month::January,
                EventDraft {
                    day_one: "1".to_string(),
                    day_two: "5".to_string(),
                    title: "Trip".to_string(),
                    description: "Beach".to_string(),
                },
            )
            .unwrap();
        store
    }

    #[test]
    fn test_collect_flattens_in_calendar_order() {
        let mut store = store();
        store
            .add(
                Month::March,
                EventDraft {
                    day_one: "3".to_string(),
                    day_two: "4".to_string(),
                    title: "Talk".to_string(),
                    description: String::new(),
                },
            )
            .unwrap();

        let rows = SessionEvent::collect(&store);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, "January");
        assert_eq!(rows[1].month, "March");
    }

    #[test]
    fn test_format_table_contains_fields() {
        colored::control::set_override(false);

        let store = store();
        let rows = SessionEvent::collect(&store);
        let formatter = EventFormatter::new();
        let out = formatter.format(&rows).to_string();

        assert!(out.contains("January"));
        assert!(out.contains("1 - 5"));
        assert!(out.contains("Trip"));
        assert!(out.contains("Beach"));
    }

    #[test]
    fn test_format_json_flattens_event_fields() {
        let store = store();
        let rows = SessionEvent::collect(&store);
        let formatter = EventFormatter::new().with_output_format(OutputFormat::Json);
        let out = formatter.format(&rows).to_string();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["month"], "January");
        assert_eq!(parsed[0]["day_one"], "1");
        assert_eq!(parsed[0]["title"], "Trip");
    }
}
