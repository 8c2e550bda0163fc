// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::month::Month;
use crate::store::EventStore;

/// Name used in the document title when the user never entered one.
const FALLBACK_NAME: &str = "Your";

/// Text of the notice emitted for a month without entries.
pub const NO_EVENTS: &str = "No events";

/// The fixed signature line closing every exported document.
pub const SIGNATURE: &str = "Here's to a year worth planning.";

/// One unit of printable content in the export document.
///
/// A block carries text only; typesetting, pagination and file generation
/// belong to whatever renderer consumes the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Document title, first block of every document.
    Title(String),

    /// Header opening a month's section.
    MonthHeader(&'static str),

    /// Distinct notice that a month has no entries. Rendered visibly (e.g.
    /// italic) so absence reads as deliberate rather than as an omission.
    NoEvents,

    /// One timeline entry as three logical lines. The description line is
    /// always present, possibly empty after the label.
    Entry {
        dates: String,
        title: String,
        description: String,
    },

    /// The fixed signature, last block of every document.
    Signature,
}

/// Walks the twelve months in calendar order and lays the store's contents
/// out as an ordered block sequence.
///
/// Pure: the same name and store snapshot always produce the same blocks.
/// No I/O, no clock, no randomness.
pub fn build_document(display_name: &str, store: &EventStore) -> Vec<Block> {
    let name = display_name.trim();
    let name = if name.is_empty() { FALLBACK_NAME } else { name };

    let mut blocks = vec![Block::Title(format!("{name} 2025 Roadmap"))];
    for (month, events) in store.timeline() {
        blocks.push(Block::MonthHeader(month.name()));

        if events.is_empty() {
            blocks.push(Block::NoEvents);
            continue;
        }

        for event in events {
            blocks.push(Block::Entry {
                dates: format!(
                    "{month} {} - {month} {}",
                    event.day_one(),
                    event.day_two()
                ),
                title: format!("Title: {}", event.title()),
                description: format!("Description: {}", event.description()),
            });
        }
    }

    blocks.push(Block::Signature);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;

    fn store_with_trip() -> EventStore {
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
    fn test_empty_store_layout() {
        let blocks = build_document("", &EventStore::new());

        // title + (header + no-events) per month + signature
        assert_eq!(blocks.len(), 1 + 12 * 2 + 1);
        assert_eq!(blocks[0], Block::Title("Your 2025 Roadmap".to_string()));
        assert_eq!(blocks[1], Block::MonthHeader("January"));
        assert_eq!(blocks[2], Block::NoEvents);
        assert_eq!(blocks[blocks.len() - 1], Block::Signature);
    }

    #[test]
    fn test_empty_month_gets_exactly_one_no_events_block() {
        let blocks = build_document("Ben", &store_with_trip());

        let june = blocks
            .iter()
            .position(|b| *b == Block::MonthHeader("June"))
            .unwrap();
        assert_eq!(blocks[june + 1], Block::NoEvents);
        assert!(matches!(blocks[june + 2], Block::MonthHeader(_)));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let blocks = build_document("Ben", &store_with_trip());

        assert_eq!(blocks[0], Block::Title("Ben 2025 Roadmap".to_string()));
        assert_eq!(blocks[1], Block::MonthHeader("January"));
        assert_eq!(
            blocks[2],
            Block::Entry {
                dates: "January 1 - January 5".to_string(),
                title: "Title: Trip".to_string(),
                description: "Description: Beach".to_string(),
            }
        );
        assert_eq!(blocks[3], Block::MonthHeader("February"));
        assert_eq!(blocks[4], Block::NoEvents);

        let headers: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::MonthHeader(name) => Some(*name),
                _ => None,
            })
            .collect();
        let names: Vec<_> = Month::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(headers, names);

        assert_eq!(blocks[blocks.len() - 1], Block::Signature);
    }

    #[test]
    fn test_build_is_idempotent() {
        let store = store_with_trip();
        assert_eq!(build_document("Ben", &store), build_document("Ben", &store));
    }

    #[test]
    fn test_display_name_is_trimmed_and_defaulted() {
        let store = EventStore::new();
        let blocks = build_document("  Ben  ", &store);
        assert_eq!(blocks[0], Block::Title("Ben 2025 Roadmap".to_string()));

        let blocks = build_document("   ", &store);
        assert_eq!(blocks[0], Block::Title("Your 2025 Roadmap".to_string()));
    }

    #[test]
    fn test_events_export_in_append_order() {
        let mut store = store_with_trip();
        store
            .add(
                Month::January,
                EventDraft {
                    day_one: "20".to_string(),
                    day_two: "22".to_string(),
                    title: "Conference".to_string(),
                    description: String::new(),
                },
            )
            .unwrap();

        let blocks = build_document("Ben", &store);
        assert_eq!(
            blocks[3],
            Block::Entry {
                dates: "January 20 - January 22".to_string(),
                title: "Title: Conference".to_string(),
                description: "Description: ".to_string(),
            }
        );
    }
}
