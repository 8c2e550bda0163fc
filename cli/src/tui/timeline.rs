// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::prelude::*;
use roadmap_core::{EventStore, Month};

const RAIL_SELECTED: &str = "◆";
const RAIL_MONTH: &str = "◇";
const RAIL_CONNECTOR: &str = "│";
const RAIL_BOTTOM: &str = "└";

/// Lays the twelve months out as a vertical rail with the events recorded
/// under each month, in append order.
///
/// The selection highlight is only drawn in edit mode; in view mode the
/// rail is uniform, like the original read-only timeline.
pub fn timeline_lines(store: &EventStore, selected: Month, editing: bool) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let last = Month::ALL.len() - 1;

    for (month, events) in store.timeline() {
        let highlighted = editing && month == selected;

        let (marker, name) = if highlighted {
            (
                RAIL_SELECTED.blue(),
                month.name().blue().bold(),
            )
        } else {
            (RAIL_MONTH.dark_gray(), month.name().into())
        };
        lines.push(Line::from(vec![marker, " ".into(), name]));

        for event in events {
            lines.push(Line::from(vec![
                RAIL_CONNECTOR.dark_gray(),
                "   ".into(),
                format!("{} - {}", event.day_one(), event.day_two())
                    .dark_gray()
                    .italic(),
                "  ".into(),
                event.title().bold(),
                "  ".into(),
                event.description().dark_gray(),
            ]));
        }

        let rail = if month.index() == last {
            RAIL_BOTTOM
        } else {
            RAIL_CONNECTOR
        };
        lines.push(Line::from(rail.dark_gray()));
    }

    lines
}

/// Index of the first line of `month` in [`timeline_lines`]' output, used
/// to keep the selection in view when scrolling.
pub fn month_offset(store: &EventStore, month: Month) -> usize {
    store
        .timeline()
        .take_while(|(m, _)| *m != month)
        .map(|(_, events)| events.len() + 2)
        .sum()
}
