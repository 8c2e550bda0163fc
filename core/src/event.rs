// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Draft for a timeline entry, holding the raw form fields as entered.
///
/// A draft carries no guarantees; it becomes an [`Event`] only through
/// [`EventDraft::validate`].
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    /// First day of the range, expected to be a 1-2 digit string.
    pub day_one: String,

    /// Last day of the range, expected to be a 1-2 digit string.
    pub day_two: String,

    /// Title of the entry.
    pub title: String,

    /// Free-form description, may be empty.
    pub description: String,
}

impl EventDraft {
    /// Validates the draft, consuming it into an [`Event`].
    ///
    /// The three required fields are checked independently; the returned
    /// [`FieldErrors`] flags every field that is empty after trimming, so a
    /// form can highlight exactly the offending inputs. Field values are
    /// kept as entered, validation does not rewrite them.
    pub fn validate(self) -> Result<Event, FieldErrors> {
        let errors = FieldErrors {
            day_one: self.day_one.trim().is_empty(),
            day_two: self.day_two.trim().is_empty(),
            title: self.title.trim().is_empty(),
        };
        if errors.any() {
            return Err(errors);
        }

        Ok(Event {
            day_one: self.day_one,
            day_two: self.day_two,
            title: self.title,
            description: self.description,
        })
    }
}

/// A validated timeline entry attached to one month.
///
/// Only constructible through [`EventDraft::validate`], so no partially
/// valid event can reach the store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    day_one: String,
    day_two: String,
    title: String,
    description: String,
}

impl Event {
    /// First day of the range.
    pub fn day_one(&self) -> &str {
        &self.day_one
    }

    /// Last day of the range.
    pub fn day_two(&self) -> &str {
        &self.day_two
    }

    /// Title of the entry.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description of the entry, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Per-field failure map for a rejected add.
///
/// `true` marks a required field that was empty or whitespace-only. The
/// caller re-prompts with the flagged fields highlighted; untouched fields
/// keep their values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldErrors {
    pub day_one: bool,
    pub day_two: bool,
    pub title: bool,
}

impl FieldErrors {
    /// Whether any required field failed.
    pub fn any(self) -> bool {
        self.day_one || self.day_two || self.title
    }
}
