use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// A possibly incomplete date interval.
///
/// When both bounds are set, `start <= end` holds for any range produced by
/// [`crate::RangeSelection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether `day` is one of the two bounds.
    pub fn is_bound(&self, day: NaiveDate) -> bool {
        self.start == Some(day) || self.end == Some(day)
    }

    /// Inclusive membership test.
    ///
    /// A complete range tests against `[start, end]`. With only a start, the
    /// hovered day stands in for the end. A hover before the start matches
    /// nothing.
    pub fn contains(&self, day: NaiveDate, hovered: Option<NaiveDate>) -> bool {
        match (self.start, self.end, hovered) {
            (Some(start), Some(end), _) => start <= day && day <= end,
            (Some(start), None, Some(hover)) => start <= day && day <= hover,
            _ => false,
        }
    }
}

/// Which bound the next calendar click sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    From,
    To,
}

impl SelectionMode {
    pub fn toggled(self) -> Self {
        match self {
            SelectionMode::From => SelectionMode::To,
            SelectionMode::To => SelectionMode::From,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::From => "from",
            SelectionMode::To => "to",
        }
    }
}

/// Background shade of a calendar day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTone {
    /// The day is the start or the end.
    Selected,
    /// Strictly inside the range or the hover preview.
    InRange,
    Default,
}

impl DayTone {
    /// Value for the `data-tone` attribute on a day cell.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayTone::Selected => "selected",
            DayTone::InRange => "in-range",
            DayTone::Default => "default",
        }
    }
}

/// Shade a day cell. Pure in `(day, range, hovered)`.
pub fn day_tone(day: NaiveDate, range: &DateRange, hovered: Option<NaiveDate>) -> DayTone {
    if range.is_bound(day) {
        DayTone::Selected
    } else if range.contains(day, hovered) {
        DayTone::InRange
    } else {
        DayTone::Default
    }
}

/// Parse input text with `format`.
pub fn parse_input_date(text: &str, format: &str) -> Result<NaiveDate, UiError> {
    NaiveDate::parse_from_str(text.trim(), format)
        .map_err(|e| UiError::invalid_date(format!("{text:?}: {e}")))
}

/// Render a bound for a text input; `None` becomes the empty string.
pub fn format_input_date(date: Option<NaiveDate>, format: &str) -> String {
    date.map(|d| d.format(format).to_string()).unwrap_or_default()
}

/// Shift a date by a signed number of days, saturating at the calendar edges.
pub fn offset_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
