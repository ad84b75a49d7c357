use chrono::NaiveDate;

use crate::config::PickerConfig;
use crate::date_range::DateRange;
use crate::error::UiError;
use crate::month_pager::MonthPager;
use crate::popover::{FocusTarget, PopoverState};
use crate::range_selection::RangeSelection;

/// Everything a date range field keeps between events: the interval, the
/// popover and the calendar pair's visible months.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeSelector {
    pub selection: RangeSelection,
    pub popover: PopoverState,
    pub pager: MonthPager,
}

impl DateRangeSelector {
    /// `today` anchors the calendars until a start date exists.
    pub fn new(config: &PickerConfig, today: NaiveDate) -> Self {
        Self {
            selection: RangeSelection::new(config),
            popover: PopoverState::Closed,
            pager: MonthPager::new(today),
        }
    }

    pub fn range(&self) -> DateRange {
        self.selection.range()
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// Field click.
    pub fn open(&mut self) -> FocusTarget {
        if !self.popover.is_open() {
            if let Some(start) = self.selection.range().start {
                self.pager.show(start);
            }
            tracing::debug!("date range popover opened");
        }
        self.popover.open()
    }

    /// Outside click or explicit close. The range is left as it is.
    pub fn close(&mut self) {
        if self.popover.close() {
            tracing::debug!("date range popover closed");
        }
        self.selection.clear_hover();
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), UiError> {
        self.selection.select_date(date)
    }

    pub fn set_from_text(&mut self, text: &str) -> Result<(), UiError> {
        self.selection.set_from_text(text)
    }

    pub fn set_to_text(&mut self, text: &str) -> Result<(), UiError> {
        self.selection.set_to_text(text)
    }

    pub fn hover(&mut self, date: NaiveDate) {
        self.selection.hover(date);
    }

    pub fn go_to_month(&mut self, offset: i32) {
        self.pager.go_to_month(offset);
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Message for the helper line. An externally supplied message wins
    /// over the internal one.
    pub fn display_error<'a>(&'a self, external: Option<&'a str>) -> Option<&'a str> {
        external
            .filter(|msg| !msg.is_empty())
            .or_else(|| self.selection.error_message())
    }
}
