use chrono::NaiveDate;

use crate::config::{PickerConfig, RangePolicy};
use crate::date_range::{
    format_input_date, offset_days, parse_input_date, DateRange, SelectionMode,
};
use crate::error::UiError;

/// Interval state behind a date range field.
///
/// Calendar clicks go through [`RangeSelection::select_date`]; typing goes
/// through [`RangeSelection::set_from_text`] / [`RangeSelection::set_to_text`].
/// The two paths validate differently: clicks follow the configured
/// [`RangePolicy`], typed dates are shifted by the input day offset and
/// never touch the opposite bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    range: DateRange,
    mode: SelectionMode,
    hovered: Option<NaiveDate>,
    from_text: String,
    to_text: String,
    error: Option<UiError>,
    policy: RangePolicy,
    input_day_offset: i64,
    input_format: String,
}

impl Default for RangeSelection {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl RangeSelection {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            range: DateRange::default(),
            mode: SelectionMode::From,
            hovered: None,
            from_text: String::new(),
            to_text: String::new(),
            error: None,
            policy: config.invalid_range_policy,
            input_day_offset: config.input_day_offset,
            input_format: config.input_format.clone(),
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn hovered(&self) -> Option<NaiveDate> {
        self.hovered
    }

    pub fn from_text(&self) -> &str {
        &self.from_text
    }

    pub fn to_text(&self) -> &str {
        &self.to_text
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn error(&self) -> Option<&UiError> {
        self.error.as_ref()
    }

    /// Message to show under the field, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.is_user_visible())
            .map(UiError::user_message)
    }

    /// Apply a calendar click to the bound picked by the current mode.
    ///
    /// The mode flips and the hover preview is dropped whether or not the
    /// click was accepted.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), UiError> {
        let outcome = match self.mode {
            SelectionMode::From => self.select_start(date),
            SelectionMode::To => self.select_end(date),
        };

        self.mode = self.mode.toggled();
        self.hovered = None;
        self.error = outcome.as_ref().err().cloned();
        outcome
    }

    fn select_start(&mut self, date: NaiveDate) -> Result<(), UiError> {
        if self.range.end.is_some_and(|end| date > end) {
            match self.policy {
                RangePolicy::Reject => {
                    tracing::debug!(%date, "start after end rejected");
                    return Err(UiError::invalid_range());
                }
                RangePolicy::ClearOpposite => {
                    tracing::debug!(%date, "start after end, clearing end");
                    self.range.end = None;
                    self.to_text.clear();
                }
            }
        }

        self.range.start = Some(date);
        self.from_text = format_input_date(Some(date), &self.input_format);
        Ok(())
    }

    fn select_end(&mut self, date: NaiveDate) -> Result<(), UiError> {
        if self.range.start.is_some_and(|start| date < start) {
            match self.policy {
                RangePolicy::Reject => {
                    tracing::debug!(%date, "end before start rejected");
                    return Err(UiError::invalid_range());
                }
                RangePolicy::ClearOpposite => {
                    tracing::debug!(%date, "end before start, clearing start");
                    self.range.start = None;
                    self.from_text.clear();
                }
            }
        }

        self.range.end = Some(date);
        self.to_text = format_input_date(Some(date), &self.input_format);
        Ok(())
    }

    /// Take text typed into the start input.
    ///
    /// Returns `InvalidDate` while the text is not yet a full date; the text
    /// is kept and nothing else changes.
    pub fn set_from_text(&mut self, text: &str) -> Result<(), UiError> {
        self.from_text = text.to_string();
        if text.trim().is_empty() {
            self.range.start = None;
            self.error = None;
            return Ok(());
        }

        let date = offset_days(
            parse_input_date(text, &self.input_format)?,
            self.input_day_offset,
        );
        if self.range.end.is_some_and(|end| date > end) {
            tracing::debug!(%date, "typed start after end");
            return Err(self.fail(UiError::invalid_range()));
        }

        self.range.start = Some(date);
        self.error = None;
        Ok(())
    }

    /// Take text typed into the end input. Mirrors [`Self::set_from_text`].
    pub fn set_to_text(&mut self, text: &str) -> Result<(), UiError> {
        self.to_text = text.to_string();
        if text.trim().is_empty() {
            self.range.end = None;
            self.error = None;
            return Ok(());
        }

        let date = offset_days(
            parse_input_date(text, &self.input_format)?,
            self.input_day_offset,
        );
        if self.range.start.is_some_and(|start| date < start) {
            tracing::debug!(%date, "typed end before start");
            return Err(self.fail(UiError::invalid_range()));
        }

        self.range.end = Some(date);
        self.error = None;
        Ok(())
    }

    fn fail(&mut self, err: UiError) -> UiError {
        self.error = Some(err.clone());
        err
    }

    /// Record the day under the pointer. Only kept while the range is open
    /// (start set, end not).
    pub fn hover(&mut self, date: NaiveDate) {
        if self.range.start.is_some() && self.range.end.is_none() {
            self.hovered = Some(date);
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Back to the freshly mounted state.
    pub fn clear(&mut self) {
        self.range = DateRange::default();
        self.mode = SelectionMode::From;
        self.hovered = None;
        self.from_text.clear();
        self.to_text.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::{day_tone, DayTone};
    use crate::error::UiErrorKind;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn with_policy(policy: RangePolicy) -> RangeSelection {
        RangeSelection::new(&PickerConfig {
            invalid_range_policy: policy,
            ..PickerConfig::default()
        })
    }

    #[test]
    fn starts_empty_in_from_mode() {
        let sel = RangeSelection::default();
        assert!(sel.range().is_empty());
        assert_eq!(sel.mode(), SelectionMode::From);
        assert_eq!(sel.from_text(), "");
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn two_clicks_set_both_bounds() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        assert_eq!(sel.mode(), SelectionMode::To);
        assert!(!sel.range().is_empty() && !sel.range().is_complete());
        sel.select_date(d(2024, 6, 14)).unwrap();
        assert_eq!(sel.mode(), SelectionMode::From);
        assert_eq!(
            sel.range(),
            DateRange::new(Some(d(2024, 6, 10)), Some(d(2024, 6, 14)))
        );
        assert_eq!(sel.from_text(), "2024-06-10");
        assert_eq!(sel.to_text(), "2024-06-14");
        assert!(sel.range().is_complete());
    }

    #[test]
    fn calendar_clicks_apply_no_offset() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 1)).unwrap();
        assert_eq!(sel.range().start, Some(d(2024, 6, 1)));
    }

    #[test]
    fn same_day_range_is_valid() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        sel.select_date(d(2024, 6, 10)).unwrap();
        assert!(sel.range().is_complete());
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn reject_end_before_start() {
        let mut sel = with_policy(RangePolicy::Reject);
        sel.select_date(d(2024, 6, 10)).unwrap();
        let err = sel.select_date(d(2024, 6, 5)).unwrap_err();
        assert_eq!(err.kind, UiErrorKind::InvalidRange);
        assert_eq!(sel.error_message(), Some("Invalid range"));
        assert_eq!(sel.range(), DateRange::new(Some(d(2024, 6, 10)), None));
        assert_eq!(sel.to_text(), "");
        // the mode still flips on a rejected click
        assert_eq!(sel.mode(), SelectionMode::From);
    }

    #[test]
    fn clear_opposite_on_end_before_start() {
        let mut sel = with_policy(RangePolicy::ClearOpposite);
        sel.select_date(d(2024, 6, 10)).unwrap();
        sel.select_date(d(2024, 6, 5)).unwrap();
        assert_eq!(sel.range(), DateRange::new(None, Some(d(2024, 6, 5))));
        assert_eq!(sel.from_text(), "");
        assert_eq!(sel.to_text(), "2024-06-05");
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn start_after_end_never_inverts_range() {
        for policy in [RangePolicy::Reject, RangePolicy::ClearOpposite] {
            let mut sel = with_policy(policy);
            sel.select_date(d(2024, 6, 1)).unwrap();
            sel.select_date(d(2024, 6, 5)).unwrap();
            let _ = sel.select_date(d(2024, 6, 20));
            let range = sel.range();
            if let (Some(start), Some(end)) = (range.start, range.end) {
                assert!(start <= end, "{policy:?} left {start} > {end}");
            }
        }
    }

    #[test]
    fn start_after_end_policies_differ() {
        let mut rejecting = with_policy(RangePolicy::Reject);
        rejecting.select_date(d(2024, 6, 1)).unwrap();
        rejecting.select_date(d(2024, 6, 5)).unwrap();
        assert!(rejecting.select_date(d(2024, 6, 20)).is_err());
        assert_eq!(
            rejecting.range(),
            DateRange::new(Some(d(2024, 6, 1)), Some(d(2024, 6, 5)))
        );

        let mut clearing = with_policy(RangePolicy::ClearOpposite);
        clearing.select_date(d(2024, 6, 1)).unwrap();
        clearing.select_date(d(2024, 6, 5)).unwrap();
        clearing.select_date(d(2024, 6, 20)).unwrap();
        assert_eq!(clearing.range(), DateRange::new(Some(d(2024, 6, 20)), None));
        assert_eq!(clearing.to_text(), "");
    }

    #[test]
    fn accepted_click_clears_previous_error() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        let _ = sel.select_date(d(2024, 6, 5));
        assert!(sel.error_message().is_some());
        sel.select_date(d(2024, 6, 8)).unwrap();
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn typed_start_gets_one_day_offset() {
        let mut sel = RangeSelection::default();
        sel.set_from_text("2024-06-01").unwrap();
        assert_eq!(sel.range().start, Some(d(2024, 6, 2)));
        assert_eq!(sel.from_text(), "2024-06-01");
    }

    #[test]
    fn configured_offset_is_used() {
        let mut sel = RangeSelection::new(&PickerConfig {
            input_day_offset: 0,
            ..PickerConfig::default()
        });
        sel.set_to_text("2024-06-01").unwrap();
        assert_eq!(sel.range().end, Some(d(2024, 6, 1)));
    }

    #[test]
    fn typed_range_violation_keeps_opposite_bound() {
        for policy in [RangePolicy::Reject, RangePolicy::ClearOpposite] {
            let mut sel = with_policy(policy);
            sel.select_date(d(2024, 6, 10)).unwrap();
            sel.select_date(d(2024, 6, 12)).unwrap();

            let err = sel.set_from_text("2024-06-20").unwrap_err();
            assert_eq!(err.kind, UiErrorKind::InvalidRange);
            assert_eq!(sel.error_message(), Some("Invalid range"));
            assert_eq!(
                sel.range(),
                DateRange::new(Some(d(2024, 6, 10)), Some(d(2024, 6, 12)))
            );
            assert_eq!(sel.from_text(), "2024-06-20");
        }
    }

    #[test]
    fn typed_end_before_start_is_invalid() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        assert!(sel.set_to_text("2024-06-01").is_err());
        assert_eq!(sel.range().end, None);
        // 2024-06-09 + 1 day lands on the start, which is allowed
        sel.set_to_text("2024-06-09").unwrap();
        assert_eq!(sel.range().end, Some(d(2024, 6, 10)));
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn partial_text_is_kept_without_touching_state() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        let err = sel.set_from_text("2024-0").unwrap_err();
        assert_eq!(err.kind, UiErrorKind::InvalidDate);
        assert_eq!(sel.from_text(), "2024-0");
        assert_eq!(sel.range().start, Some(d(2024, 6, 10)));
        assert_eq!(sel.error_message(), None);
    }

    #[test]
    fn empty_text_clears_bound() {
        let mut sel = RangeSelection::default();
        sel.set_from_text("2024-06-01").unwrap();
        sel.set_from_text("").unwrap();
        assert_eq!(sel.range().start, None);
    }

    #[test]
    fn hover_only_tracked_while_range_is_open() {
        let mut sel = RangeSelection::default();
        sel.hover(d(2024, 6, 3));
        assert_eq!(sel.hovered(), None);

        sel.select_date(d(2024, 6, 1)).unwrap();
        sel.hover(d(2024, 6, 3));
        assert_eq!(sel.hovered(), Some(d(2024, 6, 3)));
        assert!(sel.range().contains(d(2024, 6, 2), sel.hovered()));
        assert_eq!(day_tone(d(2024, 6, 2), &sel.range(), sel.hovered()), DayTone::InRange);

        sel.select_date(d(2024, 6, 4)).unwrap();
        assert_eq!(sel.hovered(), None);
        sel.hover(d(2024, 6, 20));
        assert_eq!(sel.hovered(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut sel = RangeSelection::default();
        sel.select_date(d(2024, 6, 10)).unwrap();
        sel.hover(d(2024, 6, 11));
        let _ = sel.set_to_text("2024-06-01");
        sel.clear();
        assert_eq!(sel, RangeSelection::default());
    }
}
