use chrono::{Datelike, Months, NaiveDate};

/// Column headers for a Sunday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month paging for a pair of side-by-side calendars.
///
/// The left calendar shows the "from" month and the right one the month
/// after it. Both page together through [`MonthPager::go_to_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPager {
    left: NaiveDate,
}

impl MonthPager {
    /// Start on the month containing `reference`.
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            left: first_of_month(reference),
        }
    }

    /// First day of the left ("from") month.
    pub fn left_month(&self) -> NaiveDate {
        self.left
    }

    /// First day of the right ("to") month.
    pub fn right_month(&self) -> NaiveDate {
        shift_months(self.left, 1)
    }

    /// Move both calendars by `offset` months. Out-of-range targets leave
    /// the pager where it is.
    pub fn go_to_month(&mut self, offset: i32) {
        self.left = shift_months(self.left, offset);
    }

    /// Jump so the left calendar shows the month containing `date`.
    pub fn show(&mut self, date: NaiveDate) {
        self.left = first_of_month(date);
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn shift_months(month: NaiveDate, offset: i32) -> NaiveDate {
    let months = Months::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        month.checked_add_months(months)
    } else {
        month.checked_sub_months(months)
    };
    shifted.unwrap_or(month)
}

/// Header text such as `June 2024`.
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Weeks of `month` laid out Sunday-first. Cells outside the month are `None`.
pub fn month_weeks(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(month);
    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; 7];
    let mut column = first.weekday().num_days_from_sunday() as usize;

    for day in first.iter_days().take_while(|d| d.month() == first.month()) {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}
