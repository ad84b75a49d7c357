use admin_types::{day_tone, month_title, month_weeks, DateRange, DayTone, WEEKDAY_LABELS};
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// One month of a range calendar.
///
/// Day cells are shaded from `range` and `hovered`; paging is driven by the
/// owner through `on_previous`/`on_next`, so two instances can page as a
/// pair.
#[component]
pub fn RangeCalendar(
    /// Any day of the month to show.
    month: NaiveDate,
    range: DateRange,
    #[props(default)] hovered: Option<NaiveDate>,
    #[props(default)] today: Option<NaiveDate>,
    #[props(default = false)] show_previous: bool,
    #[props(default = false)] show_next: bool,
    #[props(default)] on_previous: EventHandler<()>,
    #[props(default)] on_next: EventHandler<()>,
    #[props(default)] on_select: EventHandler<NaiveDate>,
    #[props(default)] on_hover: EventHandler<NaiveDate>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "range-calendar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let title = month_title(month);
    let weeks = month_weeks(month);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "range-calendar-header",
                if show_previous {
                    Button {
                        variant: ButtonVariant::Icon,
                        title: "Previous month",
                        onclick: move |_| on_previous.call(()),
                        Icon { width: 12, height: 12, icon: FaChevronLeft }
                    }
                } else {
                    span { class: "range-calendar-nav-spacer" }
                }
                span { class: "range-calendar-title", "{title}" }
                if show_next {
                    Button {
                        variant: ButtonVariant::Icon,
                        title: "Next month",
                        onclick: move |_| on_next.call(()),
                        Icon { width: 12, height: 12, icon: FaChevronRight }
                    }
                } else {
                    span { class: "range-calendar-nav-spacer" }
                }
            }
            div { class: "range-calendar-weekdays",
                for label in WEEKDAY_LABELS {
                    span { key: "{label}", class: "range-calendar-weekday", "{label}" }
                }
            }
            div { class: "range-calendar-grid", role: "grid",
                for (row, week) in weeks.into_iter().enumerate() {
                    div { key: "{row}", class: "range-calendar-week", role: "row",
                        for (column, cell) in week.into_iter().enumerate() {
                            if let Some(day) = cell {
                                DayCell {
                                    key: "{day}",
                                    day,
                                    tone: day_tone(day, &range, hovered),
                                    is_today: today == Some(day),
                                    on_select,
                                    on_hover,
                                }
                            } else {
                                span { key: "filler-{column}", class: "range-calendar-filler" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(
    day: NaiveDate,
    tone: DayTone,
    is_today: bool,
    on_select: EventHandler<NaiveDate>,
    on_hover: EventHandler<NaiveDate>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "range-calendar-day",
            role: "gridcell",
            "data-date": "{day}",
            "data-tone": tone.as_str(),
            "data-today": is_today,
            "aria-selected": tone == DayTone::Selected,
            onclick: move |evt| {
                evt.stop_propagation();
                on_select.call(day);
            },
            onmouseenter: move |_| on_hover.call(day),
            "{day.day()}"
        }
    }
}
