use std::rc::Rc;

use admin_types::{DateRange, DateRangeSelector, FocusTarget, PickerConfig};
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::date_input::DateInput;
use crate::components::popover::Popover;
use crate::components::range_calendar::RangeCalendar;

/// A date range field: two typed inputs plus a two-month calendar popover.
///
/// Clicking the field opens the popover and focuses the start input.
/// Calendar clicks alternate between the start and the end bound.
#[component]
pub fn DateRangePicker(
    #[props(default)] label: Option<String>,
    /// Externally supplied message; shown instead of the internal one.
    #[props(default)] error: Option<String>,
    #[props(default)] config: PickerConfig,
    /// Anchors the calendars and marks the current day. Defaults to the
    /// local date.
    #[props(default)] today: Option<NaiveDate>,
    #[props(default = false)] default_open: bool,
    #[props(default)] on_change: EventHandler<DateRange>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut selector = use_signal(|| {
        let mut selector = DateRangeSelector::new(&config, today);
        if default_open {
            selector.open();
        }
        selector
    });
    let mut start_input = use_signal(|| None::<Rc<MountedData>>);

    let commit = move |before: DateRange| {
        let after = selector.peek().range();
        if after != before {
            tracing::debug!(?after, "date range changed");
            on_change.call(after);
        }
    };

    let open = move |_: MouseEvent| {
        let target = selector.write().open();
        if target == FocusTarget::StartInput {
            if let Some(input) = start_input() {
                spawn(async move {
                    if let Err(e) = input.set_focus(true).await {
                        tracing::debug!(?e, "could not focus start date input");
                    }
                });
            }
        }
    };

    let on_select = move |day: NaiveDate| {
        let before = selector.peek().range();
        if let Err(e) = selector.write().select_date(day) {
            tracing::debug!(%day, error = %e, "calendar selection not applied");
        }
        commit(before);
    };

    let on_hover = move |day: NaiveDate| {
        let needs_update = {
            let current = selector.peek();
            let range = current.range();
            range.start.is_some() && range.end.is_none() && current.selection.hovered() != Some(day)
        };
        if needs_update {
            selector.write().hover(day);
        }
    };

    let state = selector.read().clone();
    let range = state.range();
    let title = config.popover_title.clone();
    let message = state.display_error(error.as_deref()).map(str::to_string);
    let input_type = config.input_type();
    let externally_invalid = error.as_deref().is_some_and(|e| !e.is_empty());

    let base = vec![Attribute::new("class", "date-range-picker", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        fieldset {
            "data-invalid": message.is_some(),
            "aria-invalid": externally_invalid,
            "data-mode": state.selection.mode().as_str(),
            onclick: open,
            ..merged,
            if let Some(label) = label {
                legend { class: "date-range-picker-legend", "{label}" }
            }
            div { class: "date-range-picker-inputs",
                DateInput {
                    value: state.selection.from_text().to_string(),
                    input_type,
                    test_id: "start-date-input",
                    on_mounted: move |input| start_input.set(Some(input)),
                    on_input: move |text: String| {
                        let before = selector.peek().range();
                        if let Err(e) = selector.write().set_from_text(&text) {
                            tracing::debug!(error = %e, "start date input not applied");
                        }
                        commit(before);
                    },
                }
                span { class: "date-range-picker-separator", "-" }
                DateInput {
                    value: state.selection.to_text().to_string(),
                    input_type,
                    test_id: "end-date-input",
                    on_input: move |text: String| {
                        let before = selector.peek().range();
                        if let Err(e) = selector.write().set_to_text(&text) {
                            tracing::debug!(error = %e, "end date input not applied");
                        }
                        commit(before);
                    },
                }
            }
            if let Some(message) = message {
                p { class: "date-range-picker-helper", "{message}" }
            }
            Popover {
                open: state.is_open(),
                on_close: move |_| selector.write().close(),
                h6 { class: "date-range-picker-title", "{title}" }
                div { class: "date-range-picker-calendars",
                    RangeCalendar {
                        month: state.pager.left_month(),
                        range,
                        hovered: state.selection.hovered(),
                        today: Some(today),
                        show_previous: true,
                        on_previous: move |_| selector.write().go_to_month(-1),
                        on_select,
                        on_hover,
                    }
                    RangeCalendar {
                        month: state.pager.right_month(),
                        range,
                        hovered: state.selection.hovered(),
                        today: Some(today),
                        show_next: true,
                        on_next: move |_| selector.write().go_to_month(1),
                        on_select,
                        on_hover,
                    }
                }
                div { class: "date-range-picker-actions",
                    Button {
                        variant: ButtonVariant::Text,
                        onclick: move |_| {
                            let before = selector.peek().range();
                            selector.write().clear();
                            commit(before);
                        },
                        "Clear"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_types::RangePolicy;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_fieldset_with_two_inputs() {
        fn app() -> Element {
            rsx! {
                DateRangePicker { today: Some(d(2024, 6, 1)) }
            }
        }
        let html = render(app);
        assert!(html.contains("<fieldset"));
        assert!(html.contains("data-testid=\"start-date-input\""));
        assert!(html.contains("data-testid=\"end-date-input\""));
        assert!(!html.contains("<legend"));
        assert!(!html.contains("popover-panel"));
    }

    #[test]
    fn renders_label_as_legend() {
        fn app() -> Element {
            rsx! {
                DateRangePicker { label: "Date Range", today: Some(d(2024, 6, 1)) }
            }
        }
        let html = render(app);
        assert!(html.contains("Date Range</legend>"));
    }

    #[test]
    fn external_error_is_shown() {
        fn app() -> Element {
            rsx! {
                DateRangePicker { error: "Required", today: Some(d(2024, 6, 1)) }
            }
        }
        let html = render(app);
        assert!(html.contains("date-range-picker-helper"));
        assert!(html.contains("Required"));
    }

    #[test]
    fn open_popover_shows_two_paged_months() {
        fn app() -> Element {
            rsx! {
                DateRangePicker {
                    today: Some(d(2024, 6, 18)),
                    default_open: true,
                    config: PickerConfig {
                        invalid_range_policy: RangePolicy::ClearOpposite,
                        ..PickerConfig::default()
                    },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("popover-panel"));
        assert!(html.contains("Select Date Range"));
        assert!(html.contains("June 2024"));
        assert!(html.contains("July 2024"));
        assert!(html.contains("Previous month"));
        assert!(html.contains("Next month"));
        assert!(html.contains("Clear"));
    }

    #[test]
    fn empty_external_error_is_not_invalid() {
        fn app() -> Element {
            rsx! {
                DateRangePicker { error: "", today: Some(d(2024, 6, 1)) }
            }
        }
        let html = render(app);
        assert!(!html.contains("aria-invalid=true"));
        assert!(!html.contains("aria-invalid=\"true\""));
        assert!(!html.contains("date-range-picker-helper"));
        assert!(html.contains("data-mode=\"from\""));
    }

    #[test]
    fn custom_format_switches_inputs_to_text() {
        fn app() -> Element {
            rsx! {
                DateRangePicker {
                    today: Some(d(2024, 6, 1)),
                    config: PickerConfig {
                        input_format: "%d/%m/%Y".to_string(),
                        ..PickerConfig::default()
                    },
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("type=\"text\"").count(), 2);
        assert!(!html.contains("type=\"date\""));
    }
}

