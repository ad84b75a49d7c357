use admin_types::{format_input_date, DateRange, PickerConfig, RangePolicy};
use admin_ui::DateRangePicker;
use dioxus::prelude::*;

use crate::config::load_ui_config;

/// Both invalid-range policies side by side, plus an externally
/// validated field.
#[component]
pub fn DateRangeStory() -> Element {
    let base = load_ui_config().picker.clone();
    let rejecting = PickerConfig {
        invalid_range_policy: RangePolicy::Reject,
        ..base.clone()
    };
    let clearing = PickerConfig {
        invalid_range_policy: RangePolicy::ClearOpposite,
        ..base.clone()
    };

    let mut rejecting_range = use_signal(DateRange::default);
    let mut clearing_range = use_signal(DateRange::default);
    let mut required_range = use_signal(DateRange::default);
    let required_error = (!required_range().is_complete()).then(|| "Both dates are required".to_string());

    rsx! {
        section { class: "story",
            h2 { "Date range picker" }
            p {
                "Click the field to open the calendars. Clicks alternate between the start "
                "and the end; typed dates are shifted by the configured day offset."
            }

            div { class: "story-row",
                div { class: "story-case",
                    h3 { "Out-of-order clicks are rejected" }
                    DateRangePicker {
                        label: "Reporting period",
                        config: rejecting,
                        on_change: move |range| rejecting_range.set(range),
                    }
                    RangeReadout { range: rejecting_range() }
                }
                div { class: "story-case",
                    h3 { "Out-of-order clicks clear the other bound" }
                    DateRangePicker {
                        label: "Reporting period",
                        config: clearing,
                        on_change: move |range| clearing_range.set(range),
                    }
                    RangeReadout { range: clearing_range() }
                }
                div { class: "story-case",
                    h3 { "External validation" }
                    DateRangePicker {
                        label: "Travel dates",
                        error: required_error,
                        config: base,
                        on_change: move |range| required_range.set(range),
                    }
                }
            }
        }
    }
}

#[component]
fn RangeReadout(range: DateRange) -> Element {
    let start = format_input_date(range.start, "%Y-%m-%d");
    let end = format_input_date(range.end, "%Y-%m-%d");

    rsx! {
        dl { class: "story-readout",
            dt { "start" }
            dd { if start.is_empty() { "\u{2205}" } else { "{start}" } }
            dt { "end" }
            dd { if end.is_empty() { "\u{2205}" } else { "{end}" } }
        }
    }
}
