//! Range slider component

use dioxus::prelude::*;

use alertdesk_core::range::StepRange;

use crate::state::minutes_label;

/// Slider bound to a [`StepRange`], labelled in minutes.
///
/// Reports only in-range, stepped values through `on_change`.
#[component]
pub(super) fn RangeField(
    #[props(into)] name: String,
    #[props(into)] label: String,
    #[props(into)] help: String,
    range: StepRange,
    value: u32,
    error: Option<String>,
    on_change: EventHandler<u32>,
) -> Element {
    let value = range.snap(i64::from(value));
    let value_label = minutes_label(value);

    rsx! {
        div {
            class: "range-field",

            label {
                r#for: "{name}",
                "{label}"
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "range",
                min: "{range.min}",
                max: "{range.max}",
                step: "{range.step}",
                value: "{value}",
                oninput: move |event: FormEvent| {
                    if let Some(next) = range.parse_input(&event.value()) {
                        on_change.call(next);
                    }
                },
            }
            div {
                class: "range-value",
                "{value_label}"
            }
            div {
                class: "range-help",
                "{help}"
            }
            if let Some(error) = error {
                div {
                    class: "range-error",
                    "{error}"
                }
            }
        }
    }
}
