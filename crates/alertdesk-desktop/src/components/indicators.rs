//! Progress and error toast component

use dioxus::prelude::*;

use alertdesk_core::indicator::IndicatorKind;

use crate::state::{t, AppState};

/// Stack of progress and error toasts.
#[component]
pub fn IndicatorList() -> Element {
    let state = use_context::<AppState>();
    let items = state.indicators.read().items().to_vec();

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "indicators",
            for item in items {
                div {
                    key: "{item.handle:?}",
                    class: match item.kind {
                        IndicatorKind::Loading => "indicator",
                        IndicatorKind::Error => "indicator indicator-error",
                    },
                    {t(&item.message)}
                }
            }
        }
    }
}
