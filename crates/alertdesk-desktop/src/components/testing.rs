//! Server-side rendering helpers for component tests.

use std::rc::Rc;

use dioxus::prelude::*;

use alertdesk_core::indicator::IndicatorStore;
use alertdesk_core::locale::Locale;

use crate::plugins::default_registry;
use crate::state::AppState;

/// Renders a root component to HTML after the first build.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Provides an offline [`AppState`] (no API client) to its children.
#[component]
pub fn WithAppState(children: Element) -> Element {
    use_context_provider(|| AppState {
        api: Signal::new(None),
        indicators: Signal::new(IndicatorStore::new()),
        locale: Signal::new(Locale::english()),
        plugins: Signal::new(Rc::new(default_registry())),
    });
    rsx! {
        {children}
    }
}
