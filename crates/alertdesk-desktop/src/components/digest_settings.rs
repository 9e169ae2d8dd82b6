//! Digest settings component

use dioxus::prelude::*;

use alertdesk_core::api::ApiError;
use alertdesk_core::digest_form::{
    DigestForm, FormState, SubmitOutcome, DIGESTS_DESCRIPTION, SAVE_FAILED_BANNER,
};
use alertdesk_core::models::DigestField;
use alertdesk_core::{DigestSettings, ProjectRef};

use super::range_field::RangeField;
use super::settings_box::SettingsBox;
use crate::state::{t, AppState};

/// Digest delivery frequency form.
///
/// Keeps its own working copy; `on_save` fires with the values the server
/// confirmed.
#[component]
pub(super) fn DigestSettingsForm(
    project: ProjectRef,
    initial: DigestSettings,
    on_save: EventHandler<DigestSettings>,
) -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(|| DigestForm::new(initial));

    let submit = move |_: MouseEvent| {
        let mut indicators = state.indicators;
        let Some(save) = form
            .write()
            .start_save(&project, &mut indicators.write())
        else {
            return;
        };
        let api = state.api.read().clone();
        let mut form_signal = form;
        spawn(async move {
            let result = match api {
                Some(api) => save.send(&api).await,
                None => Err(ApiError::transport("API client is not configured")),
            };
            let outcome = save.finish(&mut form_signal.write(), &mut indicators.write(), result);
            if let SubmitOutcome::Saved(saved) = outcome {
                on_save.call(saved);
            }
        });
    };

    let current = form.read().clone();
    let save_disabled = !current.can_save();
    let show_error_banner = current.state() == FormState::Error;
    let error_banner = t(SAVE_FAILED_BANNER);
    let description = t(DIGESTS_DESCRIPTION);
    let save_label = t("Save Changes");

    rsx! {
        SettingsBox {
            title: t("Digests"),

            p { "{description}" }

            if show_error_banner {
                div {
                    class: "alert-error",
                    "{error_banner}"
                }
            }

            div {
                class: "range-row",
                for field in DigestField::ALL {
                    RangeField {
                        key: "{field.key()}",
                        name: field.key(),
                        label: t(field.label()),
                        help: t(field.help()),
                        range: field.range(),
                        value: current.field_value(field),
                        error: current.field_error(field).map(str::to_string),
                        on_change: move |value: u32| form.write().on_field_change(field, value),
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: save_disabled,
                    onclick: submit,
                    "{save_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{render, WithAppState};

    #[component]
    fn Harness(initial: DigestSettings) -> Element {
        rsx! {
            WithAppState {
                DigestSettingsForm {
                    project: ProjectRef::new("acme", "frontend"),
                    initial,
                    on_save: move |_: DigestSettings| {},
                }
            }
        }
    }

    #[test]
    fn renders_both_sliders_with_current_values() {
        let html = render(|| rsx! { Harness { initial: DigestSettings::new(120, 600) } });
        assert!(html.contains("Digests"), "{html}");
        assert!(html.contains("Minimum delivery frequency"), "{html}");
        assert!(html.contains("Maximum delivery frequency"), "{html}");
        assert!(html.contains("2 minutes"), "{html}");
        assert!(html.contains("10 minutes"), "{html}");
    }

    #[test]
    fn save_is_disabled_without_changes() {
        let html = render(|| rsx! { Harness { initial: DigestSettings::new(300, 3600) } });
        assert!(html.contains("Save Changes"), "{html}");
        assert!(html.contains("disabled"), "{html}");
        assert!(!html.contains("alert-error"), "{html}");
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let html = render(|| rsx! { Harness { initial: DigestSettings::default() } });
        assert!(html.contains("5 minutes"), "{html}");
        assert!(html.contains("60 minutes"), "{html}");
    }
}
