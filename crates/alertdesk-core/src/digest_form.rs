//! Digest settings form state.
//!
//! The form keeps a working copy apart from the last committed values. A
//! submit moves `Ready|Error -> Saving`, and the response moves it back to
//! `Ready` (committing the server's values) or to `Error` (keeping the
//! working copy and recording per-field messages).
//!
//! [`DigestSave`] wraps one submit together with the "Saving changes.."
//! indicator it owns.

use crate::api::{ApiError, FieldErrors, ProjectApi};
use crate::indicator::{IndicatorHandle, IndicatorKind, IndicatorStore};
use crate::models::{DigestField, DigestSettings, ProjectRef};

pub const SAVING_MESSAGE: &str = "Saving changes..";
pub const SAVE_FAILED_BANNER: &str =
    "Unable to save your changes. Please ensure all fields are valid and try again.";
pub const DIGESTS_DESCRIPTION: &str = "Alerts sent by some services are automatically \
     digested to avoid flooding your inbox with individual issue notifications. To control how \
     frequently notifications are delivered, use the sliders below.";

/// Request lifecycle of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Ready,
    Saving,
    Error,
}

/// Result of a finished submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted the change; carries the values it confirmed.
    Saved(DigestSettings),
    /// Server (or transport) rejected the change.
    Rejected(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestForm {
    committed: DigestSettings,
    working: DigestSettings,
    state: FormState,
    errors: FieldErrors,
    /// Payload of the save in flight.
    pending: Option<DigestSettings>,
}

impl DigestForm {
    pub fn new(initial: DigestSettings) -> Self {
        Self {
            committed: initial,
            working: initial,
            state: FormState::Ready,
            errors: FieldErrors::default(),
            pending: None,
        }
    }

    pub const fn working(&self) -> &DigestSettings {
        &self.working
    }

    pub const fn committed(&self) -> &DigestSettings {
        &self.committed
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.state == FormState::Saving
    }

    /// Whether the working copy differs from the last committed values.
    pub fn has_changes(&self) -> bool {
        self.working != self.committed
    }

    /// Save is offered only with pending changes and no save in flight.
    pub fn can_save(&self) -> bool {
        !self.is_saving() && self.has_changes()
    }

    /// Slider position for `field`, using the field default when unset.
    pub fn field_value(&self, field: DigestField) -> u32 {
        field.range().value_or_default(self.working.get(field))
    }

    pub fn field_error(&self, field: DigestField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Replaces one key of the working copy. Values are snapped into the
    /// field's range.
    pub fn on_field_change(&mut self, field: DigestField, value: u32) {
        let value = field.range().snap(i64::from(value));
        self.working = self.working.with(field, value);
    }

    /// Starts a save and returns the payload to send, or `None` when a save
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<DigestSettings> {
        if self.is_saving() {
            tracing::debug!("Ignoring digest submit while a save is in flight");
            return None;
        }
        self.state = FormState::Saving;
        self.pending = Some(self.working);
        Some(self.working)
    }

    /// Starts a save and shows the progress indicator for it.
    pub fn start_save(
        &mut self,
        project: &ProjectRef,
        indicators: &mut IndicatorStore,
    ) -> Option<DigestSave> {
        let payload = self.begin_submit()?;
        let indicator = indicators.add(SAVING_MESSAGE, IndicatorKind::Loading);
        Some(DigestSave {
            project: project.clone(),
            payload,
            indicator,
        })
    }

    /// Applies the response to an in-flight save. Fields the server did not
    /// echo back keep the submitted values.
    pub fn finish_submit(&mut self, result: Result<DigestSettings, ApiError>) -> SubmitOutcome {
        let sent = self.pending.take().unwrap_or(self.working);
        match result {
            Ok(saved) => {
                let saved = saved.or(&sent);
                tracing::info!("Digest settings saved");
                self.committed = saved;
                self.working = saved;
                self.state = FormState::Ready;
                self.errors = FieldErrors::default();
                SubmitOutcome::Saved(saved)
            }
            Err(error) => {
                tracing::warn!("Failed to save digest settings: {}", error);
                self.state = FormState::Error;
                self.errors = error.field_errors();
                SubmitOutcome::Rejected(error)
            }
        }
    }
}

/// One digest save in flight.
#[derive(Debug)]
pub struct DigestSave {
    project: ProjectRef,
    payload: DigestSettings,
    indicator: IndicatorHandle,
}

impl DigestSave {
    pub const fn payload(&self) -> &DigestSettings {
        &self.payload
    }

    /// Sends the payload. Holds no borrow of the form or the indicators.
    pub async fn send(&self, api: &ProjectApi) -> Result<DigestSettings, ApiError> {
        api.save_digests(&self.project, &self.payload).await
    }

    /// Removes the progress indicator and settles the form.
    pub fn finish(
        self,
        form: &mut DigestForm,
        indicators: &mut IndicatorStore,
        result: Result<DigestSettings, ApiError>,
    ) -> SubmitOutcome {
        indicators.remove(self.indicator);
        form.finish_submit(result)
    }
}

/// Runs a whole save: indicator, request, form update. Returns `None` when a
/// save was already in flight.
pub async fn save_digest_form(
    api: &ProjectApi,
    project: &ProjectRef,
    form: &mut DigestForm,
    indicators: &mut IndicatorStore,
) -> Option<SubmitOutcome> {
    let save = form.start_save(project, indicators)?;
    let result = save.send(api).await;
    Some(save.finish(form, indicators, result))
}
