//! Transient progress and error indicators ("toasts").

use std::time::{Duration, Instant};

/// How long an error indicator stays visible.
pub const ERROR_DISPLAY: Duration = Duration::from_secs(4);

/// What an indicator communicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    /// Shown while a request is in flight; removed by its owner.
    Loading,
    /// Operation failure; expires after [`ERROR_DISPLAY`].
    Error,
}

/// Opaque handle returned by [`IndicatorStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub handle: IndicatorHandle,
    /// Untranslated message key.
    pub message: String,
    pub kind: IndicatorKind,
    pub shown_at: Instant,
}

impl Indicator {
    fn is_expired(&self, now: Instant) -> bool {
        self.kind == IndicatorKind::Error
            && now.saturating_duration_since(self.shown_at) >= ERROR_DISPLAY
    }
}

/// Ordered set of visible indicators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorStore {
    next_id: u64,
    items: Vec<Indicator>,
}

impl IndicatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>, kind: IndicatorKind) -> IndicatorHandle {
        let handle = IndicatorHandle(self.next_id);
        self.next_id += 1;
        self.items.push(Indicator {
            handle,
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
        handle
    }

    /// Removes an indicator. Unknown or already-removed handles are ignored.
    pub fn remove(&mut self, handle: IndicatorHandle) {
        self.items.retain(|item| item.handle != handle);
    }

    /// Drops error indicators shown at least [`ERROR_DISPLAY`] before `now`.
    /// Loading indicators are never expired. Returns how many were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_expired(now));
        before - self.items.len()
    }

    pub fn items(&self) -> &[Indicator] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
