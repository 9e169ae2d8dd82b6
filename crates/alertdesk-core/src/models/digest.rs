//! Digest delivery settings

use serde::{Deserialize, Serialize};

use crate::range::StepRange;

/// Digest delay window, in seconds.
///
/// Used both as the committed project values and as the digest form's
/// working copy. Equality is field-wise, so two values compare equal
/// regardless of the order keys arrived in from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digests_min_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digests_max_delay: Option<u32>,
}

impl DigestSettings {
    pub const fn new(min_delay: u32, max_delay: u32) -> Self {
        Self {
            digests_min_delay: Some(min_delay),
            digests_max_delay: Some(max_delay),
        }
    }

    pub const fn get(&self, field: DigestField) -> Option<u32> {
        match field {
            DigestField::MinDelay => self.digests_min_delay,
            DigestField::MaxDelay => self.digests_max_delay,
        }
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: DigestField, value: u32) -> Self {
        match field {
            DigestField::MinDelay => self.digests_min_delay = Some(value),
            DigestField::MaxDelay => self.digests_max_delay = Some(value),
        }
        self
    }

    /// Fills fields missing from `self` with those of `fallback`.
    #[must_use]
    pub const fn or(self, fallback: &Self) -> Self {
        Self {
            digests_min_delay: match self.digests_min_delay {
                Some(value) => Some(value),
                None => fallback.digests_min_delay,
            },
            digests_max_delay: match self.digests_max_delay {
                Some(value) => Some(value),
                None => fallback.digests_max_delay,
            },
        }
    }
}

/// The two editable digest fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestField {
    MinDelay,
    MaxDelay,
}

impl DigestField {
    pub const ALL: [Self; 2] = [Self::MinDelay, Self::MaxDelay];

    /// Wire name, also used as the key in server field-error maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MinDelay => "digestsMinDelay",
            Self::MaxDelay => "digestsMaxDelay",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinDelay => "Minimum delivery frequency",
            Self::MaxDelay => "Maximum delivery frequency",
        }
    }

    pub const fn help(self) -> &'static str {
        match self {
            Self::MinDelay => "Notifications will be delivered at most this often.",
            Self::MaxDelay => "Notifications will be delivered at least this often.",
        }
    }

    /// Slider bounds for this field.
    pub const fn range(self) -> StepRange {
        match self {
            Self::MinDelay => StepRange::new(60, 3600, 60, 300),
            Self::MaxDelay => StepRange::new(60, 3600, 60, 3600),
        }
    }
}
