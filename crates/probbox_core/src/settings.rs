use serde::{Deserialize, Serialize};

use crate::{error::SettingsError, policy::UpdatePolicy, weighted::Weight};

/// Behavior of a pool, fixed at construction.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct PoolSettings {
    pub policy: UpdatePolicy,

    /// Ceiling for the pool total. Changes that would push the total past it are rejected.
    pub capacity: Weight,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            policy: UpdatePolicy::default(),
            capacity: Weight::MAX,
        }
    }
}

impl PoolSettings {
    pub fn new(policy: UpdatePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: Weight) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parses settings written in ron, e.g. `(policy: Absolute, capacity: 1000)`.
    /// Missing fields take their default value.
    pub fn from_string(config_str: &str) -> Result<Self, SettingsError> {
        let settings: PoolSettings = ron::from_str(config_str)?;
        if settings.capacity < 0 {
            return Err(SettingsError::NegativeCapacity(settings.capacity));
        }
        tracing::trace!(target: "settings", "parsed {:?}", settings);
        Ok(settings)
    }

    pub fn view(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::default().compact_arrays(true);
        ron::ser::to_string_pretty(self, config)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        bincode::decode_from_slice(bytes, bincode::config::standard()).map(|(settings, _)| settings)
    }
}
