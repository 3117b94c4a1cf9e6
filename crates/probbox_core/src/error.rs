use std::collections::TryReserveError;

use ron::de::SpannedError;

use crate::weighted::Weight;

/// Why a draw produced no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("the pool holds no tickets")]
    EmptyPool,

    #[error("random key {0} is negative")]
    InvalidKey(i64),

    /// The key fell outside every entry. Only reachable if the total drifted
    /// from the sum of the entries.
    #[error("random key {0} is not covered by any entry")]
    Unmapped(i64),
}

/// Why a single change pair was skipped by a modify batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("total {total} changed by {change} exceeds the capacity {capacity}")]
    CapacityExceeded {
        total: Weight,
        change: Weight,
        capacity: Weight,
    },

    #[error("cannot apply {delta} to an entry holding {current} tickets")]
    Underflow { current: Weight, delta: Weight },

    #[error("absolute weight {0} is negative")]
    NegativeWeight(Weight),

    #[error("failed to store a new entry: {0}")]
    Storage(#[from] TryReserveError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] SpannedError),

    #[error("capacity {0} is negative")]
    NegativeCapacity(Weight),
}
