pub use crate::{
    error::{DrawError, Rejection, SettingsError},
    policy::UpdatePolicy,
    pool::WeightedPool,
    report::ModifyReport,
    settings::PoolSettings,
    weighted::{Weight, Weighted},
};
