/// How a change value is applied to the entry it targets.
/// Each policy reports its own behavioral version, see [`UpdatePolicy::version`].
#[derive(
    Copy,
    Default,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
pub enum UpdatePolicy {
    /// The value replaces the current weight, 0 deletes the entry.
    /// Negative values are rejected.
    Absolute,
    /// The value is added to the current weight. Taking more tickets than
    /// an entry holds is rejected, reaching exactly 0 deletes the entry.
    #[default]
    Relative,
}

impl UpdatePolicy {
    pub const RELATIVE_VERSION: u32 = 1;
    pub const ABSOLUTE_VERSION: u32 = 2;

    pub const fn version(&self) -> u32 {
        match self {
            UpdatePolicy::Absolute => Self::ABSOLUTE_VERSION,
            UpdatePolicy::Relative => Self::RELATIVE_VERSION,
        }
    }

    pub fn from_version(version: u32) -> Option<Self> {
        match version {
            Self::ABSOLUTE_VERSION => Some(UpdatePolicy::Absolute),
            Self::RELATIVE_VERSION => Some(UpdatePolicy::Relative),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test_policy {
    use super::*;

    #[test]
    fn versions_are_distinct() {
        assert_eq!(UpdatePolicy::Relative.version(), 1);
        assert_eq!(UpdatePolicy::Absolute.version(), 2);
        assert_eq!(UpdatePolicy::default(), UpdatePolicy::Relative);
    }

    #[test]
    fn version_lookup() {
        for policy in [UpdatePolicy::Absolute, UpdatePolicy::Relative] {
            assert_eq!(UpdatePolicy::from_version(policy.version()), Some(policy));
        }
        assert_eq!(UpdatePolicy::from_version(0), None);
    }
}
