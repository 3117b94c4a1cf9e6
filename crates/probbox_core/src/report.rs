use crate::error::Rejection;

/// Aggregate outcome of a modify batch.
///
/// Pairs are never reported one by one: a caller that needs to know the fate
/// of a specific item queries the pool afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModifyReport {
    /// Pairs that changed the pool.
    pub applied: usize,
    /// Pairs that were valid but left the pool as it was.
    pub unchanged: usize,
    /// Pairs skipped because of a [`Rejection`].
    pub rejected: usize,
    /// Rejected pairs whose new entry could not be stored.
    pub storage_failures: usize,
}

impl ModifyReport {
    /// Number of pairs the batch went through.
    pub fn processed(&self) -> usize {
        self.applied + self.unchanged + self.rejected
    }

    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }

    pub(crate) fn reject(&mut self, rejection: &Rejection) {
        self.rejected += 1;
        if let Rejection::Storage(_) = rejection {
            self.storage_failures += 1;
        }
    }
}

impl std::ops::AddAssign for ModifyReport {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.unchanged += rhs.unchanged;
        self.rejected += rhs.rejected;
        self.storage_failures += rhs.storage_failures;
    }
}
