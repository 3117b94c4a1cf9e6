/// Ticket count of an entry, also the type of the pool total.
pub type Weight = i32;

/// An item stored in a pool together with its ticket count.
/// Entries held by a pool always have a positive weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Weighted<T> {
    pub weight: Weight,
    pub content: T,
}

impl<T> Weighted<T> {
    pub fn new(weight: Weight, content: T) -> Weighted<T> {
        Self { weight, content }
    }

    /// Half-open range of keys owned by this entry when it starts at `bottom`.
    pub fn span(&self, bottom: Weight) -> std::ops::Range<Weight> {
        bottom..bottom + self.weight
    }
}
