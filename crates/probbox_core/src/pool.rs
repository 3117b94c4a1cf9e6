use std::{borrow::Borrow, fmt};

use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::prelude::*;

/// A set of distinct items, each holding a number of tickets.
///
/// Drawing maps a key in `[0, total)` onto the entries laid out back to back
/// in insertion order, so an entry is picked with probability
/// `weight / total`. The total is kept as a running sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedPool<T> {
    entries: Vec<Weighted<T>>,
    total: Weight,
    settings: PoolSettings,
}

/// What a single accepted change did to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Change {
    Unchanged,
    Inserted,
    Updated,
    Removed,
}

impl<T: Clone + PartialEq> Default for WeightedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> WeightedPool<T> {
    pub fn new() -> Self {
        Self::with_settings(PoolSettings::default())
    }

    pub fn with_policy(policy: UpdatePolicy) -> Self {
        Self::with_settings(PoolSettings::new(policy))
    }

    /// A negative capacity is treated as 0, leaving a pool that rejects every insert.
    pub fn with_settings(mut settings: PoolSettings) -> Self {
        settings.capacity = settings.capacity.max(0);
        Self {
            entries: Vec::new(),
            total: 0,
            settings,
        }
    }

    /// Draws an item without removing it.
    ///
    /// `key` selects the ticket `key % total`. With `None` the key comes from
    /// the thread local generator.
    pub fn draw(&self, key: Option<i64>) -> Result<&T, DrawError> {
        if self.total <= 0 {
            return Err(DrawError::EmptyPool);
        }
        let key = match key {
            Some(key) if key < 0 => return Err(DrawError::InvalidKey(key)),
            Some(key) => key,
            None => rand::thread_rng().gen_range(0..i64::from(self.total)),
        };
        self.find_by_key(key)
    }

    /// Draws an item with a key taken from `rng`, seeded generators give repeatable draws.
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, DrawError> {
        if self.total <= 0 {
            return Err(DrawError::EmptyPool);
        }
        self.find_by_key(rng.gen_range(0..i64::from(self.total)))
    }

    fn find_by_key(&self, key: i64) -> Result<&T, DrawError> {
        let ticket = (key % i64::from(self.total)) as Weight;
        let mut top = 0;
        for entry in self.entries.iter() {
            let span = entry.span(top);
            top = span.end;
            if span.contains(&ticket) {
                trace!(target: "pool", "key {} -> ticket {} in {:?}", key, ticket, span);
                return Ok(&entry.content);
            }
        }
        Err(DrawError::Unmapped(key))
    }

    /// Applies a batch of `(item, value)` pairs in iteration order.
    ///
    /// The value is a delta or a new weight depending on the pool policy.
    /// A rejected pair leaves the pool untouched and the batch goes on,
    /// rejections only show up as counts in the returned report.
    ///
    /// Accepts owned pairs as well as borrowed maps:
    /// ```
    /// use std::collections::BTreeMap;
    /// use probbox_core::prelude::*;
    ///
    /// let mut pool: WeightedPool<&str> = WeightedPool::new();
    /// pool.modify([("gold", 10), ("silver", 5)]);
    ///
    /// let changes = BTreeMap::from([("gold", -10), ("iron", 2)]);
    /// let report = pool.modify(&changes);
    /// assert_eq!(report.applied, 2);
    /// assert_eq!(pool.total_weight(), 7);
    /// assert_eq!(pool.weight_of(&"gold"), 0);
    /// ```
    pub fn modify<I, Q, W>(&mut self, changes: I) -> ModifyReport
    where
        I: IntoIterator<Item = (Q, W)>,
        Q: Borrow<T>,
        W: Borrow<Weight>,
    {
        let mut report = ModifyReport::default();
        for (index, (item, value)) in changes.into_iter().enumerate() {
            let value = *value.borrow();
            let result = match self.settings.policy {
                UpdatePolicy::Absolute => self.set_weight(item.borrow(), value),
                UpdatePolicy::Relative => self.add_weight(item.borrow(), value),
            };
            match result {
                Ok(Change::Unchanged) => report.unchanged += 1,
                Ok(change) => {
                    trace!(target: "pool", "change #{}: {:?}, total {}", index, change, self.total);
                    report.applied += 1;
                }
                Err(rejection) => {
                    debug!(target: "pool", "change #{} rejected: {}", index, rejection);
                    report.reject(&rejection);
                }
            }
        }
        report
    }

    /// Parallel array form of [`WeightedPool::modify`]: `values[i]` applies to `items[i]`.
    pub fn modify_slices(&mut self, items: &[T], values: &[Weight]) -> ModifyReport {
        if items.len() != values.len() {
            warn!(
                target: "pool",
                "{} items for {} values, applying the first {}",
                items.len(),
                values.len(),
                items.len().min(values.len())
            );
        }
        self.modify(items.iter().zip(values))
    }

    /// Relative update: `delta` tickets are added to (or taken from) `item`.
    fn add_weight(&mut self, item: &T, delta: Weight) -> Result<Change, Rejection> {
        if delta == 0 {
            return Ok(Change::Unchanged);
        }
        let total = self.checked_total(0, delta)?;
        let change = match self.position(item) {
            Some(index) => {
                let current = self.entries[index].weight;
                match current + delta {
                    weight if weight < 0 => {
                        return Err(Rejection::Underflow { current, delta });
                    }
                    0 => {
                        self.entries.remove(index);
                        Change::Removed
                    }
                    weight => {
                        self.entries[index].weight = weight;
                        Change::Updated
                    }
                }
            }
            None if delta < 0 => return Err(Rejection::Underflow { current: 0, delta }),
            None => {
                self.insert(item, delta)?;
                Change::Inserted
            }
        };
        self.total = total;
        Ok(change)
    }

    /// Absolute update: `item` ends up holding exactly `weight` tickets.
    fn set_weight(&mut self, item: &T, weight: Weight) -> Result<Change, Rejection> {
        if weight < 0 {
            return Err(Rejection::NegativeWeight(weight));
        }
        let position = self.position(item);
        let current = position.map_or(0, |index| self.entries[index].weight);
        if weight == current {
            return Ok(Change::Unchanged);
        }
        let total = self.checked_total(current, weight)?;
        let change = match position {
            Some(index) if weight == 0 => {
                self.entries.remove(index);
                Change::Removed
            }
            Some(index) => {
                self.entries[index].weight = weight;
                Change::Updated
            }
            None => {
                self.insert(item, weight)?;
                Change::Inserted
            }
        };
        self.total = total;
        Ok(change)
    }

    /// Total after swapping `removed` tickets for `added` ones, if it fits the capacity.
    fn checked_total(&self, removed: Weight, added: Weight) -> Result<Weight, Rejection> {
        (self.total - removed)
            .checked_add(added)
            .filter(|total| *total <= self.settings.capacity)
            .ok_or(Rejection::CapacityExceeded {
                total: self.total,
                change: added - removed,
                capacity: self.settings.capacity,
            })
    }

    /// Either the entry is stored or nothing changes.
    fn insert(&mut self, item: &T, weight: Weight) -> Result<(), Rejection> {
        if let Err(err) = self.entries.try_reserve(1) {
            warn!(target: "pool", "could not store a new entry: {}", err);
            return Err(err.into());
        }
        self.entries.push(Weighted::new(weight, item.clone()));
        Ok(())
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|entry| entry.content == *item)
    }

    /// Empties the pool and releases its storage.
    pub fn clear(&mut self) {
        trace!(target: "pool", "clear {} entries", self.entries.len());
        self.entries = Vec::new();
        self.total = 0;
    }

    pub fn total_weight(&self) -> Weight {
        self.total
    }

    /// Tickets held by `item`, 0 when absent.
    pub fn weight_of(&self, item: &T) -> Weight {
        self.position(item).map_or(0, |index| self.entries[index].weight)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Read only view of the entries, in insertion order.
    pub fn entries(&self) -> &[Weighted<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weighted<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logs the content of the pool, one `info` event per line.
    pub fn dump(&self) {
        for line in self.to_string().lines() {
            info!(target: "pool", "{}", line);
        }
    }
}

impl<T> WeightedPool<T> {
    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.settings.policy
    }

    pub fn capacity(&self) -> Weight {
        self.settings.capacity
    }

    pub fn version(&self) -> u32 {
        self.settings.policy.version()
    }
}

/// Item values are left out, only positions and weights are shown.
impl<T> fmt::Display for WeightedPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total weight {}", self.total)?;
        writeln!(f, "capacity {}", self.settings.capacity)?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "entry {}, weight {}", index + 1, entry.weight)?;
        }
        Ok(())
    }
}

impl<T, Q, W> Extend<(Q, W)> for WeightedPool<T>
where
    T: Clone + PartialEq,
    Q: Borrow<T>,
    W: Borrow<Weight>,
{
    fn extend<I: IntoIterator<Item = (Q, W)>>(&mut self, iter: I) {
        self.modify(iter);
    }
}
