//! Weighted random selection
//!
//! A [`WeightedPool`](pool::WeightedPool) holds distinct items with a ticket count each
//! and draws one of them with probability proportional to its tickets.
//! Ticket counts are changed in batches, either as deltas or as absolute
//! weights depending on the [`UpdatePolicy`](policy::UpdatePolicy) of the pool.

pub mod prelude;

pub mod error;
pub mod policy;
pub mod pool;
pub mod report;
pub mod settings;
pub mod weighted;

#[cfg(test)]
mod test;
