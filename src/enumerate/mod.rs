pub mod composer;
pub mod odometer;

pub use composer::{compose, write_candidates, Candidates};
pub use odometer::Odometer;

use num_bigint::BigUint;

use crate::chunk::ChunkSequence;

/// Total combination count: the product of all chunk sizes, computed without
/// enumerating.
///
/// The result is arbitrary precision, so large dictionaries (tens of chunks
/// times tens of thousands of fragments) cannot silently wrap. A sequence
/// with no chunks has no combinations and sizes to zero, matching what the
/// odometer produces for it.
pub fn cardinality(sequence: &ChunkSequence) -> BigUint {
    if sequence.is_empty() {
        return BigUint::from(0u32);
    }
    sequence.sizes().into_iter().map(BigUint::from).product()
}
