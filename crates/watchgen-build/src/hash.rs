//! Executable model of the synthesized hash routine.
//!
//! The emitted routine folds per-field hash codes into a fixed-width
//! accumulator under wraparound arithmetic. These definitions are the
//! single source for the seed and multiplier written into the generated
//! text, and give the tests something to execute.

/// Accumulator seed of the synthesized routine.
pub const HASH_SEED: i32 = 17;

/// Per-field fold multiplier of the synthesized routine.
pub const HASH_MULTIPLIER: i32 = 23;

/// Left-to-right wraparound fold over per-field contributions.
///
/// An empty contribution list folds to the bare seed, so a class whose
/// eligible fields all dropped out hashes to a constant.
#[must_use]
pub fn fold_hash<I>(contributions: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    contributions.into_iter().fold(HASH_SEED, |hash, contribution| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(contribution)
    })
}

/// Contribution of a reference-category field: `0` when the reference is
/// absent, the referenced value's hash code otherwise.
#[must_use]
pub const fn reference_contribution(hash: Option<i32>) -> i32 {
    match hash {
        Some(hash) => hash,
        None => 0,
    }
}

///
/// ChangeTracker
///
/// Stored-hash state with the synthesized check-then-store contract:
/// report a change exactly when the incoming hash differs from the last
/// observed one, and only then store it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ChangeTracker {
    last_hash: i32,
}

impl ChangeTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_hash: 0 }
    }

    pub fn has_changed(&mut self, current_hash: i32) -> bool {
        if self.last_hash == current_hash {
            return false;
        }

        self.last_hash = current_hash;
        true
    }
}
