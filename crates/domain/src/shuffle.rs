use std::sync::atomic::{AtomicU64, Ordering};

const HASH_MODULUS: u64 = 1_000_000_007;

static GLOBAL_SEQUENCE: ShuffleSequence = ShuffleSequence::new(0);

/// Call counter mixed into every shuffle seed.
///
/// The process-wide instance is shared by all callers, so the order in which different users
/// request workouts influences the exercises each of them is offered.
#[derive(Debug, Default)]
pub struct ShuffleSequence(AtomicU64);

impl ShuffleSequence {
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self(AtomicU64::new(start))
    }

    #[must_use]
    pub fn global() -> &'static ShuffleSequence {
        &GLOBAL_SEQUENCE
    }

    /// Returns the current value and advances the counter by one.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[must_use]
pub fn identity_hash(identity: &[u8]) -> u64 {
    identity
        .iter()
        .fold(0, |hash, byte| (hash * 31 + u64::from(*byte)) % HASH_MODULUS)
}

/// Permutes `items` with a seed derived from `identity` and the next value of `sequence`.
pub fn shuffle<T: Clone>(items: &[T], identity: &[u8], sequence: &ShuffleSequence) -> Vec<T> {
    let seed = identity_hash(identity).wrapping_add(sequence.advance());
    permute(items, seed)
}

/// Swaps position `i - 1` with position `(seed + i - 1) mod i` for `i` from `len` down to 2.
///
/// The swap target depends on the loop index, so the resulting distribution is not uniform.
#[must_use]
pub fn permute<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut items = items.to_vec();
    for i in (2..=items.len()).rev() {
        let n = i as u64;
        #[allow(clippy::cast_possible_truncation)]
        let j = (seed.wrapping_add(n - 1) % n) as usize;
        items.swap(i - 1, j);
    }
    items
}
