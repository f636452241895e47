//! Explicit random sources for the engine.
//!
//! The engine never reaches for ambient randomness. Seeded runs derive one
//! independent stream per attempt, which keeps the aggregation a pure,
//! order-independent reduction and makes replay exact. Harnesses that need
//! full control over every draw can supply a [`TapeRng`].

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Derive the random stream for one attempt.
///
/// With a seed, each attempt gets `seed + attempt_index` as its own stream,
/// so identical `(seed, index)` pairs replay identically and distinct
/// attempts stay uncorrelated regardless of execution order. Without a seed,
/// each attempt draws fresh OS entropy.
pub fn attempt_rng(seed: Option<u64>, attempt_index: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(attempt_index))),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Error carried by [`TapeRng::try_fill_bytes`] when the tape runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bounded random tape exhausted")]
pub struct TapeExhausted;

/// Bounded deterministic random stream over a fixed tape of words.
///
/// Each `next_u64` pops the next word; one word feeds exactly one Bernoulli
/// draw in the trial generator, so a tape scripts an attempt draw by draw.
/// Exhaustion is surfaced immediately, as an error from
/// [`RngCore::try_fill_bytes`] or a panic from the infallible methods, and
/// is never papered over with a substitute source.
#[derive(Debug, Clone)]
pub struct TapeRng {
    words: Vec<u64>,
    pos: usize,
}

impl TapeRng {
    /// A word that lands below any nonzero probability threshold: the node
    /// fails (severity draw) or the failure is compensated (adaptation draw).
    pub const HIT: u64 = 0;

    /// A word that lands above any sub-unit probability threshold.
    pub const MISS: u64 = u64::MAX;

    pub fn new(words: Vec<u64>) -> Self {
        Self { words, pos: 0 }
    }

    /// Words left on the tape.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }

    fn next_word(&mut self) -> Option<u64> {
        let word = self.words.get(self.pos).copied();
        if word.is_some() {
            self.pos += 1;
        }
        word
    }
}

impl RngCore for TapeRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word().expect("bounded random tape exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        let words_needed = (dest.len() + 7) / 8;
        if self.remaining() < words_needed {
            return Err(rand::Error::new(TapeExhausted));
        }
        self.fill_bytes(dest);
        Ok(())
    }
}
