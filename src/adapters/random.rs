//! Random byte sources
//!
//! - `SystemRandom`: operating-system entropy, the production source
//! - `SeededRandom`: reproducible ChaCha-based stream for benches and tests
//! - `ScriptedRandom`: hands out pre-queued byte strings verbatim, used to
//!   pin nonces for known-answer tests

use std::collections::VecDeque;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::adapters::errors::{RandomResult, RandomSourceError};
use crate::adapters::traits::RandomSource;

/// Operating-system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomSourceError::Unavailable(e.to_string()))
    }
}

/// Deterministic stream seeded from a `u64`. Not for production keys.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| RandomSourceError::Unavailable(e.to_string()))
    }
}

/// Returns queued byte strings in order, one per draw.
///
/// Each queued string must match the requested length exactly. Drawing
/// past the end of the queue fails with `Exhausted`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    queue: VecDeque<Vec<u8>>,
}

impl ScriptedRandom {
    pub fn new<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self {
            queue: chunks.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of draws still queued
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        let chunk = self
            .queue
            .pop_front()
            .ok_or(RandomSourceError::Exhausted { requested: dest.len() })?;
        if chunk.len() != dest.len() {
            return Err(RandomSourceError::LengthMismatch {
                expected: dest.len(),
                got: chunk.len(),
            });
        }
        dest.copy_from_slice(&chunk);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_fills_buffer() {
        let mut a = [0u8; 40];
        let mut b = [0u8; 40];
        SystemRandom.fill_bytes(&mut a).unwrap();
        SystemRandom.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b, "Two 320-bit OS draws should differ");
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        SeededRandom::new(7).fill_bytes(&mut a).unwrap();
        SeededRandom::new(7).fill_bytes(&mut b).unwrap();
        assert_eq!(a, b);

        let mut c = [0u8; 32];
        SeededRandom::new(8).fill_bytes(&mut c).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_scripted_random_replays_in_order() {
        let mut rng = ScriptedRandom::new([vec![1u8, 2], vec![3, 4]]);
        let mut buf = [0u8; 2];
        rng.fill_bytes(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        rng.fill_bytes(&mut buf).unwrap();
        assert_eq!(buf, [3, 4]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_random_exhausted() {
        let mut rng = ScriptedRandom::default();
        let mut buf = [0u8; 4];
        let err = rng.fill_bytes(&mut buf).unwrap_err();
        assert_eq!(err, RandomSourceError::Exhausted { requested: 4 });
    }

    #[test]
    fn test_scripted_random_length_mismatch() {
        let mut rng = ScriptedRandom::new([vec![0u8; 3]]);
        let mut buf = [0u8; 4];
        let err = rng.fill_bytes(&mut buf).unwrap_err();
        assert_eq!(err, RandomSourceError::LengthMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn test_random_source_through_mut_ref() {
        fn draw<R: RandomSource>(mut rng: R) -> [u8; 1] {
            let mut buf = [0u8; 1];
            rng.fill_bytes(&mut buf).unwrap();
            buf
        }
        let mut rng = ScriptedRandom::new([vec![9u8]]);
        assert_eq!(draw(&mut rng), [9]);
    }
}
