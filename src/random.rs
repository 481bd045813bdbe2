//! Injectable randomness for the generator.
//!
//! Production uses a `StdRng` (seeded from config or entropy); tests may use
//! `ScriptedSource` to pin every draw.

#[cfg(test)]
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
  /// Uniform index in `0..len`. Callers never pass `len == 0`.
  fn pick_index(&mut self, len: usize) -> usize;

  /// Fisher-Yates shuffle in place, drawing through `pick_index`.
  fn shuffle<T>(&mut self, items: &mut [T]) {
    for i in (1..items.len()).rev() {
      let j = self.pick_index(i + 1);
      items.swap(i, j);
    }
  }
}

impl RandomSource for StdRng {
  fn pick_index(&mut self, len: usize) -> usize {
    self.gen_range(0..len)
  }
}

/// `StdRng` from a fixed seed, or from OS entropy when no seed is configured.
pub fn std_source(seed: Option<u64>) -> StdRng {
  match seed {
    Some(s) => StdRng::seed_from_u64(s),
    None => StdRng::from_entropy(),
  }
}

/// Replays a fixed sequence of draws, each reduced modulo `len`.
/// Once exhausted it keeps returning 0.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
  draws: VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
  pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
    Self { draws: draws.into_iter().collect() }
  }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
  fn pick_index(&mut self, len: usize) -> usize {
    self.draws.pop_front().map(|d| d % len).unwrap_or(0)
  }
}
