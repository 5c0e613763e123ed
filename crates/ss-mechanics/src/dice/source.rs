//! Random sources that dice are rolled against.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Die;

/// Something that can roll dice and make uniform picks.
pub trait DiceSource {
    /// Roll one die, returning a value in `1..=die.sides()`.
    fn roll(&mut self, die: Die) -> u32;

    /// Pick an index uniformly from `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: DiceSource + ?Sized> DiceSource for &mut T {
    fn roll(&mut self, die: Die) -> u32 {
        (**self).roll(die)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: DiceSource + ?Sized> DiceSource for Box<T> {
    fn roll(&mut self, die: Die) -> u32 {
        (**self).roll(die)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// A pseudorandom source seeded from a `u64`, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededDice {
    seed: u64,
    rng: StdRng,
}

impl SeededDice {
    /// Create a source from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source from a seed drawn from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for SeededDice {
    fn roll(&mut self, die: Die) -> u32 {
        let value = self.rng.random_range(1..=die.sides());
        tracing::trace!(%die, value, "rolled");
        value
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// A scripted source that replays fixed die values and picks, in order.
///
/// Both scripts wrap around when exhausted. Die values outside a die's range
/// are clamped into it. An empty die script rolls 1; an empty pick script
/// picks 0.
#[derive(Debug, Clone, Default)]
pub struct RiggedDice {
    rolls: Vec<u32>,
    next_roll: usize,
    picks: Vec<usize>,
    next_pick: usize,
}

impl RiggedDice {
    /// Script the die values to return.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Script the picks to return.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self.next_pick = 0;
        self
    }

    /// Number of die values consumed so far.
    pub fn rolls_consumed(&self) -> usize {
        self.next_roll
    }
}

impl DiceSource for RiggedDice {
    fn roll(&mut self, die: Die) -> u32 {
        let value = match self.rolls.len() {
            0 => 1,
            n => self.rolls[self.next_roll % n],
        };
        self.next_roll += 1;
        value.clamp(1, die.sides())
    }

    fn pick(&mut self, len: usize) -> usize {
        let value = match self.picks.len() {
            0 => 0,
            n => self.picks[self.next_pick % n],
        };
        self.next_pick += 1;
        value % len.max(1)
    }
}
