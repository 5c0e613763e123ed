//! Session configuration.

use serde::{Deserialize, Serialize};

/// Knobs for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice seed. Drawn from entropy (and logged) when absent.
    pub seed: Option<u64>,
    /// Combat turn cap; reaching it ends the fight in a stalemate.
    pub max_turns: Option<u32>,
}

impl GameConfig {
    /// Fix the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap combat length. Zero is treated as one turn.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns.max(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_turns, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_seed(123).with_max_turns(40);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.max_turns, Some(40));
    }

    #[test]
    fn zero_turn_cap_clamped() {
        let cfg = GameConfig::default().with_max_turns(0);
        assert_eq!(cfg.max_turns, Some(1));
    }
}
