//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).min().unwrap_or(0)
    }

    /// Sum of all dice except one lowest die. Ties drop a single die only.
    pub fn total_drop_lowest(&self) -> u32 {
        self.total() - self.lowest()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult { die: Die::D6, value })
                .collect(),
        }
    }

    #[test]
    fn total() {
        assert_eq!(make_result(&[5, 3]).total(), 8);
    }

    #[test]
    fn lowest() {
        let r = make_result(&[3, 6, 1]);
        assert_eq!(r.lowest(), 1);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.total_drop_lowest(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn drop_lowest_discards_only_one_tie() {
        assert_eq!(make_result(&[2, 2, 5, 6]).total_drop_lowest(), 13);
        assert_eq!(make_result(&[1, 1, 1, 1]).total_drop_lowest(), 3);
        assert_eq!(make_result(&[6, 6, 6, 6]).total_drop_lowest(), 18);
    }

    #[test]
    fn display() {
        assert_eq!(make_result(&[3, 5]).to_string(), "[3, 5] = 8");
    }
}
