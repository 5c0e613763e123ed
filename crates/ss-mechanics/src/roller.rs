//! Ability score generation: 4d6, drop the lowest.

use ss_core::{Ability, AbilityScores};

use crate::dice::{DicePool, DiceSource, Die};

/// Roll one ability score: four d6, discard one lowest, sum the rest.
pub fn roll_ability_score(dice: &mut impl DiceSource) -> i32 {
    let roll = DicePool::new().add(Die::D6, 4).roll(dice);
    let score = roll.total_drop_lowest() as i32;
    tracing::trace!(%roll, score, "rolled ability score");
    score
}

/// Roll a fresh set of all six ability scores.
pub fn roll_ability_scores(dice: &mut impl DiceSource) -> AbilityScores {
    let scores = AbilityScores::from_fn(|_: Ability| roll_ability_score(dice));
    tracing::debug!(?scores, "rolled ability scores");
    scores
}
