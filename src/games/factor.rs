//! Factor subtraction.
//!
//! A position is a current value and a floor threshold. A move subtracts a
//! proper factor `f` of the value, but only when `value - f >= threshold`:
//! factors that would drop below the floor are illegal, not merely
//! filtered out of the oracle. A player facing a value at or below the
//! threshold has no move and has lost.
//!
//! The oracle is a bottom-up dynamic-programming table over
//! `threshold..=max_value`, built once at rule-set construction:
//! `winning[v]` holds iff some legal factor `f` has `winning[v - f]` false.
//! Values outside the precomputed range (or positions carrying a different
//! threshold) are answered by memoized recursion over the same recurrence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameError, GameRng};
use crate::rules::{Oracle, Ruleset, Setup};

/// Current value plus the floor it may not drop below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorPosition {
    /// The number factors are subtracted from.
    pub value: u32,
    /// Moves may not take the value below this floor.
    pub threshold: u32,
}

impl FactorPosition {
    #[must_use]
    pub const fn new(value: u32, threshold: u32) -> Self {
        Self { value, threshold }
    }
}

/// Subtract this proper factor of the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorMove {
    pub factor: u32,
}

/// Proper factors of `value` (divisors strictly less than it), ascending.
#[must_use]
pub fn proper_factors(value: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    for f in 1..=value / 2 {
        if value % f == 0 {
            factors.push(f);
        }
    }
    factors
}

/// Rule set and precomputed oracle for factor subtraction.
///
/// The threshold is fixed per rule set; every position it constructs carries
/// the same floor. Positions handed in with a different floor are still
/// classified correctly via the recursive path.
#[derive(Clone, Debug)]
pub struct FactorSubtraction {
    threshold: u32,
    /// `table[i]` classifies value `threshold + i`.
    table: Vec<bool>,
}

impl FactorSubtraction {
    /// Build the rule set and its bottom-up table for
    /// `threshold..=max_value`.
    #[must_use]
    pub fn new(threshold: u32, max_value: u32) -> Self {
        assert!(
            max_value > threshold,
            "table must cover at least one playable value"
        );

        let mut table = vec![false; (max_value - threshold + 1) as usize];
        for v in threshold..=max_value {
            let winning = legal_factors(v, threshold)
                .into_iter()
                .any(|f| !table[(v - f - threshold) as usize]);
            table[(v - threshold) as usize] = winning;
        }

        Self { threshold, table }
    }

    /// The floor this rule set plays with.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Table lookup when the position matches the precomputed range.
    fn table_lookup(&self, position: &FactorPosition) -> Option<bool> {
        if position.threshold != self.threshold || position.value < self.threshold {
            return None;
        }
        self.table
            .get((position.value - self.threshold) as usize)
            .copied()
    }

    /// Memoized recursion with the same recurrence as the table.
    fn solve_recursive(&self, value: u32, threshold: u32, memo: &mut FxHashMap<u32, bool>) -> bool {
        if let Some(&known) = memo.get(&value) {
            return known;
        }
        let winning = legal_factors(value, threshold)
            .into_iter()
            .any(|f| !self.solve_recursive(value - f, threshold, memo));
        memo.insert(value, winning);
        winning
    }
}

impl Default for FactorSubtraction {
    fn default() -> Self {
        Self::new(10, 96)
    }
}

/// Proper factors of `value` that keep `value - f` at or above `threshold`.
fn legal_factors(value: u32, threshold: u32) -> Vec<u32> {
    proper_factors(value)
        .into_iter()
        .filter(|&f| value - f >= threshold)
        .collect()
}

impl Ruleset for FactorSubtraction {
    type Position = FactorPosition;
    type Move = FactorMove;

    fn legal_moves(&self, position: &FactorPosition) -> Vec<FactorMove> {
        legal_factors(position.value, position.threshold)
            .into_iter()
            .map(|factor| FactorMove { factor })
            .collect()
    }

    fn apply(
        &self,
        position: &FactorPosition,
        mv: &FactorMove,
    ) -> Result<FactorPosition, GameError> {
        let f = mv.factor;
        if f == 0 || f >= position.value || position.value % f != 0 {
            return Err(GameError::InvalidMove(format!(
                "{} is not a proper factor of {}",
                f, position.value
            )));
        }
        if position.value - f < position.threshold {
            return Err(GameError::InvalidMove(format!(
                "subtracting {} drops {} below the threshold {}",
                f, position.value, position.threshold
            )));
        }
        Ok(FactorPosition::new(position.value - f, position.threshold))
    }

    fn is_terminal(&self, position: &FactorPosition) -> bool {
        // 1 has no proper factor; any larger value has f = 1, legal exactly
        // when it stays at or above the floor.
        position.value <= 1 || position.value - 1 < position.threshold
    }

    fn reduction(&self, _position: &FactorPosition, mv: &FactorMove) -> u32 {
        mv.factor
    }
}

impl Oracle for FactorSubtraction {
    fn is_winning(&self, position: &FactorPosition) -> bool {
        if let Some(winning) = self.table_lookup(position) {
            return winning;
        }
        let mut memo = FxHashMap::default();
        self.solve_recursive(position.value, position.threshold, &mut memo)
    }
}

impl Setup for FactorSubtraction {
    fn random_position(&self, difficulty: Difficulty, rng: &mut GameRng) -> FactorPosition {
        // Spans sit above the floor so a fresh position always has at least
        // the factor 1 available.
        let (lo, hi) = match difficulty {
            Difficulty::Easy => (5, 14),
            Difficulty::Medium => (14, 26),
            Difficulty::Hard => (26, 44),
            Difficulty::Insane => (44, 80),
        };
        let max_span = (self.table.len() - 1) as u32;
        let lo = lo.min(max_span).max(1);
        let hi = hi.min(max_span).max(lo);
        let value = self.threshold + rng.gen_range_u32(lo..=hi);
        FactorPosition::new(value, self.threshold)
    }

    fn fallback_position(&self) -> FactorPosition {
        // Largest precomputed winning value. threshold + 1 is always winning
        // (subtract 1, leaving the opponent on the floor), so this exists.
        let span = (1..self.table.len())
            .rev()
            .find(|&i| self.table[i])
            .unwrap_or(1);
        FactorPosition::new(self.threshold + span as u32, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_factors() {
        assert_eq!(proper_factors(30), vec![1, 2, 3, 5, 6, 10, 15]);
        assert_eq!(proper_factors(7), vec![1]);
        assert_eq!(proper_factors(1), Vec::<u32>::new());
    }

    #[test]
    fn test_legal_moves_respect_threshold() {
        // Worked example: value 30, threshold 10. Every proper factor keeps
        // the value at or above 10, so all seven qualify.
        let rules = FactorSubtraction::new(10, 96);
        let moves = rules.legal_moves(&FactorPosition::new(30, 10));
        let factors: Vec<u32> = moves.iter().map(|m| m.factor).collect();
        assert_eq!(factors, vec![1, 2, 3, 5, 6, 10, 15]);

        // Value 12, threshold 10: only factors <= 2 keep the floor.
        let moves = rules.legal_moves(&FactorPosition::new(12, 10));
        let factors: Vec<u32> = moves.iter().map(|m| m.factor).collect();
        assert_eq!(factors, vec![1, 2]);
    }

    #[test]
    fn test_terminal_at_floor() {
        let rules = FactorSubtraction::new(10, 96);
        assert!(rules.is_terminal(&FactorPosition::new(10, 10)));
        assert!(!rules.is_terminal(&FactorPosition::new(11, 10)));
        assert!(rules.is_terminal(&FactorPosition::new(1, 0)));
        assert!(rules.legal_moves(&FactorPosition::new(10, 10)).is_empty());
    }

    #[test]
    fn test_apply_rejects_non_factor_and_floor_violations() {
        let rules = FactorSubtraction::new(10, 96);
        let position = FactorPosition::new(30, 10);

        assert!(matches!(
            rules.apply(&position, &FactorMove { factor: 7 }),
            Err(GameError::InvalidMove(_))
        ));
        assert!(matches!(
            rules.apply(&position, &FactorMove { factor: 30 }),
            Err(GameError::InvalidMove(_))
        ));
        // 9 divides 18 but 18 - 9 = 9 falls below the floor of 10.
        assert!(matches!(
            rules.apply(&FactorPosition::new(18, 10), &FactorMove { factor: 9 }),
            Err(GameError::InvalidMove(_))
        ));
        assert!(rules
            .apply(&FactorPosition::new(20, 10), &FactorMove { factor: 10 })
            .is_ok());
    }

    #[test]
    fn test_known_outcomes() {
        // Hand-derived for threshold 10: 10 loses (terminal), 11 wins,
        // 13 loses (only reply is the winning 12), 16 loses, 30 wins.
        let rules = FactorSubtraction::new(10, 96);
        assert!(!rules.is_winning(&FactorPosition::new(10, 10)));
        assert!(rules.is_winning(&FactorPosition::new(11, 10)));
        assert!(!rules.is_winning(&FactorPosition::new(13, 10)));
        assert!(!rules.is_winning(&FactorPosition::new(16, 10)));
        assert!(rules.is_winning(&FactorPosition::new(30, 10)));
    }

    #[test]
    fn test_table_matches_recursion() {
        // The bottom-up table and the unbounded recursion implement the same
        // recurrence; they must agree on every precomputed value.
        let rules = FactorSubtraction::new(10, 96);
        for value in 10..=96 {
            let mut memo = FxHashMap::default();
            assert_eq!(
                rules.is_winning(&FactorPosition::new(value, 10)),
                rules.solve_recursive(value, 10, &mut memo),
                "value {}",
                value
            );
        }
    }

    #[test]
    fn test_out_of_range_positions_still_classified() {
        let rules = FactorSubtraction::new(10, 32);

        // Beyond the table: recursive path.
        let beyond = FactorPosition::new(60, 10);
        let reference = FactorSubtraction::new(10, 96);
        assert_eq!(rules.is_winning(&beyond), reference.is_winning(&beyond));

        // Foreign threshold: recursive path.
        let foreign = FactorPosition::new(24, 5);
        let reference = FactorSubtraction::new(5, 96);
        assert_eq!(rules.is_winning(&foreign), reference.is_winning(&foreign));
    }

    #[test]
    fn test_setup_positions_are_playable() {
        let rules = FactorSubtraction::default();
        let mut rng = GameRng::new(11);
        for tier in Difficulty::ALL {
            for _ in 0..20 {
                let position = rules.random_position(tier, &mut rng);
                assert!(!rules.is_terminal(&position), "position {:?}", position);
                assert_eq!(position.threshold, rules.threshold());
            }
        }
        let fallback = rules.fallback_position();
        assert!(rules.is_winning(&fallback));
        assert!(!rules.is_terminal(&fallback));
    }
}
