//! Factor-subtraction integration tests: legality pruning and oracle
//! consistency.

use impartial::{FactorMove, FactorPosition, FactorSubtraction, GameError, Oracle, Ruleset};

// =============================================================================
// Worked Example: value 30, threshold 10
// =============================================================================

#[test]
fn test_thirty_over_ten_move_set() {
    let rules = FactorSubtraction::new(10, 96);
    let position = FactorPosition::new(30, 10);

    // Proper factors of 30 are {1,2,3,5,6,10,15}; all keep 30 - f >= 10.
    let factors: Vec<u32> = rules
        .legal_moves(&position)
        .iter()
        .map(|m| m.factor)
        .collect();
    assert_eq!(factors, vec![1, 2, 3, 5, 6, 10, 15]);

    assert!(rules.is_winning(&position));
}

#[test]
fn test_threshold_prunes_legality_not_just_outcome() {
    // From 14 over threshold 10, the factor 7 would land on 7 < 10 and must
    // be illegal, not merely a bad move.
    let rules = FactorSubtraction::new(10, 96);
    let position = FactorPosition::new(14, 10);

    let factors: Vec<u32> = rules
        .legal_moves(&position)
        .iter()
        .map(|m| m.factor)
        .collect();
    assert_eq!(factors, vec![1, 2]);

    assert!(matches!(
        rules.apply(&position, &FactorMove { factor: 7 }),
        Err(GameError::InvalidMove(_))
    ));
}

// =============================================================================
// Oracle Consistency
// =============================================================================

#[test]
fn test_winning_positions_have_a_losing_reply() {
    let rules = FactorSubtraction::new(10, 96);

    for value in 11..=96 {
        let position = FactorPosition::new(value, 10);
        if rules.is_terminal(&position) {
            continue;
        }

        let has_losing_reply = rules.legal_moves(&position).iter().any(|mv| {
            let next = rules.apply(&position, mv).unwrap();
            rules.is_terminal(&next) || !rules.is_winning(&next)
        });
        assert_eq!(
            rules.is_winning(&position),
            has_losing_reply,
            "value {}",
            value
        );
    }
}

#[test]
fn test_small_table_agrees_with_large_table() {
    // A ruleset with a short table answers out-of-range values recursively;
    // the answers must match a table that covers them.
    let short = FactorSubtraction::new(10, 24);
    let long = FactorSubtraction::new(10, 120);

    for value in 25..=120 {
        let position = FactorPosition::new(value, 10);
        assert_eq!(
            short.is_winning(&position),
            long.is_winning(&position),
            "value {}",
            value
        );
    }
}

#[test]
fn test_floor_positions_are_lost() {
    let rules = FactorSubtraction::new(10, 96);
    for value in [10, 9, 1] {
        let position = FactorPosition::new(value, 10);
        assert!(rules.is_terminal(&position), "value {}", value);
        assert!(rules.legal_moves(&position).is_empty());
    }
}
