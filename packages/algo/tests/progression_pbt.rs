//! Property-Based Tests for the progression engine
//!
//! Tests the following invariants:
//! - XP requirement strictly increases with level
//! - Zero XP leaves stats untouched
//! - After any grant, current XP is below the requirement of the new level
//! - Attributes grow by exactly `stat_gain_per_level` per level gained
//! - Total XP is conserved across level-ups
//! - Exercise rewards never drop below the base reward

use proptest::prelude::*;

use strivex_algo::{
    add_xp, exercise_xp, rank_of, xp_required_for_level, Performance, PlayerStats,
    ProgressionConfig, Rank,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_valid_stats() -> impl Strategy<Value = PlayerStats> {
    (1u32..=500, 0u32..=1000, 0u32..=365).prop_flat_map(|(level, attr, streak)| {
        let required = xp_required_for_level(level);
        (0..required).prop_map(move |current_xp| PlayerStats {
            level,
            current_xp,
            strength: attr,
            agility: attr,
            vitality: attr,
            perception: attr,
            intelligence: attr,
            streak,
            avatar_url: None,
        })
    })
}

fn arb_performance() -> impl Strategy<Value = Performance> {
    (0u32..=20, 0u32..=100).prop_map(|(sets, reps)| Performance::new(sets, reps))
}

/// Total XP earned since level 1 with zero XP
fn lifetime_xp(stats: &PlayerStats) -> u64 {
    (1..stats.level).map(xp_required_for_level).sum::<u64>() + stats.current_xp
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_requirement_strictly_increasing(level in 1u32..1_000_000) {
        prop_assert!(xp_required_for_level(level + 1) > xp_required_for_level(level));
    }

    #[test]
    fn prop_zero_gain_is_identity(stats in arb_valid_stats()) {
        let result = add_xp(&stats, 0.0);
        prop_assert_eq!(&result.new_stats, &stats);
        prop_assert!(!result.leveled_up);
        prop_assert_eq!(result.levels_gained, 0);
    }

    #[test]
    fn prop_post_condition_holds(stats in arb_valid_stats(), xp in 0u32..200_000) {
        let result = add_xp(&stats, f64::from(xp));
        prop_assert!(result.new_stats.current_xp < xp_required_for_level(result.new_stats.level));
        prop_assert_eq!(result.new_stats.level, stats.level + result.levels_gained);
        prop_assert_eq!(result.leveled_up, result.levels_gained > 0);
    }

    #[test]
    fn prop_attributes_grow_per_level(stats in arb_valid_stats(), xp in 0u32..200_000) {
        let result = add_xp(&stats, f64::from(xp));
        let growth = 2 * result.levels_gained;
        prop_assert_eq!(result.new_stats.strength, stats.strength + growth);
        prop_assert_eq!(result.new_stats.agility, stats.agility + growth);
        prop_assert_eq!(result.new_stats.vitality, stats.vitality + growth);
        prop_assert_eq!(result.new_stats.perception, stats.perception + growth);
        prop_assert_eq!(result.new_stats.intelligence, stats.intelligence + growth);
        prop_assert_eq!(result.new_stats.streak, stats.streak);
    }

    #[test]
    fn prop_total_xp_conserved(stats in arb_valid_stats(), xp in 0u32..200_000) {
        let result = add_xp(&stats, f64::from(xp));
        prop_assert_eq!(lifetime_xp(&result.new_stats), lifetime_xp(&stats) + u64::from(xp));
    }

    #[test]
    fn prop_invalid_input_never_corrupts(stats in arb_valid_stats(), xp in -1.0e12f64..0.0) {
        prop_assert_eq!(add_xp(&stats, xp).new_stats, stats);
    }

    #[test]
    fn prop_exercise_xp_at_least_base(planned in arb_performance(), actual in arb_performance()) {
        let xp = exercise_xp(planned, actual);
        prop_assert!(xp >= 10);
        if actual.sets <= planned.sets && actual.reps <= planned.reps {
            prop_assert_eq!(xp, 10);
        }
    }

    #[test]
    fn prop_rank_monotonic(level in 1u32..10_000) {
        prop_assert!(rank_of(level + 1) >= rank_of(level));
    }

    #[test]
    fn prop_custom_slope_still_terminates(slope in 1u64..1000, xp in 0u32..100_000) {
        let config = ProgressionConfig {
            xp_per_level: slope,
            ..Default::default()
        };
        let result = config.add_xp(&PlayerStats::initial(), f64::from(xp));
        let required = config.xp_required_for_level(result.new_stats.level);
        prop_assert!(result.new_stats.current_xp < required);
    }
}

#[test]
fn multi_level_jump_from_level_one() {
    let result = add_xp(&PlayerStats::initial(), 250.0);
    // 100 clears level 1; the remaining 150 is short of level 2's 200
    assert_eq!(result.new_stats.level, 2);
    assert_eq!(result.new_stats.current_xp, 150);
    assert_eq!(result.levels_gained, 1);

    let result = add_xp(&PlayerStats::initial(), 300.0);
    assert_eq!(result.new_stats.level, 3);
    assert_eq!(result.levels_gained, 2);
    assert_eq!(result.new_stats.strength, 10 + 2 * 2);
    assert_eq!(rank_of(result.new_stats.level), Rank::E);
}
