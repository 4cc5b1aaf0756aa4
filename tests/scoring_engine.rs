//! End-to-end scoring properties exercised through the public API only:
//! configuration load, rubric bounds, the recommendation ladder, idempotence,
//! and exact serialization round-trips.

mod common {
    use telos_core::telos::Configuration;

    pub const TELOS_DOCUMENT: &str = "\
# Telos

## Goals
- G1: Ship a paid developer tool (Deadline: 2026-03-31)
- G2: Build a public track record of finished projects

## Strategies
- S1: Prototype in a weekend, validate before polishing
- S2: Share progress publicly every week

## Stack
- Primary: Rust, Postgres, Axum
- Secondary: TypeScript, Svelte

## Failure Patterns
- Shiny Object: Chasing unfamiliar frameworks instead of shipping with known tools
- Endless Learning: Taking courses and tutorials before starting real projects
";

    pub fn telos() -> Configuration {
        Configuration::parse(TELOS_DOCUMENT).expect("fixture telos is valid")
    }

    pub const IDEA_CORPUS: &[&str] = &[
        "",
        "   \n\t  ",
        "an llm powered cli developer tool in rust and axum; mvp this weekend, \
         build in public, landing page waitlist, subscription pricing for paying customers",
        "a comprehensive mobile game platform in unity, someday, just for me",
        "learn kubernetes before building a comprehensive devops suite",
        "extract a template library from the previous project and presell it to b2b customers",
        "rewrite the backend in haskell for fun, no revenue, private",
    ];
}

use common::{telos, IDEA_CORPUS};
use telos_core::scoring::{Recommendation, ScoreBreakdown, ScoringEngine};

#[test]
fn every_factor_and_total_stays_in_range_across_the_corpus() {
    let config = telos();
    let engine = ScoringEngine::new(&config);

    for text in IDEA_CORPUS {
        let breakdown = engine.score(text);
        let mut factor_count = 0;

        for group in breakdown.groups() {
            let mut group_sum = 0.0;
            for factor in &group.factors {
                assert!(
                    factor.value >= 0.0 && factor.value <= factor.max,
                    "factor {} out of range for {text:?}",
                    factor.key
                );
                assert!(!factor.explanation.is_empty(), "missing explanation: {}", factor.key);
                group_sum += factor.value;
                factor_count += 1;
            }
            assert!((group.total - group_sum).abs() < 1e-9);
        }

        assert_eq!(factor_count, 12);
        assert!(breakdown.raw_score >= 0.0 && breakdown.raw_score <= 10.0);
        let groups_sum: f64 = breakdown.groups().iter().map(|group| group.total).sum();
        assert!((breakdown.raw_score - groups_sum).abs() < 1e-9);
        assert_eq!(breakdown.final_score, breakdown.raw_score);
        assert_eq!(
            breakdown.recommendation,
            Recommendation::from_score(breakdown.final_score)
        );
    }
}

#[test]
fn recommendation_ladder_boundaries_resolve_upward() {
    let cases = [
        (8.5, Recommendation::Priority),
        (8.49999, Recommendation::Good),
        (7.0, Recommendation::Good),
        (6.99999, Recommendation::Consider),
        (5.0, Recommendation::Consider),
        (4.99999, Recommendation::Avoid),
    ];
    for (score, expected) in cases {
        assert_eq!(Recommendation::from_score(score), expected, "score {score}");
    }
}

#[test]
fn empty_text_scores_without_error_and_lands_in_avoid() {
    let config = telos();
    let breakdown = ScoringEngine::new(&config).score("");
    assert_eq!(breakdown.recommendation, Recommendation::Avoid);
    assert!(breakdown.raw_score < 5.0);
}

#[test]
fn scoring_is_deterministic_byte_for_byte() {
    let config = telos();
    let engine = ScoringEngine::new(&config);

    for text in IDEA_CORPUS {
        let first = serde_json::to_vec(&engine.score(text)).expect("serializes");
        let second = serde_json::to_vec(&engine.score(text)).expect("serializes");
        assert_eq!(first, second, "non-deterministic output for {text:?}");
    }
}

#[test]
fn serialized_breakdowns_round_trip_every_numeric_field_exactly() {
    let config = telos();
    let engine = ScoringEngine::new(&config);

    for text in IDEA_CORPUS {
        let breakdown = engine.score(text);
        let json = serde_json::to_string(&breakdown).expect("serializes");
        let restored: ScoreBreakdown = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(restored, breakdown);
        assert_eq!(restored.raw_score.to_bits(), breakdown.raw_score.to_bits());
        assert_eq!(restored.final_score.to_bits(), breakdown.final_score.to_bits());
        for (group, original) in restored.groups().iter().zip(breakdown.groups()) {
            assert_eq!(group.total.to_bits(), original.total.to_bits());
            for (factor, original_factor) in group.factors.iter().zip(&original.factors) {
                assert_eq!(factor.value.to_bits(), original_factor.value.to_bits());
            }
        }
    }
}

#[test]
fn aligned_ideas_rank_above_misaligned_ones() {
    let config = telos();
    let engine = ScoringEngine::new(&config);

    let aligned = engine.score(IDEA_CORPUS[2]);
    let misaligned = engine.score(IDEA_CORPUS[3]);
    assert!(aligned.final_score > misaligned.final_score);
    assert_eq!(misaligned.recommendation, Recommendation::Avoid);
}

#[test]
fn explanations_cover_every_factor_and_the_recommendation() {
    let config = telos();
    let breakdown = ScoringEngine::new(&config).score(IDEA_CORPUS[2]);

    for group in breakdown.groups() {
        for factor in &group.factors {
            assert!(
                breakdown.explanations.contains_key(&factor.key),
                "no explanation entry for {}",
                factor.key
            );
        }
    }
    assert!(breakdown.explanations.contains_key("recommendation"));
}
