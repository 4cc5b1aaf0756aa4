//! Family-by-family detection scenarios through the public `detect` API.
//! Detection is textual only: no score is consulted, and families never fire
//! more than once per idea.

mod common {
    use telos_core::telos::Configuration;

    pub fn telos() -> Configuration {
        Configuration::parse(
            "\
## Goals
- G1: Ship a paid developer tool

## Strategies
- S1: Prototype fast, validate in public

## Stack
- Primary: Rust, Postgres
- Secondary: Svelte

## Failure Patterns
- Shiny Object: Chasing unfamiliar frameworks instead of shipping
",
        )
        .expect("fixture telos is valid")
    }
}

use common::telos;
use telos_core::patterns::{detect, Severity};

fn families(text: &str) -> Vec<String> {
    detect(text, &telos())
        .into_iter()
        .map(|pattern| pattern.family)
        .collect()
}

#[test]
fn clean_on_stack_idea_detects_only_alignment() {
    let matches = detect(
        "a small rust and postgres service that emails weekly invoices",
        &telos(),
    );
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].family, "stack_alignment");
    assert_eq!(matches[0].severity, Severity::Positive);
}

#[test]
fn off_stack_idea_is_a_critical_context_switch() {
    let matches = detect("rebuild everything on kubernetes with elixir", &telos());
    let switch = matches
        .iter()
        .find(|pattern| pattern.family == "context_switching")
        .expect("context switch detected");
    assert_eq!(switch.severity, Severity::Critical);
    assert!(switch.matched.contains(&"kubernetes".to_string()));
    assert!(switch.suggestion.is_some());
}

#[test]
fn perfectionism_needs_completeness_without_a_timebox() {
    assert!(families("a comprehensive and complete billing product").contains(&"perfectionism".to_string()));
    assert!(!families("a comprehensive billing product, first cut in one week").contains(&"perfectionism".to_string()));
}

#[test]
fn procrastination_requires_learn_plus_sequencing() {
    assert!(families("I should learn rust properly before starting").contains(&"procrastination".to_string()));
    assert!(families("finish the tutorial, then build the real thing").contains(&"procrastination".to_string()));
    assert!(!families("learn by shipping small things weekly").contains(&"procrastination".to_string()));
}

#[test]
fn accountability_avoidance_yields_to_public_phrasing() {
    assert!(families("a private tool, just for me").contains(&"accountability_avoidance".to_string()));
    assert!(!families("a personal project I will demo at the meetup").contains(&"accountability_avoidance".to_string()));
}

#[test]
fn baited_text_fires_many_families_each_at_most_once() {
    let text = "a comprehensive kubernetes and haskell platform; I need to learn category \
                theory before starting, and it stays just for me";
    let detected = families(text);

    let mut deduped = detected.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), detected.len(), "a family fired twice");
    assert!(detected.contains(&"context_switching".to_string()));
    assert!(detected.contains(&"perfectionism".to_string()));
    assert!(detected.contains(&"procrastination".to_string()));
    assert!(detected.contains(&"accountability_avoidance".to_string()));
}

#[test]
fn detection_is_independent_of_scoring_output() {
    use telos_core::scoring::ScoringEngine;

    let config = telos();
    let text = "learn go before building a blockchain marketplace";

    // Run detection both before and after scoring; results are identical.
    let before = detect(text, &config);
    let _ = ScoringEngine::new(&config).score(text);
    let after = detect(text, &config);
    assert_eq!(before, after);
    assert!(!before.is_empty());
}

#[test]
fn matches_carry_human_readable_guidance() {
    for pattern in detect("learn haskell before starting, just for me", &telos()) {
        assert!(!pattern.message.is_empty());
        assert!(!pattern.matched.is_empty());
        if pattern.severity != Severity::Positive {
            assert!(pattern.suggestion.is_some(), "{} has no suggestion", pattern.family);
        }
    }
}
