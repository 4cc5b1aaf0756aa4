//! The five rule families. Each detector is a pure function over the
//! lowercased idea text and the telos configuration, returning at most one
//! match. Matching is literal keyword co-occurrence, not semantic.

use super::{DetectedPattern, Severity};
use crate::scoring::rules::phrase_matches;
use crate::telos::Configuration;

/// Technology names watched for context-switch signals. Entries also present
/// in the configured stack are not foreign and are skipped.
const TECHNOLOGY_TERMS: &[&str] = &[
    "rust",
    "go",
    "python",
    "javascript",
    "typescript",
    "java",
    "kotlin",
    "swift",
    "ruby",
    "elixir",
    "haskell",
    "scala",
    "php",
    "react",
    "vue",
    "svelte",
    "angular",
    "django",
    "rails",
    "flutter",
    "kubernetes",
    "docker",
    "terraform",
    "postgres",
    "mysql",
    "mongodb",
    "redis",
    "kafka",
    "graphql",
    "solidity",
    "blockchain",
    "unity",
    "unreal",
    "tensorflow",
    "pytorch",
];

fn technology_mentions(text: &str, config: &Configuration) -> (Vec<String>, Vec<String>) {
    let stack: Vec<String> = config
        .stack
        .technologies()
        .map(str::to_lowercase)
        .collect();

    let stack_hits: Vec<String> = stack
        .iter()
        .filter(|technology| phrase_matches(text, technology))
        .cloned()
        .collect();

    let foreign_hits: Vec<String> = TECHNOLOGY_TERMS
        .iter()
        .filter(|term| !stack.iter().any(|technology| technology == *term))
        .filter(|term| phrase_matches(text, term))
        .map(ToString::to_string)
        .collect();

    (stack_hits, foreign_hits)
}

/// Negative arm: technologies outside the configured stack are present and
/// stack mentions are absent (Critical) or a minority (High). Failure-pattern
/// keywords from the telos contribute weak supporting evidence to the match.
pub(super) fn context_switching(text: &str, config: &Configuration) -> Option<DetectedPattern> {
    let (stack_hits, foreign_hits) = technology_mentions(text, config);
    if foreign_hits.is_empty() || stack_hits.len() >= foreign_hits.len() {
        return None;
    }

    let severity = if stack_hits.is_empty() {
        Severity::Critical
    } else {
        Severity::High
    };

    let message = if stack_hits.is_empty() {
        "every technology mentioned is outside the configured stack".to_string()
    } else {
        format!(
            "unfamiliar technologies outnumber stack mentions {} to {}",
            foreign_hits.len(),
            stack_hits.len()
        )
    };

    let mut matched = foreign_hits;
    for pattern in &config.failure_patterns {
        for keyword in &pattern.keywords {
            if phrase_matches(text, keyword) && !matched.contains(keyword) {
                matched.push(keyword.clone());
            }
        }
    }

    Some(DetectedPattern {
        family: "context_switching".to_string(),
        severity,
        matched,
        message,
        suggestion: Some(
            "Reframe the idea onto the current stack, or defer it until the stack moves"
                .to_string(),
        ),
    })
}

/// Positive arm of context switching, split into its own family so each
/// family fires at most once: the configured stack dominates the mentions.
pub(super) fn stack_alignment(text: &str, config: &Configuration) -> Option<DetectedPattern> {
    let (stack_hits, foreign_hits) = technology_mentions(text, config);
    if stack_hits.is_empty() || stack_hits.len() <= foreign_hits.len() {
        return None;
    }

    Some(DetectedPattern {
        family: "stack_alignment".to_string(),
        severity: Severity::Positive,
        message: format!(
            "the idea stays on the configured stack ({})",
            stack_hits.join(", ")
        ),
        matched: stack_hits,
        suggestion: None,
    })
}

const SCOPE_WORDS: &[&str] = &[
    "comprehensive",
    "complete",
    "perfect",
    "polished",
    "full-featured",
    "all features",
    "every feature",
    "exhaustive",
];

const TIMEBOX_WORDS: &[&str] = &[
    "week", "weekend", "day", "days", "hour", "hours", "month", "sprint", "deadline",
];

/// Perfectionism / scope creep: completeness language with no bounded
/// timeline anywhere in the text.
pub(super) fn perfectionism(text: &str, _config: &Configuration) -> Option<DetectedPattern> {
    let matched: Vec<String> = SCOPE_WORDS
        .iter()
        .filter(|word| phrase_matches(text, word))
        .map(ToString::to_string)
        .collect();
    if matched.is_empty() {
        return None;
    }

    let timeboxed = TIMEBOX_WORDS.iter().any(|word| phrase_matches(text, word));
    if timeboxed {
        return None;
    }

    Some(DetectedPattern {
        family: "perfectionism".to_string(),
        severity: Severity::Medium,
        matched,
        message: "completeness language with no bounded timeline".to_string(),
        suggestion: Some("Define done for a first cut and timebox it before starting".to_string()),
    })
}

const LEARN_WORDS: &[&str] = &["learn", "study", "master", "course", "tutorial"];
const SEQUENCE_WORDS: &[&str] = &["before", "then"];

/// Procrastination disguised as preparation: a "learn" token conjoined with
/// a "before"/"then" sequencing token.
pub(super) fn procrastination(text: &str, _config: &Configuration) -> Option<DetectedPattern> {
    let learn: Vec<String> = LEARN_WORDS
        .iter()
        .filter(|word| phrase_matches(text, word))
        .map(ToString::to_string)
        .collect();
    if learn.is_empty() {
        return None;
    }

    let sequence: Vec<String> = SEQUENCE_WORDS
        .iter()
        .filter(|word| phrase_matches(text, word))
        .map(ToString::to_string)
        .collect();
    if sequence.is_empty() {
        return None;
    }

    let mut matched = learn;
    matched.extend(sequence);

    Some(DetectedPattern {
        family: "procrastination".to_string(),
        severity: Severity::High,
        matched,
        message: "learning is sequenced ahead of building".to_string(),
        suggestion: Some(
            "Start the project now and learn what it actually demands along the way".to_string(),
        ),
    })
}

const ISOLATION_PHRASES: &[&str] = &[
    "just for me",
    "just for myself",
    "only for me",
    "personal project",
    "private tool",
    "keep it private",
    "not going to share",
];

const PUBLIC_PHRASES: &[&str] = &[
    "in public",
    "share",
    "publish",
    "launch",
    "post",
    "demo",
    "waitlist",
    "users",
    "customers",
];

/// Accountability avoidance: isolation phrasing with no public or sharing
/// phrasing to offset it.
pub(super) fn accountability_avoidance(
    text: &str,
    _config: &Configuration,
) -> Option<DetectedPattern> {
    let matched: Vec<String> = ISOLATION_PHRASES
        .iter()
        .filter(|phrase| phrase_matches(text, phrase))
        .map(ToString::to_string)
        .collect();
    if matched.is_empty() {
        return None;
    }

    let public = PUBLIC_PHRASES
        .iter()
        .any(|phrase| phrase_matches(text, phrase));
    if public {
        return None;
    }

    Some(DetectedPattern {
        family: "accountability_avoidance".to_string(),
        severity: Severity::Medium,
        matched,
        message: "the idea is framed as private work with no external visibility".to_string(),
        suggestion: Some(
            "Name one public checkpoint, even a single progress post, before starting".to_string(),
        ),
    })
}
