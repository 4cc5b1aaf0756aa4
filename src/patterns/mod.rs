//! Behavioral anti-pattern detection over idea text.
//!
//! Detection is purely textual and independent of scoring: the two can run
//! concurrently over the same text with no shared state. Each of the five
//! rule families fires at most once per idea; families are evaluated in a
//! fixed order and their matches concatenated.

mod detectors;

use crate::telos::Configuration;
use serde::{Deserialize, Serialize};

/// Display severity for a detected pattern. Severity orders and colors
/// output; it never feeds back into the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Positive,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Positive => "Positive",
        }
    }

    /// Display rank, most severe first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Positive => 4,
        }
    }
}

/// One matched anti-pattern family with the literal terms that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub family: String,
    pub severity: Severity,
    pub matched: Vec<String>,
    pub message: String,
    pub suggestion: Option<String>,
}

type Detector = fn(&str, &Configuration) -> Option<DetectedPattern>;

/// The five families, in fixed evaluation order.
const DETECTORS: [Detector; 5] = [
    detectors::context_switching,
    detectors::stack_alignment,
    detectors::perfectionism,
    detectors::procrastination,
    detectors::accountability_avoidance,
];

/// Run every detector over the (lowercased) idea text. Zero matches is the
/// common case; order of results follows detector order, not severity.
pub fn detect(idea_text: &str, config: &Configuration) -> Vec<DetectedPattern> {
    let text = idea_text.to_lowercase();
    DETECTORS
        .iter()
        .filter_map(|detector| detector(&text, config))
        .collect()
}
