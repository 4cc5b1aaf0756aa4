//! Deterministic idea scoring against a telos [`Configuration`].
//!
//! The rubric favors transparency over sophistication: every factor is a
//! literal keyword match or a stack-mention ratio, so a score can be audited
//! line by line and reproduced exactly. The rule set itself lives in
//! [`rules`] as data; this module only walks it.

mod recommendation;
pub(crate) mod rules;

pub use recommendation::Recommendation;

use crate::telos::Configuration;
use rules::{FactorRule, GroupRule, Signal, RULES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One factor's contribution, bounded by its documented maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub max: f64,
    pub explanation: String,
}

/// A weighted sub-score group: four factors plus their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupScore {
    pub key: String,
    pub label: String,
    pub total: f64,
    pub max: f64,
    pub factors: Vec<FactorScore>,
}

/// Full, audit-ready scoring result for one idea text.
///
/// `final_score` currently equals `raw_score`; the two fields are kept
/// separate as the extension point for calibrating scores against observed
/// outcomes without changing the rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub mission_alignment: GroupScore,
    pub anti_challenge: GroupScore,
    pub strategic_fit: GroupScore,
    pub raw_score: f64,
    pub final_score: f64,
    pub recommendation: Recommendation,
    /// Per-factor explanation strings, keyed by factor key. A `BTreeMap`
    /// keeps serialization order deterministic.
    pub explanations: BTreeMap<String, String>,
}

impl ScoreBreakdown {
    pub fn groups(&self) -> [&GroupScore; 3] {
        [
            &self.mission_alignment,
            &self.anti_challenge,
            &self.strategic_fit,
        ]
    }
}

/// Stateless scorer borrowing an immutable, validated configuration.
pub struct ScoringEngine<'a> {
    config: &'a Configuration,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Score an idea text. Never fails: empty or signal-free text resolves
    /// every factor to its floor and lands in the Avoid band.
    pub fn score(&self, idea_text: &str) -> ScoreBreakdown {
        let text = idea_text.to_lowercase();

        let mut explanations = BTreeMap::new();
        let mission_alignment = self.score_group(&RULES[0], &text, &mut explanations);
        let anti_challenge = self.score_group(&RULES[1], &text, &mut explanations);
        let strategic_fit = self.score_group(&RULES[2], &text, &mut explanations);

        let raw_score = mission_alignment.total + anti_challenge.total + strategic_fit.total;
        // Identity calibration; see ScoreBreakdown docs.
        let final_score = raw_score;
        let recommendation = Recommendation::from_score(final_score);
        explanations.insert(
            "recommendation".to_string(),
            format!("{}: {}", recommendation.label(), recommendation.guidance()),
        );

        debug!(raw_score, ?recommendation, "idea scored");

        ScoreBreakdown {
            mission_alignment,
            anti_challenge,
            strategic_fit,
            raw_score,
            final_score,
            recommendation,
            explanations,
        }
    }

    fn score_group(
        &self,
        rule: &GroupRule,
        text: &str,
        explanations: &mut BTreeMap<String, String>,
    ) -> GroupScore {
        let factors: Vec<FactorScore> = rule
            .factors
            .iter()
            .map(|factor| self.score_factor(factor, text))
            .collect();

        for factor in &factors {
            explanations.insert(factor.key.clone(), factor.explanation.clone());
        }

        let total = factors.iter().map(|factor| factor.value).sum();
        let max = rule.factors.iter().map(|factor| factor.max).sum();

        GroupScore {
            key: rule.key.to_string(),
            label: rule.label.to_string(),
            total,
            max,
            factors,
        }
    }

    fn score_factor(&self, rule: &FactorRule, text: &str) -> FactorScore {
        let (value, explanation) = match &rule.signal {
            Signal::Phrases {
                floor,
                floor_explanation,
                buckets,
            } => {
                let hit = buckets
                    .iter()
                    .filter(|bucket| {
                        bucket
                            .phrases
                            .iter()
                            .any(|phrase| rules::phrase_matches(text, phrase))
                    })
                    .max_by(|a, b| a.value.total_cmp(&b.value));

                match hit {
                    Some(bucket) => (bucket.value, bucket.explanation.to_string()),
                    None => (*floor, floor_explanation.to_string()),
                }
            }
            Signal::StackMentionRatio { curve } => {
                let (mentioned, total) = rules::stack_mentions(text, &self.config.stack);
                let ratio = if total == 0 {
                    0.0
                } else {
                    mentioned as f64 / total as f64
                };
                let value = rules::interpolate(curve, ratio);
                let explanation = if total == 0 {
                    "no technology stack configured in the telos".to_string()
                } else {
                    format!("mentions {mentioned} of {total} configured stack technologies")
                };
                (value, explanation)
            }
        };

        FactorScore {
            key: rule.key.to_string(),
            label: rule.label.to_string(),
            value: value.clamp(0.0, rule.max),
            max: rule.max,
            explanation,
        }
    }
}
