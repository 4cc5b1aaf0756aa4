//! Anomaly detectors over a batch of scored ideas: score outliers, rare
//! patterns, timing spikes, and score/recommendation inconsistencies.

use super::stats;
use super::IdeaRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum ideas before outlier detection has any statistical basis.
const MIN_OUTLIER_SAMPLE: usize = 3;
/// Minimum distinct days before per-day counts are worth testing.
const MIN_TIMING_DAYS: usize = 3;

/// An idea whose score sits `deviation` standard deviations from the mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutlier {
    pub id: String,
    pub score: f64,
    pub deviation: f64,
}

/// A pattern occurring in fewer than the threshold percentage of ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarePattern {
    pub name: String,
    pub percentage: f64,
    pub idea_ids: Vec<String>,
}

/// A calendar day whose capture count spikes above the per-day mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingAnomaly {
    pub date: NaiveDate,
    pub count: usize,
    /// Count relative to the per-day mean.
    pub ratio: f64,
}

/// A stored score/recommendation pair that contradicts the threshold ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationIssue {
    pub id: String,
    pub score: f64,
    pub recommendation: String,
    pub reason: String,
}

pub(super) fn detect_outliers(ideas: &[IdeaRecord], threshold: f64) -> Vec<ScoreOutlier> {
    if ideas.len() < MIN_OUTLIER_SAMPLE {
        return Vec::new();
    }

    let scores: Vec<f64> = ideas.iter().map(|idea| idea.final_score).collect();
    let mean = stats::mean(&scores);
    let std_dev = stats::std_dev(&scores);
    // Uniform data is never anomalous.
    if std_dev == 0.0 {
        return Vec::new();
    }

    let mut outliers: Vec<ScoreOutlier> = ideas
        .iter()
        .filter_map(|idea| {
            let deviation = (idea.final_score - mean).abs() / std_dev;
            (deviation >= threshold).then(|| ScoreOutlier {
                id: idea.id.clone(),
                score: idea.final_score,
                deviation,
            })
        })
        .collect();

    outliers.sort_by(|a, b| {
        b.deviation
            .total_cmp(&a.deviation)
            .then_with(|| a.id.cmp(&b.id))
    });
    outliers
}

pub(super) fn detect_rare_patterns(ideas: &[IdeaRecord], threshold_pct: f64) -> Vec<RarePattern> {
    if ideas.is_empty() {
        return Vec::new();
    }

    let mut occurrences: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for idea in ideas {
        for pattern in &idea.patterns {
            let ids = occurrences.entry(pattern.as_str()).or_default();
            // An idea contributes once per pattern even if stored twice.
            if ids.last() != Some(&idea.id.as_str()) {
                ids.push(idea.id.as_str());
            }
        }
    }

    let total = ideas.len() as f64;
    let mut rare: Vec<RarePattern> = occurrences
        .into_iter()
        .filter_map(|(name, ids)| {
            let percentage = ids.len() as f64 / total * 100.0;
            (percentage < threshold_pct).then(|| RarePattern {
                name: name.to_string(),
                percentage,
                idea_ids: ids.into_iter().map(ToString::to_string).collect(),
            })
        })
        .collect();

    rare.sort_by(|a, b| {
        a.percentage
            .total_cmp(&b.percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    rare
}

pub(super) fn detect_timing_anomalies(ideas: &[IdeaRecord], threshold: f64) -> Vec<TimingAnomaly> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for idea in ideas {
        *per_day.entry(idea.created_at.date_naive()).or_default() += 1;
    }

    if per_day.len() < MIN_TIMING_DAYS {
        return Vec::new();
    }

    let counts: Vec<f64> = per_day.values().map(|&count| count as f64).collect();
    let mean = stats::mean(&counts);
    let std_dev = stats::std_dev(&counts);
    if std_dev == 0.0 {
        return Vec::new();
    }

    per_day
        .into_iter()
        .filter(|&(_, count)| (count as f64 - mean) > threshold * std_dev)
        .map(|(date, count)| TimingAnomaly {
            date,
            count,
            ratio: count as f64 / mean,
        })
        .collect()
}

/// Recommendation labels grouped by what they tell the user to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelClass {
    Pursue,
    Defer,
    Reject,
}

fn classify_label(label: &str) -> Option<LabelClass> {
    match label.trim().to_lowercase().as_str() {
        "priority" | "good" => Some(LabelClass::Pursue),
        "consider" => Some(LabelClass::Defer),
        "avoid" => Some(LabelClass::Reject),
        // Unrecognized labels cannot be judged; skip rather than guess.
        _ => None,
    }
}

/// Flag stored score/label pairs that contradict the threshold ladder.
///
/// Boundary semantics are deliberate and must stay exactly as documented:
/// scores of exactly 5.0, 7.0, and 8.0 are never issues (the comparisons are
/// strict on the issue side). Pending product sign-off before any change.
pub(super) fn detect_recommendation_issues(ideas: &[IdeaRecord]) -> Vec<RecommendationIssue> {
    let mut issues = Vec::new();

    for idea in ideas {
        let Some(class) = classify_label(&idea.recommendation) else {
            continue;
        };
        let score = idea.final_score;

        let reason = match class {
            LabelClass::Pursue if score < 5.0 => Some(format!(
                "score {score:.2} is below 5.0 yet the idea is labeled '{}'",
                idea.recommendation
            )),
            LabelClass::Reject if score > 7.0 => Some(format!(
                "score {score:.2} is above 7.0 yet the idea is labeled '{}'",
                idea.recommendation
            )),
            LabelClass::Defer if score > 8.0 => Some(format!(
                "score {score:.2} is above 8.0 yet the idea is labeled '{}'",
                idea.recommendation
            )),
            _ => None,
        };

        if let Some(reason) = reason {
            issues.push(RecommendationIssue {
                id: idea.id.clone(),
                score,
                recommendation: idea.recommendation.clone(),
                reason,
            });
        }
    }

    issues
}
