//! Batch analytics over previously scored ideas.
//!
//! The engine reads only the fields named in [`IdeaRecord`] — scores,
//! pattern strings, recommendation labels, timestamps — and has no runtime
//! dependency on the scoring engine or pattern detector. One invocation
//! assumes exclusive read access to the supplied slice and recomputes the
//! whole snapshot from scratch; nothing is persisted here.

mod anomalies;
pub mod stats;

pub use anomalies::{RarePattern, RecommendationIssue, ScoreOutlier, TimingAnomaly};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Minimal per-idea input contract for analytics. External persistence owns
/// the full idea record; only these fields are required here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRecord {
    pub id: String,
    pub final_score: f64,
    pub patterns: Vec<String>,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-tunable thresholds. Defaults match the interactive reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    /// Standard deviations from the mean before a score is an outlier.
    pub outlier_threshold: f64,
    /// Occurrence percentage below which a pattern is rare.
    pub rare_pattern_threshold: f64,
    /// Standard deviations above the per-day mean before a day is a spike.
    pub timing_threshold: f64,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            outlier_threshold: 2.0,
            rare_pattern_threshold: 10.0,
            timing_threshold: 2.0,
        }
    }
}

/// How often one pattern shows up across the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternFrequency {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// The full statistical picture of a batch, recomputed per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_ideas: usize,
    pub mean_score: f64,
    pub median_score: f64,
    pub std_dev: f64,
    /// `p25`/`p50`/`p75`/`p90` over final scores.
    pub percentiles: BTreeMap<String, f64>,
    /// Counts per score band of width 2.0; 10.0 lands in the top band.
    pub score_distribution: BTreeMap<String, usize>,
    pub pattern_frequency: Vec<PatternFrequency>,
    pub outliers: Vec<ScoreOutlier>,
    pub rare_patterns: Vec<RarePattern>,
    pub timing_anomalies: Vec<TimingAnomaly>,
    pub recommendation_issues: Vec<RecommendationIssue>,
}

const DISTRIBUTION_BANDS: [(&str, f64, f64); 5] = [
    ("0.0-2.0", 0.0, 2.0),
    ("2.0-4.0", 2.0, 4.0),
    ("4.0-6.0", 4.0, 6.0),
    ("6.0-8.0", 6.0, 8.0),
    ("8.0-10.0", 8.0, 10.0),
];

/// Stateless batch analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    options: AnalyticsOptions,
}

impl AnalyticsEngine {
    pub fn new(options: AnalyticsOptions) -> Self {
        Self { options }
    }

    /// Compute the snapshot for a batch. An empty batch yields the zeroed
    /// degenerate snapshot rather than an error.
    pub fn analyze(&self, ideas: &[IdeaRecord]) -> AnalyticsSnapshot {
        for idea in ideas {
            debug_assert!(
                idea.final_score.is_finite(),
                "idea '{}' carries a non-finite score; broken upstream integration",
                idea.id
            );
        }

        let scores: Vec<f64> = ideas.iter().map(|idea| idea.final_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(f64::total_cmp);

        let mut percentiles = BTreeMap::new();
        for (key, p) in [("p25", 25.0), ("p50", 50.0), ("p75", 75.0), ("p90", 90.0)] {
            percentiles.insert(key.to_string(), stats::percentile(&sorted, p));
        }

        let snapshot = AnalyticsSnapshot {
            total_ideas: ideas.len(),
            mean_score: stats::mean(&scores),
            median_score: stats::median(&scores),
            std_dev: stats::std_dev(&scores),
            percentiles,
            score_distribution: score_distribution(&scores),
            pattern_frequency: pattern_frequency(ideas),
            outliers: anomalies::detect_outliers(ideas, self.options.outlier_threshold),
            rare_patterns: anomalies::detect_rare_patterns(
                ideas,
                self.options.rare_pattern_threshold,
            ),
            timing_anomalies: anomalies::detect_timing_anomalies(
                ideas,
                self.options.timing_threshold,
            ),
            recommendation_issues: anomalies::detect_recommendation_issues(ideas),
        };

        debug!(
            total = snapshot.total_ideas,
            outliers = snapshot.outliers.len(),
            rare_patterns = snapshot.rare_patterns.len(),
            timing_anomalies = snapshot.timing_anomalies.len(),
            issues = snapshot.recommendation_issues.len(),
            "analytics snapshot computed"
        );
        snapshot
    }
}

fn score_distribution(scores: &[f64]) -> BTreeMap<String, usize> {
    let mut distribution: BTreeMap<String, usize> = DISTRIBUTION_BANDS
        .iter()
        .map(|(label, _, _)| (label.to_string(), 0))
        .collect();

    for &score in scores {
        let band = DISTRIBUTION_BANDS
            .iter()
            .find(|&&(_, low, high)| score >= low && (score < high || high >= 10.0))
            .map(|(label, _, _)| *label);
        if let Some(label) = band {
            *distribution.entry(label.to_string()).or_default() += 1;
        }
    }

    distribution
}

fn pattern_frequency(ideas: &[IdeaRecord]) -> Vec<PatternFrequency> {
    if ideas.is_empty() {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for idea in ideas {
        let mut seen: Vec<&str> = Vec::new();
        for pattern in &idea.patterns {
            if !seen.contains(&pattern.as_str()) {
                seen.push(pattern.as_str());
                *counts.entry(pattern.as_str()).or_default() += 1;
            }
        }
    }

    let total = ideas.len() as f64;
    let mut frequency: Vec<PatternFrequency> = counts
        .into_iter()
        .map(|(name, count)| PatternFrequency {
            name: name.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    frequency.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn idea(id: &str, score: f64) -> IdeaRecord {
        IdeaRecord {
            id: id.to_string(),
            final_score: score,
            patterns: Vec::new(),
            recommendation: "Consider".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2026, 8, 1, 9, 0, 0)
                .single()
                .expect("valid time"),
        }
    }

    #[test]
    fn empty_batch_yields_the_degenerate_snapshot() {
        let snapshot = AnalyticsEngine::default().analyze(&[]);
        assert_eq!(snapshot.total_ideas, 0);
        assert_eq!(snapshot.mean_score, 0.0);
        assert_eq!(snapshot.median_score, 0.0);
        assert_eq!(snapshot.std_dev, 0.0);
        assert!(snapshot.outliers.is_empty());
        assert!(snapshot.rare_patterns.is_empty());
        assert!(snapshot.timing_anomalies.is_empty());
        assert!(snapshot.recommendation_issues.is_empty());
    }

    #[test]
    fn distribution_buckets_cover_the_full_range() {
        let scores = [0.0, 1.9, 2.0, 5.5, 7.9, 8.0, 10.0];
        let distribution = score_distribution(&scores);
        assert_eq!(distribution["0.0-2.0"], 2);
        assert_eq!(distribution["2.0-4.0"], 1);
        assert_eq!(distribution["4.0-6.0"], 1);
        assert_eq!(distribution["6.0-8.0"], 1);
        assert_eq!(distribution["8.0-10.0"], 2);
    }

    #[test]
    fn pattern_frequency_counts_ideas_not_repeats() {
        let mut first = idea("a", 5.0);
        first.patterns = vec!["procrastination".to_string(), "procrastination".to_string()];
        let mut second = idea("b", 6.0);
        second.patterns = vec!["procrastination".to_string(), "perfectionism".to_string()];

        let frequency = pattern_frequency(&[first, second]);
        assert_eq!(frequency[0].name, "procrastination");
        assert_eq!(frequency[0].count, 2);
        assert!((frequency[0].percentage - 100.0).abs() < 1e-9);
        assert_eq!(frequency[1].name, "perfectionism");
        assert_eq!(frequency[1].count, 1);
    }

    #[test]
    fn percentile_map_carries_the_standard_cuts() {
        let ideas: Vec<IdeaRecord> = (1..=10).map(|i| idea(&format!("i{i}"), i as f64)).collect();
        let snapshot = AnalyticsEngine::default().analyze(&ideas);
        assert!((snapshot.percentiles["p50"] - 5.5).abs() < 0.01);
        assert!((snapshot.percentiles["p75"] - 7.75).abs() < 0.01);
        assert!((snapshot.percentiles["p90"] - 9.1).abs() < 0.01);
    }
}
