//! telos-core: deterministic idea scoring, anti-pattern detection, and batch
//! analytics against a user-authored goals document (the "telos").
//!
//! The crate is the scoring-and-pattern engine only. Command-line handling,
//! persistence, import/export formats, and any HTTP surface are external
//! collaborators that supply idea text and consume the structures defined
//! here.
//!
//! Typical flow:
//!
//! ```no_run
//! use telos_core::analytics::AnalyticsEngine;
//! use telos_core::patterns;
//! use telos_core::scoring::ScoringEngine;
//! use telos_core::telos::Configuration;
//!
//! # fn main() -> Result<(), telos_core::error::EngineError> {
//! let config = Configuration::load("telos.md")?;
//!
//! let breakdown = ScoringEngine::new(&config).score("an llm cli in rust, mvp this weekend");
//! let detected = patterns::detect("an llm cli in rust, mvp this weekend", &config);
//! println!("{} ({:?}, {} patterns)", breakdown.final_score, breakdown.recommendation, detected.len());
//!
//! // Later, over a stored batch:
//! let snapshot = AnalyticsEngine::default().analyze(&[]);
//! assert_eq!(snapshot.total_ideas, 0);
//! # Ok(())
//! # }
//! ```
//!
//! Scoring and detection are pure, synchronous functions of
//! `(text, &Configuration)`; they share no mutable state and may be raced by
//! the caller. Analytics reads a batch snapshot and nothing else.

pub mod analytics;
pub mod config;
pub mod error;
pub mod patterns;
pub mod scoring;
pub mod telemetry;
pub mod telos;

pub use analytics::{AnalyticsEngine, AnalyticsOptions, AnalyticsSnapshot, IdeaRecord};
pub use error::EngineError;
pub use patterns::{DetectedPattern, Severity};
pub use scoring::{Recommendation, ScoreBreakdown, ScoringEngine};
pub use telos::{Configuration, TelosError};
