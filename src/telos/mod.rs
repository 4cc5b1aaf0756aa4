//! The telos: a user's goals, strategies, technology stack, and named failure
//! patterns, parsed from a semi-structured markdown document.
//!
//! The parsed [`Configuration`] is immutable after load and is passed by
//! reference into the scoring engine and the pattern detector. There is no
//! process-wide singleton; callers own the value and thread it explicitly.

mod parser;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A single goal from the telos document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    /// 1-based document order; the first listed goal is priority 1.
    pub priority: u8,
}

/// A standing strategy the user applies across ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub description: String,
}

/// Technologies the user currently works in, split by how central they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl Stack {
    /// All configured technologies, primary first.
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// A self-declared recurring failure mode, with keywords derived from its
/// description for use as a weak textual signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePattern {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Validated, read-only configuration built from a telos document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub goals: Vec<Goal>,
    pub strategies: Vec<Strategy>,
    pub stack: Stack,
    pub failure_patterns: Vec<FailurePattern>,
}

impl Configuration {
    /// Parse a telos document from memory and validate its invariants.
    pub fn parse(document: &str) -> Result<Self, TelosError> {
        let config = parser::parse_document(document);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the telos document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TelosError> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| TelosError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&document)?;
        info!(
            goals = config.goals.len(),
            strategies = config.strategies.len(),
            stack = config.stack.len(),
            failure_patterns = config.failure_patterns.len(),
            "telos configuration loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), TelosError> {
        if self.goals.is_empty() {
            return Err(TelosError::NoGoals);
        }

        for goal in &self.goals {
            if goal.id.trim().is_empty() {
                return Err(TelosError::MissingId {
                    section: "goal",
                    position: goal.priority as usize,
                });
            }
            if goal.description.trim().is_empty() {
                return Err(TelosError::EmptyDescription {
                    section: "goal",
                    id: goal.id.clone(),
                });
            }
        }

        for (index, strategy) in self.strategies.iter().enumerate() {
            if strategy.id.trim().is_empty() {
                return Err(TelosError::MissingId {
                    section: "strategy",
                    position: index + 1,
                });
            }
            if strategy.description.trim().is_empty() {
                return Err(TelosError::EmptyDescription {
                    section: "strategy",
                    id: strategy.id.clone(),
                });
            }
        }

        for (index, pattern) in self.failure_patterns.iter().enumerate() {
            if pattern.name.trim().is_empty() {
                return Err(TelosError::MissingId {
                    section: "failure pattern",
                    position: index + 1,
                });
            }
            if pattern.description.trim().is_empty() {
                return Err(TelosError::EmptyDescription {
                    section: "failure pattern",
                    id: pattern.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Failures while loading or validating a telos document. These are hard
/// errors: a partially valid configuration must never reach the engines.
#[derive(Debug, thiserror::Error)]
pub enum TelosError {
    #[error("failed to read telos document at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("telos document defines no goals; at least one `- <ID>: <description>` entry is required under a Goals section")]
    NoGoals,
    #[error("{section} entry #{position} has an empty identifier")]
    MissingId {
        section: &'static str,
        position: usize,
    },
    #[error("{section} '{id}' has an empty description")]
    EmptyDescription { section: &'static str, id: String },
}
