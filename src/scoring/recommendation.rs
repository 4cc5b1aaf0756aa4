use serde::{Deserialize, Serialize};

/// The four recommendation categories, ordered from strongest to weakest.
/// The mapping from score to category is fixed and non-configurable so that
/// recommendations stay comparable across sessions and telos revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Priority,
    Good,
    Consider,
    Avoid,
}

impl Recommendation {
    /// Threshold ladder, evaluated in descending order with `>=` semantics
    /// so boundary scores resolve to the higher category.
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 8.5 {
            Self::Priority
        } else if final_score >= 7.0 {
            Self::Good
        } else if final_score >= 5.0 {
            Self::Consider
        } else {
            Self::Avoid
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Good => "Good",
            Self::Consider => "Consider",
            Self::Avoid => "Avoid",
        }
    }

    /// Short guidance shown alongside the label.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Priority => "Drop other work; this aligns across the board",
            Self::Good => "Worth pursuing once current commitments allow",
            Self::Consider => "Park it; revisit if the telos or timing changes",
            Self::Avoid => "Conflicts with the telos; let it go",
        }
    }
}
