//! Line-oriented parser for the telos document.
//!
//! Parsing is deliberately permissive: a "current section" state flips on
//! header lines, items are matched against the per-section shape, and every
//! line that matches nothing is skipped without error. Validation of the
//! extracted configuration happens afterwards in [`super::Configuration`].

use super::{Configuration, FailurePattern, Goal, Stack, Strategy};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Goals,
    Strategies,
    Stack,
    FailurePatterns,
    Unknown,
}

impl Section {
    /// Recognize a section header. Headers are `#`-prefixed or bare labels
    /// ending in `:`; matching is on a lowercase substring so the document
    /// can title sections freely ("## Current Goals", "Failure Patterns:").
    fn from_header(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let looks_like_header =
            !trimmed.starts_with('-') && (trimmed.starts_with('#') || trimmed.ends_with(':'));
        if !looks_like_header {
            return None;
        }

        let label = trimmed
            .trim_start_matches('#')
            .trim_end_matches(':')
            .trim()
            .to_lowercase();
        if label.is_empty() {
            return None;
        }

        if label.contains("goal") {
            Some(Self::Goals)
        } else if label.contains("strateg") {
            Some(Self::Strategies)
        } else if label.contains("stack") {
            Some(Self::Stack)
        } else if label.contains("failure") || label.contains("pattern") {
            Some(Self::FailurePatterns)
        } else {
            Some(Self::Unknown)
        }
    }
}

pub(super) fn parse_document(document: &str) -> Configuration {
    let mut goals = Vec::new();
    let mut strategies = Vec::new();
    let mut stack = Stack::default();
    let mut failure_patterns = Vec::new();
    let mut section = Section::Unknown;

    for line in document.lines() {
        if let Some(next) = Section::from_header(line) {
            section = next;
            continue;
        }

        let Some((id, rest)) = parse_item(line) else {
            continue;
        };

        match section {
            Section::Goals => {
                let (description, deadline) = split_deadline(rest);
                goals.push(Goal {
                    id: id.to_string(),
                    description: description.to_string(),
                    deadline,
                    priority: (goals.len() + 1).min(u8::MAX as usize) as u8,
                });
            }
            Section::Strategies => strategies.push(Strategy {
                id: id.to_string(),
                description: rest.to_string(),
            }),
            Section::Stack => {
                let technologies = split_comma_list(rest);
                if id.eq_ignore_ascii_case("primary") {
                    stack.primary = technologies;
                } else if id.eq_ignore_ascii_case("secondary") {
                    stack.secondary = technologies;
                }
            }
            Section::FailurePatterns => failure_patterns.push(FailurePattern {
                name: id.to_string(),
                description: rest.to_string(),
                keywords: derive_keywords(rest),
            }),
            Section::Unknown => {}
        }
    }

    Configuration {
        goals,
        strategies,
        stack,
        failure_patterns,
    }
}

/// Match the `- <ID>: <rest>` item shape shared by every section.
fn parse_item(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    let body = trimmed.strip_prefix("- ").or_else(|| {
        trimmed
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
    })?;
    let (id, rest) = body.split_once(':')?;
    Some((id.trim(), rest.trim()))
}

/// Peel a trailing `(Deadline: YYYY-MM-DD)` marker off a goal description.
/// A marker whose date fails to parse is dropped along with the marker; the
/// goal itself survives with no deadline.
fn split_deadline(description: &str) -> (&str, Option<NaiveDate>) {
    let Some(open) = description.rfind('(') else {
        return (description, None);
    };
    let Some(tail) = description[open..].strip_prefix('(') else {
        return (description, None);
    };
    let Some(inner) = tail.strip_suffix(')') else {
        return (description, None);
    };

    let Some(value) = inner.trim().strip_prefix("Deadline:") else {
        return (description, None);
    };

    let deadline = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
    (description[..open].trim_end(), deadline)
}

fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "also", "and", "are", "because", "been", "before", "being", "but",
    "cannot", "could", "does", "doing", "else", "ever", "every", "for", "from", "have", "having",
    "instead", "into", "just", "more", "most", "much", "never", "not", "only", "other", "over",
    "rather", "should", "some", "something", "such", "than", "that", "the", "them", "then", "they",
    "this", "through", "too", "very", "want", "what", "when", "where", "which", "while", "will",
    "with", "without", "would", "your",
];

/// Derive the keyword set for a failure pattern from its description:
/// lowercase, split on non-alphanumeric boundaries, drop stop-words and
/// tokens shorter than four characters, dedupe preserving first occurrence.
pub(super) fn derive_keywords(description: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in description
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
    {
        if token.len() < 4 || STOP_WORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|existing| existing == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matching_is_flexible() {
        assert_eq!(Section::from_header("## Goals"), Some(Section::Goals));
        assert_eq!(Section::from_header("# My Current Goals"), Some(Section::Goals));
        assert_eq!(Section::from_header("Strategies:"), Some(Section::Strategies));
        assert_eq!(
            Section::from_header("### Failure Patterns"),
            Some(Section::FailurePatterns)
        );
        assert_eq!(Section::from_header("## Notes"), Some(Section::Unknown));
        assert_eq!(Section::from_header("- G1: not a header"), None);
    }

    #[test]
    fn item_shape_requires_dash_and_colon() {
        assert_eq!(parse_item("- G1: Ship it"), Some(("G1", "Ship it")));
        assert_eq!(parse_item("  - S2:  spaced  "), Some(("S2", "spaced")));
        assert_eq!(parse_item("G1: no dash"), None);
        assert_eq!(parse_item("- no colon"), None);
        assert_eq!(parse_item("-- horizontal rule"), None);
    }

    #[test]
    fn deadline_marker_is_peeled_from_description() {
        let (description, deadline) = split_deadline("Ship the tool (Deadline: 2026-03-31)");
        assert_eq!(description, "Ship the tool");
        assert_eq!(
            deadline,
            Some(NaiveDate::from_ymd_opt(2026, 3, 31).expect("valid date"))
        );
    }

    #[test]
    fn parenthetical_without_deadline_is_left_alone() {
        let (description, deadline) = split_deadline("Ship the tool (v2)");
        assert_eq!(description, "Ship the tool (v2)");
        assert_eq!(deadline, None);
    }

    #[test]
    fn keywords_filter_short_tokens_and_stop_words() {
        let keywords = derive_keywords("Chasing new ideas instead of finishing the last one");
        assert_eq!(keywords, vec!["chasing", "ideas", "finishing", "last"]);
    }

    #[test]
    fn keywords_dedupe_preserving_order() {
        let keywords = derive_keywords("courses, courses, always more courses");
        assert_eq!(keywords, vec!["courses", "always"]);
    }
}
