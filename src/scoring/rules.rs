//! Declarative rubric: the scoring rules are data, the traversal lives in
//! [`super::ScoringEngine`].
//!
//! Each factor is either a ladder of keyword buckets (the highest-valued
//! bucket with a phrase present in the text wins) or a stack-mention ratio
//! pushed through a piecewise-linear curve. Curves are polylines over control
//! points, so band boundaries are continuous by construction.

use crate::telos::Stack;

/// One rung of a keyword ladder: the factor value awarded when any of the
/// phrases appears in the lowercased idea text.
pub(crate) struct KeywordBucket {
    pub value: f64,
    pub phrases: &'static [&'static str],
    pub explanation: &'static str,
}

pub(crate) enum Signal {
    /// Keyword ladder with a floor for texts that match no bucket.
    Phrases {
        floor: f64,
        floor_explanation: &'static str,
        buckets: &'static [KeywordBucket],
    },
    /// Fraction of configured stack technologies mentioned in the text,
    /// interpolated through `curve` control points `(ratio, value)`.
    StackMentionRatio { curve: &'static [(f64, f64)] },
}

pub(crate) struct FactorRule {
    pub key: &'static str,
    pub label: &'static str,
    pub max: f64,
    pub signal: Signal,
}

pub(crate) struct GroupRule {
    pub key: &'static str,
    pub label: &'static str,
    pub factors: [FactorRule; 4],
}

/// The full rubric. Group maxima: 4.0 + 3.5 + 2.5 = 10.0.
pub(crate) const RULES: [GroupRule; 3] = [
    GroupRule {
        key: "mission_alignment",
        label: "Mission Alignment",
        factors: [
            FactorRule {
                key: "domain_expertise",
                label: "Domain Expertise",
                max: 1.2,
                signal: Signal::Phrases {
                    floor: 0.0,
                    floor_explanation: "no recognizable product domain in the text",
                    buckets: &[
                        KeywordBucket {
                            value: 1.2,
                            phrases: &[
                                "developer tool",
                                "dev tool",
                                "cli",
                                "automation",
                                "productivity",
                                "workflow",
                            ],
                            explanation: "developer tooling and automation sit inside the builder's core domain",
                        },
                        KeywordBucket {
                            value: 0.8,
                            phrases: &["api", "backend", "saas", "dashboard", "integration", "web app"],
                            explanation: "adjacent software product domain with transferable expertise",
                        },
                        KeywordBucket {
                            value: 0.4,
                            phrases: &["mobile app", "game", "browser extension", "marketplace"],
                            explanation: "domain is recognizable but outside prior shipped work",
                        },
                    ],
                },
            },
            FactorRule {
                key: "core_technology",
                label: "AI / Core Technology Alignment",
                max: 1.5,
                signal: Signal::Phrases {
                    floor: 0.0,
                    floor_explanation: "no core-technology signal in the text",
                    buckets: &[
                        KeywordBucket {
                            value: 1.5,
                            phrases: &[
                                "llm",
                                "language model",
                                "ai agent",
                                "machine learning",
                                "embedding",
                                "rag",
                                "prompt",
                            ],
                            explanation: "centered on the AI technologies the mission is built around",
                        },
                        KeywordBucket {
                            value: 1.0,
                            phrases: &["ai", "data pipeline", "nlp", "classifier"],
                            explanation: "touches the core AI direction without centering it",
                        },
                        KeywordBucket {
                            value: 0.5,
                            phrases: &["software", "app", "tool", "script"],
                            explanation: "generic software build with no AI leverage",
                        },
                    ],
                },
            },
            FactorRule {
                key: "execution_support",
                label: "Execution Support",
                max: 0.8,
                signal: Signal::Phrases {
                    floor: 0.3,
                    floor_explanation: "no explicit timeline; execution plan is undeclared",
                    buckets: &[
                        KeywordBucket {
                            value: 0.8,
                            phrases: &[
                                "this week",
                                "this weekend",
                                "weekend",
                                "48 hours",
                                "two days",
                                "tonight",
                                "by friday",
                            ],
                            explanation: "tight, explicit timeline keeps execution honest",
                        },
                        KeywordBucket {
                            value: 0.5,
                            phrases: &["this month", "two weeks", "sprint", "deadline"],
                            explanation: "bounded timeline stated, though not aggressive",
                        },
                        KeywordBucket {
                            value: 0.1,
                            phrases: &["eventually", "someday", "long term", "no rush"],
                            explanation: "open-ended framing signals weak execution support",
                        },
                    ],
                },
            },
            FactorRule {
                key: "revenue_potential",
                label: "Revenue Potential",
                max: 0.5,
                signal: Signal::Phrases {
                    floor: 0.0,
                    floor_explanation: "no revenue intent in the text",
                    buckets: &[
                        KeywordBucket {
                            value: 0.5,
                            phrases: &[
                                "paying customers",
                                "mrr",
                                "subscription",
                                "paid plan",
                                "b2b",
                            ],
                            explanation: "concrete paying-customer framing",
                        },
                        KeywordBucket {
                            value: 0.3,
                            phrases: &["revenue", "monetize", "pricing", "sell", "charge"],
                            explanation: "revenue is mentioned but not yet concrete",
                        },
                        KeywordBucket {
                            value: 0.1,
                            phrases: &["for free", "open source", "no revenue"],
                            explanation: "explicitly non-commercial framing",
                        },
                    ],
                },
            },
        ],
    },
    GroupRule {
        key: "anti_challenge",
        label: "Anti-Challenge",
        factors: [
            FactorRule {
                key: "context_switching",
                label: "Context-Switching Avoidance",
                max: 1.2,
                signal: Signal::StackMentionRatio {
                    curve: &[(0.0, 0.6), (0.5, 1.0), (1.0, 1.2)],
                },
            },
            FactorRule {
                key: "rapid_prototyping",
                label: "Rapid Prototyping Feasibility",
                max: 1.0,
                signal: Signal::Phrases {
                    floor: 0.3,
                    floor_explanation: "scope is undeclared; prototyping feasibility unknown",
                    buckets: &[
                        KeywordBucket {
                            value: 1.0,
                            phrases: &[
                                "prototype",
                                "mvp",
                                "proof of concept",
                                "single feature",
                                "small scope",
                                "weekend project",
                            ],
                            explanation: "scoped small enough to prototype rapidly",
                        },
                        KeywordBucket {
                            value: 0.6,
                            phrases: &["iterate", "ship early", "minimal", "v1"],
                            explanation: "iterative framing suggests a buildable first cut",
                        },
                        KeywordBucket {
                            value: 0.2,
                            phrases: &["platform", "ecosystem", "suite", "framework"],
                            explanation: "platform-scale scope resists rapid prototyping",
                        },
                    ],
                },
            },
            FactorRule {
                key: "accountability",
                label: "Accountability Structure",
                max: 0.8,
                signal: Signal::Phrases {
                    floor: 0.2,
                    floor_explanation: "no accountability structure mentioned",
                    buckets: &[
                        KeywordBucket {
                            value: 0.8,
                            phrases: &[
                                "in public",
                                "build in public",
                                "share progress",
                                "accountability partner",
                                "post updates",
                            ],
                            explanation: "public commitment creates external accountability",
                        },
                        KeywordBucket {
                            value: 0.5,
                            phrases: &["blog", "demo", "newsletter", "stream"],
                            explanation: "some external visibility planned",
                        },
                        KeywordBucket {
                            value: 0.1,
                            phrases: &["just for me", "just for myself", "personal project", "private"],
                            explanation: "explicitly private work removes accountability pressure",
                        },
                    ],
                },
            },
            FactorRule {
                key: "income_urgency",
                label: "Income Urgency Fit",
                max: 0.5,
                signal: Signal::Phrases {
                    floor: 0.1,
                    floor_explanation: "no near-term income angle in the text",
                    buckets: &[
                        KeywordBucket {
                            value: 0.5,
                            phrases: &[
                                "first dollar",
                                "immediate revenue",
                                "paying customer",
                                "invoice",
                                "freelance",
                                "contract work",
                            ],
                            explanation: "directly serves near-term income needs",
                        },
                        KeywordBucket {
                            value: 0.3,
                            phrases: &["monetize", "paid", "presell"],
                            explanation: "income path exists but is not immediate",
                        },
                        KeywordBucket {
                            value: 0.05,
                            phrases: &["hobby", "free forever", "side quest"],
                            explanation: "deliberately decoupled from income",
                        },
                    ],
                },
            },
        ],
    },
    GroupRule {
        key: "strategic_fit",
        label: "Strategic Fit",
        factors: [
            FactorRule {
                key: "stack_compatibility",
                label: "Stack Compatibility",
                max: 1.0,
                signal: Signal::StackMentionRatio {
                    curve: &[(0.0, 0.0), (0.8, 0.9), (1.0, 1.0)],
                },
            },
            FactorRule {
                key: "reusability",
                label: "Shipping Habit / Reusability",
                max: 0.8,
                signal: Signal::Phrases {
                    floor: 0.2,
                    floor_explanation: "no reuse of prior work indicated",
                    buckets: &[
                        KeywordBucket {
                            value: 0.8,
                            phrases: &["reuse", "template", "library", "extract", "component"],
                            explanation: "builds on reusable pieces from shipped work",
                        },
                        KeywordBucket {
                            value: 0.5,
                            phrases: &["similar to", "based on", "existing code", "previous project"],
                            explanation: "leans on prior projects without direct reuse",
                        },
                    ],
                },
            },
            FactorRule {
                key: "validation_speed",
                label: "Public Accountability / Validation Speed",
                max: 0.4,
                signal: Signal::Phrases {
                    floor: 0.1,
                    floor_explanation: "no validation plan in the text",
                    buckets: &[
                        KeywordBucket {
                            value: 0.4,
                            phrases: &[
                                "landing page",
                                "waitlist",
                                "preorder",
                                "beta users",
                                "user feedback",
                                "validate",
                            ],
                            explanation: "fast external validation loop planned",
                        },
                        KeywordBucket {
                            value: 0.2,
                            phrases: &["survey", "interview", "poll"],
                            explanation: "slower, research-style validation",
                        },
                    ],
                },
            },
            FactorRule {
                key: "revenue_scalability",
                label: "Revenue Model Scalability",
                max: 0.3,
                signal: Signal::Phrases {
                    floor: 0.0,
                    floor_explanation: "no revenue model described",
                    buckets: &[
                        KeywordBucket {
                            value: 0.3,
                            phrases: &["subscription", "recurring", "self-serve", "api product", "b2b"],
                            explanation: "recurring, self-serve model scales without headcount",
                        },
                        KeywordBucket {
                            value: 0.15,
                            phrases: &["one-time", "lifetime deal", "consulting", "services"],
                            explanation: "revenue is linear in effort or one-shot",
                        },
                    ],
                },
            },
        ],
    },
];

/// Piecewise-linear interpolation over ordered control points. Inputs outside
/// the curve clamp to the end values, so every band boundary is continuous.
pub(crate) fn interpolate(curve: &[(f64, f64)], x: f64) -> f64 {
    let Some(&(first_x, first_y)) = curve.first() else {
        return 0.0;
    };
    if x <= first_x {
        return first_y;
    }

    for pair in curve.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            let t = (x - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }

    curve.last().map(|&(_, y)| y).unwrap_or(0.0)
}

/// Literal phrase matching over lowercased text. Multi-word phrases match as
/// substrings; single tokens must land on word boundaries so "ai" does not
/// fire inside "maintain" or "cli" inside "client".
pub(crate) fn phrase_matches(text: &str, phrase: &str) -> bool {
    if phrase.chars().any(char::is_whitespace) {
        return text.contains(phrase);
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(phrase) {
        let begin = from + offset;
        let end = begin + phrase.len();
        let clear_before = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        if clear_before && clear_after {
            return true;
        }
        from = end;
    }
    false
}

/// Count configured stack technologies mentioned in the lowercased text.
/// Returns `(mentioned, configured)`.
pub(crate) fn stack_mentions(text: &str, stack: &Stack) -> (usize, usize) {
    let total = stack.len();
    let mentioned = stack
        .technologies()
        .filter(|technology| phrase_matches(text, &technology.to_lowercase()))
        .count();
    (mentioned, total)
}
