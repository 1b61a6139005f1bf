//! Multi-dimensional scorer.
//!
//! Five 0–5 dimensions per candidate, each driven by a rule table from
//! `rules::ScoringRules`. Pure and deterministic: the same record and intent
//! always produce the same scores and rationale.

use anyhow::Result;
use serde::Serialize;

use crate::models::activity::ActivityRecord;
use crate::recommendation::intent::{normalize, CareerIntent};
use crate::recommendation::rationale::{admissions_justification, why_fit, AlignmentFit};
use crate::recommendation::rules::{
    compile_buckets, first_match, first_match_at, score_count, Rule, ScoringRules, Vocabulary,
    MAX_DIMENSION_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScores {
    pub career_alignment: u8,
    pub leadership_depth: u8,
    pub ownership_initiative: u8,
    pub impact_scale: u8,
    pub spike_potential: u8,
}

impl DimensionScores {
    pub fn composite(&self) -> u8 {
        self.career_alignment
            + self.leadership_depth
            + self.ownership_initiative
            + self.impact_scale
            + self.spike_potential
    }
}

/// A candidate with its scores attached, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredActivity {
    pub activity: ActivityRecord,
    pub dimensions: DimensionScores,
    pub composite_score: u8,
    pub why_fit: String,
    pub admissions_justification: String,
}

struct BucketTable {
    buckets: Vec<Rule<Vocabulary>>,
    default_score: u8,
}

impl BucketTable {
    fn evaluate(&self, text: &str) -> u8 {
        first_match(&self.buckets, |vocab| vocab.mentions(text)).unwrap_or(self.default_score)
    }
}

struct CountTable {
    vocabulary: Vocabulary,
    thresholds: Vec<Rule<usize>>,
}

impl CountTable {
    fn evaluate(&self, text: &str) -> u8 {
        score_count(&self.thresholds, self.vocabulary.occurrences(text))
    }
}

/// Rule tables compiled once at startup and shared read-only across requests.
pub struct Scorer {
    title_match_score: u8,
    keyword_matches: Vec<Rule<usize>>,
    leadership: BucketTable,
    ownership: CountTable,
    impact: BucketTable,
    spike: CountTable,
}

impl Scorer {
    pub fn new(rules: &ScoringRules) -> Result<Self> {
        Ok(Self {
            title_match_score: rules.alignment.title_match_score,
            keyword_matches: rules.alignment.keyword_matches.clone(),
            leadership: BucketTable {
                buckets: compile_buckets(&rules.leadership.buckets)?,
                default_score: rules.leadership.default_score,
            },
            ownership: CountTable {
                vocabulary: Vocabulary::compile(&rules.ownership.terms)?,
                thresholds: rules.ownership.thresholds.clone(),
            },
            impact: BucketTable {
                buckets: compile_buckets(&rules.impact.buckets)?,
                default_score: rules.impact.default_score,
            },
            spike: CountTable {
                vocabulary: Vocabulary::compile(&rules.spike.terms)?,
                thresholds: rules.spike.thresholds.clone(),
            },
        })
    }

    /// Scores one candidate against the request's career intent.
    pub fn score(&self, activity: ActivityRecord, intent: &CareerIntent) -> ScoredActivity {
        let text = activity.searchable_text();
        let matched = intent.matched_keywords(&text);

        let (career_alignment, fit) = if intent.phrase_matches(&normalize(&activity.title)) {
            (self.title_match_score, AlignmentFit::TitleMatch)
        } else {
            let fired = first_match_at(&self.keyword_matches, |min| matched.len() >= *min);
            (
                fired.map(|(_, score)| score).unwrap_or(0),
                AlignmentFit::from_keyword_rule(fired.map(|(index, _)| index), matched.len()),
            )
        };

        let dimensions = DimensionScores {
            career_alignment: clamp(career_alignment),
            leadership_depth: clamp(self.leadership.evaluate(&text)),
            ownership_initiative: clamp(self.ownership.evaluate(&text)),
            impact_scale: clamp(self.impact.evaluate(&text)),
            spike_potential: clamp(self.spike.evaluate(&text)),
        };

        let why_fit = why_fit(intent.raw_text.trim(), fit, &matched);
        let admissions_justification = admissions_justification(&dimensions);

        ScoredActivity {
            activity,
            composite_score: dimensions.composite(),
            dimensions,
            why_fit,
            admissions_justification,
        }
    }
}

fn clamp(score: u8) -> u8 {
    score.min(MAX_DIMENSION_SCORE)
}
