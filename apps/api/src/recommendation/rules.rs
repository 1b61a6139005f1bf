//! Scoring rule tables.
//!
//! Every dimension is an ordered list of `(condition, score)` rules evaluated
//! top to bottom; the first rule whose condition holds decides the score.
//! Thresholds and vocabularies are plain data so they can be overridden from a
//! JSON file without code changes.

use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound of every dimension score.
pub const MAX_DIMENSION_SCORE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule<P> {
    pub when: P,
    pub score: u8,
}

impl<P> Rule<P> {
    pub fn new(when: P, score: u8) -> Self {
        Self { when, score }
    }
}

/// Score of the first rule whose condition holds, if any.
pub fn first_match<P>(rules: &[Rule<P>], holds: impl FnMut(&P) -> bool) -> Option<u8> {
    first_match_at(rules, holds).map(|(_, score)| score)
}

/// Like `first_match`, also returning the position of the rule that fired.
pub fn first_match_at<P>(
    rules: &[Rule<P>],
    mut holds: impl FnMut(&P) -> bool,
) -> Option<(usize, u8)> {
    rules
        .iter()
        .position(|rule| holds(&rule.when))
        .map(|index| (index, rules[index].score))
}

/// Threshold table: `when` is a minimum count.
pub fn score_count(rules: &[Rule<usize>], count: usize) -> u8 {
    first_match(rules, |min| count >= *min).unwrap_or(0)
}

// ────────────────────────────────────────────────────────────────────────────
// Rule configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRules {
    /// Score when the normalized career phrase appears in the title.
    pub title_match_score: u8,
    /// Thresholds over the number of intent keywords found in the record.
    pub keyword_matches: Vec<Rule<usize>>,
}

/// First bucket whose vocabulary the text mentions wins; otherwise `default_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRules {
    pub buckets: Vec<Rule<Vec<String>>>,
    pub default_score: u8,
}

/// Total occurrences of `terms` bucketed by `thresholds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRules {
    pub terms: Vec<String>,
    pub thresholds: Vec<Rule<usize>>,
}

/// All five dimension tables.
///
/// Vocabulary terms match whole words; a trailing `*` marks a stem that matches
/// any word starting with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub alignment: AlignmentRules,
    pub leadership: BucketRules,
    pub ownership: CountRules,
    pub impact: BucketRules,
    pub spike: CountRules,
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn count_thresholds(scores: [u8; 4]) -> Vec<Rule<usize>> {
    vec![
        Rule::new(3, scores[0]),
        Rule::new(2, scores[1]),
        Rule::new(1, scores[2]),
        Rule::new(0, scores[3]),
    ]
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            alignment: AlignmentRules {
                title_match_score: 5,
                keyword_matches: count_thresholds([4, 3, 2, 1]),
            },
            leadership: BucketRules {
                buckets: vec![
                    Rule::new(
                        terms(&[
                            "found", "founded", "founder", "founders", "founding", "start",
                            "started", "starting", "starts", "create", "created", "creates",
                            "creating", "creator", "establish", "established", "establishing",
                            "launch", "launched", "launching", "initiate", "initiated",
                            "initiating",
                        ]),
                        5,
                    ),
                    Rule::new(
                        terms(&[
                            "lead", "leads", "leading", "leader", "leaders", "leadership", "led",
                            "manage", "managed", "manages", "managing", "manager", "direct",
                            "directed", "directing", "director", "organize", "organized",
                            "organizes", "organizing", "organizer", "organise", "organised",
                            "organiser", "coordinate", "coordinated", "coordinating",
                            "coordinator", "head", "headed", "heads",
                        ]),
                        4,
                    ),
                    Rule::new(
                        terms(&[
                            "participate", "participated", "participating", "participant",
                            "join", "joined", "joining", "joins", "volunteer", "volunteered",
                            "volunteering", "volunteers", "assist", "assisted", "assisting",
                            "assistance", "assistant", "help", "helped", "helping", "helps",
                            "support", "supported", "supporting", "supports",
                        ]),
                        2,
                    ),
                ],
                default_score: 3,
            },
            ownership: CountRules {
                terms: terms(&[
                    "design", "designed", "designing", "designs", "develop", "developed",
                    "developing", "develops", "build", "building", "builds", "built", "create",
                    "created", "creates", "creating", "own", "owned", "owner", "owns", "drive",
                    "drives", "driving", "drove", "scale", "scaled", "scaling", "grow", "grew",
                    "growing", "grown", "grows", "implement", "implemented", "implementing",
                    "implements",
                ]),
                thresholds: count_thresholds([5, 4, 3, 2]),
            },
            impact: BucketRules {
                buckets: vec![
                    Rule::new(
                        terms(&["global", "globally", "international", "internationally", "worldwide", "world"]),
                        5,
                    ),
                    Rule::new(
                        terms(&["national", "nationally", "nationals", "nationwide", "country", "countries"]),
                        4,
                    ),
                    Rule::new(
                        terms(&["regional", "region", "state", "statewide", "district", "districts", "province", "provincial"]),
                        3,
                    ),
                    Rule::new(
                        terms(&["local", "locally", "community", "communities", "school", "schools", "neighborhood", "neighborhoods", "city"]),
                        2,
                    ),
                ],
                default_score: 3,
            },
            spike: CountRules {
                terms: terms(&[
                    "research", "researched", "researching", "researcher", "publication",
                    "publications", "published", "award", "awards", "awarded", "competition",
                    "competitions", "innovation", "innovations", "original", "unique", "first",
                ]),
                thresholds: count_thresholds([5, 4, 3, 2]),
            },
        }
    }
}

impl ScoringRules {
    /// Reads rule overrides from a JSON file, or returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read scoring rules at {}", path.display()))?;
        let rules: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid scoring rules in {}", path.display()))?;
        rules
            .validate()
            .with_context(|| format!("rejected scoring rules in {}", path.display()))?;
        Ok(rules)
    }

    /// Every score must lie in 1..=5 and every count table must end with a
    /// `when: 0` floor, so the composite always stays within 5..=25.
    pub fn validate(&self) -> Result<()> {
        check_score("alignment.title_match_score", self.alignment.title_match_score)?;
        check_count_table("alignment.keyword_matches", &self.alignment.keyword_matches)?;
        check_buckets("leadership", &self.leadership)?;
        check_count_table("ownership.thresholds", &self.ownership.thresholds)?;
        check_buckets("impact", &self.impact)?;
        check_count_table("spike.thresholds", &self.spike.thresholds)?;
        Ok(())
    }
}

fn check_score(name: &str, score: u8) -> Result<()> {
    if !(1..=MAX_DIMENSION_SCORE).contains(&score) {
        bail!("{name}: score {score} outside 1..={MAX_DIMENSION_SCORE}");
    }
    Ok(())
}

fn check_count_table(name: &str, rules: &[Rule<usize>]) -> Result<()> {
    match rules.last() {
        Some(last) if last.when == 0 => {}
        _ => bail!("{name}: table must end with a `when: 0` rule"),
    }
    for rule in rules {
        check_score(name, rule.score)?;
    }
    Ok(())
}

fn check_buckets(name: &str, rules: &BucketRules) -> Result<()> {
    check_score(&format!("{name}.default_score"), rules.default_score)?;
    for bucket in &rules.buckets {
        if bucket.when.iter().all(|t| t.trim().trim_end_matches('*').is_empty()) {
            bail!("{name}: bucket with score {} has no terms", bucket.score);
        }
        check_score(&format!("{name}.buckets"), bucket.score)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// A vocabulary compiled to word-boundary patterns.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    patterns: Vec<Regex>,
}

impl Vocabulary {
    pub fn compile(terms: &[String]) -> Result<Self> {
        let patterns = terms
            .iter()
            .map(|term| {
                let term = term.trim().to_lowercase();
                let source = match term.strip_suffix('*') {
                    Some(stem) => format!(r"\b{}\w*", regex::escape(stem)),
                    None => format!(r"\b{}\b", regex::escape(&term)),
                };
                Regex::new(&source).with_context(|| format!("invalid vocabulary term '{term}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn mentions(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Total number of term occurrences in `text`.
    pub fn occurrences(&self, text: &str) -> usize {
        self.patterns.iter().map(|p| p.find_iter(text).count()).sum()
    }
}

/// Compiles every bucket's vocabulary, keeping scores and order.
pub fn compile_buckets(buckets: &[Rule<Vec<String>>]) -> Result<Vec<Rule<Vocabulary>>> {
    buckets
        .iter()
        .map(|rule| -> Result<Rule<Vocabulary>> {
            Ok(Rule::new(Vocabulary::compile(&rule.when)?, rule.score))
        })
        .collect()
}
