//! Domain knowledge table: career root terms mapped to related concept keywords.
//!
//! Built once on first use and never mutated; shared by every request.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const ENTRIES: &[(&str, &[&str])] = &[
    (
        "doctor",
        &["medical", "medicine", "clinical", "patient", "hospital", "health", "healthcare", "biology", "surgery"],
    ),
    (
        "physician",
        &["medical", "medicine", "clinical", "patient", "hospital", "health", "healthcare"],
    ),
    (
        "surgeon",
        &["medical", "surgery", "clinical", "patient", "hospital", "anatomy"],
    ),
    (
        "nurse",
        &["nursing", "patient", "care", "hospital", "health", "clinical"],
    ),
    (
        "medicine",
        &["medical", "clinical", "patient", "hospital", "health", "biology"],
    ),
    (
        "engineer",
        &["engineering", "robotics", "design", "technology", "physics", "mathematics", "prototype"],
    ),
    (
        "engineering",
        &["engineer", "robotics", "design", "technology", "physics", "mathematics"],
    ),
    (
        "software",
        &["programming", "coding", "computer", "app", "web", "developer", "hackathon", "algorithm"],
    ),
    (
        "programmer",
        &["programming", "coding", "software", "computer", "hackathon"],
    ),
    (
        "developer",
        &["programming", "coding", "software", "app", "web", "hackathon"],
    ),
    (
        "computer",
        &["programming", "coding", "software", "algorithm", "hackathon", "technology"],
    ),
    (
        "data",
        &["statistics", "analytics", "machine learning", "programming", "mathematics"],
    ),
    (
        "lawyer",
        &["law", "legal", "debate", "justice", "court", "policy", "advocacy"],
    ),
    (
        "legal",
        &["law", "debate", "justice", "court", "policy"],
    ),
    (
        "politics",
        &["government", "policy", "debate", "election", "civic", "model un"],
    ),
    (
        "diplomat",
        &["international", "model un", "policy", "language", "government", "global"],
    ),
    (
        "business",
        &["entrepreneurship", "startup", "finance", "marketing", "management", "economics"],
    ),
    (
        "entrepreneur",
        &["startup", "business", "entrepreneurship", "venture", "founder"],
    ),
    (
        "finance",
        &["investing", "economics", "accounting", "banking", "markets", "business"],
    ),
    (
        "economist",
        &["economics", "policy", "finance", "statistics", "markets"],
    ),
    (
        "scientist",
        &["research", "science", "laboratory", "experiment", "biology", "chemistry", "physics"],
    ),
    (
        "research",
        &["science", "laboratory", "experiment", "publication"],
    ),
    (
        "biology",
        &["science", "laboratory", "genetics", "ecology", "research"],
    ),
    (
        "artist",
        &["art", "painting", "drawing", "design", "exhibition", "studio"],
    ),
    (
        "designer",
        &["design", "art", "graphic", "fashion", "portfolio"],
    ),
    (
        "architect",
        &["architecture", "design", "drafting", "urban", "building"],
    ),
    (
        "musician",
        &["music", "orchestra", "band", "choir", "composition", "performance"],
    ),
    (
        "writer",
        &["writing", "journalism", "literature", "newspaper", "poetry", "publication"],
    ),
    (
        "journalist",
        &["journalism", "newspaper", "writing", "media", "reporting"],
    ),
    (
        "teacher",
        &["teaching", "tutoring", "education", "mentoring", "classroom"],
    ),
    (
        "psychologist",
        &["psychology", "mental health", "counseling", "behavior", "neuroscience"],
    ),
    (
        "environmental",
        &["environment", "sustainability", "climate", "ecology", "conservation"],
    ),
    (
        "pilot",
        &["aviation", "flight", "aerospace", "aircraft"],
    ),
];

static DOMAIN_TABLE: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Related concept keywords for a lowercase career root term, if the table knows it.
pub fn related_concepts(root: &str) -> Option<&'static [&'static str]> {
    DOMAIN_TABLE.get(root).copied()
}
