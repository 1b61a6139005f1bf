//! Canned rationale sentences. Template-filled, never generated.

use crate::recommendation::scoring::DimensionScores;

const MAX_LISTED_KEYWORDS: usize = 3;

/// Which career-alignment rule decided the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentFit {
    TitleMatch,
    Strong,
    Good,
    Partial,
    Weak,
}

impl AlignmentFit {
    /// Tier from the position of the keyword-count rule that fired; the first rule is the top tier.
    pub fn from_keyword_rule(rule_index: Option<usize>, matched: usize) -> Self {
        if matched == 0 {
            return AlignmentFit::Weak;
        }
        match rule_index {
            Some(0) => AlignmentFit::Strong,
            Some(1) => AlignmentFit::Good,
            Some(_) => AlignmentFit::Partial,
            None => AlignmentFit::Weak,
        }
    }
}

/// "Why this fits" sentence from the alignment tier and the matched keywords.
pub fn why_fit(career: &str, fit: AlignmentFit, matched: &[&str]) -> String {
    let listed = matched
        .iter()
        .take(MAX_LISTED_KEYWORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    match fit {
        AlignmentFit::TitleMatch => format!("Directly built around your interest in {career}."),
        AlignmentFit::Strong => format!(
            "Strong match for {career}: touches {} related areas including {listed}.",
            matched.len()
        ),
        AlignmentFit::Good => format!("Good match for {career} through {listed}."),
        AlignmentFit::Partial => format!("Connects to {career} through {listed}."),
        AlignmentFit::Weak => format!("Broadens your profile beyond {career}."),
    }
}

/// Admissions-level justification from leadership, impact and spike scores.
pub fn admissions_justification(scores: &DimensionScores) -> String {
    let DimensionScores {
        leadership_depth: leadership,
        impact_scale: impact,
        spike_potential: spike,
        ..
    } = *scores;

    if leadership >= 4 && impact >= 4 {
        "Shows leadership with reach well beyond your school, a combination admissions readers rarely see.".to_string()
    } else if leadership == 5 {
        "Shows founder-level initiative: you created something rather than joined it.".to_string()
    } else if spike >= 4 {
        "Builds a distinctive spike through research, competition or original work.".to_string()
    } else if impact >= 4 {
        "Signals impact at national or international scale.".to_string()
    } else if leadership >= 4 {
        "Demonstrates sustained responsibility for leading others.".to_string()
    } else {
        "Adds steady evidence of commitment and contribution.".to_string()
    }
}
