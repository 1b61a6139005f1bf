//! Candidate retrieval: high-recall filter over one category's catalog.

use crate::models::activity::ActivityRecord;
use crate::recommendation::intent::CareerIntent;

/// Keeps every record whose searchable text contains at least one intent keyword
/// as a whole word. Catalog order is preserved.
pub fn retrieve_candidates(
    intent: &CareerIntent,
    entries: Vec<ActivityRecord>,
) -> Vec<ActivityRecord> {
    let patterns = intent.patterns();

    entries
        .into_iter()
        .filter(|record| {
            let text = record.searchable_text();
            patterns.iter().any(|p| p.is_match(&text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::Category;
    use crate::recommendation::intent::interpret;
    use uuid::Uuid;

    fn record(title: &str, description: &str, tags: &[&str]) -> ActivityRecord {
        ActivityRecord {
            id: Uuid::new_v4(),
            category: Category::SpecializationSpike,
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_domain_expansion_retrieves_related_record() {
        let intent = interpret("Doctor").unwrap();
        let entries = vec![record(
            "Volunteer at children's hospital",
            "medical clinical patient care assistance",
            &[],
        )];
        assert_eq!(retrieve_candidates(&intent, entries).len(), 1);
    }

    #[test]
    fn test_substring_does_not_count_as_match() {
        // "artist" expands to "art"; neither "start" nor "smart" may match it.
        let intent = interpret("artist").unwrap();
        assert!(intent.keywords.contains("art"));
        let entries = vec![
            record("Start a coding club", "Smart devices workshop", &[]),
            record("Community art mural", "Paint a public wall", &[]),
        ];
        let candidates = retrieve_candidates(&intent, entries);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Community art mural");
    }

    #[test]
    fn test_tags_are_searched() {
        let intent = interpret("pilot").unwrap();
        let entries = vec![record("Weekend club", "Meet other students", &["Aviation"])];
        assert_eq!(retrieve_candidates(&intent, entries).len(), 1);
    }

    #[test]
    fn test_any_single_keyword_is_enough() {
        let intent = interpret("software engineer").unwrap();
        let entries = vec![
            record("Robotics team", "", &[]),
            record("Hackathon", "", &[]),
            record("Choir", "Sing with peers", &[]),
        ];
        let titles: Vec<String> = retrieve_candidates(&intent, entries)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Robotics team", "Hackathon"]);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let intent = interpret("Doctor").unwrap();
        let entries = vec![record("Chess club", "Strategy games", &[])];
        assert!(retrieve_candidates(&intent, entries).is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        let intent = interpret("Doctor").unwrap();
        assert!(retrieve_candidates(&intent, vec![]).is_empty());
    }
}
