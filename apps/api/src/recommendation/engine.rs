//! Recommendation orchestrator.
//!
//! validate → fetch catalog → interpret intent → retrieve → score → rank → project.
//! Stateless per call; the only shared data are the compiled scorer and the
//! domain table, both read-only.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::ActivityStore;
use crate::errors::AppError;
use crate::models::activity::{ActivityRecord, ActivityView, Category};
use crate::recommendation::intent::{interpret, CareerIntent};
use crate::recommendation::ranking::{rank, RankedActivity, MAX_RECOMMENDATIONS};
use crate::recommendation::retrieval::retrieve_candidates;
use crate::recommendation::scoring::Scorer;

/// Full pipeline output, including the internal scores behind the ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub intent: CareerIntent,
    pub ranked: Vec<RankedActivity>,
}

impl Recommendation {
    /// Public projection: ordered activity views without scores.
    pub fn into_views(self) -> Vec<ActivityView> {
        self.ranked
            .into_iter()
            .map(|r| ActivityView::from(r.scored.activity))
            .collect()
    }
}

pub struct RecommendationEngine {
    store: Arc<dyn ActivityStore>,
    scorer: Scorer,
    fetch_timeout: Duration,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn ActivityStore>, scorer: Scorer, fetch_timeout: Duration) -> Self {
        Self {
            store,
            scorer,
            fetch_timeout,
        }
    }

    /// Ordered shortlist of activity views, best fit first.
    pub async fn recommend(
        &self,
        career_text: &str,
        category: i64,
    ) -> Result<Vec<ActivityView>, AppError> {
        Ok(self.explain(career_text, category).await?.into_views())
    }

    /// Runs the pipeline and keeps per-candidate scores and rationale.
    pub async fn explain(
        &self,
        career_text: &str,
        category: i64,
    ) -> Result<Recommendation, AppError> {
        let category = Category::try_from(category)?;
        let intent = interpret(career_text)?;
        debug!("Expanded career intent to {:?}", intent.keywords);

        let entries = self.fetch(category).await?;
        let catalog_size = entries.len();
        if entries.is_empty() {
            info!(?category, "No catalog entries for category");
            return Ok(Recommendation {
                intent,
                ranked: Vec::new(),
            });
        }

        let candidates = retrieve_candidates(&intent, entries);
        let candidate_count = candidates.len();

        let scored = candidates
            .into_iter()
            .map(|activity| self.scorer.score(activity, &intent))
            .collect();
        let ranked = rank(scored, MAX_RECOMMENDATIONS);

        info!(
            ?category,
            catalog_size,
            candidate_count,
            returned = ranked.len(),
            "Computed recommendations"
        );

        Ok(Recommendation { intent, ranked })
    }

    /// Single bounded catalog read. Failures are surfaced, never retried here.
    async fn fetch(&self, category: Category) -> Result<Vec<ActivityRecord>, AppError> {
        match tokio::time::timeout(self.fetch_timeout, self.store.find_by_category(category)).await
        {
            Ok(Ok(entries)) => Ok(entries),
            Ok(Err(e)) => {
                warn!("Catalog fetch for {:?} failed: {e}", category);
                Err(e.into())
            }
            Err(_) => {
                warn!(
                    "Catalog fetch for {:?} timed out after {:?}",
                    category, self.fetch_timeout
                );
                Err(AppError::StoreUnavailable(format!(
                    "catalog fetch timed out after {}ms",
                    self.fetch_timeout.as_millis()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryActivityStore, StoreError};
    use crate::recommendation::rules::ScoringRules;
    use async_trait::async_trait;
    use uuid::Uuid;

    const SPIKE: i64 = 1;
    const LEADERSHIP: i64 = 2;

    fn record(category: Category, title: &str, description: &str) -> ActivityRecord {
        ActivityRecord {
            id: Uuid::new_v4(),
            category,
            title: title.to_string(),
            description: description.to_string(),
            tags: vec![],
        }
    }

    fn engine_with(store: impl ActivityStore + 'static) -> RecommendationEngine {
        RecommendationEngine::new(
            Arc::new(store),
            Scorer::new(&ScoringRules::default()).unwrap(),
            Duration::from_millis(500),
        )
    }

    fn medical_catalog() -> InMemoryActivityStore {
        InMemoryActivityStore::new(vec![
            record(
                Category::SpecializationSpike,
                "Volunteer at children's hospital",
                "medical clinical patient care assistance",
            ),
            record(
                Category::SpecializationSpike,
                "Founded a global health nonprofit",
                "Designed and launched medical outreach, published original research",
            ),
            record(Category::SpecializationSpike, "Chess club", "Strategy games"),
            record(Category::Leadership, "Hospital board intern", "patient advocacy"),
        ])
    }

    struct FailingStore;

    #[async_trait]
    impl ActivityStore for FailingStore {
        async fn find_by_category(
            &self,
            _category: Category,
        ) -> Result<Vec<ActivityRecord>, StoreError> {
            Err(StoreError::Seed("connection refused".to_string()))
        }
    }

    struct SlowStore;

    #[async_trait]
    impl ActivityStore for SlowStore {
        async fn find_by_category(
            &self,
            _category: Category,
        ) -> Result<Vec<ActivityRecord>, StoreError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_blank_career_text_is_invalid_argument() {
        let engine = engine_with(medical_catalog());
        let err = engine.recommend("   ", SPIKE).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_unknown_category_is_invalid_argument() {
        let engine = engine_with(medical_catalog());
        let err = engine.recommend("Doctor", 99).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_validation_happens_before_fetch() {
        let engine = engine_with(FailingStore);
        let err = engine.recommend("", SPIKE).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_empty_success() {
        let engine = engine_with(InMemoryActivityStore::default());
        let views = engine.recommend("Doctor", LEADERSHIP).await.unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_doctor_retrieves_hospital_volunteering() {
        let engine = engine_with(InMemoryActivityStore::new(vec![record(
            Category::SpecializationSpike,
            "Volunteer at children's hospital",
            "medical clinical patient care assistance",
        )]));

        let result = engine.explain("Doctor", SPIKE).await.unwrap();
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].rank, 1);
        assert_eq!(result.ranked[0].scored.dimensions.leadership_depth, 2);
    }

    #[tokio::test]
    async fn test_no_matching_candidates_is_empty_success() {
        let engine = engine_with(InMemoryActivityStore::new(vec![
            record(Category::SpecializationSpike, "Chess club", "Strategy games"),
            record(Category::SpecializationSpike, "Start a smart garden", ""),
        ]));
        let views = engine.recommend("artist", SPIKE).await.unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_only_requested_category_and_best_first() {
        let engine = engine_with(medical_catalog());
        let views = engine.recommend("Doctor", SPIKE).await.unwrap();

        let titles: Vec<&str> = views.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Founded a global health nonprofit",
                "Volunteer at children's hospital"
            ]
        );
        assert!(views.iter().all(|v| v.category == Category::SpecializationSpike));
    }

    #[tokio::test]
    async fn test_output_capped_and_ranks_contiguous() {
        let entries = (0..30)
            .map(|i| {
                let description = if i % 3 == 0 {
                    "national medical research"
                } else {
                    "medical support"
                };
                record(Category::SpecializationSpike, &format!("Clinic shift {i}"), description)
            })
            .collect();
        let engine = engine_with(InMemoryActivityStore::new(entries));

        let result = engine.explain("Doctor", SPIKE).await.unwrap();
        assert_eq!(result.ranked.len(), MAX_RECOMMENDATIONS);
        for (index, item) in result.ranked.iter().enumerate() {
            assert_eq!(item.rank, index + 1);
            assert!((5..=25).contains(&item.scored.composite_score));
            assert_eq!(item.scored.composite_score, item.scored.dimensions.composite());
        }
        for pair in result.ranked.windows(2) {
            assert!(pair[0].scored.composite_score >= pair[1].scored.composite_score);
        }
    }

    #[tokio::test]
    async fn test_identical_inputs_yield_identical_output() {
        let engine = engine_with(medical_catalog());
        let first = engine.explain("Doctor", SPIKE).await.unwrap();
        let second = engine.explain("Doctor", SPIKE).await.unwrap();
        assert_eq!(first.ranked, second.ranked);
    }

    #[tokio::test]
    async fn test_store_failure_is_store_unavailable() {
        let engine = engine_with(FailingStore);
        let err = engine.recommend("Doctor", SPIKE).await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_store_times_out() {
        let engine = engine_with(SlowStore);
        let err = engine.recommend("Doctor", SPIKE).await.unwrap_err();
        match err {
            AppError::StoreUnavailable(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected StoreUnavailable, got {other:?}"),
        }
    }
}
