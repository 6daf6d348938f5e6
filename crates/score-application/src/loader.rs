//! Fetches the data the post-login redirect depends on.

use std::sync::Arc;

use score_core::Result;
use score_core::identity::Identity;
use score_core::navigation::ReadinessUpdate;
use score_core::repository::DataGateway;

/// Loads categories, questions and both submission collections for an identity.
pub struct ReferenceLoader {
    data: Arc<dyn DataGateway>,
}

impl ReferenceLoader {
    pub fn new(data: Arc<dyn DataGateway>) -> Self {
        Self { data }
    }

    /// Runs the four fetches concurrently.
    ///
    /// A failed fetch is logged and reported as an empty collection, so the
    /// result always carries one update per collection.
    pub async fn load(&self, identity: &Identity) -> Vec<ReadinessUpdate> {
        let target = identity.question_target();
        let (categories, questions, questionnaires, neuromapas) = tokio::join!(
            self.data.fetch_categories(target),
            self.data.fetch_questions(target),
            self.data.fetch_questionnaire_submissions(identity),
            self.data.fetch_neuromapa_submissions(identity),
        );

        vec![
            ReadinessUpdate::Categories(count_or_empty("categories", categories)),
            ReadinessUpdate::Questions(count_or_empty("questions", questions)),
            ReadinessUpdate::QuestionnaireSubmissions(count_or_empty(
                "questionnaire submissions",
                questionnaires,
            )),
            ReadinessUpdate::NeuromapaSubmissions(count_or_empty(
                "NeuroMapa submissions",
                neuromapas,
            )),
        ]
    }
}

fn count_or_empty<T>(what: &str, result: Result<Vec<T>>) -> usize {
    match result {
        Ok(items) => items.len(),
        Err(e) => {
            tracing::warn!("[ReferenceLoader] Failed to load {}: {}", what, e);
            0
        }
    }
}
