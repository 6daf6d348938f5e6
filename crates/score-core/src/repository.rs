//! Ports to the external collaborators: the webhook API and durable client storage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::activity::ActivityEntry;
use crate::error::Result;
use crate::identity::Identity;
use crate::oral_test::Assignment;
use crate::score::ScoreRow;
use crate::survey::{Category, NeuroMapaSubmission, Question};

/// Which question set a request targets.
///
/// The API exposes separate endpoints for company-targeted and
/// employee-targeted categories and questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTarget {
    Company,
    Employee,
}

/// Authentication endpoint.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Posts the credentials and returns the raw, schema-less response record.
    ///
    /// Transport and HTTP status failures are reported as
    /// [`ScoreError::Communication`](crate::ScoreError::Communication).
    async fn authenticate(&self, email: &str, password: &str) -> Result<Value>;
}

/// Reference-data, submission and activity endpoints.
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn fetch_categories(&self, target: QuestionTarget) -> Result<Vec<Category>>;

    async fn fetch_questions(&self, target: QuestionTarget) -> Result<Vec<Question>>;

    /// Questionnaire score rows visible to `identity`.
    async fn fetch_questionnaire_submissions(&self, identity: &Identity) -> Result<Vec<ScoreRow>>;

    /// NeuroMapa submissions visible to `identity`.
    async fn fetch_neuromapa_submissions(
        &self,
        identity: &Identity,
    ) -> Result<Vec<NeuroMapaSubmission>>;

    /// Oral-test assignments visible to `identity`.
    async fn fetch_oral_test_assignments(&self, identity: &Identity) -> Result<Vec<Assignment>>;

    /// Records an activity-log entry.
    async fn log_activity(&self, entry: &ActivityEntry) -> Result<()>;
}

/// Durable client storage: synchronous key to string, last write wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
