//! WebhookClient - reqwest implementation of the webhook API ports.
//!
//! Every endpoint is a plain JSON webhook. Collections may come back as a bare
//! array, as `{ "data": [...] }`, or as a single object; all three are
//! normalized to a list of rows before projection.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use score_core::activity::ActivityEntry;
use score_core::config::{ApiConfig, EndpointConfig};
use score_core::identity::Identity;
use score_core::oral_test::Assignment;
use score_core::repository::{AuthGateway, DataGateway, QuestionTarget};
use score_core::score::ScoreRow;
use score_core::survey::{Category, NeuroMapaSubmission, Question};
use score_core::{Result, ScoreError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the webhook API.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    base_url: String,
    endpoints: EndpointConfig,
}

impl WebhookClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ScoreError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            endpoints: config.endpoints.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_rows(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<Value>> {
        let url = self.url(path);
        tracing::debug!("[WebhookClient] GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| ScoreError::communication(format!("GET {url} failed: {err}")))?;

        let body = read_json(response, &url).await?;
        Ok(into_rows(body))
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!("[WebhookClient] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| ScoreError::communication(format!("POST {url} failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ScoreError::communication(format!(
                "POST {url} returned {status}: {}",
                truncate(&text)
            )));
        }

        Ok(response)
    }

    fn category_path(&self, target: QuestionTarget) -> &str {
        match target {
            QuestionTarget::Company => &self.endpoints.company_categories,
            QuestionTarget::Employee => &self.endpoints.employee_categories,
        }
    }

    fn question_path(&self, target: QuestionTarget) -> &str {
        match target {
            QuestionTarget::Company => &self.endpoints.company_questions,
            QuestionTarget::Employee => &self.endpoints.employee_questions,
        }
    }
}

/// Query parameters scoping a collection to what `identity` may see.
fn scope_query(identity: &Identity) -> Vec<(&'static str, String)> {
    match identity {
        Identity::Admin(_) => Vec::new(),
        Identity::Company(c) => vec![("company", c.company_name.clone())],
        Identity::Employee(e) => vec![("email", e.email.clone())],
        Identity::Group(g) => vec![(
            "companies",
            g.managed_companies
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )],
    }
}

async fn read_json(response: Response, url: &str) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ScoreError::communication(format!(
            "{url} returned {status}: {}",
            truncate(&text)
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|err| ScoreError::communication(format!("Failed to read {url}: {err}")))?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text)
        .map_err(|err| ScoreError::communication(format!("Invalid JSON from {url}: {err}")))
}

fn into_rows(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                map.insert("data".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        _ => Vec::new(),
    }
}

fn truncate(text: &str) -> &str {
    const LIMIT: usize = 200;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl AuthGateway for WebhookClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Value> {
        let url = self.url(&self.endpoints.login);
        let response = self
            .post_json(&self.endpoints.login, &LoginRequest { email, password })
            .await?;
        read_json(response, &url).await
    }
}

#[async_trait]
impl DataGateway for WebhookClient {
    async fn fetch_categories(&self, target: QuestionTarget) -> Result<Vec<Category>> {
        let rows = self.get_rows(self.category_path(target), &[]).await?;
        Ok(rows.iter().filter_map(Category::from_value).collect())
    }

    async fn fetch_questions(&self, target: QuestionTarget) -> Result<Vec<Question>> {
        let rows = self.get_rows(self.question_path(target), &[]).await?;
        Ok(rows.iter().filter_map(Question::from_value).collect())
    }

    async fn fetch_questionnaire_submissions(&self, identity: &Identity) -> Result<Vec<ScoreRow>> {
        let rows = self
            .get_rows(
                &self.endpoints.questionnaire_submissions,
                &scope_query(identity),
            )
            .await?;
        Ok(rows.iter().filter_map(ScoreRow::from_value).collect())
    }

    async fn fetch_neuromapa_submissions(
        &self,
        identity: &Identity,
    ) -> Result<Vec<NeuroMapaSubmission>> {
        let rows = self
            .get_rows(&self.endpoints.neuromapa_submissions, &scope_query(identity))
            .await?;
        Ok(rows
            .iter()
            .filter_map(NeuroMapaSubmission::from_value)
            .collect())
    }

    async fn fetch_oral_test_assignments(&self, identity: &Identity) -> Result<Vec<Assignment>> {
        let rows = self
            .get_rows(&self.endpoints.oral_test_assignments, &scope_query(identity))
            .await?;
        Ok(rows.iter().filter_map(Assignment::from_value).collect())
    }

    async fn log_activity(&self, entry: &ActivityEntry) -> Result<()> {
        self.post_json(&self.endpoints.activity_log, entry).await?;
        Ok(())
    }
}
