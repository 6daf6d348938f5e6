//! Hand-written gateways shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use score_application::AppShell;
use score_core::activity::ActivityEntry;
use score_core::identity::Identity;
use score_core::oral_test::Assignment;
use score_core::repository::{AuthGateway, DataGateway, KeyValueStore, QuestionTarget};
use score_core::score::ScoreRow;
use score_core::survey::{Category, NeuroMapaSubmission, Question};
use score_core::{Result, ScoreError};
use score_infrastructure::MemoryKeyValueStore;
use serde_json::{Value, json};
use tokio::sync::Notify;

/// Parks a call until released, signalling when it has been entered.
#[derive(Default)]
pub struct Hold {
    pub entered: Notify,
    pub release: Notify,
}

impl Hold {
    async fn wait(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

/// Auth gateway answering from a table of email -> raw response.
#[derive(Default)]
pub struct MockAuth {
    users: HashMap<String, Value>,
    pub calls: AtomicUsize,
    pub hold: Mutex<Option<Arc<Hold>>>,
}

impl MockAuth {
    pub fn with_user(mut self, email: &str, response: Value) -> Self {
        self.users.insert(email.to_string(), response);
        self
    }

    /// Parks the next authentication calls until the hold is released.
    pub fn hold(&self) -> Arc<Hold> {
        let hold = Arc::new(Hold::default());
        *self.hold.lock().unwrap() = Some(hold.clone());
        hold
    }
}

#[async_trait]
impl AuthGateway for MockAuth {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let hold = self.hold.lock().unwrap().clone();
        if let Some(hold) = hold {
            hold.wait().await;
        }
        self.users
            .get(email)
            .cloned()
            .ok_or_else(|| ScoreError::communication("401 Unauthorized"))
    }
}

/// Data gateway serving fixed collections.
#[derive(Default)]
pub struct MockData {
    pub categories: usize,
    pub questions: usize,
    pub rows: Vec<ScoreRow>,
    pub neuromapas: usize,
    pub assignments: Vec<Assignment>,
    pub fail_reference: bool,
    pub fail_activity: bool,
    pub activity: Mutex<Vec<ActivityEntry>>,
    pub targets: Mutex<Vec<QuestionTarget>>,
    pub hold: Mutex<Option<Arc<Hold>>>,
}

impl MockData {
    /// Reference data present, no submissions.
    pub fn ready() -> Self {
        Self {
            categories: 3,
            questions: 10,
            ..Self::default()
        }
    }

    /// Parks the next category fetches until the hold is released.
    pub fn hold(&self) -> Arc<Hold> {
        let hold = Arc::new(Hold::default());
        *self.hold.lock().unwrap() = Some(hold.clone());
        hold
    }

    pub fn release_holds(&self) {
        *self.hold.lock().unwrap() = None;
    }

    pub fn actions(&self) -> Vec<String> {
        self.activity
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.action.to_string())
            .collect()
    }
}

#[async_trait]
impl DataGateway for MockData {
    async fn fetch_categories(&self, target: QuestionTarget) -> Result<Vec<Category>> {
        self.targets.lock().unwrap().push(target);
        let hold = self.hold.lock().unwrap().clone();
        if let Some(hold) = hold {
            hold.wait().await;
        }
        if self.fail_reference {
            return Err(ScoreError::communication("503 Service Unavailable"));
        }
        Ok((0..self.categories)
            .map(|i| Category {
                id: i.to_string(),
                name: format!("Category {i}"),
            })
            .collect())
    }

    async fn fetch_questions(&self, _target: QuestionTarget) -> Result<Vec<Question>> {
        if self.fail_reference {
            return Err(ScoreError::communication("503 Service Unavailable"));
        }
        Ok((0..self.questions)
            .map(|i| Question {
                id: i.to_string(),
                text: format!("Question {i}?"),
                category: None,
            })
            .collect())
    }

    async fn fetch_questionnaire_submissions(&self, _identity: &Identity) -> Result<Vec<ScoreRow>> {
        Ok(self.rows.clone())
    }

    async fn fetch_neuromapa_submissions(
        &self,
        _identity: &Identity,
    ) -> Result<Vec<NeuroMapaSubmission>> {
        Ok((0..self.neuromapas)
            .map(|i| NeuroMapaSubmission {
                id: i.to_string(),
                employee_email: None,
                company_name: None,
            })
            .collect())
    }

    async fn fetch_oral_test_assignments(&self, _identity: &Identity) -> Result<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    async fn log_activity(&self, entry: &ActivityEntry) -> Result<()> {
        if self.fail_activity {
            return Err(ScoreError::communication("activity endpoint down"));
        }
        self.activity.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub fn admin_response() -> Value {
    json!({ "access_level": "Admin", "id": 1, "name": "Root", "email": "root@score.test" })
}

pub fn company_response() -> Value {
    json!({
        "access_level": "Company",
        "id": 2,
        "name": "Acme HR",
        "email": "hr@acme.test",
        "company_name": "Acme",
        "phone": "555-0100"
    })
}

pub fn employee_response() -> Value {
    json!({
        "access_level": "Employee",
        "id": 3,
        "name": "Ana",
        "email": "ana@acme.test",
        "company_name": "Acme",
        "position": "Analyst"
    })
}

pub fn group_response() -> Value {
    json!({
        "access_level": "Group",
        "id": 4,
        "name": "Holding Owner",
        "email": "owner@holding.test",
        "group_name": "Holding",
        "managed_companies": "Acme, Beta"
    })
}

pub fn row(company: &str, email: Option<&str>, category: &str, score: f64) -> ScoreRow {
    ScoreRow {
        company_name: company.to_string(),
        employee_email: email.map(str::to_string),
        employee_name: email.map(|e| e.split('@').next().unwrap_or(e).to_string()),
        category: category.to_string(),
        score,
    }
}

pub fn all_users() -> MockAuth {
    MockAuth::default()
        .with_user("root@score.test", admin_response())
        .with_user("hr@acme.test", company_response())
        .with_user("ana@acme.test", employee_response())
        .with_user("owner@holding.test", group_response())
        .with_user("broken@score.test", json!({ "access_level": "Auditor", "email": "broken@score.test" }))
}

pub struct Harness {
    pub shell: Arc<AppShell>,
    pub auth: Arc<MockAuth>,
    pub data: Arc<MockData>,
    pub store: Arc<MemoryKeyValueStore>,
}

impl Harness {
    pub fn new(data: MockData) -> Self {
        Self::with_store(data, Arc::new(MemoryKeyValueStore::new()))
    }

    pub fn with_store(data: MockData, store: Arc<MemoryKeyValueStore>) -> Self {
        let auth = Arc::new(all_users());
        let data = Arc::new(data);
        let shell = Arc::new(AppShell::new(
            auth.clone(),
            data.clone(),
            store.clone() as Arc<dyn KeyValueStore>,
        ));
        Self {
            shell,
            auth,
            data,
            store,
        }
    }
}
