//! Survey reference records: categories, questions and NeuroMapa submissions.
//!
//! Only what the navigation gate and the summaries need is projected from the
//! raw API rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{optional_text, text};

const ID_KEYS: &[&str] = &["id", "_id", "uuid"];
const NAME_KEYS: &[&str] = &["name", "nome", "category", "categoria", "title"];
const QUESTION_TEXT_KEYS: &[&str] = &["text", "question", "pergunta", "title"];
const QUESTION_CATEGORY_KEYS: &[&str] = &["category", "categoria", "category_name", "categoryName"];
const EMAIL_KEYS: &[&str] = &["employee_email", "employeeEmail", "email"];
const COMPANY_KEYS: &[&str] = &["company_name", "companyName", "company", "empresa"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Rows with neither id nor name are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let id = text(record, ID_KEYS);
        let name = text(record, NAME_KEYS);
        if id.is_empty() && name.is_empty() {
            return None;
        }
        Some(Self { id, name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: Option<String>,
}

impl Question {
    /// Rows without question text are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        Some(Self {
            id: text(record, ID_KEYS),
            text: optional_text(record, QUESTION_TEXT_KEYS)?,
            category: optional_text(record, QUESTION_CATEGORY_KEYS),
        })
    }
}

/// A NeuroMapa profiling submission. Treated as opaque apart from ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuroMapaSubmission {
    pub id: String,
    pub employee_email: Option<String>,
    pub company_name: Option<String>,
}

impl NeuroMapaSubmission {
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        Some(Self {
            id: text(record, ID_KEYS),
            employee_email: optional_text(record, EMAIL_KEYS),
            company_name: optional_text(record, COMPANY_KEYS),
        })
    }
}
