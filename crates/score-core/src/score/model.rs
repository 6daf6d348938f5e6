//! Flat score rows and the per-company summaries built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{number, optional_text, text};

const COMPANY_KEYS: &[&str] = &["company_name", "companyName", "company", "empresa"];
const EMAIL_KEYS: &[&str] = &["employee_email", "employeeEmail", "email"];
const NAME_KEYS: &[&str] = &["employee_name", "employeeName", "name", "nome"];
const CATEGORY_KEYS: &[&str] = &["category", "categoria", "category_name", "categoryName"];
const SCORE_KEYS: &[&str] = &["score", "nota", "value", "pontuacao"];

/// One answer score as returned by the submission endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub company_name: String,
    pub employee_email: Option<String>,
    pub employee_name: Option<String>,
    pub category: String,
    pub score: f64,
}

impl ScoreRow {
    /// Projects a raw API row. Rows without a usable numeric score are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        Some(Self {
            company_name: text(record, COMPANY_KEYS),
            employee_email: optional_text(record, EMAIL_KEYS),
            employee_name: optional_text(record, NAME_KEYS),
            category: text(record, CATEGORY_KEYS),
            score: number(record, SCORE_KEYS)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub company_name: String,
    pub categories: Vec<CategorySummary>,
    /// Mean over every row of the company, not a mean of category means.
    pub overall_average: f64,
    pub respondents: usize,
}
