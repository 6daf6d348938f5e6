//! Oral-test assignment domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::fields::{optional_text, text};

const TEST_ID_KEYS: &[&str] = &["test_id", "testId", "oral_test_id", "prova_id"];
const EMAIL_KEYS: &[&str] = &["employee_email", "employeeEmail", "email"];
const STATUS_KEYS: &[&str] = &["status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Reviewed,
}

/// An oral test already assigned to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub test_id: String,
    pub employee_email: String,
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Rows missing the test id or the employee email are dropped; an
    /// unrecognized status reads as pending.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let status = optional_text(record, STATUS_KEYS)
            .and_then(|s| AssignmentStatus::from_str(&s).ok())
            .unwrap_or(AssignmentStatus::Pending);
        let test_id = text(record, TEST_ID_KEYS);
        let employee_email = text(record, EMAIL_KEYS);
        if test_id.is_empty() || employee_email.is_empty() {
            return None;
        }
        Some(Self {
            test_id,
            employee_email,
            status,
        })
    }
}

/// An employee who may receive an oral test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub email: String,
    pub name: String,
    pub company_name: String,
    pub average_score: f64,
}

/// Filters applied when choosing whom to assign a test to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub test_id: String,
    /// Inclusive lower bound on the average score.
    pub min_score: Option<f64>,
    /// Inclusive upper bound on the average score.
    pub max_score: Option<f64>,
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_from_value() {
        let a = Assignment::from_value(&json!({
            "testId": 12,
            "email": "ana@acme.test",
            "status": "Reviewed",
        }))
        .unwrap();
        assert_eq!(a.test_id, "12");
        assert_eq!(a.status, AssignmentStatus::Reviewed);

        let a = Assignment::from_value(&json!({ "test_id": "t", "email": "x@y", "status": "?" }))
            .unwrap();
        assert_eq!(a.status, AssignmentStatus::Pending);

        assert!(Assignment::from_value(&json!({ "test_id": "t" })).is_none());
    }
}
