//! Eligibility filter for oral-test assignment.

use std::collections::{BTreeMap, HashSet};

use super::model::{Assignment, Candidate, EligibilityCriteria};
use crate::score::ScoreRow;

/// Builds one candidate per employee email by averaging their score rows.
///
/// Rows without an email cannot be assigned a test and are skipped. Emails
/// are compared case-insensitively; name and company come from the first row
/// seen for the employee.
pub fn candidates_from_rows(rows: &[ScoreRow]) -> Vec<Candidate> {
    let mut by_email: BTreeMap<String, (Candidate, usize)> = BTreeMap::new();

    for row in rows {
        let Some(email) = row.employee_email.as_deref() else {
            continue;
        };
        let entry = by_email.entry(email.to_lowercase()).or_insert_with(|| {
            (
                Candidate {
                    email: email.to_string(),
                    name: row.employee_name.clone().unwrap_or_else(|| email.to_string()),
                    company_name: row.company_name.clone(),
                    average_score: 0.0,
                },
                0,
            )
        });
        entry.0.average_score += row.score;
        entry.1 += 1;
    }

    by_email
        .into_values()
        .map(|(mut candidate, count)| {
            candidate.average_score /= count as f64;
            candidate
        })
        .collect()
}

/// Candidates that may be assigned `criteria.test_id`.
///
/// Keeps candidates inside the inclusive score window and, when given, the
/// company (case-insensitive). Anyone already holding an assignment for the
/// same test, whatever its status, is excluded. Duplicate emails are
/// collapsed to their first occurrence before any filter runs, so a later
/// duplicate never stands in for a first record that was filtered out.
/// Output is ordered by score descending, then name.
pub fn eligible_candidates(
    candidates: &[Candidate],
    assignments: &[Assignment],
    criteria: &EligibilityCriteria,
) -> Vec<Candidate> {
    let assigned: HashSet<String> = assignments
        .iter()
        .filter(|a| a.test_id == criteria.test_id)
        .map(|a| a.employee_email.to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut eligible: Vec<Candidate> = candidates
        .iter()
        .filter(|c| seen.insert(c.email.to_lowercase()))
        .filter(|c| criteria.min_score.is_none_or(|min| c.average_score >= min))
        .filter(|c| criteria.max_score.is_none_or(|max| c.average_score <= max))
        .filter(|c| {
            criteria
                .company
                .as_deref()
                .is_none_or(|company| c.company_name.eq_ignore_ascii_case(company))
        })
        .filter(|c| !assigned.contains(&c.email.to_lowercase()))
        .cloned()
        .collect();

    eligible.sort_by(|a, b| {
        b.average_score
            .total_cmp(&a.average_score)
            .then_with(|| a.name.cmp(&b.name))
    });
    eligible
}
