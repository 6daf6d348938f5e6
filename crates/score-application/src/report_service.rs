//! Score reports: per-company summaries and oral-test eligibility.

use std::sync::Arc;

use score_core::identity::Identity;
use score_core::oral_test::{Candidate, EligibilityCriteria, candidates_from_rows, eligible_candidates};
use score_core::repository::DataGateway;
use score_core::score::{CompanySummary, aggregate};
use score_core::{Result, ScoreError};

pub struct ReportService {
    data: Arc<dyn DataGateway>,
}

impl ReportService {
    pub fn new(data: Arc<dyn DataGateway>) -> Self {
        Self { data }
    }

    /// Company summaries visible to `identity`.
    ///
    /// Groups see their managed companies, narrowed to `selected_company`
    /// when one is selected. The API already scopes the rows; the filter
    /// here only guards against rows outside the group's companies.
    pub async fn summaries(
        &self,
        identity: &Identity,
        selected_company: Option<&str>,
    ) -> Result<Vec<CompanySummary>> {
        let rows = self.data.fetch_questionnaire_submissions(identity).await?;

        let visible = rows.iter().filter(|row| match identity {
            Identity::Group(_) => {
                identity.manages_company(&row.company_name)
                    && selected_company.is_none_or(|c| row.company_name == c)
            }
            _ => true,
        });

        Ok(aggregate(visible))
    }

    /// Employees who may be assigned the test in `criteria`.
    ///
    /// Only admins and company accounts assign oral tests. A company account
    /// is always restricted to its own company.
    pub async fn eligible(
        &self,
        identity: &Identity,
        criteria: &EligibilityCriteria,
    ) -> Result<Vec<Candidate>> {
        let criteria = match identity {
            Identity::Admin(_) => criteria.clone(),
            Identity::Company(c) => EligibilityCriteria {
                company: Some(c.company_name.clone()),
                ..criteria.clone()
            },
            other => {
                return Err(ScoreError::invalid_operation(format!(
                    "{} accounts cannot assign oral tests",
                    other.role()
                )));
            }
        };
        if criteria.test_id.trim().is_empty() {
            return Err(ScoreError::invalid_operation("a test id is required"));
        }

        let (rows, assignments) = tokio::join!(
            self.data.fetch_questionnaire_submissions(identity),
            self.data.fetch_oral_test_assignments(identity),
        );
        let candidates = candidates_from_rows(&rows?);
        let eligible = eligible_candidates(&candidates, &assignments?, &criteria);

        tracing::debug!(
            "[ReportService] {} of {} candidates eligible for test {}",
            eligible.len(),
            candidates.len(),
            criteria.test_id
        );
        Ok(eligible)
    }
}
