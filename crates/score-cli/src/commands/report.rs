use anyhow::Result;
use score_application::AppShell;
use score_core::oral_test::EligibilityCriteria;

use super::{Output, user_error};

pub async fn summary(shell: &AppShell, output: &Output) -> Result<()> {
    shell.restore().await;
    let summaries = shell.summaries().await.map_err(user_error)?;

    output.emit(&summaries, || {
        if summaries.is_empty() {
            println!("No submissions yet.");
            return;
        }
        for company in &summaries {
            println!(
                "{}  avg {:.2}  ({} respondents)",
                company.company_name, company.overall_average, company.respondents
            );
            for category in &company.categories {
                println!(
                    "    {:<24} {:>6.2}  n={}",
                    category.category, category.average, category.count
                );
            }
        }
    })
}

pub async fn eligible(
    shell: &AppShell,
    output: &Output,
    criteria: &EligibilityCriteria,
) -> Result<()> {
    shell.restore().await;
    let candidates = shell.eligible(criteria).await.map_err(user_error)?;

    output.emit(&candidates, || {
        if candidates.is_empty() {
            println!("No eligible employees for test {}.", criteria.test_id);
            return;
        }
        println!("Eligible for test {}:", criteria.test_id);
        for c in &candidates {
            println!(
                "  {:>6.2}  {} <{}>  {}",
                c.average_score, c.name, c.email, c.company_name
            );
        }
    })
}
