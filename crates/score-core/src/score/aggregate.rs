//! Grouping of flat score rows into per-company, per-category summaries.

use std::collections::{BTreeMap, BTreeSet};

use super::model::{CategorySummary, CompanySummary, ScoreRow};

#[derive(Default)]
struct Accumulator {
    total: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, score: f64) {
        self.total += score;
        self.count += 1;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

#[derive(Default)]
struct CompanyAccumulator {
    overall: Accumulator,
    categories: BTreeMap<String, Accumulator>,
    emails: BTreeSet<String>,
    anonymous: usize,
}

/// Groups rows by company and category.
///
/// Companies and categories come out sorted by name. Respondents are counted
/// by distinct (case-insensitive) employee email; each row without an email
/// counts as its own respondent.
pub fn aggregate<'a, I>(rows: I) -> Vec<CompanySummary>
where
    I: IntoIterator<Item = &'a ScoreRow>,
{
    let mut companies: BTreeMap<String, CompanyAccumulator> = BTreeMap::new();

    for row in rows {
        let company = companies.entry(row.company_name.clone()).or_default();
        company.overall.add(row.score);
        company
            .categories
            .entry(row.category.clone())
            .or_default()
            .add(row.score);
        match &row.employee_email {
            Some(email) => {
                company.emails.insert(email.to_lowercase());
            }
            None => company.anonymous += 1,
        }
    }

    companies
        .into_iter()
        .map(|(company_name, acc)| CompanySummary {
            company_name,
            categories: acc
                .categories
                .iter()
                .map(|(category, c)| CategorySummary {
                    category: category.clone(),
                    average: c.average(),
                    count: c.count,
                })
                .collect(),
            overall_average: acc.overall.average(),
            respondents: acc.emails.len() + acc.anonymous,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(company: &str, email: Option<&str>, category: &str, score: f64) -> ScoreRow {
        ScoreRow {
            company_name: company.to_string(),
            employee_email: email.map(str::to_string),
            employee_name: None,
            category: category.to_string(),
            score,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&Vec::<ScoreRow>::new()).is_empty());
    }

    #[test]
    fn test_groups_by_company_and_category() {
        let rows = vec![
            row("Beta", Some("x@beta.test"), "Focus", 4.0),
            row("Acme", Some("ana@acme.test"), "Leadership", 8.0),
            row("Acme", Some("ANA@acme.test"), "Leadership", 6.0),
            row("Acme", Some("bo@acme.test"), "Communication", 10.0),
        ];

        let summaries = aggregate(&rows);
        assert_eq!(summaries.len(), 2);

        let acme = &summaries[0];
        assert_eq!(acme.company_name, "Acme");
        assert_eq!(acme.respondents, 2);
        assert_eq!(acme.overall_average, 8.0);
        assert_eq!(acme.categories[0].category, "Communication");
        assert_eq!(acme.categories[1].category, "Leadership");
        assert_eq!(acme.categories[1].average, 7.0);
        assert_eq!(acme.categories[1].count, 2);

        assert_eq!(summaries[1].company_name, "Beta");
        assert_eq!(summaries[1].respondents, 1);
    }

    #[test]
    fn test_rows_without_email_count_individually() {
        let rows = vec![
            row("Acme", None, "Focus", 5.0),
            row("Acme", None, "Focus", 7.0),
        ];
        let summaries = aggregate(&rows);
        assert_eq!(summaries[0].respondents, 2);
        assert_eq!(summaries[0].categories[0].average, 6.0);
    }
}
