//! Oral-test assignment: who may be given a test.

mod eligibility;
mod model;

pub use eligibility::{candidates_from_rows, eligible_candidates};
pub use model::{Assignment, AssignmentStatus, Candidate, EligibilityCriteria};
