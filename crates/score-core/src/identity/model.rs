//! Identity domain model.
//!
//! Represents the logged-in user. Exactly one variant is active at a time and
//! an identity is never mutated in place: a role change means a new login.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};

use crate::navigation::Route;
use crate::repository::QuestionTarget;

/// Role discriminator of an [`Identity`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Company,
    Employee,
    Group,
}

impl Role {
    /// The dashboard a role lands on when it asks for a page it may not see.
    pub fn home_route(self) -> Route {
        match self {
            Role::Group => Route::GroupDashboard,
            Role::Admin | Role::Company | Role::Employee => Route::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub phone: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub group_name: String,
    #[serde(default)]
    pub managed_companies: BTreeSet<String>,
}

/// The resolved, typed representation of the logged-in user.
///
/// Serialized with an internal `role` tag so the stored form is
/// self-describing and can be restored without a network call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Identity {
    Admin(AdminIdentity),
    Company(CompanyIdentity),
    Employee(EmployeeIdentity),
    Group(GroupIdentity),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin(_) => Role::Admin,
            Identity::Company(_) => Role::Company,
            Identity::Employee(_) => Role::Employee,
            Identity::Group(_) => Role::Group,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Identity::Admin(a) => &a.id,
            Identity::Company(c) => &c.id,
            Identity::Employee(e) => &e.id,
            Identity::Group(g) => &g.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Admin(a) => &a.name,
            Identity::Company(c) => &c.name,
            Identity::Employee(e) => &e.name,
            Identity::Group(g) => &g.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Identity::Admin(a) => &a.email,
            Identity::Company(c) => &c.email,
            Identity::Employee(e) => &e.email,
            Identity::Group(g) => &g.email,
        }
    }

    /// Company the identity belongs to, for roles that have one.
    pub fn company_name(&self) -> Option<&str> {
        match self {
            Identity::Company(c) => Some(&c.company_name),
            Identity::Employee(e) => Some(&e.company_name),
            Identity::Admin(_) | Identity::Group(_) => None,
        }
    }

    /// Which question set this identity answers.
    pub fn question_target(&self) -> QuestionTarget {
        match self {
            Identity::Employee(_) => QuestionTarget::Employee,
            _ => QuestionTarget::Company,
        }
    }

    /// Whether a group identity manages `company`. Always false for other roles.
    pub fn manages_company(&self, company: &str) -> bool {
        match self {
            Identity::Group(g) => g.managed_companies.contains(company),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn group() -> Identity {
        Identity::Group(GroupIdentity {
            id: "g1".to_string(),
            name: "Holding".to_string(),
            email: "ops@holding.test".to_string(),
            group_name: "Holding SA".to_string(),
            managed_companies: ["Acme".to_string(), "Beta".to_string()]
                .into_iter()
                .collect(),
        })
    }

    #[test]
    fn test_role_parses_case_insensitively() {
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("EMPLOYEE").unwrap(), Role::Employee);
        assert!(Role::from_str("superuser").is_err());
        assert_eq!(Role::Group.to_string(), "group");
    }

    #[test]
    fn test_home_routes() {
        assert_eq!(Role::Admin.home_route(), Route::Dashboard);
        assert_eq!(Role::Employee.home_route(), Route::Dashboard);
        assert_eq!(Role::Group.home_route(), Route::GroupDashboard);
    }

    #[test]
    fn test_stored_form_is_tagged_by_role() {
        let json = serde_json::to_value(group()).unwrap();
        assert_eq!(json["role"], "group");
        assert_eq!(json["managed_companies"][0], "Acme");

        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, group());
    }

    #[test]
    fn test_manages_company() {
        let identity = group();
        assert!(identity.manages_company("Acme"));
        assert!(!identity.manages_company("Gamma"));
        assert_eq!(identity.company_name(), None);
    }
}
