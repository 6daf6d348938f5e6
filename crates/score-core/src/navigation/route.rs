//! Route tokens and the role access table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::identity::Role;

/// Page token taken from the navigation fragment (`#dashboard`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Route {
    #[default]
    Login,
    Admin,
    Dashboard,
    Questionnaire,
    GroupDashboard,
    Profile,
    Neuromapa,
    OralTests,
    ActivityLog,
    Companies,
    Employees,
    Results,
}

impl Route {
    /// Parses a navigation fragment.
    ///
    /// `#dashboard`, `dashboard` and `#/dashboard?tab=1` all yield
    /// [`Route::Dashboard`]. Empty and unknown tokens yield [`Route::Login`].
    pub fn from_fragment(fragment: &str) -> Self {
        let token = fragment.trim().trim_start_matches('#').trim_start_matches('/');
        let token = token.split(['?', '/']).next().unwrap_or_default();
        if token.is_empty() {
            return Route::Login;
        }
        Route::from_str(token).unwrap_or(Route::Login)
    }

    /// The fragment form, e.g. `#group-dashboard`.
    pub fn fragment(self) -> String {
        format!("#{self}")
    }

    /// Whether this is the login-or-empty route.
    pub fn is_login(self) -> bool {
        self == Route::Login
    }

    /// Whether `role` may see this route.
    pub fn allows(self, role: Role) -> bool {
        use Role::*;
        match self {
            Route::Login | Route::Profile | Route::Results => true,
            Route::Admin | Route::ActivityLog => role == Admin,
            Route::Dashboard | Route::OralTests => matches!(role, Admin | Company | Employee),
            Route::Questionnaire | Route::Neuromapa => matches!(role, Company | Employee),
            Route::GroupDashboard | Route::Companies => matches!(role, Admin | Group),
            Route::Employees => matches!(role, Admin | Company),
        }
    }
}
