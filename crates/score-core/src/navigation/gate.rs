//! The navigation gate decision policy.
//!
//! [`decide`] is a pure function of (role, requested route, readiness,
//! redirect latch). It is re-run after every change to any of those inputs;
//! the latch guarantees at most one automatic redirect per login session.

use serde::{Deserialize, Serialize};

use super::readiness::Readiness;
use super::route::Route;
use crate::identity::Role;

/// What the page renderer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "snake_case")]
pub enum View {
    /// Waiting for reference data before the post-login redirect.
    Loading,
    Login,
    Page(Route),
}

/// Outcome of one evaluation of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub view: View,
    /// The route the page renderer should treat as current.
    pub effective_route: Route,
    /// Set when the requested route must be replaced (programmatic redirect).
    pub redirect_to: Option<Route>,
    /// Latch value after this evaluation.
    pub redirect_performed: bool,
}

impl Decision {
    fn stay(view: View, route: Route, redirect_performed: bool) -> Self {
        Self {
            view,
            effective_route: route,
            redirect_to: None,
            redirect_performed,
        }
    }

    fn redirect(target: Route) -> Self {
        Self {
            view: View::Page(target),
            effective_route: target,
            redirect_to: Some(target),
            redirect_performed: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view == View::Loading
    }
}

/// Decides what to show for the given inputs.
///
/// * Unauthenticated users only ever see the login view; a protected route is
///   replaced by the login route.
/// * An authenticated user still on the login route, before the latch is set,
///   is sent to their landing page. Groups go straight to the group dashboard.
///   Other roles wait (view [`View::Loading`]) until categories and questions
///   are loaded, then land on the questionnaire when they have no submission
///   of any kind (admins excepted), or on the dashboard otherwise.
/// * With the latch set, the login route falls back to the login view.
/// * A protected route is shown when the role may access it, otherwise the
///   role's home route is shown instead. Reaching a protected route sets the
///   latch, so manual navigation is never overridden afterwards.
pub fn decide(
    role: Option<Role>,
    route: Route,
    readiness: &Readiness,
    redirect_performed: bool,
) -> Decision {
    let Some(role) = role else {
        return if route.is_login() {
            Decision::stay(View::Login, Route::Login, redirect_performed)
        } else {
            Decision {
                view: View::Login,
                effective_route: Route::Login,
                redirect_to: Some(Route::Login),
                redirect_performed,
            }
        };
    };

    if !route.is_login() {
        let shown = if route.allows(role) {
            route
        } else {
            role.home_route()
        };
        return Decision::stay(View::Page(shown), shown, true);
    }

    if redirect_performed {
        return Decision::stay(View::Login, Route::Login, true);
    }

    // Groups do not depend on the category/question prerequisites.
    if role == Role::Group {
        return Decision::redirect(Route::GroupDashboard);
    }

    if !readiness.reference_ready() {
        return Decision::stay(View::Loading, Route::Login, false);
    }

    if role != Role::Admin && !readiness.has_any_submission() {
        Decision::redirect(Route::Questionnaire)
    } else {
        Decision::redirect(Route::Dashboard)
    }
}
