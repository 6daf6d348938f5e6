//! Stateful wrapper around the navigation gate.

use score_core::identity::Role;
use score_core::navigation::{Decision, Readiness, ReadinessUpdate, Route, View, decide};

/// Holds the gate inputs for the current session and re-evaluates the gate
/// whenever one of them changes.
#[derive(Debug, Clone)]
pub struct NavigationController {
    role: Option<Role>,
    epoch: u64,
    route: Route,
    readiness: Readiness,
    redirect_performed: bool,
    decision: Decision,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        let readiness = Readiness::default();
        Self {
            role: None,
            epoch: 0,
            route: Route::Login,
            readiness,
            redirect_performed: false,
            decision: decide(None, Route::Login, &readiness, false),
        }
    }

    /// Installs a new identity (or none). Readiness and the redirect latch
    /// belong to the previous identity and are discarded.
    pub fn on_identity_changed(&mut self, role: Option<Role>, epoch: u64) -> Decision {
        self.role = role;
        self.epoch = epoch;
        self.readiness = Readiness::default();
        self.redirect_performed = false;
        self.evaluate()
    }

    pub fn on_route_changed(&mut self, route: Route) -> Decision {
        self.route = route;
        self.evaluate()
    }

    /// Applies a completed fetch. Returns `None` when the update was issued
    /// under another identity and has been dropped.
    pub fn on_readiness(&mut self, epoch: u64, update: ReadinessUpdate) -> Option<Decision> {
        if epoch != self.epoch {
            tracing::debug!(
                "[NavigationController] Dropped stale update {:?} (epoch {} != {})",
                update,
                epoch,
                self.epoch
            );
            return None;
        }
        self.readiness.apply(update);
        Some(self.evaluate())
    }

    /// Applies several completed fetches together and evaluates the gate once,
    /// so no decision is taken on a partially applied batch.
    pub fn on_readiness_batch(
        &mut self,
        epoch: u64,
        updates: &[ReadinessUpdate],
    ) -> Option<Decision> {
        if epoch != self.epoch {
            tracing::debug!(
                "[NavigationController] Dropped stale batch of {} updates (epoch {} != {})",
                updates.len(),
                epoch,
                self.epoch
            );
            return None;
        }
        for update in updates {
            self.readiness.apply(*update);
        }
        Some(self.evaluate())
    }

    fn evaluate(&mut self) -> Decision {
        let decision = decide(self.role, self.route, &self.readiness, self.redirect_performed);
        if let Some(target) = decision.redirect_to {
            if target != self.route {
                tracing::info!(
                    "[NavigationController] Redirecting {} -> {}",
                    self.route.fragment(),
                    target.fragment()
                );
            }
            self.route = target;
        }
        self.redirect_performed = decision.redirect_performed;
        tracing::debug!("[NavigationController] {:?}", decision);
        self.decision = decision;
        decision
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn view(&self) -> View {
        self.decision.view
    }

    pub fn effective_route(&self) -> Route {
        self.decision.effective_route
    }

    pub fn is_loading(&self) -> bool {
        self.decision.is_loading()
    }

    /// The route as last requested or redirected to.
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn redirect_performed(&self) -> bool {
        self.redirect_performed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
