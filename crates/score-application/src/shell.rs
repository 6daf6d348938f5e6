//! AppShell - the application surface a front end drives.
//!
//! Wires the session use case, the reference-data loader and the navigation
//! controller together. Every session transition is forwarded to the
//! controller with the session epoch it happened under, and data loaded for
//! an older epoch is discarded on arrival.

use std::sync::Arc;

use score_core::identity::Identity;
use score_core::navigation::{Decision, Route, View};
use score_core::oral_test::{Candidate, EligibilityCriteria};
use score_core::repository::{AuthGateway, DataGateway, KeyValueStore};
use score_core::score::CompanySummary;
use score_core::session::SessionStore;
use score_core::{Result, ScoreError};
use tokio::sync::Mutex;

use crate::loader::ReferenceLoader;
use crate::navigation::NavigationController;
use crate::report_service::ReportService;
use crate::session_usecase::SessionUseCase;

pub struct AppShell {
    session: SessionUseCase,
    loader: ReferenceLoader,
    reports: ReportService,
    navigation: Mutex<NavigationController>,
}

impl AppShell {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        data: Arc<dyn DataGateway>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            session: SessionUseCase::new(auth, data.clone(), SessionStore::new(store)),
            loader: ReferenceLoader::new(data.clone()),
            reports: ReportService::new(data),
            navigation: Mutex::new(NavigationController::new()),
        }
    }

    /// Restores the persisted session, opens `fragment` and, when someone is
    /// logged in, loads their reference data.
    pub async fn start(&self, fragment: &str) -> Decision {
        if self.restore().await.is_none() {
            return self.navigate(fragment).await;
        }
        self.navigate(fragment).await;
        self.refresh().await
    }

    /// Restores the persisted session without loading any data.
    pub async fn restore(&self) -> Option<Identity> {
        let identity = self.session.restore().await;
        self.sync_identity().await;
        identity
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.current_identity().await
    }

    pub async fn selected_company(&self) -> Option<String> {
        self.session
            .snapshot()
            .await
            .selected_company()
            .map(str::to_string)
    }

    /// Whether a login request is in flight.
    pub fn is_logging_in(&self) -> bool {
        self.session.is_logging_in()
    }

    /// Logs in and loads the new identity's reference data.
    ///
    /// The returned decision reflects the post-login redirect once the
    /// reference data has arrived.
    pub async fn login(&self, email: &str, password: &str) -> Result<Decision> {
        self.session.login(email, password).await?;
        self.sync_identity().await;
        Ok(self.refresh().await)
    }

    pub async fn logout(&self) -> Decision {
        self.session.logout().await;
        self.sync_identity().await
    }

    /// Handles a URL fragment change.
    pub async fn navigate(&self, fragment: &str) -> Decision {
        let route = Route::from_fragment(fragment);
        self.navigation.lock().await.on_route_changed(route)
    }

    /// Reloads categories, questions and submissions for the current identity.
    ///
    /// Results are tagged with the epoch captured before the fetches start; if
    /// the identity changes meanwhile they are dropped.
    pub async fn refresh(&self) -> Decision {
        let snapshot = self.session.snapshot().await;
        let Some(identity) = snapshot.identity() else {
            return self.decision().await;
        };

        let updates = self.loader.load(identity).await;

        let mut nav = self.navigation.lock().await;
        nav.on_readiness_batch(snapshot.epoch(), &updates);
        nav.decision()
    }

    pub async fn select_company(&self, company: &str) -> Result<()> {
        self.session.select_company(company).await
    }

    pub async fn decision(&self) -> Decision {
        self.navigation.lock().await.decision()
    }

    pub async fn view(&self) -> View {
        self.navigation.lock().await.view()
    }

    pub async fn effective_route(&self) -> Route {
        self.navigation.lock().await.effective_route()
    }

    pub async fn is_loading(&self) -> bool {
        self.navigation.lock().await.is_loading()
    }

    /// Score summaries for the logged-in identity.
    pub async fn summaries(&self) -> Result<Vec<CompanySummary>> {
        let snapshot = self.session.snapshot().await;
        let identity = snapshot.identity().ok_or_else(not_logged_in)?;
        self.reports
            .summaries(identity, snapshot.selected_company())
            .await
    }

    /// Oral-test candidates for the logged-in identity.
    pub async fn eligible(&self, criteria: &EligibilityCriteria) -> Result<Vec<Candidate>> {
        let identity = self.current_identity().await.ok_or_else(not_logged_in)?;
        self.reports.eligible(&identity, criteria).await
    }

    async fn sync_identity(&self) -> Decision {
        let snapshot = self.session.snapshot().await;
        self.navigation
            .lock()
            .await
            .on_identity_changed(snapshot.role(), snapshot.epoch())
    }
}

fn not_logged_in() -> ScoreError {
    ScoreError::invalid_operation("not logged in")
}
