//! Session use case: login, logout, restore and company selection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use score_core::activity::{ActivityAction, ActivityEntry};
use score_core::identity::{Identity, resolve_identity};
use score_core::repository::{AuthGateway, DataGateway};
use score_core::session::{Session, SessionStore};
use score_core::{Result, ScoreError};
use tokio::sync::RwLock;

/// Owns the process-wide [`Session`] and keeps durable storage in step with it.
pub struct SessionUseCase {
    auth: Arc<dyn AuthGateway>,
    data: Arc<dyn DataGateway>,
    store: SessionStore,
    session: RwLock<Session>,
    /// Set while a login request is in flight.
    logging_in: AtomicBool,
}

/// Clears the busy flag when the login attempt ends, however it ends.
struct LoginGuard<'a>(&'a AtomicBool);

impl Drop for LoginGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionUseCase {
    /// Creates the use case with a logged-out session. Call
    /// [`restore`](Self::restore) to pick up a persisted identity.
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        data: Arc<dyn DataGateway>,
        store: SessionStore,
    ) -> Self {
        Self {
            auth,
            data,
            store,
            session: RwLock::new(Session::new()),
            logging_in: AtomicBool::new(false),
        }
    }

    /// Restores the identity persisted by a previous run, without a network call.
    ///
    /// Malformed stored data restores nothing. Once this process has logged
    /// in or out, the in-memory session wins and storage is not reread.
    pub async fn restore(&self) -> Option<Identity> {
        let mut session = self.session.write().await;
        if session.epoch() > 0 {
            return session.identity().cloned();
        }

        let restored = self.store.load();
        let identity = restored.identity().cloned();
        if let Some(identity) = &identity {
            tracing::info!(
                "[SessionUseCase] Restored {} session for {}",
                identity.role(),
                identity.email()
            );
        }
        *session = restored;
        identity
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.read().await.identity().cloned()
    }

    /// A copy of the current session (identity, selected company, epoch).
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    pub fn is_logging_in(&self) -> bool {
        self.logging_in.load(Ordering::Acquire)
    }

    /// Authenticates and installs the resolved identity.
    ///
    /// Only one login may be in flight; a concurrent attempt fails with
    /// [`ScoreError::LoginInProgress`]. On failure the session and storage
    /// are left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        if self
            .logging_in
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ScoreError::LoginInProgress);
        }
        let _guard = LoginGuard(&self.logging_in);

        let raw = self.auth.authenticate(email.trim(), password).await?;
        let identity = resolve_identity(&raw).inspect_err(|e| {
            tracing::warn!("[SessionUseCase] Rejected login response for {}: {}", email, e);
        })?;

        {
            let mut session = self.session.write().await;
            session.begin(identity.clone());
            self.persist(&session);
        }

        tracing::info!(
            "[SessionUseCase] Logged in {} as {}",
            identity.email(),
            identity.role()
        );
        self.record(ActivityEntry::new(&identity, ActivityAction::Login))
            .await;

        Ok(identity)
    }

    /// Clears the identity, the selected company and both storage keys.
    ///
    /// Idempotent. Storage failures are logged, never returned.
    pub async fn logout(&self) {
        let previous = {
            let mut session = self.session.write().await;
            let previous = session.identity().cloned();
            session.end();
            previous
        };

        if let Err(e) = self.store.clear() {
            tracing::warn!("[SessionUseCase] Failed to clear stored session: {}", e);
        }

        if let Some(identity) = previous {
            tracing::info!("[SessionUseCase] Logged out {}", identity.email());
            self.record(ActivityEntry::new(&identity, ActivityAction::Logout))
                .await;
        }
    }

    /// Selects one of the current group's managed companies and persists it.
    pub async fn select_company(&self, company: &str) -> Result<()> {
        let identity = {
            let mut session = self.session.write().await;
            session.select_company(company.trim())?;
            self.persist(&session);
            session
                .identity()
                .cloned()
                .ok_or_else(|| ScoreError::internal("group session without identity"))?
        };

        tracing::info!("[SessionUseCase] {} selected company {}", identity.email(), company);
        self.record(
            ActivityEntry::new(&identity, ActivityAction::CompanySelected).with_detail(company.trim()),
        )
        .await;
        Ok(())
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.store.save(session) {
            tracing::warn!("[SessionUseCase] Failed to persist session: {}", e);
        }
    }

    async fn record(&self, entry: ActivityEntry) {
        if let Err(e) = self.data.log_activity(&entry).await {
            tracing::warn!(
                "[SessionUseCase] Activity log entry {} dropped: {}",
                entry.action,
                e
            );
        }
    }
}
