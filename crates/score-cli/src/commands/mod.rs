pub mod open;
pub mod report;
pub mod session;

use std::sync::Arc;

use anyhow::Result;
use score_application::AppShell;
use score_core::ScoreError;
use score_core::config::ScoreConfig;
use score_infrastructure::{TomlKeyValueStore, WebhookClient};
use serde::Serialize;

/// How command results are printed.
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints `value` as pretty JSON when requested, otherwise runs `human`.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }
}

/// Wires the webhook client and the session file into an [`AppShell`].
pub fn build_shell(config: &ScoreConfig) -> Result<AppShell> {
    let store = match &config.storage.path {
        Some(path) => TomlKeyValueStore::with_path(path.clone()),
        None => TomlKeyValueStore::new()?,
    };
    tracing::debug!("[score] Session file: {:?}", store.path());

    let client = Arc::new(WebhookClient::new(&config.api)?);
    Ok(AppShell::new(client.clone(), client, Arc::new(store)))
}

/// Turns a domain error into a CLI error led by its user-facing message.
pub fn user_error(err: ScoreError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}
