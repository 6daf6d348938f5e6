//! Persistence of the session through durable client storage.

use std::sync::Arc;

use super::model::Session;
use crate::error::Result;
use crate::identity::Identity;
use crate::repository::KeyValueStore;

/// Storage key holding the JSON-serialized identity.
pub const CURRENT_USER_KEY: &str = "score.current_user";
/// Storage key holding the group's selected company.
pub const SELECTED_COMPANY_KEY: &str = "score.selected_company";

/// Reads and writes the session under two keys.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes the identity and selected company; absent values remove their key.
    pub fn save(&self, session: &Session) -> Result<()> {
        match session.identity() {
            Some(identity) => {
                let json = serde_json::to_string(identity)?;
                self.store.set(CURRENT_USER_KEY, &json)?;
            }
            None => self.store.remove(CURRENT_USER_KEY)?,
        }

        match session.selected_company() {
            Some(company) => self.store.set(SELECTED_COMPANY_KEY, company)?,
            None => self.store.remove(SELECTED_COMPANY_KEY)?,
        }

        Ok(())
    }

    /// Restores a session without touching the network.
    ///
    /// Unreadable storage or data that does not parse as an identity is
    /// treated as a logged-out session.
    pub fn load(&self) -> Session {
        let identity = match self.store.get(CURRENT_USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!("[SessionStore] Ignoring malformed stored identity: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("[SessionStore] Could not read stored identity: {}", e);
                None
            }
        };

        let selected_company = if identity.is_some() {
            self.store
                .get(SELECTED_COMPANY_KEY)
                .unwrap_or_else(|e| {
                    tracing::warn!("[SessionStore] Could not read selected company: {}", e);
                    None
                })
                .filter(|c| !c.trim().is_empty())
        } else {
            None
        };

        Session::restored(identity, selected_company)
    }

    /// Removes both keys.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        self.store.remove(SELECTED_COMPANY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{EmployeeIdentity, GroupIdentity};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MockStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn group() -> Identity {
        Identity::Group(GroupIdentity {
            id: "g".to_string(),
            name: "G".to_string(),
            email: "g@test".to_string(),
            group_name: "Holding".to_string(),
            managed_companies: ["Acme".to_string(), "Beta".to_string()]
                .into_iter()
                .collect(),
        })
    }

    #[test]
    fn test_save_and_load_group_session() {
        let backend = Arc::new(MockStore::default());
        let store = SessionStore::new(backend.clone());

        let mut session = Session::new();
        session.begin(group());
        session.select_company("Beta").unwrap();
        store.save(&session).unwrap();

        let restored = store.load();
        assert_eq!(restored.identity(), Some(&group()));
        assert_eq!(restored.selected_company(), Some("Beta"));
    }

    #[test]
    fn test_load_empty_store_is_logged_out() {
        let store = SessionStore::new(Arc::new(MockStore::default()));
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_malformed_identity_is_treated_as_absent() {
        let backend = Arc::new(MockStore::default());
        backend.set(CURRENT_USER_KEY, "{not json").unwrap();
        backend.set(SELECTED_COMPANY_KEY, "Acme").unwrap();

        let store = SessionStore::new(backend.clone());
        let session = store.load();
        assert!(!session.is_authenticated());
        assert_eq!(session.selected_company(), None);

        backend
            .set(CURRENT_USER_KEY, r#"{"role":"wizard","id":"1"}"#)
            .unwrap();
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_selected_company_ignored_for_employee() {
        let backend = Arc::new(MockStore::default());
        let employee = Identity::Employee(EmployeeIdentity {
            id: "e".to_string(),
            name: "E".to_string(),
            email: "e@test".to_string(),
            company_name: "Acme".to_string(),
            phone: String::new(),
            position: "Analyst".to_string(),
            photo_url: None,
        });
        backend
            .set(CURRENT_USER_KEY, &serde_json::to_string(&employee).unwrap())
            .unwrap();
        backend.set(SELECTED_COMPANY_KEY, "Acme").unwrap();

        let session = SessionStore::new(backend).load();
        assert_eq!(session.identity(), Some(&employee));
        assert_eq!(session.selected_company(), None);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let backend = Arc::new(MockStore::default());
        let store = SessionStore::new(backend.clone());

        let mut session = Session::new();
        session.begin(group());
        session.select_company("Acme").unwrap();
        store.save(&session).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(backend.get(CURRENT_USER_KEY).unwrap(), None);
        assert_eq!(backend.get(SELECTED_COMPANY_KEY).unwrap(), None);
    }
}
