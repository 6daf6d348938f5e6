//! Session domain model.

use crate::error::{Result, ScoreError};
use crate::identity::{Identity, Role};

/// Process-wide session state.
///
/// Mutated only by login ([`Session::begin`]), logout ([`Session::end`]) and
/// group-scoped company selection. Every identity transition bumps the
/// epoch, which in-flight fetches use to detect that their result is stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    /// Only meaningful while the identity is a group.
    selected_company: Option<String>,
    epoch: u64,
}

impl Session {
    /// Creates an empty, logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from persisted parts.
    ///
    /// A selected company is kept only for group identities.
    pub fn restored(identity: Option<Identity>, selected_company: Option<String>) -> Self {
        let selected_company = match &identity {
            Some(i) if i.role() == Role::Group => selected_company,
            _ => None,
        };
        let epoch = u64::from(identity.is_some());
        Self {
            identity,
            selected_company,
            epoch,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    pub fn selected_company(&self) -> Option<&str> {
        self.selected_company.as_deref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Installs a freshly resolved identity, replacing any previous one.
    pub fn begin(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.selected_company = None;
        self.epoch += 1;
    }

    /// Clears identity and selected company. Calling it on an empty session
    /// changes nothing.
    pub fn end(&mut self) {
        if self.identity.is_none() && self.selected_company.is_none() {
            return;
        }
        self.identity = None;
        self.selected_company = None;
        self.epoch += 1;
    }

    /// Selects one of the companies a group identity manages.
    pub fn select_company(&mut self, company: impl Into<String>) -> Result<()> {
        let company = company.into();
        match &self.identity {
            Some(Identity::Group(group)) if group.managed_companies.contains(&company) => {
                self.selected_company = Some(company);
                Ok(())
            }
            Some(Identity::Group(_)) => Err(ScoreError::invalid_operation(format!(
                "company '{company}' is not managed by this group"
            ))),
            _ => Err(ScoreError::invalid_operation(
                "company selection is only available to group accounts",
            )),
        }
    }

    pub fn clear_selected_company(&mut self) {
        self.selected_company = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AdminIdentity, GroupIdentity};

    fn admin() -> Identity {
        Identity::Admin(AdminIdentity {
            id: "1".to_string(),
            name: "Root".to_string(),
            email: "root@test".to_string(),
        })
    }

    fn group() -> Identity {
        Identity::Group(GroupIdentity {
            id: "g".to_string(),
            name: "G".to_string(),
            email: "g@test".to_string(),
            group_name: "Holding".to_string(),
            managed_companies: ["Acme".to_string()].into_iter().collect(),
        })
    }

    #[test]
    fn test_begin_and_end_bump_epoch() {
        let mut session = Session::new();
        assert_eq!(session.epoch(), 0);

        session.begin(admin());
        assert!(session.is_authenticated());
        assert_eq!(session.epoch(), 1);

        session.end();
        assert!(!session.is_authenticated());
        assert_eq!(session.epoch(), 2);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut session = Session::new();
        session.end();
        session.end();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_select_company_requires_managing_group() {
        let mut session = Session::new();
        assert!(session.select_company("Acme").is_err());

        session.begin(admin());
        assert!(session.select_company("Acme").is_err());

        session.begin(group());
        assert!(session.select_company("Gamma").is_err());
        session.select_company("Acme").unwrap();
        assert_eq!(session.selected_company(), Some("Acme"));

        session.end();
        assert_eq!(session.selected_company(), None);
    }

    #[test]
    fn test_restored_drops_company_for_non_group() {
        let session = Session::restored(Some(admin()), Some("Acme".to_string()));
        assert_eq!(session.selected_company(), None);

        let session = Session::restored(Some(group()), Some("Acme".to_string()));
        assert_eq!(session.selected_company(), Some("Acme"));
    }
}
