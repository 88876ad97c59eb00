use log::{info, warn};

use crate::error::{Error, Result};
use crate::model::id::{Id, IdSequence};

use super::identity_core::{Credentials, Identity, IdentityCore};

/// In-memory store of registered identities, plus the single
/// current-identity slot consulted by authorization checks.
///
/// The slot has two states, anonymous and authenticated: login/signup success
/// moves it to authenticated, login failure and logout move it to anonymous
/// (both idempotent). Lookups are linear scans with first-match semantics;
/// there is no index.
#[derive(Debug)]
pub struct IdentityStore {
    identities: Vec<Identity>,
    current: Option<Id>,
    ids: IdSequence,
}

impl IdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_identities(Vec::new())
    }

    /// Create a store pre-populated with the given identities. The ID
    /// sequence continues after them, so later signups never collide.
    pub fn with_identities(identities: Vec<Identity>) -> Self {
        let ids = IdSequence::starting_after("user", identities.iter().map(|i| &i.id));
        Self {
            identities,
            current: None,
            ids,
        }
    }

    /// Authenticate against the registered identities: case-sensitive exact
    /// match on the username, credential verified against the stored hash.
    /// First match wins. Success sets the current identity; failure clears
    /// it. No rate limiting, no lockout.
    pub fn login(&mut self, username: &str, credential: &str) -> Result<&Identity> {
        let matched = self
            .identities
            .iter()
            .find(|identity| identity.username == username && identity.verify_credential(credential));
        match matched {
            Some(identity) => {
                info!(
                    "Login successful: {} (administrator: {})",
                    identity.username, identity.is_administrator
                );
                self.current = Some(identity.id.clone());
                Ok(identity)
            }
            None => {
                warn!("Login failed for: {username}");
                self.current = None;
                Err(Error::AuthenticationFailed)
            }
        }
    }

    /// Register a new identity. Fails with [`Error::UsernameTaken`], leaving
    /// the store untouched, if the username is already in use. On success the
    /// new identity becomes the current one (signup implies login).
    pub fn signup(&mut self, username: &str, credential: &str) -> Result<&Identity> {
        if self
            .identities
            .iter()
            .any(|identity| identity.username == username)
        {
            warn!("Signup failed, username taken: {username}");
            return Err(Error::UsernameTaken);
        }

        let id = self.ids.next();
        let identity = Identity {
            id: id.clone(),
            identity: IdentityCore::from(Credentials {
                username: username.to_string(),
                credential: credential.to_string(),
            }),
        };
        info!(
            "Signup successful: {} ({})",
            identity.username, identity.voter_card_id
        );
        self.identities.push(identity);
        self.current = Some(id);
        // Unwrap safe: the identity was pushed above.
        Ok(self.identities.last().unwrap())
    }

    /// Clear the current identity. Idempotent, callable from either state; no
    /// effect on stored identities.
    pub fn logout(&mut self) {
        info!("Logout");
        self.current = None;
    }

    /// Direct lookup by ID.
    pub fn get_by_id(&self, id: &Id) -> Option<&Identity> {
        self.identities.iter().find(|identity| &identity.id == id)
    }

    /// The currently authenticated identity, if any.
    pub fn current_identity(&self) -> Option<&Identity> {
        let id = self.current.as_ref()?;
        self.get_by_id(id)
    }

    /// All registered identities, in signup order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_then_login() {
        let mut store = IdentityStore::new();

        // Signup implies login.
        let id = store.signup("firstvoter", "letmein").unwrap().id.clone();
        assert_eq!(store.current_identity().unwrap().id, id);

        // A fresh login with the same credentials succeeds.
        store.logout();
        let identity = store.login("firstvoter", "letmein").unwrap();
        assert_eq!(identity.id, id);
        assert_eq!(store.current_identity().unwrap().id, id);
    }

    #[test]
    fn duplicate_signup_leaves_store_unchanged() {
        let mut store = IdentityStore::new();
        store.signup("firstvoter", "letmein").unwrap();

        // Same username, different credential.
        let result = store.signup("firstvoter", "other");
        assert_eq!(result.unwrap_err(), Error::UsernameTaken);
        assert_eq!(store.identities().len(), 1);

        // The first identity is still the current one.
        assert_eq!(store.current_identity().unwrap().username, "firstvoter");
    }

    #[test]
    fn login_failure_clears_current_identity() {
        let mut store = IdentityStore::new();
        store.signup("firstvoter", "letmein").unwrap();
        assert!(store.current_identity().is_some());

        let result = store.login("firstvoter", "wrong");
        assert_eq!(result.unwrap_err(), Error::AuthenticationFailed);
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn login_is_case_sensitive() {
        let mut store = IdentityStore::new();
        store.signup("firstvoter", "letmein").unwrap();
        store.logout();

        assert_eq!(
            store.login("Firstvoter", "letmein").unwrap_err(),
            Error::AuthenticationFailed
        );
    }

    #[test]
    fn usernames_differing_only_in_case_are_distinct() {
        let mut store = IdentityStore::new();
        store.signup("voter", "letmein").unwrap();
        store.signup("Voter", "letmein").unwrap();
        assert_eq!(store.identities().len(), 2);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = IdentityStore::new();

        // Callable from the anonymous state.
        store.logout();
        assert!(store.current_identity().is_none());

        store.signup("firstvoter", "letmein").unwrap();
        store.logout();
        store.logout();
        assert!(store.current_identity().is_none());
        assert_eq!(store.identities().len(), 1);
    }

    #[test]
    fn get_by_id() {
        let mut store = IdentityStore::new();
        let id = store.signup("firstvoter", "letmein").unwrap().id.clone();

        assert_eq!(store.get_by_id(&id).unwrap().username, "firstvoter");
        assert!(store.get_by_id(&Id::from("user999")).is_none());
    }

    #[test]
    fn generated_ids_skip_seeded_identities() {
        let mut store = IdentityStore::with_identities(vec![Identity::example()]);
        let identity = store.signup("secondvoter", "opensesame").unwrap();
        assert_eq!(identity.id, Id::from("user002"));
    }
}
