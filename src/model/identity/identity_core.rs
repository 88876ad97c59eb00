use std::ops::Deref;

use argon2::Config as Argon2Config;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::id::Id;

/// Core identity data, as held in the identity store.
///
/// Identities are never mutated after creation and live for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCore {
    /// Unique, case-sensitive username.
    pub username: String,
    /// Argon2-encoded hash of the login credential.
    pub credential_hash: String,
    /// Administrators may create ballots; everyone else only votes.
    pub is_administrator: bool,
    /// Synthetic voter card number shown on the profile screen.
    pub voter_card_id: String,
}

impl IdentityCore {
    /// Check whether the given credential is correct.
    pub fn verify_credential<T: AsRef<[u8]>>(&self, credential: T) -> bool {
        // Unwrap safe because the only way to create an IdentityCore is via
        // From<Credentials>, so the hash is always well-formed.
        argon2::verify_encoded(&self.credential_hash, credential.as_ref()).unwrap()
    }
}

/// Raw signup credentials received from a user. These are never stored
/// directly, since the credential is in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub credential: String,
}

impl From<Credentials> for IdentityCore {
    /// Convert [`Credentials`] into a regular (non-administrator) identity by
    /// hashing the credential and issuing a voter card.
    fn from(cred: Credentials) -> Self {
        // 16 bytes is recommended for password hashing:
        //  https://en.wikipedia.org/wiki/Argon2
        let mut salt = [0_u8; 16];
        rand::thread_rng().fill(&mut salt);
        let credential_hash =
            argon2::hash_encoded(cred.credential.as_bytes(), &salt, &Argon2Config::default())
                .unwrap(); // Safe because the default `Config` is valid.
        Self {
            username: cred.username,
            credential_hash,
            is_administrator: false,
            voter_card_id: new_voter_card_id(),
        }
    }
}

/// Generate a synthetic voter card number: `VOTER` plus five random digits.
pub(crate) fn new_voter_card_id() -> String {
    let digits: u32 = rand::thread_rng().gen_range(10_000..100_000);
    format!("VOTER{digits}")
}

/// An identity from the store, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Id,
    #[serde(flatten)]
    pub identity: IdentityCore,
}

impl Deref for Identity {
    type Target = IdentityCore;

    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let core = IdentityCore::from(Credentials::example());
        assert!(core.verify_credential("letmein"));
        assert!(!core.verify_credential("Letmein"));
        assert!(!core.verify_credential(""));
    }

    #[test]
    fn credential_is_not_stored_verbatim() {
        let core = IdentityCore::from(Credentials::example());
        assert_ne!(core.credential_hash, "letmein");
        assert!(core.credential_hash.starts_with("$argon2"));
    }

    #[test]
    fn signup_identities_are_regular_voters() {
        let core = IdentityCore::from(Credentials::example());
        assert!(!core.is_administrator);
        assert!(core.voter_card_id.starts_with("VOTER"));
        assert_eq!(core.voter_card_id.len(), "VOTER".len() + 5);
    }
}
