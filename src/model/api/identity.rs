use serde::{Deserialize, Serialize};

use crate::model::id::Id;
use crate::model::identity::Identity;

/// An identity as exposed to the presentation layer. Carries no credential
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProfile {
    pub id: Id,
    pub username: String,
    pub is_administrator: bool,
    pub voter_card_id: String,
}

impl From<&Identity> for IdentityProfile {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            username: identity.username.clone(),
            is_administrator: identity.is_administrator,
            voter_card_id: identity.voter_card_id.clone(),
        }
    }
}
