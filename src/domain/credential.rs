use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Delegated access obtained from the provider's token endpoint.
///
/// `expiry` is recorded but nothing on the request path checks it; an expired
/// credential is handed to the provider as-is and the provider's rejection is
/// surfaced to the caller. `is_expired_at` exists for callers that choose to
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthCredential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub expiry: Option<OffsetDateTime>,
}

impl OAuthCredential {
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= now)
    }
}
