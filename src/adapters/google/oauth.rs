//! Authorization code flow against Google's OAuth endpoints.

use crate::config::OAuthConfig;
use crate::domain::credential::OAuthCredential;
use crate::domain::identity::IdentityToken;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The token endpoint answered with an error; `body` is its response verbatim.
    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OAuthClient {
    config: OAuthConfig,
    auth_url: Url,
    token_url: Url,
    http_client: reqwest::Client,
}

impl OAuthClient {
    /// # Errors
    /// Returns an error if the configured endpoints are not valid URLs.
    pub fn new(config: OAuthConfig) -> anyhow::Result<Self> {
        let auth_url = Url::parse(&config.auth_url)?;
        let token_url = Url::parse(&config.token_url)?;
        Ok(Self { config, auth_url, token_url, http_client: reqwest::Client::new() })
    }

    /// Builds the consent page URL. The identity is carried through the
    /// provider round trip as `state` and comes back on the callback.
    #[must_use]
    pub fn authorize_url(&self, identity: &IdentityToken) -> Url {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("access_type", "offline")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("prompt", "consent")
            .append_pair("redirect_uri", &self.config.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scopes.join(" "))
            .append_pair("state", &identity.to_string());
        url
    }

    /// Exchanges an authorization code for a credential.
    ///
    /// # Errors
    /// Returns `ExchangeError` if the request fails, the provider rejects the
    /// code, or the response cannot be parsed.
    #[tracing::instrument(err, skip(self, code))]
    pub async fn exchange_code(&self, code: &str) -> Result<OAuthCredential, ExchangeError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_url.as_str()),
        ];

        let response = self
            .http_client
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await
            .map_err(ExchangeError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ExchangeError::Transport)?;

        if !status.is_success() {
            return Err(ExchangeError::Rejected { status: status.as_u16(), body });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| ExchangeError::InvalidResponse(e.to_string()))?;

        if token.access_token.is_empty() {
            return Err(ExchangeError::InvalidResponse("server response missing access_token".into()));
        }

        tracing::debug!(expires_in = ?token.expires_in, "Token exchange succeeded");

        Ok(OAuthCredential {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            token_type: token.token_type.unwrap_or_else(|| "Bearer".into()),
            scope: token.scope,
            expiry: token
                .expires_in
                .filter(|secs| *secs > 0)
                .map(|secs| OffsetDateTime::now_utc() + Duration::seconds(secs)),
        })
    }
}
