use crate::adapters::google::OAuthClient;
use crate::domain::identity::IdentityToken;
use crate::error::{AppError, Result};
use crate::storage::credential_repo::CredentialRepository;
use opentelemetry::{KeyValue, global, metrics::Counter};
use reqwest::Url;

#[derive(Clone, Debug)]
struct Metrics {
    callbacks_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("grooming-server");
        Self {
            callbacks_total: meter
                .u64_counter("oauth_callbacks_total")
                .with_description("Total number of OAuth callbacks handled, by outcome")
                .build(),
        }
    }

    fn record(&self, outcome: &'static str) {
        self.callbacks_total.add(1, &[KeyValue::new("outcome", outcome)]);
    }
}

#[derive(Clone, Debug)]
pub struct OAuthService {
    client: OAuthClient,
    credentials: CredentialRepository,
    metrics: Metrics,
}

impl OAuthService {
    #[must_use]
    pub fn new(client: OAuthClient, credentials: CredentialRepository) -> Self {
        Self { client, credentials, metrics: Metrics::new() }
    }

    /// Builds the provider consent URL for `identity`. Nothing is persisted.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the identity is missing or not a canonical UUID.
    pub fn authorize_url(&self, identity: Option<&str>) -> Result<Url> {
        let identity = parse_identity(identity)?;
        Ok(self.client.authorize_url(&identity))
    }

    /// Completes the authorization code flow for the identity carried in `state`.
    ///
    /// Exactly one credential write happens on success, replacing any earlier
    /// credential for that identity. Nothing is written on any failure path.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for a missing/invalid `state` or missing `code`,
    /// and `AppError::Internal` if the exchange or the write fails.
    #[tracing::instrument(err(level = "warn"), skip(self, state, code), fields(identity = tracing::field::Empty))]
    pub async fn complete(&self, state: Option<&str>, code: Option<&str>) -> Result<()> {
        let identity = match parse_identity(state) {
            Ok(identity) => identity,
            Err(e) => {
                self.metrics.record("invalid_request");
                return Err(e);
            }
        };
        tracing::Span::current().record("identity", tracing::field::display(identity));

        let Some(code) = code.filter(|c| !c.is_empty()) else {
            self.metrics.record("invalid_request");
            return Err(AppError::Validation("Authorization code not found".into()));
        };

        let credential = match self.client.exchange_code(code).await {
            Ok(credential) => credential,
            Err(e) => {
                self.metrics.record("exchange_failed");
                return Err(AppError::Internal(format!("Unable to exchange code for token: {e}")));
            }
        };

        if let Err(e) = self.credentials.put(&identity, &credential).await {
            self.metrics.record("store_failed");
            return Err(AppError::Internal(format!("Unable to store token: {e}")));
        }

        self.metrics.record("ok");
        tracing::info!("Authorization complete");
        Ok(())
    }
}

fn parse_identity(raw: Option<&str>) -> Result<IdentityToken> {
    match raw.filter(|s| !s.is_empty()) {
        None => Err(AppError::Validation("UUID not found".into())),
        Some(raw) => IdentityToken::parse(raw).map_err(|_| AppError::Validation("Invalid UUID".into())),
    }
}
