use crate::adapters::google::{ClientBuildError, ProviderError, SheetsClient};
use crate::config::SheetsConfig;
use crate::domain::identity::IdentityToken;
use crate::storage::credential_repo::{CredentialError, CredentialRepository};
use opentelemetry::{KeyValue, global, metrics::Counter};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// No usable stored credential; the provider was not contacted.
    #[error("no stored credential for identity")]
    NoCredential(#[source] Option<CredentialError>),
    /// The credential could not be read for a server-side reason.
    #[error("{0}")]
    Storage(#[source] CredentialError),
    #[error("{0}")]
    ClientBuild(#[from] ClientBuildError),
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

#[derive(Clone, Debug)]
struct Metrics {
    operations_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("grooming-server");
        Self {
            operations_total: meter
                .u64_counter("sheets_operations_total")
                .with_description("Total number of proxied Sheets operations, by operation and outcome")
                .build(),
        }
    }

    fn record<T>(&self, operation: &'static str, result: &Result<T, SheetsError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(SheetsError::NoCredential(_)) => "no_credential",
            Err(SheetsError::Storage(_)) => "storage_error",
            Err(SheetsError::ClientBuild(_)) => "client_build_failed",
            Err(SheetsError::Provider(_)) => "provider_error",
        };
        self.operations_total
            .add(1, &[KeyValue::new("operation", operation), KeyValue::new("outcome", outcome)]);
    }
}

/// Runs spreadsheet operations on behalf of an identity using its stored credential.
///
/// Each call loads the credential, builds a fresh client and makes exactly one
/// provider request. Failures are returned once, never retried.
#[derive(Clone, Debug)]
pub struct SheetsService {
    credentials: CredentialRepository,
    config: SheetsConfig,
    metrics: Metrics,
}

impl SheetsService {
    #[must_use]
    pub fn new(credentials: CredentialRepository, config: SheetsConfig) -> Self {
        Self { credentials, config, metrics: Metrics::new() }
    }

    /// # Errors
    /// See [`SheetsError`].
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn create(&self, identity: &str, name: &str) -> Result<Value, SheetsError> {
        let result = match self.client_for(identity).await {
            Ok(client) => client.create_spreadsheet(name).await.map_err(SheetsError::from),
            Err(e) => Err(e),
        };
        self.metrics.record("create", &result);
        result
    }

    /// # Errors
    /// See [`SheetsError`].
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn get_metadata(&self, identity: &str, sheet_id: &str) -> Result<Value, SheetsError> {
        let result = match self.client_for(identity).await {
            Ok(client) => client.get_spreadsheet(sheet_id).await.map_err(SheetsError::from),
            Err(e) => Err(e),
        };
        self.metrics.record("get_metadata", &result);
        result
    }

    /// Returns the cell values of the configured range. The range never comes from the caller.
    ///
    /// # Errors
    /// See [`SheetsError`].
    #[tracing::instrument(err(level = "warn"), skip(self), fields(range = %self.config.values_range))]
    pub async fn get_values(&self, identity: &str, sheet_id: &str) -> Result<Value, SheetsError> {
        let range = self.config.values_range.as_str();
        let result = match self.client_for(identity).await {
            Ok(client) => client.batch_get_values(sheet_id, &[range]).await.map_err(SheetsError::from),
            Err(e) => Err(e),
        };
        self.metrics.record("get_values", &result);
        result
    }

    async fn client_for(&self, identity: &str) -> Result<SheetsClient, SheetsError> {
        let identity = IdentityToken::parse(identity).map_err(|_| SheetsError::NoCredential(None))?;
        let credential = match self.credentials.get(&identity).await {
            Ok(credential) => credential,
            Err(e @ (CredentialError::NotFound | CredentialError::Malformed(_))) => {
                return Err(SheetsError::NoCredential(Some(e)));
            }
            Err(e) => return Err(SheetsError::Storage(e)),
        };
        Ok(SheetsClient::from_credential(&self.config.api_url, &credential)?)
    }
}
