use clap::{Args, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "GROOMING_DATABASE_URL")]
    pub database_url: String,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[command(flatten)]
    pub oauth: OAuthConfig,

    #[command(flatten)]
    pub sheets: SheetsConfig,

    #[command(flatten)]
    pub storage: StorageConfig,

    #[command(flatten)]
    pub health: HealthConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "GROOMING_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "GROOMING_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Port for the management server (health checks)
    #[arg(long, env = "GROOMING_MGMT_PORT", default_value_t = 9090)]
    pub mgmt_port: u16,

    /// Seconds to wait for in-flight work during shutdown
    #[arg(long, env = "GROOMING_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint; traces and metrics are exported only when set
    #[arg(long, env = "GROOMING_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Log output format
    #[arg(long, env = "GROOMING_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Google OAuth client registration. One value for the whole process, handed
/// to the components that talk to the authorization server.
#[derive(Clone, Args)]
pub struct OAuthConfig {
    /// OAuth client id
    #[arg(long = "oauth-client-id", env = "GROOMING_OAUTH_CLIENT_ID")]
    pub client_id: String,

    /// OAuth client secret
    #[arg(long = "oauth-client-secret", env = "GROOMING_OAUTH_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Redirect URL registered with the provider; must route to /v1/oauth/callback
    #[arg(long = "oauth-redirect-url", env = "GROOMING_OAUTH_REDIRECT_URL")]
    pub redirect_url: String,

    /// Consent page endpoint
    #[arg(
        long = "oauth-auth-url",
        env = "GROOMING_OAUTH_AUTH_URL",
        default_value = "https://accounts.google.com/o/oauth2/auth"
    )]
    pub auth_url: String,

    /// Token exchange endpoint
    #[arg(
        long = "oauth-token-url",
        env = "GROOMING_OAUTH_TOKEN_URL",
        default_value = "https://oauth2.googleapis.com/token"
    )]
    pub token_url: String,

    /// Comma-separated scopes requested on the consent page
    #[arg(
        long = "oauth-scopes",
        env = "GROOMING_OAUTH_SCOPES",
        default_value = "https://www.googleapis.com/auth/spreadsheets",
        value_delimiter = ','
    )]
    pub scopes: Vec<String>,
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_url", &self.redirect_url)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[derive(Clone, Debug, Args)]
pub struct SheetsConfig {
    /// Base URL of the Sheets API
    #[arg(long = "sheets-api-url", env = "GROOMING_SHEETS_API_URL", default_value = "https://sheets.googleapis.com")]
    pub api_url: String,

    /// A1 range returned by the values endpoint
    #[arg(long = "sheets-values-range", env = "GROOMING_SHEETS_VALUES_RANGE", default_value = "A1:O100")]
    pub values_range: String,
}

#[derive(Clone, Debug, Args)]
pub struct StorageConfig {
    /// Directory holding one credential file per identity
    #[arg(long, env = "GROOMING_CREDENTIALS_DIR", default_value = "credentials")]
    pub credentials_dir: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the database readiness check
    #[arg(long, env = "GROOMING_HEALTH_DB_TIMEOUT_MS", default_value_t = 2000)]
    pub db_timeout_ms: u64,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
