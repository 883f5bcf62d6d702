//! Google as the OAuth authorization server and the spreadsheet provider.

pub mod oauth;
pub mod sheets;

pub use oauth::{ExchangeError, OAuthClient};
pub use sheets::{ClientBuildError, ProviderError, SheetsClient};
