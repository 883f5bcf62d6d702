use crate::domain::credential::OAuthCredential;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("credential has no access token")]
    MissingAccessToken,
    #[error("unsupported token type {0:?}")]
    UnsupportedTokenType(String),
    #[error("access token is not a valid header value")]
    InvalidAccessToken,
    #[error("invalid Sheets API URL: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Http(#[source] reqwest::Error),
}

/// A failed Sheets API call. `status` is absent when no response was received.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl ProviderError {
    fn transport(e: &reqwest::Error) -> Self {
        Self { status: None, message: e.to_string() }
    }

    fn from_response(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Envelope {
            error: Detail,
        }
        #[derive(Deserialize)]
        struct Detail {
            message: String,
        }

        let message = match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body.to_string(),
        };

        Self { status: Some(status), message }
    }
}

/// Sheets API client bound to one user's credential.
///
/// Built fresh for every operation from the stored credential; nothing is
/// cached between requests.
#[derive(Debug)]
pub struct SheetsClient {
    http: reqwest::Client,
    base: Url,
}

impl SheetsClient {
    /// # Errors
    /// Returns `ClientBuildError` if the credential cannot be turned into a bearer header
    /// or the API URL is unusable.
    pub fn from_credential(api_url: &str, credential: &OAuthCredential) -> Result<Self, ClientBuildError> {
        if credential.access_token.is_empty() {
            return Err(ClientBuildError::MissingAccessToken);
        }
        if !credential.token_type.is_empty() && !credential.token_type.eq_ignore_ascii_case("bearer") {
            return Err(ClientBuildError::UnsupportedTokenType(credential.token_type.clone()));
        }

        let base = Url::parse(api_url).map_err(|e| ClientBuildError::InvalidBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl(api_url.to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credential.access_token))
            .map_err(|_| ClientBuildError::InvalidAccessToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder().default_headers(headers).build().map_err(ClientBuildError::Http)?;

        Ok(Self { http, base })
    }

    /// Creates a spreadsheet titled `title` and returns the provider's representation of it.
    ///
    /// # Errors
    /// Returns `ProviderError` on any failed or rejected call.
    pub async fn create_spreadsheet(&self, title: &str) -> Result<Value, ProviderError> {
        let body = json!({ "properties": { "title": title } });
        self.send(self.http.post(self.endpoint(&["v4", "spreadsheets"])).json(&body)).await
    }

    /// # Errors
    /// Returns `ProviderError` on any failed or rejected call.
    pub async fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Value, ProviderError> {
        self.send(self.http.get(self.endpoint(&["v4", "spreadsheets", spreadsheet_id]))).await
    }

    /// # Errors
    /// Returns `ProviderError` on any failed or rejected call.
    pub async fn batch_get_values(&self, spreadsheet_id: &str, ranges: &[&str]) -> Result<Value, ProviderError> {
        let url = self.endpoint(&["v4", "spreadsheets", spreadsheet_id, "values:batchGet"]);
        let query: Vec<(&str, &str)> = ranges.iter().map(|range| ("ranges", *range)).collect();
        self.send(self.http.get(url).query(&query)).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in from_credential
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ProviderError> {
        let response = request.send().await.map_err(|e| ProviderError::transport(&e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ProviderError::transport(&e))?;

        if !status.is_success() {
            return Err(ProviderError::from_response(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError { status: None, message: format!("invalid response from Sheets API: {e}") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential(access_token: &str, token_type: &str) -> OAuthCredential {
        OAuthCredential {
            access_token: access_token.into(),
            refresh_token: None,
            token_type: token_type.into(),
            scope: None,
            expiry: None,
        }
    }

    #[test]
    fn test_build_rejects_unusable_credentials() {
        let api = "https://sheets.example.com";
        assert!(matches!(
            SheetsClient::from_credential(api, &credential("", "Bearer")),
            Err(ClientBuildError::MissingAccessToken)
        ));
        assert!(matches!(
            SheetsClient::from_credential(api, &credential("abc", "MAC")),
            Err(ClientBuildError::UnsupportedTokenType(_))
        ));
        assert!(matches!(
            SheetsClient::from_credential(api, &credential("abc\ndef", "Bearer")),
            Err(ClientBuildError::InvalidAccessToken)
        ));
        assert!(matches!(
            SheetsClient::from_credential("mailto:nobody", &credential("abc", "Bearer")),
            Err(ClientBuildError::InvalidBaseUrl(_))
        ));
        assert!(SheetsClient::from_credential(api, &credential("abc", "")).is_ok());
        assert!(SheetsClient::from_credential(api, &credential("abc", "bearer")).is_ok());
    }

    #[tokio::test]
    async fn test_create_sends_title_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/spreadsheets"))
            .and(header("authorization", "Bearer ya29.token"))
            .and(body_json(json!({ "properties": { "title": "Appointments" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "spreadsheetId": "sheet-1",
                "properties": { "title": "Appointments" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SheetsClient::from_credential(&server.uri(), &credential("ya29.token", "Bearer")).unwrap();
        let created = client.create_spreadsheet("Appointments").await.unwrap();

        assert_eq!(created["spreadsheetId"], "sheet-1");
    }

    #[tokio::test]
    async fn test_batch_get_requests_given_ranges() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-1/values:batchGet"))
            .and(query_param("ranges", "A1:O100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "spreadsheetId": "sheet-1",
                "valueRanges": [{ "range": "Sheet1!A1:O100", "values": [["a", "b"]] }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SheetsClient::from_credential(&server.uri(), &credential("ya29.token", "Bearer")).unwrap();
        let values = client.batch_get_values("sheet-1", &["A1:O100"]).await.unwrap();

        assert_eq!(values["valueRanges"][0]["values"][0][1], "b");
    }

    #[tokio::test]
    async fn test_provider_error_message_and_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND" }
            })))
            .mount(&server)
            .await;

        let client = SheetsClient::from_credential(&server.uri(), &credential("ya29.token", "Bearer")).unwrap();
        let err = client.get_spreadsheet("missing").await.unwrap_err();

        assert_eq!(err.status, Some(StatusCode::NOT_FOUND));
        assert_eq!(err.message, "Requested entity was not found.");
    }

    #[test]
    fn test_error_body_fallbacks() {
        let plain = ProviderError::from_response(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(plain.message, "upstream exploded");

        let empty = ProviderError::from_response(StatusCode::FORBIDDEN, "  ");
        assert_eq!(empty.message, "403 Forbidden");
    }
}
