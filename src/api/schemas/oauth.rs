use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AuthorizeParams {
    pub uuid: Option<String>,
}

/// Query parameters Google appends to the redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthorizeUrlResponse {
    pub url: String,
}
