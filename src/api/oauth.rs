use crate::api::AppState;
use crate::api::schemas::oauth::{AuthorizeParams, AuthorizeUrlResponse, CallbackParams};
use crate::error::Result;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};

/// Sends the browser to the provider's consent page with the identity as `state`.
pub async fn authorize(
    State(state): State<AppState>,
    Query(params): Query<AuthorizeParams>,
) -> Result<impl IntoResponse> {
    let url = state.oauth_service.authorize_url(params.uuid.as_deref())?;
    Ok(Redirect::temporary(url.as_str()))
}

pub async fn authorize_url(
    State(state): State<AppState>,
    Query(params): Query<AuthorizeParams>,
) -> Result<impl IntoResponse> {
    let url = state.oauth_service.authorize_url(params.uuid.as_deref())?;
    Ok(Json(AuthorizeUrlResponse { url: url.into() }))
}

/// Redirect target registered with the provider.
pub async fn callback(State(state): State<AppState>, Query(params): Query<CallbackParams>) -> Result<impl IntoResponse> {
    state.oauth_service.complete(params.state.as_deref(), params.code.as_deref()).await?;
    Ok((StatusCode::OK, Json("Auth is complete")))
}
