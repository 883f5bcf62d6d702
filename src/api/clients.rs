use crate::api::AppState;
use crate::api::schemas::clients::CreateClientRequest;
use crate::api::schemas::entities::ClientResponse;
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse> {
    let client = state.client_service.create(&payload.full_name, &payload.email, &payload.phone).await?;
    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let clients = state.client_service.list().await?;
    Ok(Json(clients.into_iter().map(ClientResponse::from).collect::<Vec<_>>()))
}
