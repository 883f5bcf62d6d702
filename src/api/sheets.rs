use crate::api::AppState;
use crate::api::schemas::sheets::{CreateSheetParams, SheetParams};
use crate::error::{AppError, Result};
use crate::services::sheets_service::SheetsError;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn create_sheet(
    State(state): State<AppState>,
    Query(params): Query<CreateSheetParams>,
) -> Result<impl IntoResponse> {
    let name = params.name.unwrap_or_default();
    let identity = params.uuid.unwrap_or_default();

    let created = state.sheets_service.create(&identity, &name).await.map_err(|e| match e {
        SheetsError::NoCredential(_) => AppError::NoCredential,
        SheetsError::Storage(e) => AppError::Internal(format!("Unable to read token file: {e}")),
        SheetsError::ClientBuild(e) => AppError::Internal(format!("Unable to create Sheets service: {e}")),
        SheetsError::Provider(e) => AppError::Internal(format!("Unable to create spreadsheet: {e}")),
    })?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_sheet(State(state): State<AppState>, Query(params): Query<SheetParams>) -> Result<impl IntoResponse> {
    let (identity, sheet_id) = read_params(params)?;
    let metadata = state.sheets_service.get_metadata(&identity, &sheet_id).await.map_err(read_error)?;
    Ok(Json(metadata))
}

pub async fn get_sheet_values(
    State(state): State<AppState>,
    Query(params): Query<SheetParams>,
) -> Result<impl IntoResponse> {
    let (identity, sheet_id) = read_params(params)?;
    let values = state.sheets_service.get_values(&identity, &sheet_id).await.map_err(read_error)?;
    Ok(Json(values))
}

fn read_params(params: SheetParams) -> Result<(String, String)> {
    let sheet_id = params.id.filter(|id| !id.is_empty()).ok_or_else(|| AppError::BadRequest("Sheet id not found".into()))?;
    Ok((params.uuid.unwrap_or_default(), sheet_id))
}

// Read failures keep the provider's status instead of answering 200 with an empty body.
fn read_error(e: SheetsError) -> AppError {
    match e {
        SheetsError::NoCredential(_) => AppError::NoCredential,
        SheetsError::Storage(e) => AppError::Internal(format!("Unable to read token file: {e}")),
        SheetsError::ClientBuild(e) => AppError::BadRequest(e.to_string()),
        SheetsError::Provider(e) => {
            AppError::Upstream { status: e.status.unwrap_or(StatusCode::BAD_GATEWAY), message: e.message }
        }
    }
}
