use crate::services::client_service::ClientService;
use crate::services::health_service::HealthService;
use crate::services::oauth_service::OAuthService;
use crate::services::sheets_service::SheetsService;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{Router, routing::get};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod clients;
pub mod health;
pub mod oauth;
pub mod schemas;
pub mod sheets;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct AppState {
    pub oauth_service: OAuthService,
    pub sheets_service: SheetsService,
    pub client_service: ClientService,
}

#[derive(Clone, Debug)]
pub struct MgmtState {
    pub health_service: HealthService,
}

#[derive(Debug)]
pub struct ServiceContainer {
    pub oauth_service: OAuthService,
    pub sheets_service: SheetsService,
    pub client_service: ClientService,
}

/// Configures and returns the primary application router.
pub fn app_router(services: ServiceContainer) -> Router {
    let state = AppState {
        oauth_service: services.oauth_service,
        sheets_service: services.sheets_service,
        client_service: services.client_service,
    };

    let oauth_routes = Router::new()
        .route("/oauth/authorize", get(oauth::authorize))
        .route("/oauth/authorize/url", get(oauth::authorize_url))
        .route("/oauth/callback", get(oauth::callback));

    let sheets_routes = Router::new()
        .route("/sheets", get(sheets::get_sheet).post(sheets::create_sheet))
        .route("/sheets/values", get(sheets::get_sheet_values));

    let client_routes = Router::new().route("/clients", get(clients::list_clients).post(clients::create_client));

    Router::new()
        .nest("/v1", oauth_routes.merge(sheets_routes).merge(client_routes))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid))
        .with_state(state)
}

pub fn mgmt_router(state: MgmtState) -> Router {
    Router::new().route("/livez", get(health::livez)).route("/readyz", get(health::readyz)).with_state(state)
}
