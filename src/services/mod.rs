pub mod client_service;
pub mod health_service;
pub mod oauth_service;
pub mod sheets_service;
