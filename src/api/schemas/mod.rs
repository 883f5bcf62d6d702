pub mod clients;
pub mod entities;
pub mod health;
pub mod oauth;
pub mod sheets;
