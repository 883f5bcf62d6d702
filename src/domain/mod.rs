pub mod animal;
pub mod appointment;
pub mod client;
pub mod credential;
pub mod identity;
pub mod owner;
pub mod service;
