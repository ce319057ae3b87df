// Declare modules within this crate
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
mod resources;

// Re-export the main components for users of this crate
pub use client::ForecastClient;
pub use config::ClientConfig;
pub use errors::ApiClientError;
pub use models::{Client, CurrentUser, Person, Project, WorkingDays};
