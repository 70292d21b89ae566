// csv-search - upload a CSV file, then search its records

pub mod client;
pub mod config;
pub mod data_registry;
pub mod middleware;
pub mod models;
pub mod parser;
pub mod routes;
pub mod search;
pub mod tui;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use data_registry::DatasetStore;
pub use models::AppState;

pub fn create_router(state: AppState) -> anyhow::Result<axum::Router> {
    routes::create_router(state)
}
