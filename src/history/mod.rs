// Public API - what other modules can use
pub use errors::HistoryError;
pub use handlers::router;
pub use models::*;
pub use repository::{HistoryRepository, InMemoryHistoryRepository};
pub use service::HistoryService;

mod errors;
mod handlers;
pub mod models;
pub mod presentation;
pub mod query;
pub mod ranking;
pub mod repository;
pub mod service;
pub mod timestamps;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
