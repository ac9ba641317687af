// Tasklist - single-list task manager over a SQLite-backed persistence gateway

pub mod error;
pub mod gateway;
pub mod models;
pub mod sqlite;
pub mod store;

// Re-export main types for convenience
pub use error::{GatewayError, StoreError};
pub use gateway::PersistenceGateway;
pub use models::{Task, now_ms};
pub use sqlite::SqliteGateway;
pub use store::TaskStore;
