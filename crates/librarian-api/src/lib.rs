pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::Settings;
pub use database::DbPool;
