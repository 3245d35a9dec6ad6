pub mod settings;

pub use settings::{DatabaseSettings, ServerSettings, Settings};
