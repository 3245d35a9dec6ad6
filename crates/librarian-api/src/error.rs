use thiserror::Error;

/// Failures while loading configuration. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    EnvFileMissing(#[from] dotenvy::Error),

    #[error("required environment variable {key} is not set")]
    MissingRequired { key: &'static str },
}

/// Failures while opening or probing the database pool.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("database unreachable: {0}")]
    Unreachable(#[from] sqlx::Error),
}

/// Failures while binding the HTTP listener.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("invalid listen port: {port:?}")]
    InvalidPort { port: String },

    #[error("listen port unavailable: {0}")]
    PortInUse(#[from] std::io::Error),
}
