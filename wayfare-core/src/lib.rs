pub mod models;
pub mod password;
pub mod repository;

/// Errors surfaced by the persistent stores (Postgres, Redis).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the upstream flight-search relay.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("upstream returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
