#![forbid(unsafe_code)]

use bt_core::status::{CODE_FOREIGN_KEY_VIOLATION, CODE_NOT_FOUND, CODE_UNIQUE_VIOLATION};
use rusqlite::ffi;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("unknown id")]
    UnknownId,
    /// Failure reported by a non-SQLite repository; the message is surfaced as-is.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// Stable code consumed by `bt_core::status::classify`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Sql(rusqlite::Error::QueryReturnedNoRows) => CODE_NOT_FOUND,
            Self::Sql(rusqlite::Error::SqliteFailure(err, _)) => match err.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    CODE_UNIQUE_VIOLATION
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => CODE_FOREIGN_KEY_VIOLATION,
                _ => "SQLITE",
            },
            Self::Sql(_) => "SQLITE",
            Self::InvalidInput(message) if message.starts_with("RESET_REQUIRED") => {
                "RESET_REQUIRED"
            }
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UnknownId => CODE_NOT_FOUND,
            Self::Backend(_) => "BACKEND",
        }
    }
}
