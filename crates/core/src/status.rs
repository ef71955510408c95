#![forbid(unsafe_code)]

use serde::Serialize;
use serde_json::Value;

pub const CODE_UNIQUE_VIOLATION: &str = "UNIQUE_VIOLATION";
pub const CODE_FOREIGN_KEY_VIOLATION: &str = "FOREIGN_KEY_VIOLATION";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Conflict,
    NotFound,
    Internal,
}

impl StatusKind {
    pub fn http_status(self) -> u16 {
        match self {
            StatusKind::Conflict => 409,
            StatusKind::NotFound => 404,
            StatusKind::Internal => 500,
        }
    }
}

/// Maps a storage error code onto the three outcomes surfaced to callers.
pub fn classify(code: Option<&str>) -> StatusKind {
    match code {
        Some(CODE_UNIQUE_VIOLATION | CODE_FOREIGN_KEY_VIOLATION) => StatusKind::Conflict,
        Some(CODE_NOT_FOUND) => StatusKind::NotFound,
        _ => StatusKind::Internal,
    }
}

pub fn classify_value(code: &Value) -> StatusKind {
    classify(code.as_str())
}
