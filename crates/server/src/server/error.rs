#![forbid(unsafe_code)]

use crate::support::STATUS_BAD_REQUEST;
use bt_core::brackets::DrawError;
use bt_core::status::{StatusKind, classify};
use bt_storage::{ReplaceError, StoreError};

#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Replace(#[from] ReplaceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("bracket draw failed: {0}")]
    Draw(#[from] DrawError),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServerError {
    pub(crate) fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::UnknownMethod(_) => STATUS_BAD_REQUEST,
            Self::NotFound(_) => StatusKind::NotFound.http_status(),
            Self::Replace(err) => err.status().http_status(),
            Self::Store(StoreError::InvalidInput(_)) => STATUS_BAD_REQUEST,
            Self::Store(err) => classify(Some(err.code())).http_status(),
            Self::Draw(_) => StatusKind::Conflict.http_status(),
            Self::Encode(_) => StatusKind::Internal.http_status(),
        }
    }
}
