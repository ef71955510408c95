#![forbid(unsafe_code)]

mod children;
mod dispatch;
mod error;

pub(crate) use error::ServerError;

use crate::support::{STATUS_BAD_REQUEST, error_response, ok_response};
use bt_storage::SqliteStore;
use serde_json::{Value, json};

pub(crate) struct Server {
    store: SqliteStore,
}

impl Server {
    pub(crate) fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Answers one request object. Every request gets exactly one response.
    pub(crate) fn handle(&mut self, request: Value) -> Value {
        let Some(obj) = request.as_object() else {
            return error_response(
                Value::Null,
                STATUS_BAD_REQUEST,
                "request must be a JSON object",
            );
        };
        let id = obj.get("id").cloned().unwrap_or(Value::Null);
        let Some(method) = obj.get("method").and_then(Value::as_str) else {
            return error_response(id, STATUS_BAD_REQUEST, "missing method");
        };
        let params = match obj.get("params") {
            None | Some(Value::Null) => json!({}),
            Some(params @ Value::Object(_)) => params.clone(),
            Some(_) => {
                return error_response(id, STATUS_BAD_REQUEST, "params must be an object");
            }
        };

        tracing::debug!(method, "dispatch");
        match self.dispatch(method, &params) {
            Ok(body) => ok_response(id, body),
            Err(err) => {
                let status = err.http_status();
                if status >= 500 {
                    tracing::error!(method, status, error = %err, "request failed");
                } else {
                    tracing::warn!(method, status, error = %err, "request rejected");
                }
                error_response(id, status, &err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests;
