#![forbid(unsafe_code)]

use serde_json::{Value, json};

pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_BAD_REQUEST: u16 = 400;

pub(crate) fn ok_response(id: Value, body: Value) -> Value {
    json!({ "id": id, "status": STATUS_OK, "body": body })
}

pub(crate) fn error_response(id: Value, status: u16, message: &str) -> Value {
    json!({ "id": id, "status": status, "error": message })
}
