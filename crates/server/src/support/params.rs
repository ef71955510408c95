#![forbid(unsafe_code)]

use crate::server::ServerError;
use serde::de::DeserializeOwned;
use serde_json::Value;

static NULL: Value = Value::Null;

pub(crate) fn param<'a>(params: &'a Value, key: &str) -> Option<&'a Value> {
    params.get(key).filter(|value| !value.is_null())
}

pub(crate) fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, ServerError> {
    match param(params, key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ServerError::BadRequest(format!("{key} must be a string"))),
        None => Err(ServerError::BadRequest(format!("missing param: {key}"))),
    }
}

pub(crate) fn optional_u64(params: &Value, key: &str) -> Result<Option<u64>, ServerError> {
    match param(params, key) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| {
                ServerError::BadRequest(format!("{key} must be a non-negative integer"))
            }),
    }
}

pub(crate) fn require_json<T: DeserializeOwned>(
    params: &Value,
    key: &str,
) -> Result<T, ServerError> {
    let value = param(params, key)
        .ok_or_else(|| ServerError::BadRequest(format!("missing param: {key}")))?;
    serde_json::from_value(value.clone())
        .map_err(|err| ServerError::BadRequest(format!("invalid {key}: {err}")))
}

/// Calculator inputs stay raw so that missing and non-numeric values reach the calculator.
pub(crate) fn raw<'a>(params: &'a Value, key: &str) -> &'a Value {
    params.get(key).unwrap_or(&NULL)
}
