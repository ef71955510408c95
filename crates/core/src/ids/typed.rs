#![forbid(unsafe_code)]

use super::{IdKind, is_valid_id};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypedId {
    kind: IdKind,
    value: String,
}

impl TypedId {
    pub fn parse(value: impl Into<String>, kind: IdKind) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if !is_valid_id(&value, kind) {
            return Err(IdError::Invalid { expected: kind });
        }
        Ok(Self { kind, value })
    }

    /// Any well-formed id, whatever its kind.
    pub fn parse_any(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        let kind = IdKind::kind_of(&value).ok_or(IdError::UnknownKind)?;
        Ok(Self { kind, value })
    }

    pub fn generate(kind: IdKind) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            kind,
            value: format!("{}_{suffix}", kind.tag()),
        }
    }

    pub fn kind(&self) -> IdKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for TypedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for TypedId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for TypedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for TypedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        TypedId::parse_any(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id is not a valid {} id", .expected.tag())]
    Invalid { expected: IdKind },
    #[error("id does not carry a known kind tag")]
    UnknownKind,
}
