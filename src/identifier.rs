//! Identifiers for vertices and edge endpoints.
//!
//! Equality is type-exact: `Int(1)` and `Text("1")` never compare equal. The
//! same holds for the borrowed [`IdRef`] view used during classification.
//! `UInt` only ever holds values above `i64::MAX`, so every integer has exactly
//! one representation.

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    UInt(u64),
    Text(String),
}

/// Borrowed identifier, produced by classification without copying text ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdRef<'a> {
    Int(i64),
    UInt(u64),
    Text(&'a str),
}

impl Identifier {
    pub fn as_id_ref(&self) -> IdRef<'_> {
        match self {
            Identifier::Int(v) => IdRef::Int(*v),
            Identifier::UInt(v) => IdRef::UInt(*v),
            Identifier::Text(s) => IdRef::Text(s.as_str()),
        }
    }

    /// Reads an identifier out of a JSON value. Only integral numbers and
    /// strings qualify; floats, booleans, arrays and objects do not.
    pub fn from_json(value: &serde_json::Value) -> Option<IdRef<'_>> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Some(IdRef::Int(v)),
                None => n.as_u64().map(IdRef::UInt),
            },
            serde_json::Value::String(s) => Some(IdRef::Text(s.as_str())),
            _ => None,
        }
    }
}

impl IdRef<'_> {
    pub fn to_identifier(self) -> Identifier {
        match self {
            IdRef::Int(v) => Identifier::Int(v),
            IdRef::UInt(v) => Identifier::UInt(v),
            IdRef::Text(s) => Identifier::Text(s.to_string()),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::Int(i64::from(value))
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Identifier::Int(v),
            Err(_) => Identifier::UInt(value),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_id_ref().fmt(f)
    }
}

impl fmt::Display for IdRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdRef::Int(v) => write!(f, "{v}"),
            IdRef::UInt(v) => write!(f, "{v}"),
            IdRef::Text(s) => write!(f, "{s:?}"),
        }
    }
}

// SQLite integers are signed 64-bit, so `UInt` is stored as an 8-byte
// big-endian blob.
impl ToSql for Identifier {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Identifier::Int(v) => Ok(ToSqlOutput::from(*v)),
            Identifier::UInt(v) => Ok(ToSqlOutput::from(v.to_be_bytes().to_vec())),
            Identifier::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
        }
    }
}

impl FromSql for Identifier {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(v) => Ok(Identifier::Int(v)),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(|s| Identifier::Text(s.to_string()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            ValueRef::Blob(bytes) => {
                let raw: [u8; 8] = bytes.try_into().map_err(|_| FromSqlError::InvalidType)?;
                match Identifier::from(u64::from_be_bytes(raw)) {
                    id @ Identifier::UInt(_) => Ok(id),
                    _ => Err(FromSqlError::InvalidType),
                }
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
