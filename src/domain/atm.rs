use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier of a cash-dispensing terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtmId(String);

impl AtmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AtmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AtmId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A terminal as published by the directory.
///
/// Records are immutable once listed; the directory owns them and hands out
/// copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtmRecord {
    pub id: AtmId,
    pub name: String,
    pub location: String,
}

impl AtmRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: AtmId::new(id),
            name: name.into(),
            location: location.into(),
        }
    }
}
