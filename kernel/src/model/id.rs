use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::AppError;
use uuid::Uuid;

/// Identifier assigned to a book exactly once, at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(into = "String", try_from = "String")]
#[sqlx(transparent)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for BookId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uuid::parse_str(&value).map(Self).map_err(AppError::from)
    }
}

impl FromStr for BookId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(AppError::from)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
