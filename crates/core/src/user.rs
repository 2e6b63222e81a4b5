//! The user record and its validated input form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

/// A persisted user record.
///
/// The store owns the canonical copy; handlers never cache one across
/// requests. Timestamps are maintained by the store layer on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated `name`/`age` pair used for create and full-replace update.
///
/// Construction is the validation boundary: a `NewUser` that exists is
/// well-formed, so the store layer never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    age: i64,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if age < 0 {
            return Err(DomainError::validation("age must not be negative"));
        }
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        let n = NewUser::new("Ann", 30).unwrap();
        assert_eq!(n.name(), "Ann");
        assert_eq!(n.age(), 30);
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewUser::new("", 30).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_age() {
        let err = NewUser::new("Ann", -1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_age_is_allowed() {
        assert!(NewUser::new("Newborn", 0).is_ok());
    }
}
