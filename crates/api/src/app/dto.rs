use chrono::SecondsFormat;
use serde::Deserialize;

use roster_core::User;

// -------------------------
// Request DTOs
// -------------------------

/// Body for create and full-replace update.
///
/// Both fields are required: a body carrying only one of them fails
/// deserialization, which keeps update semantics at "replace both" and
/// rules out implicitly nulling the absent field.
#[derive(Debug, Deserialize)]
pub struct UserBodyRequest {
    pub name: String,
    pub age: i64,
}

// -------------------------
// Response mapping
// -------------------------

/// Wire shape of one record: hex id, camelCase timestamps rendered as
/// millisecond-precision RFC 3339 with a `Z` suffix (e.g.
/// `2024-05-01T12:00:00.000Z`).
pub fn user_to_json(user: User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id.to_string(),
        "name": user.name,
        "age": user.age,
        "createdAt": user.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "updatedAt": user.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roster_core::UserId;

    #[test]
    fn record_json_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let id = UserId::new();
        let value = user_to_json(User {
            id,
            name: "Ann".to_string(),
            age: 30,
            created_at: ts,
            updated_at: ts,
        });

        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["age"], 30);
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00.000Z");
        assert_eq!(value["updatedAt"], value["createdAt"]);
    }

    #[test]
    fn body_requires_both_fields() {
        let missing_age: Result<UserBodyRequest, _> =
            serde_json::from_str(r#"{"name": "Ann"}"#);
        assert!(missing_age.is_err());

        let missing_name: Result<UserBodyRequest, _> =
            serde_json::from_str(r#"{"age": 30}"#);
        assert!(missing_name.is_err());
    }
}
