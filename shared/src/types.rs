//! API request and response types

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Types
// ============================================================================

/// API error response
///
/// Both domain errors (HTTP 200) and storage errors (HTTP 500) use this body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// User Types
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

/// User response, used both for creation and listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

// ============================================================================
// Exercise Types
// ============================================================================

/// Add exercise request
///
/// Every field arrives as text so that form posts and JSON bodies are handled
/// alike; `duration` and `date` are coerced by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

/// Logged exercise response
///
/// `id` is the owning user's id, not the exercise's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    pub id: String,
}

/// Exercise log query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseLogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Single entry in an exercise log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Exercise log response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseLogResponse {
    pub username: String,
    pub count: usize,
    pub id: String,
    pub log: Vec<LogEntryResponse>,
}

// ============================================================================
// Lenient field decoding
// ============================================================================

/// Deserialize a scalar (string, number or bool) into its textual form.
///
/// `null` maps to `None`. Integral floats lose their fractional part
/// (`30.0` becomes `"30"`).
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientStringVisitor)
}

struct LenientStringVisitor;

impl<'de> Visitor<'de> for LenientStringVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duration_accepts_number_or_string() {
        let from_number: AddExerciseRequest =
            serde_json::from_value(json!({"description": "run", "duration": 30})).unwrap();
        let from_string: AddExerciseRequest =
            serde_json::from_value(json!({"description": "run", "duration": "30"})).unwrap();

        assert_eq!(from_number.duration.as_deref(), Some("30"));
        assert_eq!(from_string.duration.as_deref(), Some("30"));
    }

    #[test]
    fn test_integral_float_loses_fraction() {
        let req: AddExerciseRequest = serde_json::from_value(json!({"duration": 45.0})).unwrap();
        assert_eq!(req.duration.as_deref(), Some("45"));
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let req: AddExerciseRequest =
            serde_json::from_value(json!({"description": null})).unwrap();
        assert!(req.description.is_none());
        assert!(req.duration.is_none());
        assert!(req.date.is_none());
    }

    #[test]
    fn test_numeric_username_is_kept_as_text() {
        let req: CreateUserRequest = serde_json::from_value(json!({"username": 42})).unwrap();
        assert_eq!(req.username.as_deref(), Some("42"));
    }

    #[test]
    fn test_exercise_response_field_order() {
        let response = ExerciseResponse {
            username: "fcc".to_string(),
            description: "run".to_string(),
            duration: 30,
            date: "Mon Jan 01 2024".to_string(),
            id: "abc".to_string(),
        };
        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(
            body,
            r#"{"username":"fcc","description":"run","duration":30,"date":"Mon Jan 01 2024","id":"abc"}"#
        );
    }
}
