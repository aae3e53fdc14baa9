//! # Users and user ids
//!
//! The backend keys users by their Spotify id, which is an opaque string.
//! Some deployments (and fixtures) send ids as JSON integers instead, so
//! [`UserId`] accepts both and always compares as text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UserId(s),
            RawId::Number(n) => UserId(n.to_string()),
        })
    }
}

/// Another user of the app, as listed by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl User {
    /// Display name, falling back to the raw id when the profile has none.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_accepts_strings_and_numbers() {
        let text: UserId = serde_json::from_str("\"spotify:abc\"").unwrap();
        let number: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(text.as_str(), "spotify:abc");
        assert_eq!(number, UserId::from("42"));
    }

    #[test]
    fn test_user_label_falls_back_to_id() {
        let named: User =
            serde_json::from_str(r#"{"id":"u1","display_name":"Mina","image_url":""}"#).unwrap();
        let anonymous: User = serde_json::from_str(r#"{"id":"u2"}"#).unwrap();
        assert_eq!(named.label(), "Mina");
        assert_eq!(anonymous.label(), "u2");
    }
}
