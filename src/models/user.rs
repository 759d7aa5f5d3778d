use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    /// Argon2 hash, never the plaintext. Note the users list endpoint still
    /// serializes this field (parity with the original wire format).
    pub password: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Signup body. Fields are optional so a missing username or password is our
/// 400, not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    /// Splits the request into (username, password, name) if both credentials
    /// are present and non-empty.
    pub fn credentials(self) -> Option<(String, String, Option<String>)> {
        match (self.username, self.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some((u, p, self.name)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Token claims: the user's id (hex) and username. No expiry claim; tokens
/// stay valid until the signing secret rotates.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_username_and_password() {
        let req = SignupRequest {
            name: None,
            username: Some("alice".into()),
            password: None,
        };
        assert!(req.credentials().is_none());

        let req = SignupRequest {
            name: None,
            username: Some("".into()),
            password: Some("pw1".into()),
        };
        assert!(req.credentials().is_none());
    }

    #[test]
    fn credentials_pass_through_optional_name() {
        let req = SignupRequest {
            name: Some("Alice".into()),
            username: Some("alice".into()),
            password: Some("pw1".into()),
        };
        let (username, password, name) = req.credentials().unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "pw1");
        assert_eq!(name.as_deref(), Some("Alice"));
    }

    #[test]
    fn user_serializes_with_mongo_id_field() {
        let user = User {
            id: None,
            name: None,
            username: "alice".into(),
            password: "$argon2id$...".into(),
            created_at: 0,
        };
        let value = serde_json::to_value(&user).unwrap();
        // id and name are omitted entirely when unset
        assert!(value.get("_id").is_none());
        assert!(value.get("name").is_none());
        assert_eq!(value["username"], "alice");
    }
}
