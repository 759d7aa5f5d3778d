use serde::Serialize;

pub mod movie;
pub mod user;

/// Standard `{success, message}` body returned by all mutating endpoints.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Successful signin body. The token string carries the "JWT " scheme prefix
/// so clients can echo it back verbatim in the Authorization header.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}
