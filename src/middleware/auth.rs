use crate::error::ApiError;
use crate::models::user::Claims;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Signing and verification material for bearer tokens, derived from the
/// configured secret once at startup.
///
/// Tokens carry no `exp` claim, so expiry validation is disabled; a token is
/// good until the secret rotates.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::default(), claims, &self.encoding)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

/// The identity attached to an authenticated request.
///
/// Add `user: AuthenticatedUser` as a handler parameter and Axum will:
/// 1. Extract the Authorization header
/// 2. Verify the token signature
/// 3. Hand the handler the identity, or short-circuit with 401
///
/// The store is never touched for a rejected request.
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AuthKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Authentication("Missing Authorization header.".into()))?;

        // Expected format: "JWT <token>". Signin hands out tokens with that
        // prefix; "Bearer" is accepted too for standard clients.
        let (scheme, token) = header
            .split_once(' ')
            .ok_or_else(|| ApiError::Authentication("Invalid Authorization header format.".into()))?;

        if !scheme.eq_ignore_ascii_case("jwt") && !scheme.eq_ignore_ascii_case("bearer") {
            return Err(ApiError::Authentication(
                "Invalid Authorization header format.".into(),
            ));
        }

        let keys = AuthKeys::from_ref(state);
        let claims = keys
            .decode(token.trim())
            .map_err(|_| ApiError::Authentication("Invalid token.".into()))?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn keys() -> AuthKeys {
        AuthKeys::new("test-secret")
    }

    fn claims() -> Claims {
        Claims {
            sub: "64b0c0ffee00000000000000".into(),
            username: "alice".into(),
        }
    }

    fn parts_with_header(value: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/movies");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn tokens_round_trip_without_expiry() {
        let keys = keys();
        let token = keys.encode(&claims()).unwrap();
        let decoded = keys.decode(&token).unwrap();
        assert_eq!(decoded.username, "alice");
        assert_eq!(decoded.sub, "64b0c0ffee00000000000000");
    }

    #[test]
    fn tokens_signed_with_another_secret_fail() {
        let token = AuthKeys::new("other-secret").encode(&claims()).unwrap();
        assert!(keys().decode(&token).is_err());
    }

    #[tokio::test]
    async fn extractor_accepts_jwt_scheme() {
        let keys = keys();
        let token = keys.encode(&claims()).unwrap();
        let mut parts = parts_with_header(Some(format!("JWT {token}")));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn extractor_accepts_bearer_scheme() {
        let keys = keys();
        let token = keys.encode(&claims()).unwrap();
        let mut parts = parts_with_header(Some(format!("Bearer {token}")));
        assert!(
            AuthenticatedUser::from_request_parts(&mut parts, &keys)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn extractor_rejects_missing_header() {
        let mut parts = parts_with_header(None);
        let err = AuthenticatedUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
    }

    #[tokio::test]
    async fn extractor_rejects_garbage_token() {
        let mut parts = parts_with_header(Some("JWT not.a.token".into()));
        let err = AuthenticatedUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
    }

    #[tokio::test]
    async fn extractor_rejects_unknown_scheme() {
        let keys = keys();
        let token = keys.encode(&claims()).unwrap();
        let mut parts = parts_with_header(Some(format!("Basic {token}")));
        assert!(
            AuthenticatedUser::from_request_parts(&mut parts, &keys)
                .await
                .is_err()
        );
    }
}
