// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT session middleware.
//!
//! Tokens are issued elsewhere; this layer only verifies them and turns the
//! claims into a [`Session`] for the handlers.

use crate::error::AppError;
use crate::models::Session;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "greennexus_token";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Claims {
    fn into_session(self) -> Option<Session> {
        let user_id = self.sub.parse().ok()?;
        Some(Session {
            user_id,
            name: self.name,
            profile_image: self.picture,
        })
    }
}

/// Middleware that requires a valid session token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(t) => t.to_string(),
            None => return Err(AppError::Unauthorized),
        }
    };

    let session = decode_session(&token, &state.config.jwt_signing_key).ok_or_else(|| {
        tracing::debug!("Rejected request with invalid session token");
        AppError::InvalidToken
    })?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Verify a token and build the session it describes.
pub fn decode_session(token: &str, signing_key: &[u8]) -> Option<Session> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(token, &key, &validation)
        .ok()?
        .claims
        .into_session()
}

/// Create a session JWT for a user.
pub fn create_jwt(user_id: u64, name: Option<&str>, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + 7 * 24 * 60 * 60, // 7 days
        name: name.map(str::to_string),
        picture: None,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"test_jwt_key_32_bytes_minimum!!";

    #[test]
    fn test_session_from_token() {
        let token = create_jwt(42, Some("Alex"), KEY).unwrap();
        let session = decode_session(&token, KEY).unwrap();

        assert_eq!(session.user_id, 42);
        assert_eq!(session.name.as_deref(), Some("Alex"));
        assert!(session.profile_image.is_none());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = create_jwt(42, None, KEY).unwrap();
        assert!(decode_session(&token, b"some_other_key_of_enough_length").is_none());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let claims = Claims {
            sub: "alex".to_string(),
            exp: 4_102_444_800, // 2100-01-01
            iat: 0,
            name: None,
            picture: None,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(KEY),
        )
        .unwrap();

        assert!(decode_session(&token, KEY).is_none());
    }
}
