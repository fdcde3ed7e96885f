//! Access token issuing and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 key pair derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: i64,
}

impl JwtKeys {
    /// Creates keys from the shared secret and token lifetime in seconds.
    pub fn new(secret: &str, expires_in: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    /// Issues a signed token for the user, valid for the configured lifetime.
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat,
            exp: iat + self.expires_in,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::TokenCreation)
    }

    /// Checks signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;

        Ok(data.claims)
    }
}
