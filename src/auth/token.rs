// JWT token issuance and validation

use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime: 24 hours
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email
    pub iat: i64,
    pub exp: i64,
}

/// Why a presented token was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token is malformed or its signature does not verify")]
    Invalid,
}

/// A token whose signature and expiry have been checked.
///
/// Only [`TokenService::verify`] constructs this, so holding one is proof that
/// the subject came from a token this service signed and that has not lapsed.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    claims: Claims,
}

impl VerifiedToken {
    /// The identity (email) the token asserts
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }

    pub fn issued_at(&self) -> i64 {
        self.claims.iat
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }

    pub fn into_subject(self) -> String {
        self.claims.sub
    }
}

/// Token service for JWT operations, signing with a single process-wide secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenService {
    /// Create a TokenService with the default 24 hour lifetime
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, DEFAULT_TOKEN_TTL_SECONDS)
    }

    /// Create a TokenService whose tokens expire `ttl_seconds` after issuance
    pub fn with_ttl(secret: &str, ttl_seconds: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a signed token binding `subject`, valid from now for the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    pub(crate) fn issue_at(&self, subject: &str, issued_at: i64) -> Result<String, AuthError> {
        let exp = issued_at.checked_add(self.ttl_seconds).ok_or_else(|| {
            AuthError::TokenGenerationError(format!(
                "expiry overflows: issued_at={} ttl={}",
                issued_at, self.ttl_seconds
            ))
        })?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Check signature and expiry, yielding the verified claims
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| VerifiedToken {
                claims: data.claims,
            })
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// True iff the token was signed with our secret and has not expired
    pub fn validate(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }

    /// The subject of a token, or `None` if the token does not verify
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.verify(token).ok().map(VerifiedToken::into_subject)
    }
}
