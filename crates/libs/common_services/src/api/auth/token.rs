use crate::api::auth::error::AuthError;
use crate::api::auth::interfaces::AuthClaims;
use app_state::constants;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Mints a short-lived access token. Returns the token and its expiry
/// as a Unix timestamp.
pub fn create_access_token(jwt_secret: &str, user_id: i64) -> Result<(String, i64), AuthError> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(constants().auth.access_token_expiry_minutes);
    let claims = AuthClaims {
        sub: user_id,
        jti: Uuid::new_v4().to_string(),
        token_type: TOKEN_TYPE_ACCESS.to_owned(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?;
    Ok((token, expires_at.timestamp()))
}

/// Mints a long-lived refresh token. The `jti` makes each mint unique
/// even within the same second, so the stored token string can be a
/// unique key.
pub fn create_refresh_token(
    jwt_secret: &str,
    user_id: i64,
) -> Result<(String, DateTime<Utc>), AuthError> {
    let now = Utc::now();
    let expires_at = now + Duration::days(constants().auth.refresh_token_expiry_days);
    let claims = AuthClaims {
        sub: user_id,
        jti: Uuid::new_v4().to_string(),
        token_type: TOKEN_TYPE_REFRESH.to_owned(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?;
    Ok((token, expires_at))
}

/// Decodes and validates a token's signature and expiry.
pub fn decode_token(jwt_secret: &str, token: &str) -> Result<AuthClaims, AuthError> {
    let data = decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::Unauthenticated)?;
    Ok(data.claims)
}

/// Decodes a token while ignoring expiry, used when the database row is
/// the source of truth for refresh token lifetime.
pub fn decode_token_allow_expired(jwt_secret: &str, token: &str) -> Result<AuthClaims, AuthError> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    let data = decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidRefreshToken)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_roundtrip() {
        let (token, expiry) = create_access_token(SECRET, 42).unwrap();
        let claims = decode_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
        assert_eq!(claims.exp, expiry);
    }

    #[test]
    fn refresh_tokens_are_unique_per_mint() {
        let (first, _) = create_refresh_token(SECRET, 1).unwrap();
        let (second, _) = create_refresh_token(SECRET, 1).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let (token, _) = create_access_token(SECRET, 7).unwrap();
        assert!(decode_token("other-secret", &token).is_err());
    }
}
