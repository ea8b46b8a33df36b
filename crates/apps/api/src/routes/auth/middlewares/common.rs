use crate::api_state::ApiContext;
use axum::extract::{FromRequestParts, State};
use color_eyre::eyre::eyre;
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::AuthClaims;
use common_services::api::auth::token::{TOKEN_TYPE_ACCESS, decode_token};
use http::HeaderMap;
use http::header;
use http::request::Parts;

pub async fn extract_context<S>(parts: &mut Parts, state: &S) -> Result<ApiContext, AuthError>
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    match State::<ApiContext>::from_request_parts(parts, state).await {
        Ok(State(context)) => Ok(context),
        Err(_e) => Err(AuthError::Internal(eyre!(
            "Server state is not configured correctly."
        ))),
    }
}

/// Get the bearer token from the Authorization header.
pub fn extract_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(ToOwned::to_owned)
        .ok_or(AuthError::Unauthenticated)
}

/// Validates an access token against the denylist and signature, and
/// rejects refresh tokens presented as access tokens.
pub fn authenticate_access_token(
    context: &ApiContext,
    token: &str,
) -> Result<AuthClaims, AuthError> {
    if context.blacklist.contains(token) {
        return Err(AuthError::Unauthenticated);
    }
    let claims = decode_token(&context.settings.secrets.jwt, token)?;
    if claims.token_type != TOKEN_TYPE_ACCESS {
        return Err(AuthError::Unauthenticated);
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(extract_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_or_malformed_header_is_rejected() {
        assert!(extract_token(&HeaderMap::new()).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc"));
        assert!(extract_token(&headers).is_err());
    }
}
