use crate::routes::auth::middlewares::common::{
    authenticate_access_token, extract_context, extract_token,
};
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::AuthClaims;
use common_services::database::app_user::User;
use common_services::database::user_store::UserStore;

use crate::api_state::ApiContext;

/// Resolves the bearer token to a full user record. Used as a route
/// layer on protected routes; handlers read the user back out of
/// request extensions.
#[derive(Clone, Debug)]
pub struct ApiUser(pub User);

impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)?;
        let context = extract_context(parts, state).await?;
        let claims = authenticate_access_token(&context, &token)?;
        let user = UserStore::find_by_id(&context.pool, claims.sub)
            .await?
            .ok_or(AuthError::Unauthenticated)?;
        parts.extensions.insert(user.clone());
        parts.extensions.insert::<AuthClaims>(claims);
        Ok(Self(user))
    }
}
