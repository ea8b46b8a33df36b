pub mod albums;
pub mod auth;
pub mod comments;
pub mod feed;
pub mod follows;
pub mod posts;
pub mod root;
pub mod search;
pub mod stories;
pub mod users;

use crate::api_state::ApiContext;
use crate::routes::albums::router::albums_protected_router;
use crate::routes::auth::middlewares::optional_user::OptionalUser;
use crate::routes::auth::middlewares::user::ApiUser;
use crate::routes::auth::router::{auth_protected_router, auth_public_router};
use crate::routes::comments::router::comments_protected_router;
use crate::routes::feed::router::feed_protected_router;
use crate::routes::follows::router::follows_protected_router;
use crate::routes::posts::router::{posts_auth_optional_router, posts_protected_router};
use crate::routes::root::router::root_public_router;
use crate::routes::search::router::search_protected_router;
use crate::routes::stories::router::stories_protected_router;
use crate::routes::users::router::users_protected_router;
use app_state::RateLimitingSettings;
use axum::Router;
use axum::middleware::from_extractor_with_state;

/// All application routes live under this prefix.
pub const API_PREFIX: &str = "/api/v1";

pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(root_public_router())
        .nest(
            API_PREFIX,
            Router::new()
                .merge(public_routes(&api_state.settings.api.rate_limiting))
                .merge(auth_optional_routes(api_state.clone()))
                .merge(protected_routes(api_state.clone())),
        )
        .with_state(api_state)
}

fn public_routes(rate_limiting: &RateLimitingSettings) -> Router<ApiContext> {
    auth_public_router(rate_limiting)
}

/// Routes readable without credentials; a valid bearer token still
/// personalizes the response.
fn auth_optional_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(posts_auth_optional_router())
        .route_layer(from_extractor_with_state::<OptionalUser, ApiContext>(
            api_state,
        ))
}

fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(auth_protected_router())
        .merge(users_protected_router())
        .merge(posts_protected_router())
        .merge(comments_protected_router())
        .merge(follows_protected_router())
        .merge(feed_protected_router())
        .merge(albums_protected_router())
        .merge(stories_protected_router())
        .merge(search_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
