use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::api::auth::blacklist::TokenBlacklist;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
    pub settings: AppSettings,
    pub blacklist: TokenBlacklist,
}

// These impls let extractors and middleware pull out just the part of
// the state they need.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for TokenBlacklist {
    fn from_ref(state: &ApiContext) -> Self {
        state.blacklist.clone()
    }
}
