use crate::apod::ApodClient;
use crate::settings::AppSettings;
use axum::extract::FromRef;
use sqlx::PgPool;

/// Explicit handles for everything the handlers need: no module-level
/// singletons.
#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
    pub apod_client: ApodClient,
    pub settings: AppSettings,
}

// These impls let extractors pull out just the part of the state they need.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for ApodClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.apod_client.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
