use sqlx::PgPool;

use crate::config::Config;
use crate::resources::Services;

/// Shared application state injected into the probe handlers via Axum extractors.
/// Resource routes carry their own service as state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub services: Services,
}
