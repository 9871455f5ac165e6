use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    config::{AppConfig, CorsConfig},
    database::{self, PgStore, StorefrontStore},
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StorefrontStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StorefrontStore>) -> Self {
        Self { store }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let store = PgStore::new(pool, config.catalog.dedupe_colors);

    router(AppState::new(Arc::new(store)), config)
}

/// Assembles the HTTP surface around an already constructed store.
pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let allow_origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| AppError::Config(format!("Invalid CORS origin: {}", origin)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allow_origin))
}
