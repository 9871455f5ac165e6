mod catalog;
mod contacts;
mod health;
mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Fixed body returned by both submission endpoints.
pub const SUBMISSION_ACCEPTED: &str = "Заявка успешно добавлена";

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/catalog/{category}/{section}", get(catalog::list_products))
        .route(
            "/api/catalog/{category}/{section}/{id}",
            get(catalog::get_product),
        )
        .route("/api/orders", post(orders::submit_order))
        .route("/api/contacts", post(contacts::submit_contact))
}
