use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::NewOrder,
    routes::SUBMISSION_ACCEPTED,
    utils::timestamp::submission_date,
};

pub async fn submit_order(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<&'static str>> {
    let Json(body) = payload?;
    let order = NewOrder::from_json(&body, submission_date())?;

    let id = state.store.insert_order(&order).await?;
    tracing::info!("Order {} submitted by {}", id, order.phone);

    Ok(Json(SUBMISSION_ACCEPTED))
}
