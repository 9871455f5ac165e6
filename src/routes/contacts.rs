use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::NewContact,
    routes::SUBMISSION_ACCEPTED,
    utils::timestamp::submission_date,
};

pub async fn submit_contact(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<&'static str>> {
    let Json(body) = payload?;
    let contact = NewContact::from_json(&body, submission_date())?;

    let id = state.store.insert_contact(&contact).await?;
    tracing::info!("Contact request {} submitted by {}", id, contact.phone);

    Ok(Json(SUBMISSION_ACCEPTED))
}
