use sqlx::PgPool;

use crate::{error::Result, models::NewContact};

pub async fn create_contact(pool: &PgPool, contact: &NewContact) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO contacts (name, phone, date) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&contact.name)
    .bind(&contact.phone)
    .bind(&contact.date)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
