use sqlx::PgPool;

use crate::{error::Result, models::NewOrder};

pub async fn create_order(pool: &PgPool, order: &NewOrder) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO orders (name, phone, date, status, company, address, inn, kpp, bik,
         city, country, addresspost, post, pay, scope, price, product)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
         RETURNING id",
    )
    .bind(&order.name)
    .bind(&order.phone)
    .bind(&order.date)
    .bind(&order.status)
    .bind(&order.company)
    .bind(&order.address)
    .bind(&order.inn)
    .bind(&order.kpp)
    .bind(&order.bik)
    .bind(&order.city)
    .bind(&order.country)
    .bind(&order.addresspost)
    .bind(&order.post)
    .bind(&order.pay)
    .bind(&order.scope)
    .bind(&order.price)
    .bind(&order.product)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
