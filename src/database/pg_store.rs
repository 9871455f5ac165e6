use async_trait::async_trait;
use sqlx::PgPool;

use super::{connection, store::StorefrontStore};
use crate::{
    error::Result,
    models::{CatalogFilter, NewContact, NewOrder, ProductResponse},
    queries::{catalog_queries, contact_queries, order_queries},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    dedupe_colors: bool,
}

impl PgStore {
    pub fn new(pool: PgPool, dedupe_colors: bool) -> Self {
        Self {
            pool,
            dedupe_colors,
        }
    }
}

#[async_trait]
impl StorefrontStore for PgStore {
    async fn find_products(&self, filter: &CatalogFilter) -> Result<Vec<ProductResponse>> {
        catalog_queries::find_products(&self.pool, filter, self.dedupe_colors).await
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<i32> {
        order_queries::create_order(&self.pool, order).await
    }

    async fn insert_contact(&self, contact: &NewContact) -> Result<i32> {
        contact_queries::create_contact(&self.pool, contact).await
    }

    async fn check_health(&self) -> Result<()> {
        connection::check_health(&self.pool).await
    }
}
