use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CatalogFilter, NewContact, NewOrder, ProductResponse},
};

/// Persistence seam for the handlers.
#[async_trait]
pub trait StorefrontStore: Send + Sync {
    /// Products matching the filter, each with its colors, ordered by id.
    async fn find_products(&self, filter: &CatalogFilter) -> Result<Vec<ProductResponse>>;

    /// Appends an order and returns its id.
    async fn insert_order(&self, order: &NewOrder) -> Result<i32>;

    /// Appends a contact request and returns its id.
    async fn insert_contact(&self, contact: &NewContact) -> Result<i32>;

    async fn check_health(&self) -> Result<()>;
}
