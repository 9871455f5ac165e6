use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::StorefrontStore;
use crate::{
    error::{AppError, Result},
    models::{
        CatalogFilter, Color, ColorResponse, Contact, NewContact, NewOrder, NewProduct, Order,
        Product, ProductColor, ProductResponse, STATUS_PENDING,
    },
};

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    colors: Vec<Color>,
    products_colors: Vec<ProductColor>,
    contacts: Vec<Contact>,
    orders: Vec<Order>,
}

/// In-process store with the same observable behavior as the Postgres
/// schema: serial ids, append-only submissions, `pending` column defaults.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    dedupe_colors: bool,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new(dedupe_colors: bool) -> Self {
        Self {
            dedupe_colors,
            ..Self::default()
        }
    }

    /// A store whose every call fails as if the database were unreachable.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub async fn insert_product(&self, product: NewProduct) -> i32 {
        let mut tables = self.tables.lock().await;
        let id = next_id(tables.products.iter().map(|p| p.id));
        tables.products.push(Product {
            id,
            article: product.article,
            name: product.name,
            price: product.price,
            image: product.image,
            description: product.description,
            category: product.category,
            section: product.section,
            is_available: product.is_available,
        });
        id
    }

    pub async fn insert_color(&self, color: &str) -> i32 {
        let mut tables = self.tables.lock().await;
        let id = next_id(tables.colors.iter().map(|c| c.id));
        tables.colors.push(Color {
            id,
            color: color.to_string(),
        });
        id
    }

    /// Links are not deduplicated on insert, matching the join table.
    pub async fn link_color(&self, product_id: i32, color_id: i32) {
        self.tables.lock().await.products_colors.push(ProductColor {
            product_id,
            color_id,
        });
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.tables.lock().await.orders.clone()
    }

    pub async fn contacts(&self) -> Vec<Contact> {
        self.tables.lock().await.contacts.clone()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

#[async_trait]
impl StorefrontStore for MemoryStore {
    async fn find_products(&self, filter: &CatalogFilter) -> Result<Vec<ProductResponse>> {
        self.ensure_available()?;
        let tables = self.tables.lock().await;

        let mut products: Vec<&Product> = tables
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();
        products.sort_by_key(|p| p.id);

        let result = products
            .into_iter()
            .map(|product| {
                let mut links: Vec<&ProductColor> = tables
                    .products_colors
                    .iter()
                    .filter(|link| link.product_id == product.id)
                    .collect();
                links.sort_by_key(|link| link.color_id);
                if self.dedupe_colors {
                    links.dedup();
                }

                let colors = links
                    .into_iter()
                    .filter_map(|link| tables.colors.iter().find(|c| c.id == link.color_id))
                    .cloned()
                    .map(ColorResponse::from)
                    .collect();

                ProductResponse::new(product.clone(), colors)
            })
            .collect();

        Ok(result)
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<i32> {
        self.ensure_available()?;
        let mut tables = self.tables.lock().await;
        let id = next_id(tables.orders.iter().map(|o| o.id));

        tables.orders.push(Order {
            id,
            name: order.name.clone(),
            phone: order.phone.clone(),
            date: order.date.clone(),
            status: Some(order.status.clone()),
            company: order.company.clone(),
            address: order.address.clone(),
            inn: order.inn.clone(),
            kpp: order.kpp.clone(),
            bik: order.bik.clone(),
            city: order.city.clone(),
            country: order.country.clone(),
            addresspost: order.addresspost.clone(),
            post: order.post.clone(),
            pay: order.pay.clone(),
            scope: order.scope.clone(),
            price: order.price.clone(),
            product: Some(order.product.clone()),
        });

        Ok(id)
    }

    async fn insert_contact(&self, contact: &NewContact) -> Result<i32> {
        self.ensure_available()?;
        let mut tables = self.tables.lock().await;
        let id = next_id(tables.contacts.iter().map(|c| c.id));

        tables.contacts.push(Contact {
            id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            date: contact.date.clone(),
            status: Some(STATUS_PENDING.to_string()),
        });

        Ok(id)
    }

    async fn check_health(&self) -> Result<()> {
        self.ensure_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(category: &str, section: &str) -> NewProduct {
        NewProduct {
            article: "B-1".to_string(),
            name: "Lamp".to_string(),
            price: Decimal::new(4990, 2),
            image: "/img/lamp.png".to_string(),
            description: "Desk lamp".to_string(),
            category: category.to_string(),
            section: section.to_string(),
            is_available: true,
        }
    }

    fn filter(category: &str, section: &str, id: Option<i32>) -> CatalogFilter {
        CatalogFilter {
            category: category.to_string(),
            section: section.to_string(),
            id,
        }
    }

    #[tokio::test]
    async fn ids_are_serial() {
        let store = MemoryStore::default();
        assert_eq!(store.insert_product(product("light", "desk")).await, 1);
        assert_eq!(store.insert_product(product("light", "desk")).await, 2);
        assert_eq!(store.insert_color("white").await, 1);
    }

    #[tokio::test]
    async fn duplicate_links_are_kept_by_default() {
        let store = MemoryStore::default();
        let id = store.insert_product(product("light", "desk")).await;
        let white = store.insert_color("white").await;
        store.link_color(id, white).await;
        store.link_color(id, white).await;

        let found = store.find_products(&filter("light", "desk", None)).await.unwrap();
        assert_eq!(found[0].colors.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_links_collapse_when_deduping() {
        let store = MemoryStore::new(true);
        let id = store.insert_product(product("light", "desk")).await;
        let white = store.insert_color("white").await;
        store.link_color(id, white).await;
        store.link_color(id, white).await;

        let found = store.find_products(&filter("light", "desk", None)).await.unwrap();
        assert_eq!(found[0].colors.len(), 1);
    }

    #[tokio::test]
    async fn contacts_get_default_status() {
        let store = MemoryStore::default();
        let id = store
            .insert_contact(&NewContact {
                name: "Olga".to_string(),
                phone: "123".to_string(),
                date: "2024-01-01 00:00:00.000000".to_string(),
            })
            .await
            .unwrap();

        let contacts = store.contacts().await;
        assert_eq!(id, 1);
        assert_eq!(contacts[0].status.as_deref(), Some(STATUS_PENDING));
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::unavailable();
        assert!(store.check_health().await.is_err());
        assert!(store.find_products(&filter("a", "b", None)).await.is_err());
    }
}
