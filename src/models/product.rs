use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

// DB models

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub article: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub section: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Color {
    pub id: i32,
    pub color: String,
}

/// Row of the `products_colors` association table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

/// A color joined through `products_colors`, tagged with its owner.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductColorRow {
    pub product_id: i32,
    pub id: i32,
    pub color: String,
}

/// Insert payload for seeding products out-of-band.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub article: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub section: String,
    pub is_available: bool,
}

// Query types

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter {
    pub category: String,
    pub section: String,
    pub id: Option<i32>,
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        product.category == self.category
            && product.section == self.section
            && self.id.is_none_or(|id| product.id == id)
    }
}

// Response types

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorResponse {
    pub id: i32,
    pub color: String,
}

impl From<Color> for ColorResponse {
    fn from(color: Color) -> Self {
        Self {
            id: color.id,
            color: color.color,
        }
    }
}

impl From<ProductColorRow> for ColorResponse {
    fn from(row: ProductColorRow) -> Self {
        Self {
            id: row.id,
            color: row.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub article: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub section: String,
    #[serde(rename = "is_avialable")]
    pub is_available: bool,
    pub colors: Vec<ColorResponse>,
}

impl ProductResponse {
    /// Price crosses the boundary as a float; precision loss is accepted.
    pub fn new(product: Product, colors: Vec<ColorResponse>) -> Self {
        Self {
            id: product.id,
            article: product.article,
            name: product.name,
            price: product.price.to_f64().unwrap_or_default(),
            image: product.image,
            description: product.description,
            category: product.category,
            section: product.section,
            is_available: product.is_available,
            colors,
        }
    }
}
