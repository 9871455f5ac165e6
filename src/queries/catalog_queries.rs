use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{CatalogFilter, ColorResponse, Product, ProductColorRow, ProductResponse},
};

const PRODUCT_COLUMNS: &str = "id, article, name, price, image, description, category, section, \
                               is_avialable AS is_available";

pub async fn find_products(
    pool: &PgPool,
    filter: &CatalogFilter,
    dedupe_colors: bool,
) -> Result<Vec<ProductResponse>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
    query.push(PRODUCT_COLUMNS);
    query.push(" FROM products WHERE category = ");
    query.push_bind(&filter.category);
    query.push(" AND section = ");
    query.push_bind(&filter.section);

    if let Some(id) = filter.id {
        query.push(" AND id = ");
        query.push_bind(id);
    }

    query.push(" ORDER BY id");

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    let mut colors_map = find_colors_by_product_ids(pool, &product_ids, dedupe_colors).await?;

    let result = products
        .into_iter()
        .map(|product| {
            let colors = colors_map.remove(&product.id).unwrap_or_default();
            ProductResponse::new(product, colors)
        })
        .collect();

    Ok(result)
}

pub async fn find_colors_by_product_ids(
    pool: &PgPool,
    product_ids: &[i32],
    dedupe: bool,
) -> Result<HashMap<i32, Vec<ColorResponse>>> {
    let query = if dedupe {
        "SELECT DISTINCT pc.product_id, c.id, c.color
         FROM products_colors pc
         JOIN colors c ON c.id = pc.color_id
         WHERE pc.product_id = ANY($1)
         ORDER BY pc.product_id, c.id"
    } else {
        "SELECT pc.product_id, c.id, c.color
         FROM products_colors pc
         JOIN colors c ON c.id = pc.color_id
         WHERE pc.product_id = ANY($1)
         ORDER BY pc.product_id, c.id"
    };

    let rows = sqlx::query_as::<_, ProductColorRow>(query)
        .bind(product_ids)
        .fetch_all(pool)
        .await?;

    let mut colors_map: HashMap<i32, Vec<ColorResponse>> = HashMap::new();
    for row in rows {
        colors_map
            .entry(row.product_id)
            .or_default()
            .push(ColorResponse::from(row));
    }

    Ok(colors_map)
}
