use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::Result,
    models::{CatalogFilter, ProductResponse},
};

pub async fn list_products(
    State(state): State<AppState>,
    Path((category, section)): Path<(String, String)>,
) -> Result<Json<Vec<ProductResponse>>> {
    let filter = CatalogFilter {
        category,
        section,
        id: None,
    };

    find(&state, &filter).await
}

/// An id that is not a valid product id matches nothing.
pub async fn get_product(
    State(state): State<AppState>,
    Path((category, section, id)): Path<(String, String, String)>,
) -> Result<Json<Vec<ProductResponse>>> {
    let Ok(id) = id.parse::<i32>() else {
        tracing::debug!("Catalog lookup with non-numeric id {:?}", id);
        return Ok(Json(Vec::new()));
    };

    let filter = CatalogFilter {
        category,
        section,
        id: Some(id),
    };

    find(&state, &filter).await
}

async fn find(state: &AppState, filter: &CatalogFilter) -> Result<Json<Vec<ProductResponse>>> {
    let products = state.store.find_products(filter).await?;

    tracing::debug!(
        "Catalog {}/{} (id={:?}): {} products",
        filter.category,
        filter.section,
        filter.id,
        products.len()
    );

    Ok(Json(products))
}
