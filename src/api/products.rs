//! Product Catalog
//!
//! Read-only fetch from the public demo endpoint. No auth, no credentials.

use super::fetch_json;
use crate::models::{Product, ProductsResponse};

/// Public demo catalog, capped at 100 rows
const PRODUCTS_URL: &str = "https://dummyjson.com/products?limit=100";

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let res: ProductsResponse = fetch_json(PRODUCTS_URL).await?;
    Ok(res.products)
}
