//! Catalog Metrics
//!
//! Summary numbers for the dashboard stat cards and the per-category
//! breakdown bars.

use std::collections::{HashMap, HashSet};

use crate::models::Product;

/// Revenue as price times stock, summed over the catalog
pub fn total_revenue(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price * p.stock as f64).sum()
}

/// Mean rating, 0 for an empty catalog
pub fn average_rating(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    products.iter().map(|p| p.rating).sum::<f64>() / products.len() as f64
}

/// Total units in stock
pub fn total_stock(products: &[Product]) -> u32 {
    products.iter().map(|p| p.stock).sum()
}

/// Number of distinct categories
pub fn category_count(products: &[Product]) -> usize {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Stock per category, largest first; ties break on the category name
pub fn category_stock(products: &[Product]) -> Vec<(String, u32)> {
    let mut by_category: HashMap<&str, u32> = HashMap::new();
    for product in products {
        *by_category.entry(product.category.as_str()).or_default() += product.stock;
    }

    let mut rows: Vec<(String, u32)> = by_category
        .into_iter()
        .map(|(category, stock)| (category.to_string(), stock))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, category: &str, price: f64, stock: u32, rating: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            brand: String::new(),
            category: category.to_string(),
            price,
            stock,
            rating,
        }
    }

    #[test]
    fn test_revenue_is_price_times_stock() {
        let products = vec![
            make_product(1, "a", 2.0, 10, 4.0),
            make_product(2, "b", 5.0, 2, 3.0),
        ];
        assert_eq!(total_revenue(&products), 30.0);
    }

    #[test]
    fn test_average_rating_of_empty_catalog_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);

        let products = vec![
            make_product(1, "a", 1.0, 1, 4.0),
            make_product(2, "a", 1.0, 1, 2.0),
        ];
        assert_eq!(average_rating(&products), 3.0);
    }

    #[test]
    fn test_category_count_is_distinct() {
        let products = vec![
            make_product(1, "beauty", 1.0, 1, 1.0),
            make_product(2, "beauty", 1.0, 1, 1.0),
            make_product(3, "groceries", 1.0, 1, 1.0),
        ];
        assert_eq!(category_count(&products), 2);
        assert_eq!(total_stock(&products), 3);
    }

    #[test]
    fn test_category_stock_sorts_largest_first() {
        let products = vec![
            make_product(1, "beauty", 1.0, 5, 1.0),
            make_product(2, "groceries", 1.0, 20, 1.0),
            make_product(3, "beauty", 1.0, 10, 1.0),
        ];

        let rows = category_stock(&products);
        assert_eq!(rows[0], ("groceries".to_string(), 20));
        assert_eq!(rows[1], ("beauty".to_string(), 15));
    }
}
