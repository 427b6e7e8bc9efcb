//! Product filter panel: per-field queries combined by client-side intersection.

use crate::shared::api_utils::{describe_error, ApiError};
use contracts::domain::a001_product::Product;
use std::collections::HashSet;

/// Raw filter inputs as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub sku: String,
    pub name: String,
    pub description: String,
    /// "", "true" or "false"
    pub active: String,
}

/// One backend query derived from a non-empty filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterQuery {
    Sku(String),
    Name(String),
    Description(String),
    IsActive(bool),
}

impl FilterQuery {
    /// Endpoint path, query parameter name and value.
    pub fn request_parts(&self) -> (&'static str, &'static str, String) {
        match self {
            FilterQuery::Sku(v) => ("/get_by_sku", "sku", v.clone()),
            FilterQuery::Name(v) => ("/get_by_name", "name", v.clone()),
            FilterQuery::Description(v) => ("/get_by_description", "description", v.clone()),
            FilterQuery::IsActive(v) => ("/get_by_is_active", "is_active", v.to_string()),
        }
    }
}

impl ProductFilters {
    /// Queries to run, in a fixed order: SKU, name, description, active.
    pub fn queries(&self) -> Vec<FilterQuery> {
        let mut queries = Vec::new();
        let sku = self.sku.trim();
        if !sku.is_empty() {
            queries.push(FilterQuery::Sku(sku.to_string()));
        }
        let name = self.name.trim();
        if !name.is_empty() {
            queries.push(FilterQuery::Name(name.to_string()));
        }
        let description = self.description.trim();
        if !description.is_empty() {
            queries.push(FilterQuery::Description(description.to_string()));
        }
        if !self.active.is_empty() {
            queries.push(FilterQuery::IsActive(self.active == "true"));
        }
        queries
    }

    pub fn is_empty(&self) -> bool {
        self.queries().is_empty()
    }
}

/// Keep the products of `all` whose SKU appears in every result set.
///
/// A `None` result (the endpoint reported failure) empties the outcome.
/// The output follows `all`'s order and holds each SKU once.
pub fn intersect_by_sku(all: &[Product], results: &[Option<Vec<Product>>]) -> Vec<Product> {
    let mut allowed: Vec<HashSet<&str>> = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Some(products) => allowed.push(products.iter().map(|p| p.sku.as_str()).collect()),
            None => return Vec::new(),
        }
    }

    let mut seen = HashSet::new();
    all.iter()
        .filter(|p| allowed.iter().all(|set| set.contains(p.sku.as_str())))
        .filter(|p| seen.insert(p.sku.clone()))
        .cloned()
        .collect()
}

/// Alert text when a filter query fails.
pub fn filter_error_message(err: &ApiError) -> String {
    describe_error(err, "Failed to apply filters", "Error applying filters")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, name: &str, active: bool) -> Product {
        Product::new(sku, name, format!("{name} description"), active)
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("A1", "Apple", true),
            product("A2", "Apricot", false),
            product("B1", "Banana", true),
            product("C1", "Cherry", true),
        ]
    }

    #[test]
    fn test_filter_error_message() {
        assert_eq!(
            filter_error_message(&ApiError::Transport("HTTP error! status: 500".into())),
            "Error applying filters: HTTP error! status: 500"
        );
        assert_eq!(
            filter_error_message(&ApiError::Application("bad column".into())),
            "Failed to apply filters: bad column"
        );
    }

    #[test]
    fn test_queries_skip_blank_fields() {
        let filters = ProductFilters {
            sku: "  ".to_string(),
            name: " Ap ".to_string(),
            description: String::new(),
            active: "false".to_string(),
        };
        assert_eq!(
            filters.queries(),
            vec![
                FilterQuery::Name("Ap".to_string()),
                FilterQuery::IsActive(false)
            ]
        );
        assert!(ProductFilters::default().is_empty());
    }

    #[test]
    fn test_request_parts() {
        assert_eq!(
            FilterQuery::IsActive(true).request_parts(),
            ("/get_by_is_active", "is_active", "true".to_string())
        );
        assert_eq!(
            FilterQuery::Description("red".into()).request_parts(),
            ("/get_by_description", "description", "red".to_string())
        );
    }

    #[test]
    fn test_intersection_is_and_of_all_filters() {
        let all = catalog();
        let by_name = Some(vec![product("A1", "Apple", true), product("A2", "Apricot", false)]);
        let by_active = Some(vec![
            product("A1", "Apple", true),
            product("B1", "Banana", true),
            product("C1", "Cherry", true),
        ]);
        let result = intersect_by_sku(&all, &[by_name, by_active]);
        assert_eq!(result.iter().map(|p| p.sku.as_str()).collect::<Vec<_>>(), vec!["A1"]);
    }

    #[test]
    fn test_results_restricted_to_loaded_set() {
        let all = catalog();
        // Server knows a product the client has not loaded yet
        let by_sku = Some(vec![product("Z9", "Zucchini", true), product("C1", "Cherry", true)]);
        let result = intersect_by_sku(&all, &[by_sku]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sku, "C1");
    }

    #[test]
    fn test_failed_query_empties_result() {
        let all = catalog();
        let result = intersect_by_sku(&all, &[Some(all.clone()), None]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicates_removed() {
        let mut all = catalog();
        all.push(product("A1", "Apple (dup)", true));
        let result = intersect_by_sku(&all, &[Some(catalog())]);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].name, "Apple");
    }
}
