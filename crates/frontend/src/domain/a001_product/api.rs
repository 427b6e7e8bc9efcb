use super::filters::FilterQuery;
use crate::shared::api_utils::{api_url, api_url_with_query, get_json, post_json, ApiError};
use contracts::domain::a001_product::{Product, ProductListResponse, SkuRequest};
use contracts::shared::MutationResponse;

fn ensure_success(resp: MutationResponse) -> Result<(), ApiError> {
    if resp.success {
        Ok(())
    } else {
        Err(ApiError::Application(resp.failure_message()))
    }
}

/// Fetch the full catalog
pub async fn fetch_all_products() -> Result<Vec<Product>, ApiError> {
    let resp: ProductListResponse = get_json(&api_url("/get_all_products")).await?;
    match (resp.success, resp.products) {
        (true, Some(products)) => Ok(products),
        _ => Err(ApiError::Application(
            resp.error.unwrap_or_else(|| "Unknown error".to_string()),
        )),
    }
}

/// Run one filter query.
///
/// `Ok(None)` means the endpoint answered `success: false`; that filter then
/// matches nothing.
pub async fn fetch_by_filter(query: &FilterQuery) -> Result<Option<Vec<Product>>, ApiError> {
    let (path, param, value) = query.request_parts();
    let resp: ProductListResponse = get_json(&api_url_with_query(path, param, &value)).await?;
    Ok(if resp.success { resp.products } else { None })
}

pub async fn insert_product(product: &Product) -> Result<(), ApiError> {
    let resp: MutationResponse = post_json(&api_url("/insert_by_sku"), product).await?;
    ensure_success(resp)
}

/// Whole-record update keyed by SKU
pub async fn update_product(product: &Product) -> Result<(), ApiError> {
    let resp: MutationResponse = post_json(&api_url("/update_by_sku"), product).await?;
    ensure_success(resp)
}

pub async fn delete_product(sku: &str) -> Result<(), ApiError> {
    let body = SkuRequest {
        sku: sku.to_string(),
    };
    let resp: MutationResponse = post_json(&api_url("/delete_by_sku"), &body).await?;
    ensure_success(resp)
}
