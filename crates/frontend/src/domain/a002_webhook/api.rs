use crate::shared::api_utils::{
    api_url, delete_json, get_json, post_empty, post_json, put_json, ApiError,
};
use contracts::domain::a002_webhook::{
    WebhookDto, WebhookListResponse, WebhookTestResponse, WebhookToggleResponse,
};
use contracts::shared::MutationResponse;

fn ensure_success(resp: MutationResponse) -> Result<(), ApiError> {
    if resp.success {
        Ok(())
    } else {
        Err(ApiError::Application(resp.failure_message()))
    }
}

/// Raw list response; the caller decides whether a failure means "table missing".
pub async fn fetch_webhooks() -> Result<WebhookListResponse, ApiError> {
    get_json(&api_url("/webhooks")).await
}

/// Ask the backend to create the webhooks table if it does not exist yet.
pub async fn init_table() -> Result<(), ApiError> {
    let resp: MutationResponse = post_empty(&api_url("/webhooks/init")).await?;
    ensure_success(resp)
}

pub async fn create_webhook(dto: &WebhookDto) -> Result<(), ApiError> {
    let resp: MutationResponse = post_json(&api_url("/webhooks"), dto).await?;
    ensure_success(resp)
}

pub async fn update_webhook(id: i64, dto: &WebhookDto) -> Result<(), ApiError> {
    let resp: MutationResponse = put_json(&api_url(&format!("/webhooks/{}", id)), dto).await?;
    ensure_success(resp)
}

pub async fn delete_webhook(id: i64) -> Result<(), ApiError> {
    let resp: MutationResponse = delete_json(&api_url(&format!("/webhooks/{}", id))).await?;
    ensure_success(resp)
}

pub async fn toggle_webhook(id: i64) -> Result<WebhookToggleResponse, ApiError> {
    let resp: WebhookToggleResponse =
        post_empty(&api_url(&format!("/webhooks/{}/toggle", id))).await?;
    if resp.success {
        Ok(resp)
    } else {
        Err(ApiError::Application(
            resp.error.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

/// Fire a test delivery. Application failures come back inside the response.
pub async fn test_webhook(id: i64) -> Result<WebhookTestResponse, ApiError> {
    post_empty(&api_url(&format!("/webhooks/{}/test", id))).await
}
