use crate::shared::api_utils::{api_url, ApiError};
use contracts::usecases::u502_delete_all_products::DeleteAllResponse;
use gloo_net::http::Request;

/// How much of an unexpected body is quoted back to the user.
const BODY_PREVIEW_CHARS: usize = 100;

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

/// Validate a `/delete` response before trusting its body.
pub fn check_delete_response(
    ok: bool,
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<DeleteAllResponse, ApiError> {
    if !ok {
        return Err(ApiError::Transport(format!(
            "HTTP {}: {}",
            status,
            preview(body)
        )));
    }
    if !content_type.is_some_and(|ct| ct.contains("application/json")) {
        return Err(ApiError::Transport(format!(
            "Response is not JSON. Received: {}",
            preview(body)
        )));
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

pub async fn delete_all_products() -> Result<DeleteAllResponse, ApiError> {
    let response = Request::post(&api_url("/delete"))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    let content_type = response.headers().get("content-type");
    let body = response.text().await.map_err(ApiError::transport)?;
    check_delete_response(
        response.ok(),
        response.status(),
        content_type.as_deref(),
        &body,
    )
}

/// Text shown under the button once the request settles.
pub fn outcome_text(result: &Result<DeleteAllResponse, ApiError>) -> (bool, String) {
    match result {
        Ok(resp) if resp.success => (
            true,
            format!("✅ {}", resp.message.clone().unwrap_or_default()),
        ),
        Ok(resp) => (false, format!("❌ {}", resp.failure_message())),
        Err(e) => (false, format!("❌ Delete failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_2xx_quotes_body() {
        let body = "x".repeat(250);
        let err = check_delete_response(false, 502, Some("text/html"), &body).unwrap_err();
        assert_eq!(err.to_string(), format!("HTTP 502: {}", "x".repeat(100)));
    }

    #[test]
    fn test_non_json_rejected() {
        let err = check_delete_response(true, 200, Some("text/html; charset=utf-8"), "<html>")
            .unwrap_err();
        assert_eq!(err.to_string(), "Response is not JSON. Received: <html>");
        assert!(check_delete_response(true, 200, None, "{}").is_err());
    }

    #[test]
    fn test_json_accepted() {
        let resp = check_delete_response(
            true,
            200,
            Some("application/json"),
            r#"{"success":true,"message":"All products deleted"}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(
            outcome_text(&Ok(resp)),
            (true, "✅ All products deleted".to_string())
        );
    }

    #[test]
    fn test_failure_texts() {
        let failed = DeleteAllResponse {
            success: false,
            message: Some("busy".to_string()),
            error: None,
        };
        assert_eq!(outcome_text(&Ok(failed)), (false, "❌ busy".to_string()));
        assert_eq!(
            outcome_text(&Ok(DeleteAllResponse::default())),
            (false, "❌ Delete failed".to_string())
        );
        let transport = Err(ApiError::Transport("HTTP 500: oops".to_string()));
        assert_eq!(
            outcome_text(&transport),
            (false, "❌ Delete failed: HTTP 500: oops".to_string())
        );
    }
}
