//! Webhook page state and the pure transitions behind its handlers.

use crate::shared::date_utils::format_datetime;
use crate::shared::store::EntityStore;
use contracts::domain::a002_webhook::aggregate::is_success_status;
use contracts::domain::a002_webhook::{
    Webhook, WebhookListResponse, WebhookTestResponse,
};
use leptos::prelude::*;

/// Response bodies longer than this are cut in the test dialog.
pub const TEST_BODY_LIMIT: usize = 500;

/// What to do with a `/webhooks` list response.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStep {
    Loaded(Vec<Webhook>),
    /// The table does not exist yet: run init, then load again.
    InitAndRetry,
    Failed(String),
}

pub fn next_step(resp: WebhookListResponse, allow_retry: bool) -> LoadStep {
    if resp.success {
        if let Some(webhooks) = resp.webhooks {
            return LoadStep::Loaded(webhooks);
        }
    }
    if allow_retry && resp.is_missing_table() {
        return LoadStep::InitAndRetry;
    }
    LoadStep::Failed(resp.failure_message())
}

#[derive(Clone, Debug, Default)]
pub struct WebhookListState {
    pub store: EntityStore<Webhook>,
    pub is_loading: bool,
    initialized: bool,
}

impl WebhookListState {
    /// Claim the one-time page initialization. Returns false when it already ran.
    pub fn begin_init(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn count_label(&self) -> String {
        format!("Webhooks ({})", self.store.len())
    }

    /// Swap in the server's copy of a toggled webhook. Other rows stay untouched.
    pub fn apply_toggle(&mut self, webhook: Webhook) -> bool {
        self.store.update(webhook)
    }

    /// Record a test delivery on the cached row.
    ///
    /// The webhook returned by the server wins; without it the status code and
    /// response time are patched in and `tested_at` becomes the test time.
    pub fn apply_test_result(&mut self, id: i64, resp: &WebhookTestResponse, tested_at: String) {
        if let Some(webhook) = resp.webhook.clone() {
            if webhook.id == id {
                self.store.update(webhook);
                return;
            }
        }
        let Some(current) = self.store.get(&id) else {
            return;
        };
        let mut patched = current.clone();
        patched.last_test_status = resp.status_code;
        patched.last_test_response_time = resp.response_time;
        patched.last_test_at = Some(tested_at);
        self.store.update(patched);
    }
}

pub fn create_state() -> RwSignal<WebhookListState> {
    RwSignal::new(WebhookListState::default())
}

/// Cut `body` to `limit` characters, marking the cut with an ellipsis.
pub fn truncate_body(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// "Last test" cell text, `None` when the webhook was never tested.
pub fn last_test_summary(webhook: &Webhook) -> Option<String> {
    let tested_at = webhook.last_test_at.as_deref()?;
    let status = webhook
        .last_test_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    Some(format!(
        "{} - {} ({}ms)",
        format_datetime(tested_at),
        status,
        webhook.last_test_response_time.unwrap_or(0.0)
    ))
}

/// CSS class for a status code in the test dialog.
pub fn status_class(status: Option<u16>) -> &'static str {
    match status {
        Some(code) if is_success_status(code) => "result-value status-code-success",
        _ => "result-value status-code-error",
    }
}
