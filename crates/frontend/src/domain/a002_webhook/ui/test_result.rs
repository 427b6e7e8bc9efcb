use crate::domain::a002_webhook::state::{status_class, truncate_body, TEST_BODY_LIMIT};
use contracts::domain::a002_webhook::{Webhook, WebhookTestResponse};
use leptos::prelude::*;
use thaw::*;

/// Body of the "Test Webhook" dialog. `result` stays `None` while the test runs.
#[component]
pub fn WebhookTestResult(
    webhook: Webhook,
    #[prop(into)] result: Signal<Option<WebhookTestResponse>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="test-webhook">
            <div id="test-webhook-info" class="test-webhook__info">
                <div><strong>"URL: "</strong>{webhook.url.clone()}</div>
                <div><strong>"Event Type: "</strong>{webhook.event_type.as_str()}</div>
                <div><strong>"Status: "</strong>{webhook.status_label()}</div>
            </div>

            {move || match result.get() {
                None => view! {
                    <div id="test-webhook-loading" class="test-webhook__loading">
                        <Spinner />
                        <span>"Sending test payload..."</span>
                    </div>
                }
                .into_any(),
                Some(resp) => {
                    let status_text = resp
                        .status_code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "N/A".to_string());
                    let time_text = resp
                        .response_time
                        .map(|t| format!("{}ms", t))
                        .unwrap_or_else(|| "N/A".to_string());
                    let (outcome, outcome_class) = if resp.success {
                        ("Success".to_string(), "result-value status-code-success")
                    } else {
                        (
                            resp.error.clone().unwrap_or_else(|| "Failed".to_string()),
                            "result-value status-code-error",
                        )
                    };
                    let body = resp
                        .response_body
                        .as_deref()
                        .filter(|b| !b.is_empty())
                        .map(|b| truncate_body(b, TEST_BODY_LIMIT));
                    view! {
                        <div id="test-webhook-result" class="test-webhook__result">
                            <div class="result-row">
                                <span class="result-label">"Status Code:"</span>
                                <span id="test-status-code" class=status_class(resp.status_code)>{status_text}</span>
                            </div>
                            <div class="result-row">
                                <span class="result-label">"Response Time:"</span>
                                <span id="test-response-time" class="result-value">{time_text}</span>
                            </div>
                            <div class="result-row">
                                <span class="result-label">"Result:"</span>
                                <span id="test-status" class=outcome_class>{outcome}</span>
                            </div>
                            {body.map(|b| view! {
                                <div id="test-response-body-container" class="result-row result-row--body">
                                    <span class="result-label">"Response Body:"</span>
                                    <pre id="test-response-body" class="result-body">{b}</pre>
                                </div>
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </div>
    }
}
