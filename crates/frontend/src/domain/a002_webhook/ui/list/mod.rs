use crate::domain::a002_webhook::api;
use crate::domain::a002_webhook::state::{
    create_state, last_test_summary, next_step, LoadStep, WebhookListState,
};
use crate::domain::a002_webhook::ui::details::WebhookDetails;
use crate::domain::a002_webhook::ui::test_result::WebhookTestResult;
use crate::shared::api_utils::{describe_error, show_error};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_webhook::{Webhook, WebhookTestResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

/// Delay before the page checks that it initialized itself.
const DEFENSIVE_INIT_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
enum DetailsMode {
    Create,
    Edit(Webhook),
}

/// Load the list, creating the table and retrying once if it is missing.
async fn load_webhooks(state: RwSignal<WebhookListState>) {
    state.update(|s| s.is_loading = true);
    let mut allow_retry = true;
    loop {
        let step = match api::fetch_webhooks().await {
            Ok(resp) => next_step(resp, allow_retry),
            Err(e) => {
                show_error(&format!("Error loading webhooks: {}", e));
                state.update(|s| {
                    s.store.clear();
                    s.is_loading = false;
                });
                return;
            }
        };
        match step {
            LoadStep::Loaded(webhooks) => {
                state.update(|s| {
                    s.store.replace(webhooks);
                    s.is_loading = false;
                });
                return;
            }
            LoadStep::InitAndRetry => {
                allow_retry = false;
                log::warn!("Webhooks table missing, initializing");
                if let Err(e) = api::init_table().await {
                    log::error!("Error initializing webhook table: {}", e);
                }
            }
            LoadStep::Failed(message) => {
                show_error(&format!("Failed to load webhooks: {}", message));
                state.update(|s| {
                    s.store.clear();
                    s.is_loading = false;
                });
                return;
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WebhookList() -> impl IntoView {
    let state = create_state();
    let details = RwSignal::new(None::<DetailsMode>);
    let pending_delete = RwSignal::new(None::<Webhook>);
    let testing = RwSignal::new(None::<Webhook>);
    let test_result = RwSignal::new(None::<WebhookTestResponse>);

    let reload = move || wasm_bindgen_futures::spawn_local(load_webhooks(state));

    // Safe to call more than once; only the first call does anything.
    let initialize = move || {
        let first = state.try_update(|s| s.begin_init()).unwrap_or(false);
        if !first {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::init_table().await {
                log::error!("Error initializing webhook table: {}", e);
            }
            load_webhooks(state).await;
        });
    };

    let toggle = move |id: i64| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::toggle_webhook(id).await {
                Ok(resp) => {
                    if let Some(webhook) = resp.webhook {
                        state.update(|s| {
                            s.apply_toggle(webhook);
                        });
                    }
                }
                Err(e) => show_error(&describe_error(
                    &e,
                    "Failed to toggle webhook",
                    "Error toggling webhook",
                )),
            }
        });
    };

    let run_test = move |webhook: Webhook| {
        let id = webhook.id;
        test_result.set(None);
        testing.set(Some(webhook));
        wasm_bindgen_futures::spawn_local(async move {
            let resp = match api::test_webhook(id).await {
                Ok(resp) => {
                    let tested_at = chrono::Utc::now().to_rfc3339();
                    state.update(|s| s.apply_test_result(id, &resp, tested_at));
                    resp
                }
                Err(e) => {
                    log::error!("Error testing webhook {}: {}", id, e);
                    WebhookTestResponse::transport_failure(e.to_string())
                }
            };
            // The dialog may have been closed or reopened for another webhook.
            if testing.get_untracked().map(|w| w.id) == Some(id) {
                test_result.set(Some(resp));
            }
        });
    };

    let confirm_delete = move || {
        let Some(webhook) = pending_delete.get_untracked() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_webhook(webhook.id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    load_webhooks(state).await;
                }
                Err(e) => show_error(&describe_error(
                    &e,
                    "Failed to delete webhook",
                    "Error deleting webhook",
                )),
            }
        });
    };

    let close_details = Callback::new(move |_| details.set(None));
    let on_saved = Callback::new(move |_| {
        details.set(None);
        reload();
    });
    let close_delete = Callback::new(move |_| pending_delete.set(None));
    let close_test = Callback::new(move |_| {
        testing.set(None);
        test_result.set(None);
    });

    initialize();

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(DEFENSIVE_INIT_DELAY_MS).await;
        let mounted = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("webhooks-tbody"))
            .is_some();
        let pending = state.try_with_untracked(|s| !s.is_initialized()).unwrap_or(false);
        if mounted && pending {
            initialize();
        }
    });

    view! {
        <div class="page webhooks-page">
            <PageHeader title="Webhooks" subtitle="Notify external services about catalog changes".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| details.set(Some(DetailsMode::Create))>
                    {icon("plus")}
                    "Add New Webhook"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=Signal::derive(move || state.with(|s| s.is_loading))
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <h3 id="webhooks-count" class="table-count">{move || state.with(|s| s.count_label())}</h3>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"URL"</th>
                            <th class="table__header-cell">"Event Type"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Last Test"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody id="webhooks-tbody">
                        {move || {
                            let rows = state.with(|s| s.store.list().to_vec());
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="5" class="table__cell empty-state">
                                            "No webhooks configured. Click \"Add New Webhook\" to create one."
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|webhook| {
                                    let id = webhook.id;
                                    let last_test = match last_test_summary(&webhook) {
                                        Some(text) => {
                                            let class = if webhook.last_test_succeeded() {
                                                "last-test-success"
                                            } else {
                                                "last-test-error"
                                            };
                                            view! { <span class=class>{text}</span> }.into_any()
                                        }
                                        None => "Never tested".into_any(),
                                    };
                                    let status_class = if webhook.enabled {
                                        "status-badge status-enabled"
                                    } else {
                                        "status-badge status-disabled"
                                    };
                                    let for_test = webhook.clone();
                                    let for_edit = webhook.clone();
                                    let for_delete = webhook.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <div class="webhook-url" title=webhook.url.clone()>{webhook.url.clone()}</div>
                                            </td>
                                            <td class="table__cell">
                                                <span class="event-type-badge">{webhook.event_type.label()}</span>
                                            </td>
                                            <td class="table__cell">
                                                <span class=status_class>{webhook.status_label()}</span>
                                            </td>
                                            <td class="table__cell">
                                                <div class="last-test-info">{last_test}</div>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button class="action-btn action-btn-test" on:click=move |_| run_test(for_test.clone())>
                                                    "Test"
                                                </button>
                                                <button class="action-btn action-btn-toggle" on:click=move |_| toggle(id)>
                                                    {webhook.toggle_label()}
                                                </button>
                                                <button
                                                    class="action-btn action-btn-edit"
                                                    on:click=move |_| details.set(Some(DetailsMode::Edit(for_edit.clone())))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="action-btn action-btn-delete"
                                                    on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || details.get().map(|mode| {
                let (title, existing) = match mode {
                    DetailsMode::Create => ("Add New Webhook", None),
                    DetailsMode::Edit(webhook) => ("Edit Webhook", Some(webhook)),
                };
                view! {
                    <Modal title=title.to_string() on_close=close_details>
                        <WebhookDetails existing=existing on_saved=on_saved on_cancel=close_details />
                    </Modal>
                }
            })}

            {move || testing.get().map(|webhook| view! {
                <Modal title="Test Webhook".to_string() on_close=close_test>
                    <WebhookTestResult webhook=webhook result=test_result on_close=close_test />
                </Modal>
            })}

            {move || pending_delete.get().map(|webhook| view! {
                <Modal title="Delete Webhook".to_string() on_close=close_delete>
                    <p>"Are you sure you want to delete this webhook?"</p>
                    <p id="delete-webhook-info" class="delete-info">
                        {format!("URL: {} | Event: {}", webhook.url, webhook.event_type.as_str())}
                    </p>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| confirm_delete()>
                            "Delete"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_delete.run(())>
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            })}
        </div>
    }
}
