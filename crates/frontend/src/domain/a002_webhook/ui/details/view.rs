use super::view_model::WebhookDetailsViewModel;
use contracts::domain::a002_webhook::{Webhook, WebhookEventType};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WebhookDetails(
    existing: Option<Webhook>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = WebhookDetailsViewModel::new(existing);

    view! {
        <div class="details-container webhook-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="webhook-url">"URL"</label>
                    <input
                        type="url"
                        id="webhook-url"
                        placeholder="https://example.com/webhook"
                        prop:value=move || vm.form.get().url
                        on:input=move |ev| vm.form.update(|f| f.url = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="webhook-event-type">"Event Type"</label>
                    <select
                        id="webhook-event-type"
                        prop:value=move || vm.form.get().event_type
                        on:change=move |ev| vm.form.update(|f| f.event_type = event_target_value(&ev))
                    >
                        <option value="">"Select event type"</option>
                        {WebhookEventType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="webhook-enabled"
                        prop:checked=move || vm.form.get().enabled
                        on:change=move |ev| vm.form.update(|f| f.enabled = event_target_checked(&ev))
                    />
                    <label for="webhook-enabled">"Enabled"</label>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=vm.is_saving
                >
                    {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
