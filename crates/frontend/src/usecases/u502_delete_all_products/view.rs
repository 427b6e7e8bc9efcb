use super::api;
use crate::shared::components::{PageHeader, ResponseMessage, ResponseState};
use crate::shared::modal::Modal;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_delete_all_products::DeleteAllProducts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn DeleteAllPage() -> impl IntoView {
    let confirm_open = RwSignal::new(false);
    let is_deleting = RwSignal::new(false);
    let response = RwSignal::new(None::<ResponseState>);

    let close_confirm = Callback::new(move |_| confirm_open.set(false));

    let on_confirm = move || {
        confirm_open.set(false);
        is_deleting.set(true);
        response.set(None);
        spawn_local(async move {
            let result = api::delete_all_products().await;
            if let Err(e) = &result {
                log::error!("Delete all failed: {}", e);
            }
            let (ok, text) = api::outcome_text(&result);
            response.set(Some(if ok {
                ResponseState::success(text)
            } else {
                ResponseState::error(text)
            }));
            is_deleting.set(false);
        });
    };

    view! {
        <div class="page delete-page">
            <PageHeader
                title=DeleteAllProducts::display_name()
                subtitle=DeleteAllProducts::description().to_string()
            >
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__body">
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">"This permanently removes every product. It cannot be undone."</span>
                    </div>
                    <button
                        id="delete-all-button"
                        class="button button--danger"
                        on:click=move |_| confirm_open.set(true)
                        disabled=move || is_deleting.get()
                    >
                        {move || if is_deleting.get() { "Deleting..." } else { "Delete All Products" }}
                    </button>
                </div>
            </div>

            <div id="delete-response">
                <ResponseMessage state=response />
            </div>

            <Show when=move || confirm_open.get()>
                <Modal title="Delete all products?".to_string() on_close=close_confirm>
                    <p>"Are you sure you want to delete all products?"</p>
                    <div id="delete-confirm-dialog" class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm()>
                            "Yes"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_confirm.run(())>
                            "No"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
