use super::api;
use super::progress::{
    complete_message, server_error_message, upload_failed_message, validate_csv_file,
    UploadProgress,
};
use crate::shared::components::{PageHeader, ResponseMessage, ResponseState};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_products::{UploadEvent, UploadProducts};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn UploadPage() -> impl IntoView {
    let file_input = NodeRef::<html::Input>::new();
    let is_loading = RwSignal::new(false);
    let show_progress = RwSignal::new(false);
    let progress = RwSignal::new(UploadProgress::default());
    let response = RwSignal::new(None::<ResponseState>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let name = file.as_ref().map(|f| f.name());
        if let Err(e) = validate_csv_file(name.as_deref()) {
            response.set(Some(ResponseState::error(e.to_string())));
            return;
        }
        let Some(file) = file else {
            return;
        };

        is_loading.set(true);
        response.set(None);
        show_progress.set(true);
        progress.set(UploadProgress::default());
        log::info!("Uploading {}", file.name());

        spawn_local(async move {
            let result = api::upload_csv(file, move |event| match event {
                UploadEvent::Progress {
                    current_batch,
                    total_batches,
                    total_rows,
                    rows_processed,
                } => progress.set(UploadProgress::from_counts(
                    current_batch,
                    total_batches,
                    total_rows,
                    rows_processed,
                )),
                UploadEvent::Complete {
                    message,
                    rows_processed,
                } => {
                    show_progress.set(false);
                    response.set(Some(ResponseState::success(complete_message(
                        &message,
                        rows_processed,
                    ))));
                }
                UploadEvent::Error { error, message } => {
                    show_progress.set(false);
                    response.set(Some(ResponseState::error(server_error_message(
                        &error, &message,
                    ))));
                }
                UploadEvent::Unknown => {}
            })
            .await;

            if let Err(e) = result {
                log::error!("Upload failed: {}", e);
                show_progress.set(false);
                response.set(Some(ResponseState::error(upload_failed_message(
                    &e.to_string(),
                ))));
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="page upload-page">
            <PageHeader
                title=UploadProducts::display_name()
                subtitle=UploadProducts::description().to_string()
            >
                {()}
            </PageHeader>

            <form id="upload-form" class="card" on:submit=on_submit>
                <div class="card__body">
                    <div class="form__group">
                        <label class="form__label" for="csv_file">"CSV file"</label>
                        <input
                            type="file"
                            id="csv_file"
                            name="csv_file"
                            accept=".csv"
                            node_ref=file_input
                            prop:disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        id="upload-button"
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        <Show
                            when=move || is_loading.get()
                            fallback=|| view! { <span id="button-text">"Upload"</span> }
                        >
                            <span id="button-loading" class="button__loading">
                                <Spinner />
                                " Uploading..."
                            </span>
                        </Show>
                    </button>
                </div>
            </form>

            <Show when=move || show_progress.get()>
                <div id="progress-container" class="progress">
                    <div class="progress__track">
                        <div
                            id="progress-bar"
                            class="progress__bar"
                            style=move || progress.with(|p| p.width_style())
                        ></div>
                    </div>
                    <div class="progress__info">
                        <span id="batch-info">{move || progress.with(|p| p.batch_text.clone())}</span>
                        <span id="rows-info">{move || progress.with(|p| p.rows_text.clone())}</span>
                    </div>
                </div>
            </Show>

            <div id="response">
                <ResponseMessage state=response />
            </div>
        </div>
    }
}
