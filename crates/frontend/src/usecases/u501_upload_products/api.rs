use super::progress::UploadStreamDecoder;
use crate::shared::api_utils::{api_url, ApiError};
use contracts::usecases::u501_upload_products::{UploadEvent, CSV_FIELD_NAME};
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, File, FormData, ReadableStreamDefaultReader, RequestInit, RequestMode, Response};

fn js_error(context: &str, err: JsValue) -> ApiError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err));
    ApiError::Transport(format!("{}: {}", context, detail))
}

/// POST the file to `/upload` and call `on_event` for every streamed event.
///
/// Returns once the server closes the stream. Server-side failures arrive as
/// `UploadEvent::Error`; the `Err` variant is reserved for transport problems.
pub async fn upload_csv(file: File, mut on_event: impl FnMut(UploadEvent)) -> Result<(), ApiError> {
    let window = window().ok_or_else(|| ApiError::Transport("No window object".to_string()))?;

    let form = FormData::new().map_err(|e| js_error("Failed to build form", e))?;
    form.append_with_blob_and_filename(CSV_FIELD_NAME, &file, &file.name())
        .map_err(|e| js_error("Failed to attach file", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = web_sys::Request::new_with_str_and_init(&api_url("/upload"), &opts)
        .map_err(|e| js_error("Failed to create request", e))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("Fetch failed", e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Not a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "HTTP error! status: {}",
            response.status()
        )));
    }

    let body = response
        .body()
        .ok_or_else(|| ApiError::Transport("Response has no body".to_string()))?;
    let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();

    let mut decoder = UploadStreamDecoder::new();
    let mut finished = false;
    loop {
        let chunk = JsFuture::from(reader.read())
            .await
            .map_err(|e| js_error("Stream read failed", e))?;
        let done = Reflect::get(&chunk, &JsValue::from_str("done"))
            .map(|v| v.is_truthy())
            .unwrap_or(true);
        if done {
            break;
        }
        let value = Reflect::get(&chunk, &JsValue::from_str("value"))
            .map_err(|e| js_error("Stream chunk without value", e))?;
        let bytes = Uint8Array::new(&value).to_vec();
        for event in decoder.feed(&bytes) {
            finished |= event.is_terminal();
            on_event(event);
        }
    }
    decoder.finish();
    if !finished {
        log::warn!("Upload stream closed without a complete or error event");
    }
    reader.release_lock();
    Ok(())
}
