//! Per-page static assets: `<page>/<page>.{html,css,js}` and the optional
//! `<page>-template.js` that defines `window["<page>HTML"]`.

use gloo_net::http::Request;
use js_sys::{Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, HtmlLinkElement, HtmlScriptElement};

pub const STYLESHEET_ID: &str = "pageStylesheet";
pub const SCRIPT_ID: &str = "pageScript";

/// Delay before the template fallback races the markup request.
pub const TEMPLATE_FALLBACK_DELAY_MS: u32 = 100;

pub fn html_path(page: &str) -> String {
    format!("{page}/{page}.html")
}

pub fn css_path(page: &str) -> String {
    format!("{page}/{page}.css")
}

pub fn script_path(page: &str) -> String {
    format!("{page}/{page}.js")
}

pub fn template_path(page: &str) -> String {
    format!("{page}/{page}-template.js")
}

pub fn template_global(page: &str) -> String {
    format!("{page}HTML")
}

/// "manage" -> "Manage"
pub fn display_name(page: &str) -> String {
    let mut chars = page.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Markup shown when neither the page file nor its template could be loaded.
pub fn fallback_html(page: &str) -> String {
    format!(
        "<div class=\"error-page\"><h2>Error Loading {}</h2><p>The page content could not be loaded. Please try again.</p></div>",
        display_name(page)
    )
}

fn document() -> Result<Document, String> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())
}

fn js_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Point `#pageStylesheet` at the page's CSS, creating the link if needed.
pub fn load_page_css(page: &str) -> Result<(), String> {
    let doc = document()?;
    let href = css_path(page);

    if let Some(existing) = doc.get_element_by_id(STYLESHEET_ID) {
        if let Some(link) = existing.dyn_ref::<HtmlLinkElement>() {
            link.set_href(&href);
            return Ok(());
        }
    }

    let link: HtmlLinkElement = doc
        .create_element("link")
        .map_err(|e| js_message(&e))?
        .unchecked_into();
    link.set_id(STYLESHEET_ID);
    link.set_rel("stylesheet");
    link.set_href(&href);
    let head = doc.head().ok_or_else(|| "No <head>".to_string())?;
    head.append_child(&link).map_err(|e| js_message(&e))?;
    Ok(())
}

/// Primary markup source: `GET <page>/<page>.html`.
pub async fn fetch_page_html(page: &str) -> Result<String, String> {
    let response = Request::get(&html_path(page))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}

fn read_template_global(page: &str) -> Option<String> {
    let win = window()?;
    Reflect::get(&win, &JsValue::from_str(&template_global(page)))
        .ok()
        .and_then(|v| v.as_string())
}

/// Fallback markup source: the `<page>HTML` global, loading its script first if needed.
pub async fn load_html_from_template(page: &str) -> Result<String, String> {
    if let Some(html) = read_template_global(page) {
        return Ok(html);
    }
    inject_script(&template_path(page), None).await?;
    read_template_global(page)
        .ok_or_else(|| format!("{} is not defined", template_global(page)))
}

/// Append a `<script>` and wait for its `load` (Ok) or `error` (Err) event.
pub async fn inject_script(src: &str, id: Option<&str>) -> Result<(), String> {
    let doc = document()?;
    let script: HtmlScriptElement = doc
        .create_element("script")
        .map_err(|e| js_message(&e))?
        .unchecked_into();
    if let Some(id) = id {
        script.set_id(id);
    }
    script.set_src(src);

    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    let body = doc.body().ok_or_else(|| "No <body>".to_string())?;
    body.append_child(&script).map_err(|e| js_message(&e))?;

    let result = JsFuture::from(loaded).await;
    script.set_onload(None);
    script.set_onerror(None);
    result
        .map(|_| ())
        .map_err(|_| format!("Failed to load script {}", src))
}

/// Replace `#pageScript` with the page's own script. Load errors are only logged.
pub async fn load_page_script(page: &str) {
    if let Ok(doc) = document() {
        if let Some(old) = doc.get_element_by_id(SCRIPT_ID) {
            old.remove();
        }
    }
    if let Err(e) = inject_script(&script_path(page), Some(SCRIPT_ID)).await {
        log::error!("Error loading script for {}: {}", page, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths() {
        assert_eq!(html_path("manage"), "manage/manage.html");
        assert_eq!(css_path("upload"), "upload/upload.css");
        assert_eq!(script_path("delete"), "delete/delete.js");
        assert_eq!(template_path("webhooks"), "webhooks/webhooks-template.js");
        assert_eq!(template_global("webhooks"), "webhooksHTML");
    }

    #[test]
    fn test_fallback_html_names_page() {
        assert_eq!(display_name("manage"), "Manage");
        assert_eq!(display_name(""), "");
        assert!(fallback_html("upload").contains("<h2>Error Loading Upload</h2>"));
    }
}
