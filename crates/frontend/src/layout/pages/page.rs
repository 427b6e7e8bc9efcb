use super::assets::{
    fallback_html, fetch_page_html, load_html_from_template, load_page_css, load_page_script,
    TEMPLATE_FALLBACK_DELAY_MS,
};
use super::registry::find_page;
use super::session::{NavigationSessions, SessionToken};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::first_wins::FirstWins;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Signals the host renders from.
#[derive(Clone, Copy)]
struct HostView {
    markup: RwSignal<Option<String>>,
    /// Page whose controller is mounted
    mounted: RwSignal<Option<String>>,
}

/// Markup is taken only while its session is current and only once per session.
fn accept_markup(
    sessions: &NavigationSessions,
    token: SessionToken,
    slot: &FirstWins<String>,
    html: &str,
) -> bool {
    sessions.is_current(token) && slot.offer(html.to_string())
}

/// Offer `html` for the current navigation. Only the first offer is rendered;
/// the page script is loaded after it and the controller mounted last.
fn apply_markup(
    ctx: AppGlobalContext,
    host: HostView,
    slot: &FirstWins<String>,
    token: SessionToken,
    page: String,
    html: String,
) {
    if !ctx.with_sessions(|s| accept_markup(s, token, slot, &html)) {
        return;
    }
    host.markup.set(Some(html));
    spawn_local(async move {
        load_page_script(&page).await;
        if ctx.is_current(token) {
            host.mounted.set(Some(page));
        }
    });
}

fn navigate_to(ctx: AppGlobalContext, host: HostView, page: String) {
    let token = ctx.begin_navigation(&page);
    host.mounted.set(None);
    host.markup.set(None);

    if let Err(e) = load_page_css(&page) {
        log::error!("Error loading stylesheet for {}: {}", page, e);
    }

    let slot = FirstWins::<String>::new();

    // Primary: the page's HTML file, then the template, then the error markup.
    {
        let slot = slot.clone();
        let page = page.clone();
        spawn_local(async move {
            let html = match fetch_page_html(&page).await {
                Ok(html) => html,
                Err(e) => {
                    log::warn!("Error loading {} markup: {}", page, e);
                    match load_html_from_template(&page).await {
                        Ok(html) => html,
                        Err(e) => {
                            log::error!("Template fallback failed for {}: {}", page, e);
                            fallback_html(&page)
                        }
                    }
                }
            };
            apply_markup(ctx, host, &slot, token, page, html);
        });
    }

    // Timed fallback in case the HTML request is slow.
    spawn_local(async move {
        TimeoutFuture::new(TEMPLATE_FALLBACK_DELAY_MS).await;
        if slot.is_filled() || !ctx.is_current(token) {
            return;
        }
        if let Ok(html) = load_html_from_template(&page).await {
            apply_markup(ctx, host, &slot, token, page, html);
        }
    });
}

/// Content area. Re-renders whenever the active page is (re)selected.
#[component]
pub fn PageHost() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let host = HostView {
        markup: RwSignal::new(None),
        mounted: RwSignal::new(None),
    };

    Effect::new(move |_| {
        let page = ctx.active.get();
        navigate_to(ctx, host, page);
    });

    view! {
        <main id="contentArea" class="content-area">
            {move || host.markup.get().map(|html| view! {
                <div class="page-markup" inner_html=html></div>
            })}
            {move || {
                host.mounted
                    .get()
                    .and_then(|key| find_page(&key))
                    .map(|page| (page.render)())
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_session_markup_dropped() {
        let mut sessions = NavigationSessions::new();
        let old = sessions.begin("upload");
        let slot = FirstWins::new();
        sessions.begin("manage");

        assert!(!accept_markup(&sessions, old, &slot, "<h2>Upload</h2>"));
        assert!(!slot.is_filled());
    }

    #[test]
    fn test_late_template_does_not_replace_markup() {
        let mut sessions = NavigationSessions::new();
        let token = sessions.begin("manage");
        let slot = FirstWins::new();

        assert!(accept_markup(&sessions, token, &slot, "<h2>Manage</h2>"));
        assert!(!accept_markup(&sessions, token, &slot, "<h2>Manage template</h2>"));
        assert_eq!(slot.get().map(String::as_str), Some("<h2>Manage</h2>"));
    }
}
