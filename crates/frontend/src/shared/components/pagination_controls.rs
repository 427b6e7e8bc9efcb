use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next pager with a "Page X of Y" indicator.
///
/// The owner decides whether a move is in range; the buttons only report the
/// requested direction.
#[component]
pub fn PaginationControls(
    /// Indicator text, e.g. "Page 2 of 5"
    #[prop(into)]
    info: Signal<String>,

    #[prop(into)]
    can_prev: Signal<bool>,

    #[prop(into)]
    can_next: Signal<bool>,

    /// Called with -1 or +1
    on_change: Callback<isize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                id="prev-page"
                class="pagination-btn"
                on:click=move |_| on_change.run(-1)
                disabled=move || !can_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span id="pagination-info" class="pagination-info">{move || info.get()}</span>
            <button
                id="next-page"
                class="pagination-btn"
                on:click=move |_| on_change.run(1)
                disabled=move || !can_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
