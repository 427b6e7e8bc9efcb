use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::PAGES;
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {PAGES.iter().map(|page| {
                    let key = page.key;
                    view! {
                        <li
                            class="nav-item"
                            class:active=move || ctx.active.with(|active| active == key)
                            data-page=key
                            on:click=move |_| ctx.navigate(key)
                        >
                            {icons::icon(page.icon)}
                            <span>{page.title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
