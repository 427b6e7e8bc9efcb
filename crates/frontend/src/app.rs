use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Navbar;
use crate::layout::pages::PageHost;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <PageHost /> }.into_any()
        />
    }
}
