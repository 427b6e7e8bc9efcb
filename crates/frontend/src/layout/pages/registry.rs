use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_webhook::ui::list::WebhookList;
use crate::usecases::u501_upload_products::UploadPage;
use crate::usecases::u502_delete_all_products::DeleteAllPage;
use leptos::prelude::*;

/// A page the navigator knows how to mount.
pub struct PageDescriptor {
    /// Identifier used in asset paths and the `?page=` query
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// Mounts the page controller
    pub render: fn() -> AnyView,
}

fn render_upload() -> AnyView {
    view! { <UploadPage /> }.into_any()
}

fn render_manage() -> AnyView {
    view! { <ProductList /> }.into_any()
}

fn render_delete() -> AnyView {
    view! { <DeleteAllPage /> }.into_any()
}

fn render_webhooks() -> AnyView {
    view! { <WebhookList /> }.into_any()
}

/// Navigation order; the first entry is the landing page.
pub static PAGES: [PageDescriptor; 4] = [
    PageDescriptor {
        key: "upload",
        title: "Upload",
        icon: "upload",
        render: render_upload,
    },
    PageDescriptor {
        key: "manage",
        title: "Manage",
        icon: "manage",
        render: render_manage,
    },
    PageDescriptor {
        key: "delete",
        title: "Delete",
        icon: "delete",
        render: render_delete,
    },
    PageDescriptor {
        key: "webhooks",
        title: "Webhooks",
        icon: "webhooks",
        render: render_webhooks,
    },
];

pub fn find_page(key: &str) -> Option<&'static PageDescriptor> {
    PAGES.iter().find(|p| p.key == key)
}

pub fn default_page() -> &'static PageDescriptor {
    &PAGES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_four_pages() {
        let keys: Vec<_> = PAGES.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["upload", "manage", "delete", "webhooks"]);
        assert_eq!(default_page().key, "upload");
    }

    #[test]
    fn test_find_page() {
        assert_eq!(find_page("webhooks").map(|p| p.title), Some("Webhooks"));
        assert!(find_page("reports").is_none());
        assert!(find_page("").is_none());
    }
}
