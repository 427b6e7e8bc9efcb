use crate::shared::pagination::{Paginator, PAGE_SIZE};
use crate::shared::store::EntityStore;
use contracts::domain::a001_product::{Product, ProductField};
use leptos::prelude::*;

/// Manage page state: the loaded catalog, the filtered view and the pager.
#[derive(Clone, Debug)]
pub struct ProductListState {
    pub all: EntityStore<Product>,
    pub filtered: EntityStore<Product>,
    pub pager: Paginator,
    pub is_loading: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            all: EntityStore::new(),
            filtered: EntityStore::new(),
            pager: Paginator::new(PAGE_SIZE),
            is_loading: false,
        }
    }
}

impl ProductListState {
    /// Fresh catalog: both lists replaced, back to page 1.
    pub fn load_all(&mut self, products: Vec<Product>) {
        self.all.replace(products.clone());
        self.filtered.replace(products);
        self.pager.reset();
    }

    pub fn clear_all(&mut self) {
        self.all.clear();
        self.filtered.clear();
        self.pager.reset();
    }

    pub fn set_filtered(&mut self, products: Vec<Product>) {
        self.filtered.replace(products);
        self.pager.reset();
    }

    /// Patch an edited product in both lists.
    ///
    /// The filtered view is only updated when it already shows the product.
    pub fn apply_update(&mut self, product: Product) {
        self.filtered.update(product.clone());
        self.all.upsert(product);
    }

    /// Drop a deleted product from both lists and keep the pager in range.
    pub fn remove(&mut self, sku: &str) {
        let key = sku.to_string();
        self.all.remove(&key);
        self.filtered.remove(&key);
        self.pager.clamp(self.filtered.len());
    }

    pub fn change_page(&mut self, delta: isize) -> bool {
        self.pager.change_page(delta, self.filtered.len())
    }

    pub fn page_items(&self) -> Vec<Product> {
        self.pager.slice(self.filtered.list()).to_vec()
    }

    pub fn count_label(&self) -> String {
        format!("Products ({})", self.filtered.len())
    }

    pub fn page_indicator(&self) -> String {
        self.pager.indicator(self.filtered.len())
    }

    pub fn can_next(&self) -> bool {
        self.pager.can_next(self.filtered.len())
    }

    /// Record to send for an inline edit, or `None` when nothing changed.
    pub fn inline_update(&self, sku: &str, field: ProductField, value: &str) -> Option<Product> {
        let current = self.all.get(&sku.to_string())?;
        let value = value.trim();
        if current.field(field) == value {
            return None;
        }
        Some(current.with_field(field, value))
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(format!("SKU-{i:03}"), format!("Item {i}"), "", true))
            .collect()
    }

    #[test]
    fn test_load_resets_page() {
        let mut state = ProductListState::default();
        state.load_all(products(25));
        assert!(state.change_page(1));
        assert_eq!(state.pager.page(), 2);

        state.load_all(products(25));
        assert_eq!(state.pager.page(), 1);
        assert_eq!(state.page_items().len(), 10);
        assert_eq!(state.count_label(), "Products (25)");
        assert_eq!(state.page_indicator(), "Page 1 of 3");
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut state = ProductListState::default();
        state.load_all(products(25));
        state.change_page(1);
        state.change_page(1);
        assert!(!state.change_page(1));
        let items = state.page_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].sku, "SKU-021");
        assert!(!state.can_next());
    }

    #[test]
    fn test_remove_drops_from_both_lists() {
        let mut state = ProductListState::default();
        state.load_all(products(11));
        state.change_page(1);
        assert_eq!(state.pager.page(), 2);

        state.remove("SKU-011");
        assert_eq!(state.all.len(), 10);
        assert_eq!(state.filtered.len(), 10);
        assert!(!state.all.contains(&"SKU-011".to_string()));
        // The second page vanished, the pager follows.
        assert_eq!(state.pager.page(), 1);
    }

    #[test]
    fn test_inline_update_only_when_changed() {
        let mut state = ProductListState::default();
        state.load_all(products(3));

        assert_eq!(state.inline_update("SKU-002", ProductField::Name, " Item 2 "), None);
        let updated = state
            .inline_update("SKU-002", ProductField::Description, "  fresh ")
            .unwrap();
        assert_eq!(updated.description, "fresh");
        assert_eq!(updated.name, "Item 2");
        assert_eq!(state.inline_update("missing", ProductField::Name, "x"), None);
    }

    #[test]
    fn test_apply_update_keeps_filtered_view() {
        let mut state = ProductListState::default();
        state.load_all(products(3));
        state.set_filtered(vec![state.all.list()[0].clone()]);

        let edited = state.all.list()[2].with_field(ProductField::Name, "Renamed");
        state.apply_update(edited);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.all.list()[2].name, "Renamed");

        let edited = state.all.list()[0].with_field(ProductField::Name, "First");
        state.apply_update(edited);
        assert_eq!(state.filtered.list()[0].name, "First");
    }
}
