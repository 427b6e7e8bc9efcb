use crate::domain::a001_product::api;
use crate::shared::api_utils::{error_display, show_error, ApiError, ErrorDisplay};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// ViewModel for the product create / edit form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<Product>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    is_edit: bool,
}

impl ProductDetailsViewModel {
    /// `existing` switches the form to edit mode; SKU is then read-only.
    pub fn new(existing: Option<Product>) -> Self {
        let is_edit = existing.is_some();
        let product = existing.unwrap_or_else(|| Product::new("", "", "", true));
        Self {
            form: RwSignal::new(product),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            is_edit,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.is_edit
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = match validate(&self.form.get_untracked()) {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let is_edit = self.is_edit;
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if is_edit {
                api::update_product(&current).await
            } else {
                api::insert_product(&current).await
            };
            is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    let (failed, errored) = if is_edit {
                        ("Failed to update product", "Error updating product")
                    } else {
                        ("Failed to create product", "Error creating product")
                    };
                    match error_display(&e, failed, errored) {
                        ErrorDisplay::Inline(text) => error.set(Some(text)),
                        ErrorDisplay::Alert(text) => show_error(&text),
                    }
                }
            }
        });
    }
}

/// Trimmed copy of the form, or the validation failure.
pub fn validate(form: &Product) -> Result<Product, ApiError> {
    let sku = form.sku.trim();
    let name = form.name.trim();
    if sku.is_empty() || name.is_empty() {
        return Err(ApiError::Validation("SKU and Name are required".to_string()));
    }
    Ok(Product::new(sku, name, form.description.trim(), form.is_active))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_sku_and_name() {
        let err = validate(&Product::new(" ", "Widget", "", true)).unwrap_err();
        assert_eq!(err.to_string(), "SKU and Name are required");
        assert!(validate(&Product::new("W-1", "", "desc", true)).is_err());
    }

    #[test]
    fn test_validate_trims() {
        let p = validate(&Product::new(" W-1 ", " Widget ", " blue ", false)).unwrap();
        assert_eq!(p, Product::new("W-1", "Widget", "blue", false));
    }
}
