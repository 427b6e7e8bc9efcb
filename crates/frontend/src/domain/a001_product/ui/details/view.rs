use super::view_model::ProductDetailsViewModel;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    existing: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(existing);
    let is_edit = vm.is_edit_mode();

    view! {
        <div class="details-container product-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product-sku">"SKU"</label>
                    <input
                        type="text"
                        id="product-sku"
                        prop:value=move || vm.form.get().sku
                        on:input=move |ev| vm.form.update(|f| f.sku = event_target_value(&ev))
                        disabled=is_edit
                        placeholder="Unique stock keeping unit"
                    />
                </div>

                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
                    ></textarea>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="product-active"
                        prop:checked=move || vm.form.get().is_active
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    <label for="product-active">"Active"</label>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=vm.is_saving
                >
                    {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
