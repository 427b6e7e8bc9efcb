pub mod state;

use self::state::create_state;
use crate::domain::a001_product::api;
use crate::domain::a001_product::filters::{
    filter_error_message, intersect_by_sku, ProductFilters,
};
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::api_utils::{describe_error, show_error};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::{Product, ProductField};
use leptos::html;
use leptos::prelude::*;
use thaw::*;

/// Which details form is open.
#[derive(Clone, Debug, PartialEq)]
enum DetailsMode {
    Create,
    Edit(Product),
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let filters = RwSignal::new(ProductFilters::default());
    let details = RwSignal::new(None::<DetailsMode>);
    let pending_delete = RwSignal::new(None::<Product>);
    // (sku, field) of the cell being edited, with its draft value
    let editing = RwSignal::new(None::<(String, ProductField)>);
    let draft = RwSignal::new(String::new());

    let load = move || {
        state.update(|s| s.is_loading = true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all_products().await {
                Ok(products) => state.update(|s| {
                    s.load_all(products);
                    s.is_loading = false;
                }),
                Err(e) => {
                    state.update(|s| {
                        s.clear_all();
                        s.is_loading = false;
                    });
                    show_error(&describe_error(
                        &e,
                        "Failed to load products",
                        "Error loading products",
                    ));
                }
            }
        });
    };

    let apply_filters = move || {
        let queries = filters.get_untracked().queries();
        if queries.is_empty() {
            load();
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let mut results = Vec::with_capacity(queries.len());
            for query in &queries {
                match api::fetch_by_filter(query).await {
                    Ok(result) => results.push(result),
                    Err(e) => {
                        show_error(&filter_error_message(&e));
                        return;
                    }
                }
            }
            state.update(|s| {
                let matched = intersect_by_sku(s.all.list(), &results);
                s.set_filtered(matched);
            });
        });
    };

    let clear_filters = move || {
        filters.set(ProductFilters::default());
        load();
    };

    let start_edit = move |product: &Product, field: ProductField| {
        draft.set(product.field(field).to_string());
        editing.set(Some((product.sku.clone(), field)));
    };

    // Enter and the blur that follows it both land here; only the first one counts.
    let commit_edit = move |sku: String, field: ProductField| {
        if editing.get_untracked() != Some((sku.clone(), field)) {
            return;
        }
        editing.set(None);
        let value = draft.get_untracked();
        let Some(updated) = state.with_untracked(|s| s.inline_update(&sku, field, &value)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_product(&updated).await {
                Ok(()) => state.update(|s| s.apply_update(updated)),
                Err(e) => show_error(&describe_error(
                    &e,
                    "Failed to update product",
                    "Error updating product",
                )),
            }
        });
    };

    let confirm_delete = move || {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_product(&product.sku).await {
                Ok(()) => {
                    log::info!("Deleted product {}", product.sku);
                    state.update(|s| s.remove(&product.sku));
                }
                Err(e) => show_error(&describe_error(
                    &e,
                    "Failed to delete product",
                    "Error deleting product",
                )),
            }
        });
    };

    let close_details = Callback::new(move |_| details.set(None));
    let on_saved = Callback::new(move |_| {
        details.set(None);
        load();
    });
    let close_delete = Callback::new(move |_| pending_delete.set(None));

    let editable_cell = move |product: Product, field: ProductField| {
        let sku = product.sku.clone();
        let text = product.field(field).to_string();
        let is_editing = {
            let sku = sku.clone();
            move || editing.get() == Some((sku.clone(), field))
        };
        view! {
            <td
                class="table__cell editable"
                title="Double-click to edit"
                on:dblclick=move |_| start_edit(&product, field)
            >
                {move || {
                    if is_editing() {
                        let input_ref = NodeRef::<html::Input>::new();
                        Effect::new(move |_| {
                            if let Some(input) = input_ref.get() {
                                let _ = input.focus();
                                input.select();
                            }
                        });
                        let sku_enter = sku.clone();
                        let sku_blur = sku.clone();
                        view! {
                            <input
                                type="text"
                                class="inline-edit"
                                node_ref=input_ref
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                                on:keydown=move |ev| match ev.key().as_str() {
                                    "Enter" => commit_edit(sku_enter.clone(), field),
                                    "Escape" => editing.set(None),
                                    _ => {}
                                }
                                on:blur=move |_| commit_edit(sku_blur.clone(), field)
                            />
                        }
                        .into_any()
                    } else {
                        text.clone().into_any()
                    }
                }}
            </td>
        }
    };

    load();

    view! {
        <div class="page manage-page">
            <PageHeader title="Manage Products">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| details.set(Some(DetailsMode::Create))>
                    {icon("plus")}
                    "Add New Product"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || state.with(|s| s.is_loading))
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <input
                    type="text"
                    id="filter-sku"
                    placeholder="SKU"
                    prop:value=move || filters.get().sku
                    on:input=move |ev| filters.update(|f| f.sku = event_target_value(&ev))
                />
                <input
                    type="text"
                    id="filter-name"
                    placeholder="Name"
                    prop:value=move || filters.get().name
                    on:input=move |ev| filters.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    id="filter-description"
                    placeholder="Description"
                    prop:value=move || filters.get().description
                    on:input=move |ev| filters.update(|f| f.description = event_target_value(&ev))
                />
                <select
                    id="filter-active"
                    prop:value=move || filters.get().active
                    on:change=move |ev| filters.update(|f| f.active = event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    <option value="true">"Active"</option>
                    <option value="false">"Inactive"</option>
                </select>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                    "Apply Filters"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear_filters()>
                    "Clear Filters"
                </Button>
            </div>

            <h3 id="products-count" class="table-count">{move || state.with(|s| s.count_label())}</h3>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Active"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody id="products-tbody">
                        {move || {
                            let rows = state.with(|s| s.page_items());
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">"No products found"</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|product| {
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{product.sku.clone()}</td>
                                            {editable_cell(product.clone(), ProductField::Name)}
                                            {editable_cell(product.clone(), ProductField::Description)}
                                            <td class="table__cell">
                                                <span class=if product.is_active { "badge badge--success" } else { "badge badge--muted" }>
                                                    {if product.is_active { "Yes" } else { "No" }}
                                                </span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--secondary button--small"
                                                    on:click=move |_| details.set(Some(DetailsMode::Edit(for_edit.clone())))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                info=Signal::derive(move || state.with(|s| s.page_indicator()))
                can_prev=Signal::derive(move || state.with(|s| s.pager.can_prev()))
                can_next=Signal::derive(move || state.with(|s| s.can_next()))
                on_change=Callback::new(move |delta: isize| {
                    state.update(|s| {
                        s.change_page(delta);
                    });
                })
            />

            {move || details.get().map(|mode| {
                let (title, existing) = match mode {
                    DetailsMode::Create => ("Add New Product", None),
                    DetailsMode::Edit(product) => ("Edit Product", Some(product)),
                };
                view! {
                    <Modal title=title.to_string() on_close=close_details>
                        <ProductDetails existing=existing on_saved=on_saved on_cancel=close_details />
                    </Modal>
                }
            })}

            {move || pending_delete.get().map(|product| view! {
                <Modal title="Delete Product".to_string() on_close=close_delete>
                    <p>"Are you sure you want to delete this product?"</p>
                    <p class="delete-info">{format!("SKU: {} | Name: {}", product.sku, product.name)}</p>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| confirm_delete()>
                            "Delete"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_delete.run(())>
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            })}
        </div>
    }
}
