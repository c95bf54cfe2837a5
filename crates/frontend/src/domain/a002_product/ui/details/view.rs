use super::model::BrowserDraft;
use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_category::ui::cascade::CategoryCascade;
use crate::shared::api_utils::asset_url;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use contracts::domain::a002_product::ProductType;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;
use wasm_bindgen::JsCast;

type Getter = fn(&BrowserDraft) -> String;
type Setter = fn(&mut BrowserDraft, String);

fn text_field(
    vm: &ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    let draft = vm.draft;
    let saving = vm.saving;
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                type=input_type
                id=id
                class="form__input"
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
                disabled=move || saving.get()
            />
        </div>
    }
}

fn text_area(
    vm: &ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    let draft = vm.draft;
    let saving = vm.saving;
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <textarea
                id=id
                class="form__textarea"
                rows="3"
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
                disabled=move || saving.get()
            />
        </div>
    }
}

fn type_fields(vm: &ProductDetailsViewModel, product_type: ProductType) -> AnyView {
    match product_type {
        ProductType::GeneralGoods => view! {
            <div class="form__row">
                {text_field(vm, "stock", "Stock quantity", "number", |d| d.general.stock_quantity.clone(), |d, v| d.general.stock_quantity = v)}
                {text_field(vm, "wholesale", "Wholesale price", "number", |d| d.general.wholesale_price.clone(), |d, v| d.general.wholesale_price = v)}
                {text_field(vm, "size", "Size", "text", |d| d.general.size.clone(), |d, v| d.general.size = v)}
                {text_field(vm, "brand", "Brand", "text", |d| d.general.brand.clone(), |d, v| d.general.brand = v)}
                {text_field(vm, "color", "Color", "text", |d| d.general.color.clone(), |d, v| d.general.color = v)}
            </div>
        }
        .into_any(),
        ProductType::Vehicles => view! {
            <div class="form__row">
                {text_field(vm, "condition", "Vehicle condition", "text", |d| d.vehicle.condition.clone(), |d, v| d.vehicle.condition = v)}
                {text_field(vm, "registration", "Registration", "text", |d| d.vehicle.registration.clone(), |d, v| d.vehicle.registration = v)}
                {text_field(vm, "fuel", "Fuel type", "text", |d| d.vehicle.fuel_type.clone(), |d, v| d.vehicle.fuel_type = v)}
                {text_field(vm, "cc", "Engine (cc)", "text", |d| d.vehicle.cc.clone(), |d, v| d.vehicle.cc = v)}
                {text_field(vm, "transmission", "Transmission", "text", |d| d.vehicle.transmission.clone(), |d, v| d.vehicle.transmission = v)}
                {text_area(vm, "special", "Special features", |d| d.vehicle.special_features.clone(), |d, v| d.vehicle.special_features = v)}
            </div>
        }
        .into_any(),
        ProductType::Services => view! {
            <div class="form__row">
                {text_area(vm, "service-features", "Service features", |d| d.service.features.clone(), |d, v| d.service.features = v)}
            </div>
        }
        .into_any(),
    }
}

fn picked_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

#[component]
pub fn ProductDetails(
    /// `None` opens an empty form for a new product
    id: Option<String>,
    on_created: Rc<dyn Fn(())>,
) -> impl IntoView {
    let auth = use_auth();
    let vm = ProductDetailsViewModel::new(id, auth.store_id(), use_toast());
    vm.load();
    on_cleanup({
        let vm = vm.clone();
        move || vm.unmount()
    });

    let draft = vm.draft;
    let saving = vm.saving;
    let loading = vm.loading;
    let tag_input = vm.tag_input;
    let is_edit = vm.is_edit_mode();
    let product_type = Memo::new(move |_| draft.with(|d| d.product_type));
    let title = if is_edit { "Edit product" } else { "Add product" };

    let tabs = ProductType::ALL
        .into_iter()
        .map(|t| {
            let vm = vm.clone();
            view! {
                <button
                    type="button"
                    class="detail-tabs__item"
                    class:detail-tabs__item--active=move || product_type.get() == t
                    disabled=move || saving.get()
                    on:click=move |_| vm.set_product_type(t)
                >
                    {t.title()}
                </button>
            }
        })
        .collect_view();

    let tags = {
        let vm = vm.clone();
        move || {
            draft.with(|d| {
                d.tags
                    .iter()
                    .enumerate()
                    .map(|(index, tag)| {
                        let vm = vm.clone();
                        view! {
                            <span class="tag">
                                {tag.clone()}
                                <button type="button" class="tag__remove" on:click=move |_| vm.remove_tag(index)>
                                    "×"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            })
        }
    };

    let image = {
        let preview = vm.preview;
        move || {
            preview
                .get()
                .or_else(|| draft.with(|d| d.existing_image.as_deref().map(asset_url)))
        }
    };

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command(on_created.clone());
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <A href="/dashboard/products">
                    <span class="button button--secondary">{icon("chevron-left")}"Back to products"</span>
                </A>
            </PageHeader>

            <Show when=move || loading.get()>
                <Loading label="Loading..." />
            </Show>

            <div class="detail-tabs">{tabs}</div>

            <form class="card form" on:submit=on_submit>
                {text_field(&vm, "title", "Title *", "text", |d| d.title.clone(), |d, v| d.title = v)}
                {text_area(&vm, "description", "Description", |d| d.description.clone(), |d, v| d.description = v)}
                {text_area(&vm, "delivery", "Delivery & return policy", |d| d.delivery_policy.clone(), |d, v| d.delivery_policy = v)}

                <div class="form__row">
                    {text_field(&vm, "price", "Price", "number", |d| d.price.clone(), |d, v| d.price = v)}
                    {text_field(&vm, "discount", "Discount price", "number", |d| d.discount_price.clone(), |d, v| d.discount_price = v)}
                </div>

                <CategoryCascade
                    tree=vm.tree
                    selector=vm.selector
                    main_label=Signal::derive(move || Some(product_type.get().label().to_string()))
                    disabled=Signal::derive(move || saving.get())
                />
                <button
                    type="button"
                    class="button button--link"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.reload_categories()
                    }
                >
                    {icon("refresh")}
                    "Reload categories"
                </button>

                {
                    let vm = vm.clone();
                    move || type_fields(&vm, product_type.get())
                }

                <div class="form__group">
                    <label class="form__label" for="tag-input">"Tags"</label>
                    <div class="tag-input">
                        <input
                            id="tag-input"
                            class="form__input"
                            placeholder="Type a tag and press Add"
                            prop:value=move || tag_input.get()
                            on:input=move |ev| tag_input.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click={
                                let vm = vm.clone();
                                move |_| vm.add_tags()
                            }
                        >
                            {icon("plus")}
                            "Add"
                        </button>
                    </div>
                    <div class="tag-list">{tags}</div>
                </div>

                <div class="form__group">
                    <label class="form__label" for="main-image">"Main image"</label>
                    <input
                        id="main-image"
                        type="file"
                        accept="image/*"
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.choose_image(picked_file(&ev))
                        }
                    />
                    {move || image().map(|src| view! { <img class="image-preview" src=src alt="preview" /> })}
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update product",
                            (false, false) => "Create product",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// `/dashboard/products/new`
#[component]
pub fn ProductCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_created: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/dashboard/products", Default::default()));
    view! { <ProductDetails id=None on_created=on_created /> }
}

/// `/dashboard/products/edit/:id`
#[component]
pub fn ProductEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let id = params.with_untracked(|p| p.get("id"));
    let on_created: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/dashboard/products", Default::default()));
    view! { <ProductDetails id=id on_created=on_created /> }
}
