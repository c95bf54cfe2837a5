use crate::domain::a001_category::model::fetch_tree;
use crate::domain::a002_product::model::{delete_product, fetch_products, PAGE_LIMIT};
use crate::shared::api_utils::asset_url;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::select::Select;
use crate::shared::icons::icon;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_category::{CategoryFilter, CategoryTree, ALL};
use contracts::domain::a002_product::{DocRef, Product, ProductListQuery};
use contracts::shared::Pagination;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

/// Row of the products table
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub main_category: String,
    pub sub_category: String,
    pub price: String,
    pub status: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        let name = |r: &Option<DocRef>| {
            r.as_ref()
                .and_then(DocRef::name)
                .unwrap_or("-")
                .to_string()
        };
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            image: p.display_image().map(str::to_string),
            main_category: p.main_category.clone(),
            sub_category: name(&p.sub_category),
            price: p.price.clone().unwrap_or_else(|| "-".to_string()),
            status: p.status.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn with_all(names: Vec<String>, all_label: &str) -> Vec<(String, String)> {
    std::iter::once((ALL.to_string(), all_label.to_string()))
        .chain(names.into_iter().map(|n| (n.clone(), n)))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();

    let products = RwSignal::new(Vec::<Product>::new());
    let pagination = RwSignal::new(Pagination::default());
    let page = RwSignal::new(1usize);
    let filter = RwSignal::new(CategoryFilter::new());
    let tree = RwSignal::new(CategoryTree::default());
    let (loading, set_loading) = signal(false);
    let delete_target = RwSignal::new(None::<(String, String)>);
    let deleting = RwSignal::new(false);

    let latest = LatestRequest::new();

    let fetch = move || {
        let query = ProductListQuery {
            store_id: auth.store_id(),
            main_category: filter.with_untracked(|f| f.server_main_category().map(str::to_string)),
            page: page.get_untracked(),
            limit: PAGE_LIMIT,
        };
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_products(&query).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    products.set(data.products);
                    pagination.set(data.pagination);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };

    spawn_local(async move {
        match fetch_tree().await {
            Ok(t) => tree.set(t),
            Err(e) => toast.error(e),
        }
    });
    fetch();

    // Основной фильтр уходит на сервер, поэтому сброс на первую страницу
    let on_main = Callback::new(move |main: String| {
        filter.update(|f| f.select_main(&main));
        page.set(1);
        fetch();
    });
    let on_sub = Callback::new(move |sub: String| filter.update(|f| f.select_sub(&sub)));
    let on_child = Callback::new(move |child: String| filter.update(|f| f.select_child(&child)));
    let on_page = Callback::new(move |p: usize| {
        page.set(p);
        fetch();
    });
    let reset = move |_| {
        filter.update(CategoryFilter::reset);
        page.set(1);
        fetch();
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match delete_product(&id).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "Product deleted successfully".to_string()));
                    delete_target.set(None);
                    fetch();
                }
                Err(e) => toast.error(e),
            }
            deleting.set(false);
        });
    });

    let rows = move || {
        products.with(|list| {
            filter.with(|f| f.apply(list).into_iter().map(ProductRow::from).collect::<Vec<_>>())
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Products" subtitle="Products of your store">
                <A href="/dashboard/products/new">
                    <span class="button button--primary">{icon("plus")}"Add product"</span>
                </A>
            </PageHeader>

            <div class="filters">
                <Select
                    label="Main category"
                    value=Signal::derive(move || filter.with(|f| f.main.clone()))
                    options=Signal::derive(move || tree.with(|t| with_all(filter.with(|f| f.main_options(t)), "All categories")))
                    on_change=on_main
                />
                <Select
                    label="Sub category"
                    value=Signal::derive(move || filter.with(|f| f.sub.clone()))
                    options=Signal::derive(move || tree.with(|t| with_all(filter.with(|f| f.sub_options(t)), "All sub categories")))
                    on_change=on_sub
                />
                <Select
                    label="Child category"
                    value=Signal::derive(move || filter.with(|f| f.child.clone()))
                    options=Signal::derive(move || tree.with(|t| with_all(filter.with(|f| f.child_options(t)), "All child categories")))
                    on_change=on_child
                />
                <div class="form__group">
                    <label class="form__label" for="product-search">"Search"</label>
                    <input
                        id="product-search"
                        type="search"
                        class="form__input"
                        placeholder="Search by title..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.set_search(&event_target_value(&ev)))
                    />
                </div>
                <button
                    class="button button--secondary"
                    on:click=reset
                    disabled=move || filter.with(|f| f.active_count() == 0)
                >
                    {move || format!("Reset ({})", filter.with(|f| f.active_count()))}
                </button>
            </div>

            <Show when=move || filter.with(|f| f.has_page_local_constraints())>
                <div class="warning-box">
                    <span class="warning-box__icon">"ℹ"</span>
                    <span class="warning-box__text">
                        "Sub category, child category and search filters apply to the products on this page only."
                    </span>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <Loading label="Loading products..." />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Sub category"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| row.id.clone()
                            children=move |row: ProductRow| {
                                let view_href = format!("/dashboard/products/view/{}", row.id);
                                let edit_href = format!("/dashboard/products/edit/{}", row.id);
                                let target = (row.id.clone(), row.title.clone());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            {match row.image {
                                                Some(src) => view! { <img class="product-thumb" src=asset_url(&src) alt="" /> }.into_any(),
                                                None => view! { <span class="product-thumb product-thumb--empty">"No Img"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="table__cell">{row.title}</td>
                                        <td class="table__cell">{row.main_category}</td>
                                        <td class="table__cell">{row.sub_category}</td>
                                        <td class="table__cell">{row.price}</td>
                                        <td class="table__cell">{row.status}</td>
                                        <td class="table__cell table__cell--actions">
                                            <A href=view_href>{icon("view")}</A>
                                            <A href=edit_href>{icon("edit")}</A>
                                            <button
                                                class="button button--icon"
                                                title="Delete"
                                                on:click=move |_| delete_target.set(Some(target.clone()))
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.get())
                total_pages=Signal::derive(move || pagination.with(|p| p.total_pages))
                total_count=Signal::derive(move || pagination.with(|p| p.total))
                on_page_change=on_page
            />

            <ConfirmModal
                open=Signal::derive(move || delete_target.with(Option::is_some))
                title="Delete product"
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|(_, title)| format!("Delete \"{title}\"? This cannot be undone."))
                        .unwrap_or_default()
                })
                busy=Signal::derive(move || deleting.get())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| delete_target.set(None))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_falls_back_to_dashes() {
        let product = Product {
            id: "prod-1".into(),
            title: "Pixel 9".into(),
            main_category: "general goods".into(),
            ..Product::default()
        };
        let row = ProductRow::from(&product);
        assert_eq!(row.price, "-");
        assert_eq!(row.sub_category, "-");
        assert!(row.image.is_none());
    }

    #[test]
    fn filter_options_start_with_wildcard() {
        let options = with_all(vec!["Phones".into()], "All");
        assert_eq!(options[0], (ALL.to_string(), "All".to_string()));
        assert_eq!(options[1], ("Phones".to_string(), "Phones".to_string()));
    }
}
