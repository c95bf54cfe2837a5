use crate::domain::a001_category::model::fetch_tree;
use crate::shared::api_utils::asset_url;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::{CategoryNode, CategoryTree};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

fn thumbnail(src: Option<String>, alt: String) -> AnyView {
    match src {
        Some(src) => view! { <img class="category-thumb" src=asset_url(&src) alt=alt /> }.into_any(),
        None => view! { <span class="category-thumb category-thumb--empty">"No Img"</span> }.into_any(),
    }
}

fn sub_rows(main: &CategoryNode) -> AnyView {
    if main.sub_categories.is_empty() {
        return view! {
            <tr class="table__row table__row--nested">
                <td class="table__cell" colspan="5">"No sub categories"</td>
            </tr>
        }
        .into_any();
    }
    main.sub_categories
        .iter()
        .map(|sub| {
            let children = sub
                .child_categories
                .iter()
                .map(|c| c.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <tr class="table__row table__row--nested">
                    <td class="table__cell"></td>
                    <td class="table__cell">{thumbnail(sub.thumbnail.clone(), sub.name.clone())}</td>
                    <td class="table__cell">{sub.name.clone()}</td>
                    <td class="table__cell" colspan="2">
                        {if children.is_empty() { "-".to_string() } else { children }}
                    </td>
                </tr>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let toast = use_toast();
    let tree = RwSignal::new(CategoryTree::default());
    let (loading, set_loading) = signal(false);
    let (search, set_search) = signal(String::new());
    let expanded = RwSignal::new(HashSet::<String>::new());

    let latest = LatestRequest::new();

    let fetch = move || {
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_tree().await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(t) => tree.set(t),
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };

    let toggle = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Categories" subtitle="Category tree provided by the marketplace">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <input
                    type="search"
                    class="form__input"
                    placeholder="Search main category..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <Loading label="Loading categories..." />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell"></th>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Main category"</th>
                            <th class="table__header-cell">"Sub categories"</th>
                            <th class="table__header-cell">"Products"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            let open = expanded.get();
                            tree.with(|t| {
                                let mains = t.search_main(&query);
                                if mains.is_empty() && !loading.get_untracked() {
                                    return view! {
                                        <tr><td class="table__cell" colspan="5">"No categories found"</td></tr>
                                    }
                                    .into_any();
                                }
                                mains
                                    .into_iter()
                                    .map(|main| {
                                        let id = main.id.clone();
                                        let is_open = open.contains(&id);
                                        view! {
                                            <tr class="table__row" on:click=move |_| toggle(id.clone())>
                                                <td class="table__cell">
                                                    {icon(if is_open { "chevron-down" } else { "chevron-right" })}
                                                </td>
                                                <td class="table__cell">{thumbnail(main.image.clone(), main.name.clone())}</td>
                                                <td class="table__cell">{main.name.clone()}</td>
                                                <td class="table__cell">{main.sub_categories.len()}</td>
                                                <td class="table__cell">{main.product_count}</td>
                                            </tr>
                                            {is_open.then(|| sub_rows(main))}
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            })
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
