use crate::domain::a001_category::model::fetch_tree;
use crate::domain::a002_product::model::fetch_product;
use crate::shared::api_utils::asset_url;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::CategoryTree;
use contracts::domain::a002_product::{Product, ProductType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Placeholder for a category level that did not resolve
const UNRESOLVED: &str = "—";

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// (label, value) pairs of the type-specific block
fn type_details(product: &Product) -> Vec<(&'static str, String)> {
    match product.product_type() {
        ProductType::GeneralGoods => {
            let goods = product.general_goods.clone().unwrap_or_default();
            vec![
                ("Stock quantity", or_dash(&goods.stock_quantity)),
                ("Wholesale price", or_dash(&goods.wholesale_price)),
                ("Size", or_dash(&goods.size)),
                ("Brand", or_dash(&goods.brand)),
                ("Color", if goods.color.is_empty() { "-".to_string() } else { goods.color.join(", ") }),
            ]
        }
        ProductType::Vehicles => vec![
            ("Condition", or_dash(&product.vehicle_condition)),
            ("Registration", or_dash(&product.registration)),
            ("Special features", or_dash(&product.special_features)),
            ("Fuel type", or_dash(&product.fuel_type)),
            ("Engine (cc)", or_dash(&product.cc)),
            ("Transmission", or_dash(&product.transmission)),
        ],
        ProductType::Services => vec![("Service features", or_dash(&product.service_features))],
    }
}

/// Read-only product page
#[component]
#[allow(non_snake_case)]
pub fn ProductView() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id")).unwrap_or_default();
    let toast = use_toast();

    let product = RwSignal::new(None::<Product>);
    let tree = RwSignal::new(CategoryTree::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = id();
        set_loading.set(true);
        spawn_local(async move {
            // Дерево нужно только для имён, которых нет в самом товаре
            if let Ok(t) = fetch_tree().await {
                tree.set(t);
            }
            match fetch_product(&id).await {
                Ok(p) => product.set(Some(p)),
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    });

    let details = move || {
        product.get().map(|p| {
            let names = tree.with(|t| p.category_names(t));
            let chain = [names.main, names.sub, names.child]
                .into_iter()
                .map(|n| n.unwrap_or_else(|| UNRESOLVED.to_string()))
                .collect::<Vec<_>>()
                .join(" / ");
            let edit_href = format!("/dashboard/products/edit/{}", p.id);
            let image = p.display_image().map(asset_url);
            let extra = type_details(&p);
            view! {
                <div class="card product-view">
                    {image.map(|src| view! { <img class="product-view__image" src=src alt=p.title.clone() /> })}
                    <dl class="details-list">
                        <dt>"Title"</dt><dd>{p.title.clone()}</dd>
                        <dt>"Type"</dt><dd>{p.product_type().title()}</dd>
                        <dt>"Category"</dt><dd>{chain}</dd>
                        <dt>"Price"</dt><dd>{or_dash(&p.price)}</dd>
                        <dt>"Discount price"</dt><dd>{or_dash(&p.discount_price)}</dd>
                        <dt>"Description"</dt><dd>{or_dash(&p.description)}</dd>
                        <dt>"Delivery & return policy"</dt><dd>{or_dash(&p.delivery_policy)}</dd>
                        {extra.into_iter().map(|(label, value)| view! {
                            <dt>{label}</dt><dd>{value}</dd>
                        }).collect_view()}
                        <dt>"Tags"</dt>
                        <dd class="tag-list">
                            {if p.tags.is_empty() {
                                view! { <span>"-"</span> }.into_any()
                            } else {
                                p.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view().into_any()
                            }}
                        </dd>
                    </dl>
                    <A href=edit_href>
                        <span class="button button--primary">{icon("edit")}"Edit"</span>
                    </A>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Product details">
                <A href="/dashboard/products">
                    <span class="button button--secondary">{icon("chevron-left")}"Back to products"</span>
                </A>
            </PageHeader>
            <Show when=move || loading.get()>
                <Loading label="Loading product..." />
            </Show>
            {details}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_values_show_dash() {
        assert_eq!(or_dash(&None), "-");
        assert_eq!(or_dash(&Some("  ".into())), "-");
        assert_eq!(or_dash(&Some("12.50".into())), "12.50");
    }

    #[test]
    fn vehicle_details_list_vehicle_fields() {
        let product = Product {
            main_category: "vehicles".into(),
            fuel_type: Some("diesel".into()),
            ..Product::default()
        };
        let details = type_details(&product);
        assert_eq!(details.len(), 6);
        assert!(details.contains(&("Fuel type", "diesel".to_string())));
    }
}
