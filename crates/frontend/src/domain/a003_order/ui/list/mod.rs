use crate::domain::a003_order::model::{fetch_orders, update_status};
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::components::ui::select::Select;
use crate::shared::icons::icon;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a003_order::{OrderFilter, OrderRow, RawOrder, ORDER_STATUSES};
use contracts::shared::Pagination;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

fn capitalize(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_filter_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All statuses".to_string()))
        .chain(ORDER_STATUSES.iter().map(|s| (s.to_string(), capitalize(s))))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let toast = use_toast();
    let orders = RwSignal::new(Vec::<RawOrder>::new());
    let pagination = RwSignal::new(Pagination::default());
    let page = RwSignal::new(1usize);
    let filter = RwSignal::new(OrderFilter::default());
    let (loading, set_loading) = signal(false);
    // Заказы, у которых сейчас меняется статус
    let updating = RwSignal::new(HashSet::<String>::new());

    let latest = LatestRequest::new();

    let fetch = move || {
        let current = page.get_untracked();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_orders(current).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    orders.set(data.orders);
                    pagination.set(data.pagination);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let change_status = move |id: String, status: String| {
        if updating.with_untracked(|u| u.contains(&id)) {
            return;
        }
        updating.update(|u| {
            u.insert(id.clone());
        });
        spawn_local(async move {
            match update_status(&id, &status).await {
                Ok(updated) => {
                    orders.update(|list| {
                        if let Some(order) = list.iter_mut().find(|o| o.id == id) {
                            order.order_status = updated.order_status;
                        }
                    });
                    toast.success("Order status updated");
                }
                Err(e) => toast.error(e),
            }
            updating.update(|u| {
                u.remove(&id);
            });
        });
    };

    let rows = move || {
        orders.with(|list| {
            let rows: Vec<OrderRow> = list.iter().map(OrderRow::from).collect();
            filter.with(|f| f.apply(&rows).into_iter().cloned().collect::<Vec<_>>())
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle="Orders placed in your store">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <div class="form__group">
                    <label class="form__label" for="order-search">"Search"</label>
                    <input
                        id="order-search"
                        type="search"
                        class="form__input"
                        placeholder="Product or customer..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    />
                </div>
                <Select
                    label="Status"
                    value=Signal::derive(move || filter.with(|f| f.status.clone()))
                    options=Signal::derive(status_filter_options)
                    on_change=Callback::new(move |status: String| filter.update(|f| f.status = status))
                />
            </div>

            <Show when=move || loading.get()>
                <Loading label="Loading orders..." />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Change status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| (row.id.clone(), row.status.clone())
                            children=move |row: OrderRow| {
                                let id = row.id.clone();
                                let busy_id = row.id.clone();
                                let current = row.status.to_lowercase();
                                let status = row.status.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.product_title.clone()}</td>
                                        <td class="table__cell">{row.customer_name.clone()}</td>
                                        <td class="table__cell">{row.date_label()}</td>
                                        <td class="table__cell">{row.amount_label()}</td>
                                        <td class="table__cell"><StatusBadge status=status /></td>
                                        <td class="table__cell">
                                            <select
                                                class="form__select"
                                                disabled=move || updating.with(|u| u.contains(&busy_id))
                                                on:change=move |ev| change_status(id.clone(), event_target_value(&ev))
                                            >
                                                {ORDER_STATUSES.iter().map(|s| {
                                                    let selected = current == *s;
                                                    view! { <option value=*s selected=selected>{capitalize(s)}</option> }
                                                }).collect_view()}
                                            </select>
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
                on_page_change=Callback::new(move |p: usize| {
                    page.set(p);
                    fetch();
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_options_start_with_all() {
        let options = status_filter_options();
        assert_eq!(options.len(), ORDER_STATUSES.len() + 1);
        assert_eq!(options[0].0, "all");
        assert_eq!(options[1], ("completed".to_string(), "Completed".to_string()));
    }
}
