use crate::domain::a004_customer::model::fetch_customers;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a004_customer::Customer;
use contracts::shared::Pagination;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let toast = use_toast();
    let customers = RwSignal::new(Vec::<Customer>::new());
    let pagination = RwSignal::new(Pagination::default());
    let page = RwSignal::new(1usize);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let latest = LatestRequest::new();

    let fetch = move || {
        let current = page.get_untracked();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_customers(current).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    customers.set(data.customers);
                    pagination.set(data.pagination);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let visible = move || {
        let query = search.get();
        customers.with(|list| list.iter().filter(|c| c.matches(&query)).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="page">
            <PageHeader title="Customers" subtitle="People who ordered from your store">
                {()}
            </PageHeader>

            <div class="filters">
                <input
                    type="search"
                    class="form__input"
                    placeholder="Search by name or email..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <Loading label="Loading customers..." />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Orders"</th>
                            <th class="table__header-cell">"Spent"</th>
                            <th class="table__header-cell">"Last order"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|c| c.id.clone()
                            children=move |c: Customer| {
                                let last_order = c.last_order_label();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.name}</td>
                                        <td class="table__cell">{c.email}</td>
                                        <td class="table__cell">{c.address}</td>
                                        <td class="table__cell">{c.total_orders}</td>
                                        <td class="table__cell">{format!("${:.2}", c.money_spent)}</td>
                                        <td class="table__cell">{last_order}</td>
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
