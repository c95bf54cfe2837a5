use crate::domain::a005_coupon::model::{delete_coupon, fetch_coupons};
use crate::domain::a005_coupon::ui::details::CouponForm;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a005_coupon::Coupon;
use contracts::shared::Pagination;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of the coupon dialog
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Coupon),
}

#[component]
#[allow(non_snake_case)]
pub fn CouponList() -> impl IntoView {
    let toast = use_toast();
    let coupons = RwSignal::new(Vec::<Coupon>::new());
    let pagination = RwSignal::new(Pagination::default());
    let page = RwSignal::new(1usize);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let editor = RwSignal::new(Editor::Closed);
    let delete_target = RwSignal::new(None::<Coupon>);
    let deleting = RwSignal::new(false);

    let latest = LatestRequest::new();

    let fetch = move || {
        let current = page.get_untracked();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_coupons(current).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    coupons.set(data.data);
                    pagination.set(data.pagination);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(coupon) = delete_target.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match delete_coupon(&coupon.id).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "Coupon deleted successfully".to_string()));
                    delete_target.set(None);
                    fetch();
                }
                Err(e) => toast.error(e),
            }
            deleting.set(false);
        });
    });

    let visible = move || {
        let query = search.get();
        coupons.with(|list| list.iter().filter(|c| c.matches(&query)).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="page">
            <PageHeader title="Coupons" subtitle="Promo codes for your store">
                <button class="button button--primary" on:click=move |_| editor.set(Editor::New)>
                    {icon("plus")}
                    "New coupon"
                </button>
            </PageHeader>

            <div class="filters">
                <input
                    type="search"
                    class="form__input"
                    placeholder="Search by code..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <Loading label="Loading coupons..." />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Discount"</th>
                            <th class="table__header-cell">"Expires"</th>
                            <th class="table__header-cell">"Used"</th>
                            <th class="table__header-cell">"Active"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|c| (c.id.clone(), c.code.clone(), c.used_count)
                            children=move |c: Coupon| {
                                let for_edit = c.clone();
                                let for_delete = c.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.code.clone()}</td>
                                        <td class="table__cell">{c.discount_label()}</td>
                                        <td class="table__cell">{c.expiry_label()}</td>
                                        <td class="table__cell">{format!("{} / {}", c.used_count, c.usage_limit)}</td>
                                        <td class="table__cell">
                                            <span class=if c.active { "badge badge--success" } else { "badge" }>
                                                {if c.active { "Active" } else { "Inactive" }}
                                            </span>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon"
                                                title="Delete"
                                                on:click=move |_| delete_target.set(Some(for_delete.clone()))
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
                on_page_change=Callback::new(move |p: usize| {
                    page.set(p);
                    fetch();
                })
            />

            {move || {
                let coupon = match editor.get() {
                    Editor::Closed => return None,
                    Editor::New => None,
                    Editor::Edit(c) => Some(c),
                };
                Some(view! {
                    <CouponForm
                        coupon=coupon
                        on_saved=Callback::new(move |_: ()| {
                            editor.set(Editor::Closed);
                            fetch();
                        })
                        on_cancel=Callback::new(move |_: ()| editor.set(Editor::Closed))
                    />
                })
            }}

            <ConfirmModal
                open=Signal::derive(move || delete_target.with(Option::is_some))
                title="Delete coupon"
                message=Signal::derive(move || {
                    delete_target
                        .with(|c| c.as_ref().map(|c| format!("Delete coupon {}?", c.code)))
                        .unwrap_or_default()
                })
                busy=Signal::derive(move || deleting.get())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| delete_target.set(None))
            />
        </div>
    }
}
