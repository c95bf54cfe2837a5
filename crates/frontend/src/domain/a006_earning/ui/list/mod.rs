use crate::domain::a006_earning::model::fetch_earnings;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a006_earning::{format_usd, EarningsSummary, MonthlyEarning};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn month_row(m: MonthlyEarning, peak: f64) -> impl IntoView {
    let width = format!("width: {:.1}%", m.bar_percent(peak));
    let average = format!("Avg {}", format_usd(m.average()));
    view! {
        <li class="month-list__item">
            <div class="month-list__row">
                <span class="month-list__month">{m.month}</span>
                <span class="month-list__orders">{format!("{} orders", m.orders)}</span>
                <span class="month-list__total">{format_usd(m.total_earnings)}</span>
            </div>
            <div class="month-list__average">{average}</div>
            <div class="progress">
                <div class="progress__bar" style=width></div>
            </div>
        </li>
    }
}

/// Summary cards plus the monthly history with relative bars
#[component]
#[allow(non_snake_case)]
pub fn EarningsPage() -> impl IntoView {
    let toast = use_toast();
    let summary = RwSignal::new(EarningsSummary::default());
    let (loading, set_loading) = signal(false);

    let latest = LatestRequest::new();

    let fetch = move || {
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_earnings().await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => summary.set(data),
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let cards = move || {
        summary.with(|s| {
            [
                ("Total Earnings", format_usd(s.total_earnings)),
                ("This Month", format_usd(s.monthly_earnings)),
                ("Total Orders", s.total_orders.to_string()),
            ]
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Earnings" subtitle="Revenue from your store">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <Loading label="Loading earnings..." />
            </Show>

            <div class="stat-grid">
                {move || cards()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="stat-card">
                            <span class="stat-card__label">{label}</span>
                            <span class="stat-card__value">{value}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <section class="panel">
                <h2 class="panel__title">"Monthly Performance"</h2>
                <Show
                    when=move || summary.with(|s| !s.performance.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No earnings yet"</p> }
                >
                    <ul class="month-list">
                        {move || {
                            let peak = summary.with(|s| s.peak());
                            summary
                                .with(|s| s.performance.clone())
                                .into_iter()
                                .map(|m| month_row(m, peak))
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </div>
    }
}
