use crate::domain::a007_subscription::model::fetch_plans;
use crate::shared::components::loading::Loading;
use crate::shared::components::page_header::PageHeader;
use crate::shared::latest::LatestRequest;
use crate::shared::toast::use_toast;
use contracts::domain::a007_subscription::SubscriptionPlan;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn plan_card(plan: SubscriptionPlan) -> impl IntoView {
    let price = plan.price_label();
    let trial = plan.trial_label();
    let inactive = !plan.is_active;
    let lines: Vec<String> = plan
        .features
        .iter()
        .cloned()
        .chain(plan.usage_limits.as_ref().map(|l| l.lines()).unwrap_or_default())
        .collect();

    view! {
        <div class="plan-card" class:plan-card--inactive=inactive>
            <h2 class="plan-card__name">{plan.name}</h2>
            <p class="plan-card__description">{plan.description}</p>
            <p class="plan-card__price">{price}</p>
            {trial.map(|t| view! { <p class="plan-card__trial">{t}</p> })}
            {inactive.then(|| view! {
                <span class="badge badge--neutral">"Unavailable"</span>
            })}
            <ul class="plan-card__features">
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SubscriptionPlans() -> impl IntoView {
    let toast = use_toast();
    let plans = RwSignal::new(Vec::<SubscriptionPlan>::new());
    let (loading, set_loading) = signal(false);

    let latest = LatestRequest::new();
    let ticket = latest.begin();
    set_loading.set(true);
    spawn_local(async move {
        let result = fetch_plans().await;
        if !latest.is_current(ticket) {
            return;
        }
        match result {
            Ok(data) => plans.set(data),
            Err(e) => toast.error(e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <PageHeader title="Subscription" subtitle="Plans available for your store">
                {()}
            </PageHeader>

            <Show when=move || loading.get()>
                <Loading label="Loading plans..." />
            </Show>

            <Show
                when=move || loading.get() || plans.with(|p| !p.is_empty())
                fallback=|| view! { <p class="panel__empty">"No plans available"</p> }
            >
                <div class="plan-grid">
                    <For
                        each=move || plans.get()
                        key=|p| p.id.clone()
                        children=plan_card
                    />
                </div>
            </Show>
        </div>
    }
}
