use crate::domain::a005_coupon::model::save_coupon;
use crate::shared::components::ui::select::Select;
use crate::shared::toast::use_toast;
use contracts::domain::a005_coupon::{Coupon, CouponDraft, DiscountType, DEFAULT_USAGE_LIMIT};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn discount_options() -> Vec<(String, String)> {
    vec![
        (DiscountType::Percentage.as_str().to_string(), "Percentage".to_string()),
        (DiscountType::Fixed.as_str().to_string(), "Fixed amount".to_string()),
    ]
}

/// Create/edit coupon dialog
#[component]
pub fn CouponForm(
    /// Coupon being edited, `None` for a new one
    coupon: Option<Coupon>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let id = coupon.as_ref().map(|c| c.id.clone());
    let is_edit = id.is_some();
    let draft = RwSignal::new(match &coupon {
        Some(c) => CouponDraft::from_coupon(c),
        None => CouponDraft {
            usage_limit: DEFAULT_USAGE_LIMIT.to_string(),
            ..CouponDraft::default()
        },
    });
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(CouponDraft::to_payload) {
            Ok(p) => p,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        let id = id.clone();
        spawn_local(async move {
            match save_coupon(id.as_deref(), &payload).await {
                Ok(saved) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    toast.success(format!("Coupon {} {verb} successfully", saved.code));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toast.error(e);
                    saving.set(false);
                }
            }
        });
    };

    let input = move |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      get: fn(&CouponDraft) -> String,
                      set: fn(&mut CouponDraft, String)| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>{label}</label>
                <input
                    id=id
                    type=input_type
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
    };

    view! {
        <div class="modal-overlay">
            <form class="modal form" on:submit=on_submit>
                <h3 class="modal__title">{if is_edit { "Edit coupon" } else { "New coupon" }}</h3>
                {input("coupon-code", "Code", "text", |d| d.code.clone(), |d, v| d.code = v.to_uppercase())}
                <Select
                    label="Discount type"
                    id="coupon-type"
                    value=Signal::derive(move || draft.with(|d| d.discount_type.as_str().to_string()))
                    options=Signal::derive(discount_options)
                    disabled=Signal::derive(move || saving.get())
                    on_change=Callback::new(move |v: String| draft.update(|d| d.discount_type = DiscountType::parse(&v)))
                />
                {input("coupon-value", "Discount value", "number", |d| d.discount_value.clone(), |d, v| d.discount_value = v)}
                {input("coupon-expiry", "Expiry date", "date", |d| d.expiry_date.clone(), |d, v| d.expiry_date = v)}
                {input("coupon-limit", "Usage limit", "number", |d| d.usage_limit.clone(), |d, v| d.usage_limit = v)}
                <div class="modal__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=move || saving.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update coupon",
                            (false, false) => "Create coupon",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
