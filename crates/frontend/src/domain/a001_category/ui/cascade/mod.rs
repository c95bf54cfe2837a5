use crate::shared::components::ui::select::Select;
use contracts::domain::a001_category::{main_options, CategoryOption, CategorySelector, CategoryTree};
use leptos::prelude::*;

fn pairs(options: &[CategoryOption]) -> Vec<(String, String)> {
    options.iter().map(|o| (o.id.clone(), o.name.clone())).collect()
}

/// Main -> sub -> child pickers bound to a [`CategorySelector`]
#[component]
pub fn CategoryCascade(
    #[prop(into)]
    tree: Signal<CategoryTree>,
    selector: RwSignal<CategorySelector>,
    /// Only main categories with this name (product type label)
    #[prop(optional, into)]
    main_label: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let mains = Signal::derive(move || {
        let label = main_label.get();
        tree.with(|t| pairs(&main_options(t, label.as_deref())))
    });
    let subs = Signal::derive(move || selector.with(|s| pairs(s.sub_options())));
    let child_list = Signal::derive(move || selector.with(|s| pairs(s.child_options())));

    view! {
        <div class="form__row category-cascade">
            <Select
                label="Category"
                id="category"
                placeholder="Select category"
                value=Signal::derive(move || selector.with(|s| s.main_id().to_string()))
                options=mains
                disabled=disabled
                on_change=Callback::new(move |id: String| {
                    tree.with_untracked(|t| selector.update(|s| s.select_main(t, &id)));
                })
            />
            <Select
                label="Sub category"
                id="sub-category"
                placeholder="Select sub category"
                value=Signal::derive(move || selector.with(|s| s.sub_id().to_string()))
                options=subs
                disabled=Signal::derive(move || disabled.get() || !selector.with(|s| s.sub_enabled()))
                on_change=Callback::new(move |id: String| {
                    tree.with_untracked(|t| selector.update(|s| s.select_sub(t, &id)));
                })
            />
            <Select
                label="Child category"
                id="child-category"
                placeholder="Select child category"
                value=Signal::derive(move || selector.with(|s| s.child_id().to_string()))
                options=child_list
                disabled=Signal::derive(move || disabled.get() || !selector.with(|s| s.child_enabled()))
                on_change=Callback::new(move |id: String| selector.update(|s| s.select_child(&id)))
            />
        </div>
    }
}
