use leptos::prelude::*;
use thaw::*;

/// Spinner with a caption, shown while a page fetches
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                <Spinner />
                {label}
            </Flex>
        </div>
    }
}
