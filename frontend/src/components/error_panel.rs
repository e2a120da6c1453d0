//! Error region.

use leptos::*;

#[component]
pub fn ErrorPanel(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="error-wrap" id="errorWrap" class:hidden=move || error.with(Option::is_none)>
            <div class="error-message" id="errorText">
                {move || error.get().unwrap_or_default()}
            </div>
        </div>
    }
}
