//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Image Classifier"</h1>
            <p class="subtitle">
                "Drop a PNG, JPEG or WEBP image and get a label, a confidence score, "
                "alternative labels and a short rationale."
            </p>
        </div>
    }
}
