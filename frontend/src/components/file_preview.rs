//! Preview of the selected file with its metadata.

use imgpredict::FileView;
use leptos::*;

#[component]
pub fn FilePreview(file: Signal<Option<FileView>>) -> impl IntoView {
    let field = move |f: fn(&FileView) -> String| move || file.with(|v| v.as_ref().map(f).unwrap_or_default());

    view! {
        <div class="preview-wrap" id="previewWrap" class:hidden=move || file.with(Option::is_none)>
            <img
                class="preview"
                id="preview"
                alt="Selected image"
                src=move || file.with(|v| v.as_ref().and_then(|f| f.preview_url.clone()))
            />
            <div class="file-meta">
                <span id="fileName">{field(|f| f.name.clone())}</span>
                " "
                <span id="fileSize">{field(|f| f.size_text.clone())}</span>
                " "
                <span id="fileType">{field(|f| f.type_text.clone())}</span>
            </div>
        </div>
    }
}
