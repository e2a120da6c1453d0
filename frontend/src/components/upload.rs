//! Image upload widget with drag & drop support.
//!
//! Owns the [`UploadWidget`] (in a signal), turns DOM events into widget
//! calls and renders the resulting [`WidgetView`].

use imgpredict::{predict, UploadWidget, WidgetView};
use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::components::{ErrorPanel, FilePreview, ResultPanel};
use crate::services::{now_ms, revoke_preview, BrowserFile, FetchTransport};
use crate::{
    DROPZONE_ACTIVE_CLASS, DROPZONE_CLASS, DROPZONE_DISABLED_CLASS, FILE_ACCEPT, PREDICT_URL,
};

#[component]
pub fn PredictWidget() -> impl IntoView {
    let widget = create_rw_signal(UploadWidget::<BrowserFile>::new());
    let view_model = create_memo(move |_| widget.with(UploadWidget::<BrowserFile>::view));
    let (is_dragover, set_is_dragover) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    create_effect(move |_| view_model.with(|v| log::debug!("widget view: {}", describe(v))));

    // Apply a change to the widget, releasing the old preview URL if the
    // selection changed.
    let update_selection = move |f: &dyn Fn(&mut UploadWidget<BrowserFile>)| {
        let preview = |w: &UploadWidget<BrowserFile>| w.selected().and_then(|s| s.preview_url.clone());
        let before = widget.with_untracked(preview);
        widget.update(|w| f(w));
        if let Some(url) = before {
            if widget.with_untracked(preview).as_deref() != Some(url.as_str()) {
                revoke_preview(&url);
            }
        }
    };

    let accept_file = move |file: Option<File>| {
        update_selection(&|w| {
            // Rejections are rendered by the widget itself
            let _ = w.accept_file(file.clone().map(BrowserFile::new));
        });
    };

    let picker_enabled = move || view_model.with_untracked(|v| v.picker_enabled);

    let open_picker = move |_| {
        if !picker_enabled() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        accept_file(input.files().and_then(|files| files.get(0)));
        // The widget holds the selection; an empty input lets the same
        // file fire `change` again
        input.set_value("");
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(picker_enabled());
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
        if !picker_enabled() {
            log::debug!("Drop ignored while a prediction is running");
            return;
        }
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        accept_file(file);
    };

    let on_clear = move |_| {
        if widget.with_untracked(UploadWidget::<BrowserFile>::is_loading) {
            return;
        }
        update_selection(&|w| w.reset_ui(true));
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let on_predict = move |_| {
        let Some(file) = widget.try_update(|w| w.begin_predict(now_ms())).flatten() else {
            return;
        };

        spawn_local(async move {
            let transport = FetchTransport::new(PREDICT_URL);
            let outcome = predict(&transport, &file).await;
            widget.update(|w| w.finish_predict(outcome, now_ms()));
        });
    };

    let loading = move || view_model.with(|v| v.loading);
    let file = Signal::derive(move || view_model.with(|v| v.file.clone()));
    let result = Signal::derive(move || view_model.with(|v| v.result.clone()));
    let error = Signal::derive(move || view_model.with(|v| v.error.clone()));

    view! {
        <div class="upload-widget">
            <div
                class=move || {
                    if !view_model.with(|v| v.picker_enabled) {
                        DROPZONE_DISABLED_CLASS
                    } else if is_dragover.get() {
                        DROPZONE_ACTIVE_CLASS
                    } else {
                        DROPZONE_CLASS
                    }
                }
                aria-disabled=move || (!view_model.with(|v| v.picker_enabled)).to_string()
                id="dropzone"
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"🖼️"</div>
                <div class="upload-text">"Drop an image here or click to select"</div>
                <div class="upload-hint">"PNG, JPG/JPEG, WEBP • max 50MB"</div>
            </div>

            <input
                type="file"
                id="file"
                class="hidden"
                accept=FILE_ACCEPT
                node_ref=file_input
                on:change=on_file_change
            />

            <div class="actions">
                <button class="btn btn-secondary" id="browseBtn" on:click=open_picker disabled=loading>
                    "Browse"
                </button>
                <button
                    class="btn btn-primary"
                    id="predictBtn"
                    on:click=on_predict
                    disabled=move || !view_model.with(|v| v.predict_enabled)
                >
                    "Predict"
                </button>
                <button class="btn btn-secondary" id="clearBtn" on:click=on_clear disabled=loading>
                    "Clear"
                </button>
                <span class="spinner" id="spinner" class:hidden=move || !loading()></span>
            </div>

            <FilePreview file=file/>

            <div class="status" id="status">{move || view_model.with(|v| v.status.clone())}</div>

            <ResultPanel result=result/>
            <ErrorPanel error=error/>
        </div>
    }
}

/// One-line summary of a view, for the console.
fn describe(view: &WidgetView) -> String {
    format!(
        "predict={} loading={} file={} result={} error={}",
        view.predict_enabled,
        view.loading,
        view.file.as_ref().map(|f| f.name.as_str()).unwrap_or("-"),
        view.result.as_ref().map(|r| r.label.as_str()).unwrap_or("-"),
        view.error.as_deref().unwrap_or("-"),
    )
}
