//! Prediction result panel.

use imgpredict::ResultView;
use leptos::*;

use crate::CHIP_CLASS;

#[component]
pub fn ResultPanel(result: Signal<Option<ResultView>>) -> impl IntoView {
    let field = move |f: fn(&ResultView) -> String| move || result.with(|r| r.as_ref().map(f).unwrap_or_default());

    view! {
        <div class="result-wrap" id="resultWrap" class:hidden=move || result.with(Option::is_none)>
            <div class="result-row">
                <span class="result-key">"Label"</span>
                <span class="result-label" id="resLabel">{field(|r| r.label.clone())}</span>
            </div>

            <div class="result-row">
                <span class="result-key">"Confidence"</span>
                <span id="resConf">{field(|r| r.confidence_text.clone())}</span>
            </div>
            <ConfidenceBar width=Signal::derive(field(ResultView::bar_width))/>

            <div class="result-row">
                <span class="result-key">"Alternatives"</span>
                <div class="chips" id="resAlt">
                    <For
                        each=move || result.with(|r| {
                            r.as_ref()
                                .map(|r| r.alternatives.clone())
                                .unwrap_or_default()
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        })
                        key=|(idx, alt)| (*idx, alt.clone())
                        children=move |(_, alt)| view! { <span class=CHIP_CLASS>{alt}</span> }
                    />
                </div>
            </div>

            <div class="result-row">
                <span class="result-key">"Why"</span>
                <span id="resWhy">{field(|r| r.rationale.clone())}</span>
            </div>

            <details class="result-raw">
                <summary>"Raw JSON"</summary>
                <pre id="resRaw">{field(|r| r.raw_json.clone())}</pre>
            </details>
        </div>
    }
}

#[component]
fn ConfidenceBar(width: Signal<String>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-fill" id="confBar" style:width=move || width.get()></div>
        </div>
    }
}
