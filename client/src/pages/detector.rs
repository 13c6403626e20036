//! Language detection page: input form, failure notice, and result panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the `RwSignal<DetectState>` provided by `App`. The submit
//! handler runs the request in the browser only; on the server the page
//! renders its idle form.

use leptos::prelude::*;

use crate::components::error_notice::ErrorNotice;
use crate::components::result_panel::ResultPanel;
use crate::state::detect::DetectState;
use crate::util::format::submit_label;

pub const INPUT_PLACEHOLDER: &str = "Digite ou cole seu texto aqui...";

#[component]
pub fn DetectorPage() -> impl IntoView {
    let detect = expect_context::<RwSignal<DetectState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = detect.try_update(DetectState::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::detect(&text).await;
            if let Err(e) = &outcome {
                log::error!("{e}");
            }
            detect.update(|state| state.finish(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    view! {
        <div class="detector-page">
            <div class="detector-card">
                <header class="detector-card__header">
                    <h1>"Detector de Linguagem"</h1>
                    <p class="detector-card__subtitle">
                        "Cole um trecho de código ou texto abaixo para identificar a linguagem."
                    </p>
                </header>
                <form class="detector-form" on:submit=on_submit>
                    <textarea
                        class="detector-input"
                        placeholder=INPUT_PLACEHOLDER
                        prop:value=move || detect.with(|state| state.text.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            detect.update(|state| state.set_text(value));
                        }
                    ></textarea>
                    <button
                        class="detector-button"
                        type="submit"
                        disabled=move || !detect.with(DetectState::can_submit)
                    >
                        {move || submit_label(detect.with(DetectState::is_loading))}
                    </button>
                </form>
                {move || detect.with(DetectState::error_message).map(|message| view! { <ErrorNotice message/> })}
                {move || detect.with(|state| state.result().cloned()).map(|result| view! { <ResultPanel result/> })}
            </div>
        </div>
    }
}
