//! Inline failure notice for the detection form.

#[cfg(test)]
#[path = "error_notice_test.rs"]
mod error_notice_test;

use leptos::prelude::*;

#[component]
pub fn ErrorNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            {message}
        </div>
    }
}
