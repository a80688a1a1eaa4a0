//! Neutral full-screen placeholder shown while the session is unresolved.

use leptos::prelude::*;

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="loading-page">
            <p class="loading-page__text">"Loading..."</p>
        </div>
    }
}
