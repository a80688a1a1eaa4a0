//! Profile page header: avatar, display name, and a decorative tab row.

use leptos::prelude::*;

use crate::net::types::ProfileSummary;

const FALLBACK_AVATAR: &str = "https://placehold.co/64x64/cccccc/333333?text=AV";

#[component]
pub fn ProfileHeader(summary: RwSignal<ProfileSummary>, title: &'static str) -> impl IntoView {
    let avatar_src = move || summary.get().avatar_url.unwrap_or_else(|| FALLBACK_AVATAR.to_owned());
    let name = move || summary.get().name.unwrap_or_else(|| "Loading...".to_owned());

    let active_tab = RwSignal::new("App");

    view! {
        <div class="profile-header">
            <div class="profile-header__identity">
                <img class="profile-header__avatar" src=avatar_src alt="avatar" />
                <div>
                    <h2 class="profile-header__name">{name}</h2>
                    <p class="profile-header__title">{title}</p>
                </div>
            </div>
            <div class="profile-header__tabs">
                <HeaderTab name="App" active=active_tab />
                <HeaderTab name="Messages" active=active_tab />
                <HeaderTab name="Settings" active=active_tab />
            </div>
        </div>
    }
}

#[component]
fn HeaderTab(name: &'static str, active: RwSignal<&'static str>) -> impl IntoView {
    view! {
        <button
            class="profile-header__tab"
            class:profile-header__tab--active=move || active.get() == name
            on:click=move |_| active.set(name)
        >
            {name}
        </button>
    }
}
