//! Profile page: header summary plus the edit form.
//!
//! The header and the form read different column sets; saving the form
//! re-fetches the header so a changed display name shows up immediately.

use leptos::prelude::*;

use crate::components::edit_profile_form::EditProfileForm;
use crate::components::footer::Footer;
use crate::components::profile_header::ProfileHeader;
use crate::net::auth_client::AuthClient;
use crate::net::types::ProfileSummary;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let session_state = expect_context::<RwSignal<SessionState>>();

    let summary = RwSignal::new(ProfileSummary::default());

    #[cfg(feature = "csr")]
    let load_summary = {
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let Some(session) = session_state.get_untracked().session().cloned() else {
                    return;
                };
                match crate::net::profiles::fetch_profile_summary(client.config(), &session).await {
                    Ok(Some(row)) => summary.set(row),
                    Ok(None) => summary.set(ProfileSummary::default()),
                    Err(err) => leptos::logging::warn!("profile summary fetch failed: {err}"),
                }
            });
        }
    };

    #[cfg(feature = "csr")]
    load_summary();

    #[cfg(feature = "csr")]
    let on_saved = Callback::new({
        let load_summary = load_summary.clone();
        move |()| load_summary()
    });
    #[cfg(not(feature = "csr"))]
    let on_saved = Callback::new(move |()| {
        let _ = (&client, session_state);
    });

    // Deep links like /profile#about scroll their target into view.
    #[cfg(feature = "csr")]
    {
        let location = leptos_router::hooks::use_location();
        Effect::new(move || {
            let hash = location.hash.get();
            let id = hash.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            if let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id))
            {
                element.scroll_into_view();
            }
        });
    }

    view! {
        <div class="profile-page">
            <div class="profile-page__hero"></div>
            <main class="profile-page__content">
                <ProfileHeader summary=summary title="Public Relations" />
                <EditProfileForm on_saved=on_saved />
                <Footer />
            </main>
        </div>
    }
}
