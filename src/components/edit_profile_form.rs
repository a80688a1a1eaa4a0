//! Editable profile form with save and discard.
//!
//! Loads the caller's row on mount and keeps the loaded copy around so
//! Discard can restore it without another fetch. A missing row is not an
//! error: fields start empty and the first Save creates the row.

use leptos::prelude::*;

use crate::net::auth_client::AuthClient;
use crate::net::types::ProfileDetails;
use crate::state::session::SessionState;

#[cfg(test)]
#[path = "edit_profile_form_test.rs"]
mod edit_profile_form_test;

/// Empty and whitespace-only inputs become SQL `NULL` rather than `''`.
pub fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Field values for the form, in display order: email, username, name, about.
pub fn fields_from_details(details: &ProfileDetails) -> (String, String, String, String) {
    (
        details.email.clone().unwrap_or_default(),
        details.username.clone().unwrap_or_default(),
        details.name.clone().unwrap_or_default(),
        details.about_me.clone().unwrap_or_default(),
    )
}

#[component]
pub fn EditProfileForm(on_saved: Callback<()>) -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let session_state = expect_context::<RwSignal<SessionState>>();

    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let about_me = RwSignal::new(String::new());

    // The loaded (or last saved) row, for Discard.
    let original = RwSignal::new(None::<ProfileDetails>);

    let apply_details = move |details: &ProfileDetails| {
        let (email_v, username_v, name_v, about_v) = fields_from_details(details);
        email.set(email_v);
        username.set(username_v);
        name.set(name_v);
        about_me.set(about_v);
    };

    // Load the row on mount.
    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let Some(session) = session_state.get_untracked().session().cloned() else {
                loading.set(false);
                return;
            };
            match crate::net::profiles::fetch_profile_details(client.config(), &session).await {
                Ok(row) => {
                    let details = row.unwrap_or_default();
                    apply_details(&details);
                    original.set(Some(details));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }

    let on_save = {
        let client = client.clone();
        move |_| {
            if loading.get() || saving.get() {
                return;
            }
            error.set(None);
            success.set(None);
            saving.set(true);
            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let Some(session) = session_state.get_untracked().session().cloned() else {
                        saving.set(false);
                        return;
                    };
                    let update = crate::net::types::ProfileUpdate {
                        id: session.user.id.clone(),
                        email: blank_to_none(&email.get_untracked()),
                        username: blank_to_none(&username.get_untracked()),
                        name: blank_to_none(&name.get_untracked()),
                        about_me: blank_to_none(&about_me.get_untracked()),
                        updated_at: crate::net::profiles::iso_timestamp_now(),
                    };
                    match crate::net::profiles::upsert_profile(client.config(), &session, &update).await {
                        Ok(()) => {
                            success.set(Some("Profile updated successfully!".to_owned()));
                            original.set(Some(ProfileDetails {
                                name: update.name.clone(),
                                username: update.username.clone(),
                                email: update.email.clone(),
                                about_me: update.about_me.clone(),
                            }));
                            on_saved.run(());
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &client;
                saving.set(false);
            }
        }
    };

    let on_discard = move |_| {
        error.set(None);
        success.set(None);
        match original.get() {
            Some(details) => apply_details(&details),
            None => apply_details(&ProfileDetails::default()),
        }
    };

    let busy = move || loading.get() || saving.get();

    view! {
        <div class="profile-form">
            <div class="profile-form__header">
                <h2 class="profile-form__heading">"Edit Profile"</h2>
                <div class="profile-form__actions">
                    <button class="btn" disabled=busy on:click=on_discard>
                        "Discard"
                    </button>
                    <button class="btn btn--primary" disabled=busy on:click=on_save>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="profile-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || success.get().is_some()>
                <p class="profile-form__success">{move || success.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="profile-form__loading">"Loading profile data..."</p> }
            >
                <section class="profile-form__section">
                    <h3 class="profile-form__section-title">"User information"</h3>
                    <label class="profile-form__label">
                        "Email address"
                        <input
                            class="profile-form__input profile-form__input--readonly"
                            type="email"
                            prop:value=move || email.get()
                            disabled
                        />
                    </label>
                    <div class="profile-form__row">
                        <label class="profile-form__label">
                            "Username"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=busy
                            />
                        </label>
                        <label class="profile-form__label">
                            "Full name"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                disabled=busy
                            />
                        </label>
                    </div>
                </section>

                <section class="profile-form__section">
                    <h3 class="profile-form__section-title">"About me"</h3>
                    <textarea
                        class="profile-form__input profile-form__textarea"
                        rows="4"
                        prop:value=move || about_me.get()
                        on:input=move |ev| about_me.set(event_target_value(&ev))
                        disabled=busy
                    ></textarea>
                </section>
            </Show>
        </div>
    }
}
