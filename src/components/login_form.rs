//! Email/password login form with a Google alternative.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

/// A validated login submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSubmit {
    pub email: String,
    pub password: String,
    /// Keep the session across browser restarts.
    pub remember: bool,
}

/// Check and normalize the raw form fields.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.is_empty() {
        return Err("Enter your password.".to_owned());
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login form. `error` is owned by the page so service failures and local
/// validation failures land in the same spot.
#[component]
pub fn LoginForm(
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_submit: Callback<LoginSubmit>,
    on_oauth: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login(&email.get(), &password.get()) {
            Ok((email, password)) => {
                error.set(None);
                on_submit.run(LoginSubmit { email, password, remember: remember.get() });
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Log in"</h2>
            <p class="auth-card__subtitle">"Enter your email and password to log in"</p>

            <form class="auth-form" on:submit=submit>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email address"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="auth-form__remember">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |_| remember.update(|value| *value = !*value)
                    />
                    "Remember me"
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    "Log in"
                </button>
            </form>

            <div class="auth-card__divider"><span>"or"</span></div>

            <button
                type="button"
                class="btn auth-card__oauth"
                disabled=move || busy.get()
                on:click=move |_| on_oauth.run(())
            >
                "Log in with Google"
            </button>

            <p class="auth-card__switch">
                "Don't have an account? "
                <a
                    class="auth-card__link"
                    on:click=move |_| navigate("/signup", NavigateOptions::default())
                >
                    "Sign up"
                </a>
            </p>
        </div>
    }
}
