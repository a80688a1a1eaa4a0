//! Registration form: Google first, then email/password with terms consent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

/// Minimum the identity service accepts; checked locally to save a round trip.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A validated signup submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupSubmit {
    pub email: String,
    pub password: String,
}

/// Check and normalize the raw form fields.
pub fn validate_signup(
    email: &str,
    password: &str,
    accepted_terms: bool,
) -> Result<(String, String), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password should be at least {MIN_PASSWORD_LEN} characters."));
    }
    if !accepted_terms {
        return Err("Please accept the Terms and Conditions.".to_owned());
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Signup form. `notice` carries the check-your-inbox message when the
/// project requires email confirmation.
#[component]
pub fn SignupForm(
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_submit: Callback<SignupSubmit>,
    on_oauth: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_signup(&email.get(), &password.get(), accepted_terms.get()) {
            Ok((email, password)) => {
                error.set(None);
                on_submit.run(SignupSubmit { email, password });
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Register with"</h2>

            <button
                type="button"
                class="btn auth-card__oauth"
                disabled=move || busy.get()
                on:click=move |_| on_oauth.run(())
            >
                "Sign up with Google"
            </button>

            <div class="auth-card__divider"><span>"or"</span></div>

            <form class="auth-form" on:submit=submit>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-form__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="auth-form__terms">
                    <input
                        type="checkbox"
                        prop:checked=move || accepted_terms.get()
                        on:change=move |_| accepted_terms.update(|value| *value = !*value)
                    />
                    "I agree to the "
                    <a class="auth-card__link">"Terms and Conditions"</a>
                </label>
                <button class="btn btn--dark auth-form__submit" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
            </form>

            <p class="auth-card__switch">
                "Already have an account? "
                <a
                    class="auth-card__link"
                    on:click=move |_| navigate("/login", NavigateOptions::default())
                >
                    "Login"
                </a>
            </p>
        </div>
    }
}
