//! Signup page: account registration and the Google OAuth hand-off.

use leptos::prelude::*;

use crate::components::signup_form::{SignupForm, SignupSubmit};
use crate::net::auth_client::AuthClient;
#[cfg(feature = "csr")]
use crate::net::types::SignupOutcome;

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();

    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit_client = client.clone();
    let on_submit = Callback::new(move |submit: SignupSubmit| {
        if busy.get() {
            return;
        }
        busy.set(true);
        notice.set(None);
        #[cfg(feature = "csr")]
        {
            let client = submit_client.clone();
            leptos::task::spawn_local(async move {
                match client.sign_up(&submit.email, &submit.password).await {
                    // Auto-confirm: the session state flips and the route
                    // gate carries the user to the dashboard.
                    Ok(SignupOutcome::SignedIn(_)) => {}
                    Ok(SignupOutcome::ConfirmationRequired { email }) => {
                        let to = email.unwrap_or_else(|| "your inbox".to_owned());
                        notice.set(Some(format!(
                            "Almost there! Check {to} for a confirmation link, then log in."
                        )));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&submit_client, submit);
            busy.set(false);
        }
    });

    let on_oauth = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        if let Err(err) = client.sign_in_with_oauth("google") {
            error.set(Some(err.to_string()));
            busy.set(false);
        }
    });

    view! {
        <main class="auth-page auth-page--signup">
            <div class="auth-page__banner auth-page__banner--signup">
                <h4 class="auth-page__banner-heading">"Welcome!"</h4>
                <p class="auth-page__banner-text">
                    "Use these awesome forms to login or create new account in your project for free."
                </p>
            </div>
            <SignupForm
                error=error
                notice=notice
                busy=busy
                on_submit=on_submit
                on_oauth=on_oauth
            />
        </main>
    }
}
