//! Login page: password sign-in and the Google OAuth hand-off.
//!
//! The page never navigates on success. Sign-in flips the shared session
//! state and the route gate moves the user to the dashboard.

use leptos::prelude::*;

use crate::components::login_form::{LoginForm, LoginSubmit};
use crate::net::auth_client::AuthClient;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();

    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit_client = client.clone();
    let on_submit = Callback::new(move |submit: LoginSubmit| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let client = submit_client.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = client
                    .sign_in_with_password(&submit.email, &submit.password, submit.remember)
                    .await
                {
                    error.set(Some(err.to_string()));
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
        // On success the browser is leaving for the provider; only a
        // failure hands control back to the form.
        if let Err(err) = client.sign_in_with_oauth("google") {
            error.set(Some(err.to_string()));
            busy.set(false);
        }
    });

    view! {
        <main class="auth-page">
            <LoginForm error=error busy=busy on_submit=on_submit on_oauth=on_oauth />
            <aside class="auth-page__banner auth-page__banner--login">
                <h4 class="auth-page__banner-heading">"\"Attention is the new currency\""</h4>
                <p class="auth-page__banner-text">
                    "The more effortless the writing looks, the more effort the writer actually put into the process."
                </p>
            </aside>
        </main>
    }
}
