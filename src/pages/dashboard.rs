//! Dashboard page: the authenticated landing route.
//!
//! Kept deliberately small: a link to the profile page and a guarded
//! logout. Logout asks for confirmation, revokes remotely, and lets the
//! route gate bounce the signed-out user back to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth_client::AuthClient;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let navigate = use_navigate();

    let show_confirm = RwSignal::new(false);
    let logging_out = RwSignal::new(false);

    let on_profile = move |_| navigate("/profile", NavigateOptions::default());

    let on_logout_request = move |_| show_confirm.set(true);
    let on_cancel = Callback::new(move |()| show_confirm.set(false));

    let on_confirm = Callback::new(move |()| {
        show_confirm.set(false);
        if logging_out.get() {
            return;
        }
        logging_out.set(true);
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                client.sign_out().await;
                logging_out.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &client;
            logging_out.set(false);
        }
    });

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__actions">
                <button class="btn btn--primary" on:click=on_profile>
                    "Profile Page"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || logging_out.get()
                    on:click=on_logout_request
                >
                    {move || if logging_out.get() { "Logging out" } else { "Log out" }}
                </button>
            </div>
            <Show when=move || show_confirm.get()>
                <LogoutConfirmDialog on_cancel=on_cancel on_confirm=on_confirm />
            </Show>
        </div>
    }
}

/// Confirmation dialog shown before ending the session.
#[component]
fn LogoutConfirmDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Are you absolutely sure?"</h2>
                <p class="dialog__description">
                    "This will end your session on this device and return you to the login page."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Log out"
                    </button>
                </div>
            </div>
        </div>
    }
}
