//! Root application component: contexts, session keeper, and the route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `AuthClient`, mirrors its changes into a reactive
//! `SessionState` signal, and wraps every route in an `AuthGate`. The gate
//! holds a loading screen until the session question is answered, then
//! either renders the route or replaces it with a redirect. Pages below the
//! gate can assume the session state is resolved and correct for them.
//!
//! DESIGN
//! ======
//! Gate decisions come from the pure routing table; the gate itself only
//! wires that table to the router. Decisions are memoized on equality, so a
//! token refresh (same answer, fresh token) re-renders nothing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::SupabaseConfig;
use crate::net::auth_client::AuthClient;
use crate::pages::dashboard::DashboardPage;
use crate::pages::loading::LoadingPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::state::session::SessionState;
use crate::util::routing::{AppRoute, Destination, select_destination};

/// Poll cadence for the token keeper.
#[cfg(feature = "csr")]
const KEEPER_TICK_SECS: u64 = 30;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match SupabaseConfig::from_build_env() {
        Ok(config) => view! { <ConfiguredApp config=config /> }.into_any(),
        Err(err) => {
            // A build without credentials cannot do anything useful; say so
            // instead of failing on the first request.
            view! {
                <div class="config-error">
                    <h1>"Configuration error"</h1>
                    <p>{err.to_string()}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ConfiguredApp(config: SupabaseConfig) -> impl IntoView {
    let client = AuthClient::new(config);
    let session_state = RwSignal::new(SessionState::Unknown);

    // Mirror every auth change into the reactive state. The signal is the
    // only consumer; pages and the gate read it from context.
    let subscription = client.subscribe(move |_change, state| session_state.set(state.clone()));
    on_cleanup(move || subscription.unsubscribe());

    provide_context(client.clone());
    provide_context(session_state);

    // Resolve the initial session, then keep the access token fresh for as
    // long as the app lives.
    #[cfg(feature = "csr")]
    {
        let restore_client = client.clone();
        leptos::task::spawn_local(async move {
            restore_client.restore().await;
        });

        let keeper_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let keeper_alive_task = keeper_alive.clone();
        let keeper_client = client.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(KEEPER_TICK_SECS)).await;
                if !keeper_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                keeper_client.refresh_if_expiring().await;
            }
        });
        on_cleanup(move || keeper_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Title text="Narthex"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <AuthGate route=AppRoute::Root/> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <AuthGate route=AppRoute::Login>
                                <LoginPage/>
                            </AuthGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| {
                        view! {
                            <AuthGate route=AppRoute::Signup>
                                <SignupPage/>
                            </AuthGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <AuthGate route=AppRoute::Dashboard>
                                <DashboardPage/>
                            </AuthGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <AuthGate route=AppRoute::Profile>
                                <ProfilePage/>
                            </AuthGate>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Per-route session gate.
///
/// Renders the loading screen while the session is unresolved, the route
/// content when the user belongs here, and issues a navigation (rendering
/// the loading screen for the frame in between) when they do not. The root
/// route has no content of its own, so `children` is optional.
#[component]
fn AuthGate(route: AppRoute, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let destination = Memo::new(move |_| select_destination(route, &session_state.get()));

    Effect::new(move || {
        if let Destination::Redirect(target) = destination.get() {
            navigate(target.path(), NavigateOptions::default());
        }
    });

    move || match destination.get() {
        Destination::Stay => children
            .as_ref()
            .map_or_else(|| ().into_any(), |children| children().into_any()),
        Destination::Pending | Destination::Redirect(_) => view! { <LoadingPage/> }.into_any(),
    }
}
