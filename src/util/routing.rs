//! Session-aware route selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route element is wrapped by the gate component, which delegates the
//! actual decision to [`select_destination`]. Keeping the policy here as a
//! pure function means the whole table is testable without a browser.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::SessionState;

/// The navigable routes of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, the blank entry route; always forwards somewhere else.
    Root,
    /// `/login`
    Login,
    /// `/signup`
    Signup,
    /// `/dashboard`
    Dashboard,
    /// `/profile`
    Profile,
}

impl AppRoute {
    /// Canonical path string for navigation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
        }
    }
}

/// What the gate should do for a requested route given the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Session still resolving; render the loading placeholder.
    Pending,
    /// Render the view registered at the requested route.
    Stay,
    /// Navigate to another route instead of rendering.
    Redirect(AppRoute),
}

/// Decide what to render for `route` under `state`.
///
/// While the session is unresolved every route shows the loading
/// placeholder and never redirects; redirecting on a guess would bounce
/// signed-in users through `/login` on every reload. Once resolved, the
/// auth-only routes and the auth-forbidden routes forward to their
/// respective homes; `/` never renders anything itself.
pub fn select_destination(route: AppRoute, state: &SessionState) -> Destination {
    if !state.is_resolved() {
        return Destination::Pending;
    }

    let signed_in = state.session().is_some();
    match route {
        AppRoute::Root => {
            if signed_in {
                Destination::Redirect(AppRoute::Dashboard)
            } else {
                Destination::Redirect(AppRoute::Login)
            }
        }
        AppRoute::Login | AppRoute::Signup => {
            if signed_in {
                Destination::Redirect(AppRoute::Dashboard)
            } else {
                Destination::Stay
            }
        }
        AppRoute::Dashboard | AppRoute::Profile => {
            if signed_in {
                Destination::Stay
            } else {
                Destination::Redirect(AppRoute::Login)
            }
        }
    }
}
