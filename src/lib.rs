//! # narthex
//!
//! Leptos + WASM client for a Supabase-backed account area: password and
//! Google sign-in, signup, and a profile screen over a `profiles` table.
//!
//! Routing is session-gated: every route renders a loading screen until the
//! identity service answers, then either shows its page or redirects to
//! where the current session says the user belongs. The auth client,
//! the routing table, and the wire codecs are plain Rust with native tests;
//! only the outermost glue needs a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
