//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is deliberately small: the session model is the only cross-page
//! state in the app. Everything else (form fields, busy flags, messages)
//! stays page-local.

pub mod session;
