//! Network layer: Supabase auth (GoTrue) and data (PostgREST) clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app talks to two hosted services under one project URL: the auth API
//! at `/auth/v1` and the row API at `/rest/v1`. Request/response shapes and
//! error extraction are pure functions over strings so the wire contract is
//! covered by native tests; only the `send` step needs a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>` whose `Display` is safe to
//! put directly in front of the user. Callers decide severity: forms show
//! the message and stay usable, the session keeper decides between retry
//! and sign-out.

pub mod auth_client;
pub mod error;
pub mod identity;
pub mod profiles;
pub mod types;
