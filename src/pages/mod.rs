//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (service calls, error/busy
//! signals) and delegates rendering details to `components`. None of them
//! decide where the user belongs; the route gate in `app` does that.

pub mod dashboard;
pub mod loading;
pub mod login;
pub mod profile;
pub mod signup;
