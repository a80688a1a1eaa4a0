//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth forms and profile widgets; route-level
//! orchestration (who fetches, where errors land) stays in `pages`. Forms
//! validate locally and hand validated submissions up through `Callback`
//! props.

pub mod edit_profile_form;
pub mod footer;
pub mod login_form;
pub mod profile_header;
pub mod signup_form;
