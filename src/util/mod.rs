//! Shared client-side utilities.
//!
//! Pure helpers (routing policy, fragment parsing) live beside the thin
//! browser-glue modules so the glue stays testable by construction: anything
//! with logic worth testing is kept free of `web_sys`.

pub mod fragment;
pub mod routing;
pub mod storage;
