//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form handling and delegates
//! rendering details to `components`. Async results are written with
//! `try_set`, so a response that lands after the page unmounted is dropped.

pub mod article;
pub mod dashboard;
pub mod editor;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
