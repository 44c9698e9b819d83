//! Shared client-side UI state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `feed`) so components depend on small
//! focused models. Both are plain data; reactivity comes from the `RwSignal`
//! wrapping them in context.

pub mod auth;
pub mod feed;
