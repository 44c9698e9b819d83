//! Session lifecycle: token storage, auth status, and the login/logout flows.
//!
//! ARCHITECTURE
//! ============
//! `store` persists raw strings, `state` owns status and notifies observers,
//! and `manager` runs the backend exchanges that move the state.

pub mod manager;
pub mod state;
pub mod store;
