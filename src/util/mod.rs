//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure presentation and guard logic out of page and
//! component bodies so it can be unit tested without a DOM.

pub mod auth;
pub mod format;
pub mod markdown;
