//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render feed and article chrome while reading shared auth state
//! and the service bundle from Leptos context providers.

pub mod article_card;
pub mod article_filters;
pub mod comment_list;
pub mod like_button;
pub mod navbar;
pub mod protected_route;
