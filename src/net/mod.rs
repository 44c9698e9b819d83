//! Networking modules for the blog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the raw HTTP seam, `client` is the shared authenticated
//! pipeline, `articles`/`users`/`comments` are typed endpoint wrappers over it,
//! and `types` defines the wire schema.

pub mod articles;
pub mod client;
pub mod comments;
pub mod transport;
pub mod types;
pub mod users;
