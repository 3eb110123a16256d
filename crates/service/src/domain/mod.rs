//! Request and response shapes for every resource.
//!
//! Each entity has exactly one mapping here; handlers and services never
//! build JSON by hand.

pub mod ad;
pub mod category;
pub mod location;
pub mod user;
