//! Service layer: DTO mapping, validation and storage access for the ad board.
//! - Handlers talk to the `*Service` structs only, never to entities.
//! - Configuration (page size, connection) is passed in at construction.

pub mod errors;
pub mod pagination;
pub mod password;
pub mod domain;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::{AdService, CategoryService, LocationService, UserService};
