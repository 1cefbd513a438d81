//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod favourites;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
