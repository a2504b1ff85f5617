//! Domain logic for the CoffeeHub catalog.
//!
//! Everything here is pure: no database, no HTTP, no logging. The API crate
//! feeds raw request bodies through [`product::sanitize`] and
//! [`product::validate`], and stored rows through [`product::aggregate`].

pub mod error;
pub mod product;
pub mod types;
