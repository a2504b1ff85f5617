//! Row structs for database tables.
//!
//! Insert and update inputs are the validated values produced by
//! `coffeehub_core::product` (`NewProduct`, `ProductChanges`).

pub mod product;
