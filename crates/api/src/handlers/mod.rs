pub mod product;
pub mod stats;
