//! Species identifiers, tiered pools, and the catalog collaborator.

#![allow(unused_imports)]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
