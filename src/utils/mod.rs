//! Utility modules: seeded-random helpers and JSON persistence.

#![allow(unused_imports)]

pub mod persistence;
pub mod random;

pub use random::*;
