//! Party template algebra, named presets, and wave selectors.

#![allow(unused_imports)]

pub mod presets;
pub mod selection;
pub mod types;

pub use presets::*;
pub use selection::*;
pub use types::*;
