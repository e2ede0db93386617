//! Recurring rivals: personas, stage pools, scaling, selection and schedule.

#![allow(unused_imports)]

pub mod forms;
pub mod persistence;
pub mod pools;
pub mod roster;
pub mod scaling;
pub mod schedule;
pub mod selection;
pub mod types;

pub use forms::*;
pub use persistence::*;
pub use pools::*;
pub use roster::*;
pub use scaling::*;
pub use schedule::*;
pub use selection::*;
pub use types::*;
