pub mod common;
pub mod compare;

pub use common::*;
pub use compare::*;
