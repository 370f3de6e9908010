pub mod compare;
pub mod health;

pub use compare::*;
pub use health::*;
