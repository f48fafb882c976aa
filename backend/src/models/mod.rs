pub mod controls;
pub mod launch;

pub use controls::*;
pub use launch::*;
