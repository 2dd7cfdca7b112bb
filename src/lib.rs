// #![deny(unused_crate_dependencies)]

mod decider;
mod generic;

pub use decider::*;
pub use generic::*;
