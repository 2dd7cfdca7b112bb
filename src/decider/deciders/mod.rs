mod random_decider;

pub use random_decider::{RandomDecider, RandomDeciderArgs};
