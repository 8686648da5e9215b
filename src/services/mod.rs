pub mod ai;
pub mod assistant;
pub mod classifier;
pub mod composer;
pub mod keywords;
pub mod messaging;
pub mod tools;
