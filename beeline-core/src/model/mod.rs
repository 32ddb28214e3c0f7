pub mod feature;
pub mod network;
pub mod schedule;
