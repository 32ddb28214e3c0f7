pub mod lanes;
pub mod matching;
pub mod network_preparation;
pub mod progress;
pub mod rebase;
pub mod scoring;
