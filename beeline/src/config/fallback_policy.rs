use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// what to do when no candidate satisfies the matching thresholds.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// report the record as unmatched
    Strict,
    /// fall back to the nearest link and report the degradation
    Lenient,
}
