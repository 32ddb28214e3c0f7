use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how a segment found its link, for outcome reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// the nearest link was accepted outright
    Nearest,
    /// a scored candidate from the radius search
    Scored,
    /// a scored candidate from the widened radius search
    ScoredWidened,
    /// no candidate passed, the nearest link was taken under a lenient policy
    Fallback,
}

impl Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchMethod::Nearest => "nearest",
            MatchMethod::Scored => "scored",
            MatchMethod::ScoredWidened => "scored_widened",
            MatchMethod::Fallback => "fallback",
        };
        write!(f, "{s}")
    }
}
