//! recognizes features tagged as carrying a dedicated bus lane. keys are
//! matched by substring so that directional variants such as
//! `busway:left` or `lanes:bus:forward` are covered.
use std::collections::BTreeMap;

const BUS_LANE_KEYS: [&str; 3] = ["busway", "bus:lanes", "psv:lanes"];
const LANE_COUNT_KEYS: [&str; 2] = ["lanes:psv", "lanes:bus"];
const CYCLEWAY_KEY: &str = "cycleway";
const SHARED_BUSWAY: &str = "share_busway";

/// true if any tag marks the feature as having a bus lane:
///
/// * a key containing `busway`, `bus:lanes` or `psv:lanes`, whatever its value
/// * a key containing `lanes:psv` or `lanes:bus` with a lane count other than `"0"`
/// * a key containing `cycleway` with value `share_busway`
pub fn is_bus_lane(tags: &BTreeMap<String, String>) -> bool {
    tags.iter().any(|(key, value)| {
        let key = key.as_str();
        BUS_LANE_KEYS.iter().any(|k| key.contains(k))
            || (LANE_COUNT_KEYS.iter().any(|k| key.contains(k)) && value != "0")
            || (key.contains(CYCLEWAY_KEY) && value == SHARED_BUSWAY)
    })
}
