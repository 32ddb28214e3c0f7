use crate::algorithm::lanes::LinkSubstitutionMap;
use beeline_core::model::schedule::{StopFacility, StopFacilityId};
use std::collections::BTreeMap;

/// replaces every facility anchored on a substituted link with a facility
/// anchored on that link's replacement. other facilities are carried over.
pub fn reassign_substituted_facilities(
    facilities: &BTreeMap<StopFacilityId, StopFacility>,
    substitutions: &LinkSubstitutionMap,
) -> BTreeMap<StopFacilityId, StopFacility> {
    let mut n_moved = 0;
    let out = facilities
        .iter()
        .map(|(id, facility)| {
            if substitutions.contains(&facility.link) {
                n_moved += 1;
                let link = substitutions.resolve(&facility.link);
                (id.clone(), facility.anchored_on(link.clone()))
            } else {
                (id.clone(), facility.clone())
            }
        })
        .collect();
    log::info!("re-anchored {n_moved} stop facilities onto substituted links");
    out
}
