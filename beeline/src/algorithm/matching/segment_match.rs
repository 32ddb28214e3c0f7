use super::MatchMethod;
use beeline_core::model::network::LinkId;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMatch {
    pub link_id: LinkId,
    pub method: MatchMethod,
}

impl SegmentMatch {
    pub fn new(link_id: LinkId, method: MatchMethod) -> SegmentMatch {
        SegmentMatch { link_id, method }
    }
}
