use crate::algorithm::rebase::LineUsage;
use beeline_core::model::network::{LinkId, Network};
use serde::Serialize;

/// one record located on a network link, with the link in the opposite
/// direction and the number of distinct lines using each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkMatchRow {
    pub record: String,
    pub link_id: LinkId,
    pub opposite_link_id: Option<LinkId>,
    pub link_usage: usize,
    pub opposite_usage: Option<usize>,
}

impl LinkMatchRow {
    pub fn new(record: &str, link_id: &LinkId, network: &Network, usage: &LineUsage) -> LinkMatchRow {
        let opposite = network.opposite_link(link_id).cloned();
        LinkMatchRow {
            record: String::from(record),
            link_id: link_id.clone(),
            link_usage: usage.count(link_id),
            opposite_usage: opposite.as_ref().map(|o| usage.count(o)),
            opposite_link_id: opposite,
        }
    }
}
