use super::{LinkId, NodeId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("link '{0}' already exists in the network")]
    DuplicateLinkCollision(LinkId),
    #[error("node '{0}' already exists in the network")]
    DuplicateNode(NodeId),
    #[error("link '{link}' references node '{node}' which is not in the network")]
    MissingNode { link: LinkId, node: NodeId },
    #[error("attempting to get link '{0}' not in network")]
    MissingLink(LinkId),
}
