use super::{Link, Network, NetworkError, Node};
use serde::{Deserialize, Serialize};

/// vectorized wire representation of a [`Network`], used by file collaborators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSerializable {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl TryFrom<NetworkSerializable> for Network {
    type Error = NetworkError;

    fn try_from(value: NetworkSerializable) -> Result<Self, Self::Error> {
        let mut network = Network::new();
        for node in value.nodes {
            network.add_node(node)?;
        }
        for link in value.links {
            network.add_link(link)?;
        }
        Ok(network)
    }
}

impl From<&Network> for NetworkSerializable {
    fn from(network: &Network) -> Self {
        NetworkSerializable {
            nodes: network.nodes().cloned().collect(),
            links: network.links().cloned().collect(),
        }
    }
}
