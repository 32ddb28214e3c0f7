use super::{Link, LinkId, NetworkError, Node, NodeId};
use geo::Line;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// a directed road/transit network.
///
/// # Invariants
///
/// every link's endpoints exist in the node mapping. this is enforced at
/// [`Network::add_link`], which is the only way to insert a link.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: BTreeMap<NodeId, Node>,
    links: BTreeMap<LinkId, Link>,
    /// links keyed by their (from, to) node pair, for opposite-direction lookups
    node_pairs: HashMap<(NodeId, NodeId), BTreeSet<LinkId>>,
}

impl Network {
    pub fn new() -> Network {
        Network::default()
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), NetworkError> {
        if self.nodes.contains_key(&node.id) {
            return Err(NetworkError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// adds a link to the network.
    ///
    /// # Errors
    ///
    /// * [`NetworkError::DuplicateLinkCollision`] if the identifier is already taken
    /// * [`NetworkError::MissingNode`] if either endpoint is not a node of this network
    pub fn add_link(&mut self, link: Link) -> Result<(), NetworkError> {
        if self.links.contains_key(&link.id) {
            return Err(NetworkError::DuplicateLinkCollision(link.id));
        }
        for node in [&link.from, &link.to] {
            if !self.nodes.contains_key(node) {
                return Err(NetworkError::MissingNode {
                    link: link.id.clone(),
                    node: node.clone(),
                });
            }
        }
        self.node_pairs
            .entry((link.from.clone(), link.to.clone()))
            .or_default()
            .insert(link.id.clone());
        self.links.insert(link.id.clone(), link);
        Ok(())
    }

    pub fn get_node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_link(&self, link_id: &LinkId) -> Option<&Link> {
        self.links.get(link_id)
    }

    pub fn get_link_or_err(&self, link_id: &LinkId) -> Result<&Link, NetworkError> {
        self.links
            .get(link_id)
            .ok_or_else(|| NetworkError::MissingLink(link_id.clone()))
    }

    pub fn contains_link(&self, link_id: &LinkId) -> bool {
        self.links.contains_key(link_id)
    }

    /// nodes in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// links in identifier order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_links(&self) -> usize {
        self.links.len()
    }

    /// the straight segment from the link's source node to its destination node.
    pub fn link_line(&self, link: &Link) -> Result<Line<f64>, NetworkError> {
        let src = self.node_for(link, &link.from)?;
        let dst = self.node_for(link, &link.to)?;
        Ok(Line::new(src.coord(), dst.coord()))
    }

    pub fn link_line_by_id(&self, link_id: &LinkId) -> Result<Line<f64>, NetworkError> {
        let link = self.get_link_or_err(link_id)?;
        self.link_line(link)
    }

    /// all links traveling from `from` to `to`, in identifier order.
    pub fn links_between(&self, from: &NodeId, to: &NodeId) -> Option<&BTreeSet<LinkId>> {
        self.node_pairs.get(&(from.clone(), to.clone()))
    }

    /// finds a link between the same node pair in the reverse direction. if
    /// more than one exists, the lowest identifier is returned.
    pub fn opposite_link(&self, link_id: &LinkId) -> Option<&LinkId> {
        let link = self.links.get(link_id)?;
        self.links_between(&link.to, &link.from)
            .and_then(|ids| ids.iter().find(|id| *id != link_id))
    }

    /// true if `next` departs from the node where `prev` arrives.
    pub fn are_connected(&self, prev: &LinkId, next: &LinkId) -> Result<bool, NetworkError> {
        let a = self.get_link_or_err(prev)?;
        let b = self.get_link_or_err(next)?;
        Ok(a.to == b.from)
    }

    /// creates a sub-network of the links that allow at least one of the given
    /// modes, along with only those nodes that such links reference.
    pub fn filter_by_modes<S: AsRef<str>>(&self, modes: &[S]) -> Network {
        self.filter_links(|l| l.allows_any_mode(modes))
    }

    /// creates a sub-network of the links accepted by the predicate. nodes
    /// not referenced by any accepted link are dropped.
    pub fn filter_links(&self, predicate: impl Fn(&Link) -> bool) -> Network {
        let links = self
            .links
            .values()
            .filter(|l| predicate(l))
            .cloned()
            .collect::<Vec<_>>();
        let node_ids = links
            .iter()
            .flat_map(|l| [l.from.clone(), l.to.clone()])
            .collect::<BTreeSet<_>>();
        let mut out = Network::new();
        for node_id in node_ids {
            if let Some(node) = self.nodes.get(&node_id) {
                out.nodes.insert(node_id, node.clone());
            }
        }
        for link in links {
            out.node_pairs
                .entry((link.from.clone(), link.to.clone()))
                .or_default()
                .insert(link.id.clone());
            out.links.insert(link.id.clone(), link);
        }
        out
    }

    /// replaces every mode in `source_modes` with `target_mode` on all links
    /// that allow at least one of them.
    pub fn with_converted_modes<S: AsRef<str>>(
        &self,
        source_modes: &[S],
        target_mode: &str,
    ) -> Network {
        let mut out = self.clone();
        for link in out.links.values_mut() {
            if !link.allows_any_mode(source_modes) {
                continue;
            }
            for mode in source_modes {
                link.modes.remove(mode.as_ref());
            }
            link.modes.insert(String::from(target_mode));
        }
        out
    }

    fn node_for(&self, link: &Link, node_id: &NodeId) -> Result<&Node, NetworkError> {
        self.get_node(node_id)
            .ok_or_else(|| NetworkError::MissingNode {
                link: link.id.clone(),
                node: node_id.clone(),
            })
    }
}
