use beeline_core::model::network::LinkId;
use std::collections::BTreeMap;

/// collects replacement links while lanes are being synthesized. consumed by
/// [`LinkSubstitutionBuilder::build`] once the merge is complete.
#[derive(Debug, Default)]
pub struct LinkSubstitutionBuilder {
    substitutions: BTreeMap<LinkId, Vec<LinkId>>,
}

impl LinkSubstitutionBuilder {
    pub fn new() -> LinkSubstitutionBuilder {
        LinkSubstitutionBuilder::default()
    }

    pub fn insert(&mut self, original: LinkId, replacement: LinkId) {
        self.substitutions
            .entry(original)
            .or_default()
            .push(replacement);
    }

    pub fn contains(&self, original: &LinkId) -> bool {
        self.substitutions.contains_key(original)
    }

    pub fn build(self) -> LinkSubstitutionMap {
        LinkSubstitutionMap {
            substitutions: self.substitutions,
        }
    }
}

/// original link → replacement links. immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSubstitutionMap {
    substitutions: BTreeMap<LinkId, Vec<LinkId>>,
}

impl LinkSubstitutionMap {
    pub fn empty() -> LinkSubstitutionMap {
        LinkSubstitutionMap::default()
    }

    pub fn get(&self, original: &LinkId) -> Option<&[LinkId]> {
        self.substitutions.get(original).map(|v| v.as_slice())
    }

    /// the link that replaces `original`: its first replacement, or itself if
    /// it has none.
    pub fn resolve<'a>(&'a self, original: &'a LinkId) -> &'a LinkId {
        self.get(original)
            .and_then(|v| v.first())
            .unwrap_or(original)
    }

    pub fn contains(&self, original: &LinkId) -> bool {
        self.substitutions.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}
