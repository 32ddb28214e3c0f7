//! whole-network transformations applied before matching.
use beeline_core::model::network::Network;

/// the road network used as matching target: links allowing one of the
/// `base_modes`, minus links whose type contains one of `excluded_link_types`
/// (compared case-insensitively).
pub fn road_network<S: AsRef<str>>(
    network: &Network,
    base_modes: &[S],
    excluded_link_types: &[S],
) -> Network {
    let out = network.filter_links(|link| {
        link.allows_any_mode(base_modes)
            && !excluded_link_types
                .iter()
                .any(|t| link.has_type_like(t.as_ref()))
    });
    log::info!(
        "road network keeps {} of {} links and {} of {} nodes",
        out.n_links(),
        network.n_links(),
        out.n_nodes(),
        network.n_nodes()
    );
    out
}

/// merges all public transit modes into a single mode.
pub fn unify_transit_modes<S: AsRef<str>>(
    network: &Network,
    source_modes: &[S],
    target_mode: &str,
) -> Network {
    let n_converted = network
        .links()
        .filter(|l| l.allows_any_mode(source_modes))
        .count();
    log::info!("converting transit modes of {n_converted} links to '{target_mode}'");
    network.with_converted_modes(source_modes, target_mode)
}
