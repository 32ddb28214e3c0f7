use super::{file_ops, IoError};
use beeline_core::model::network::{Network, NetworkSerializable};

pub fn read_network(path: &str) -> Result<Network, IoError> {
    let rows: NetworkSerializable = file_ops::read_json(path)?;
    let network = Network::try_from(rows)?;
    log::info!(
        "read network from {path} with {} nodes and {} links",
        network.n_nodes(),
        network.n_links()
    );
    Ok(network)
}

pub fn write_network(path: &str, network: &Network, overwrite: bool) -> Result<(), IoError> {
    let rows = NetworkSerializable::from(network);
    file_ops::write_json(path, &rows, overwrite)?;
    log::info!("wrote network with {} links to {path}", network.n_links());
    Ok(())
}
