//! Server selection: the designated server is the node with the most links.

use rustc_hash::FxHashMap;

use crate::topology::{Link, NodeId};

/// Counts the links incident to every node that appears in `links`. Nodes without links are
/// absent from the result.
pub fn degrees(links: &[Link]) -> FxHashMap<NodeId, usize> {
    let mut degrees = FxHashMap::default();
    for link in links {
        for node in link.endpoints() {
            *degrees.entry(node).or_insert(0) += 1;
        }
    }
    degrees
}

/// Picks the node with the strictly highest degree.
///
/// Ties go to the node that comes first in `nodes`; for generated topologies this is the
/// lowest node ID. Nodes without links are never chosen, so an empty `links` fails with
/// [`ServerError::NoValidServer`].
pub fn select_server(nodes: &[NodeId], links: &[Link]) -> Result<NodeId, ServerError> {
    let degrees = degrees(links);
    let mut best: Option<(NodeId, usize)> = None;
    for &node in nodes {
        let Some(&degree) = degrees.get(&node) else {
            continue;
        };
        if best.map_or(true, |(_, max)| degree > max) {
            best = Some((node, degree));
        }
    }
    best.map(|(node, _)| node).ok_or(ServerError::NoValidServer)
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("no node has any links, so there is no server to choose")]
    NoValidServer,
}
