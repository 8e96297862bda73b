use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor list back from `target`. Returns `None` if the
/// target was never reached.
pub(crate) fn reconstruct_path(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
    distances: &[Weight],
    previous: &[Option<NodeIndex>],
) -> Option<ShortestPath> {
    let weight = distances[target.index()];
    if target != source && previous[target.index()].is_none() {
        return None;
    }

    let mut path = vec![target];
    let mut node = target;
    while let Some(prev_node) = previous[node.index()] {
        path.push(prev_node);
        node = prev_node;
    }
    path.reverse();

    let stations = path
        .into_iter()
        .filter_map(|idx| g.station(idx).map(|s| s.name.clone()))
        .collect();
    Some(ShortestPath::new(stations, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(expected_path: Vec<&str>, expected_weight: Weight, path: Option<ShortestPath>) {
    let path = path.expect("Expected a path");
    assert_eq!(expected_path, path.stations);
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
}
