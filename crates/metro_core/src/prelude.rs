//! Re-exports of the most commonly used items in `metro_core`.
pub use crate::constants::{Weight, UNREACHABLE};
pub use crate::error::{Error, Result};
pub use crate::graph::Graph;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::{DistanceMap, PathResult, ShortestPath};
pub use crate::util::default_network::default_network;
