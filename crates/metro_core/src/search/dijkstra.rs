use crate::constants::{Weight, UNREACHABLE};
use crate::error::Result;
use crate::graph::*;
use crate::priority_queue::{FrontierEntry, PriorityQueue};
use crate::search::shortest_path::{DistanceMap, ShortestPath};
use crate::statistics::SearchStats;
use log::{debug, info};

/// Single source shortest path search over a [`Graph`].
///
/// The graph is only borrowed for reading, so several searches can share it.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

struct SearchSpace {
    distances: Vec<Weight>,
    previous: Vec<Option<NodeIndex>>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the distance from `source` to every station of the graph.
    ///
    /// Stations that cannot be reached are reported as [`UNREACHABLE`].
    pub fn shortest_paths(&mut self, source: &str) -> Result<DistanceMap> {
        let source_idx = self.g.station_id(source)?;

        let space = self.run(source_idx, None);

        let distances = self
            .g
            .stations()
            .zip(space.distances)
            .map(|(name, d)| (name.to_string(), d))
            .collect::<Vec<_>>();

        info!(
            "Distances from {source}: {} of {} stations reached, {}",
            distances.iter().filter(|(_, d)| *d != UNREACHABLE).count(),
            distances.len(),
            self.stats
        );

        Ok(DistanceMap::new(source.to_string(), distances))
    }

    /// Finds a shortest route between two stations. `Ok(None)` means the
    /// stations are not connected.
    pub fn path(&mut self, source: &str, target: &str) -> Result<Option<ShortestPath>> {
        let source_idx = self.g.station_id(source)?;
        let target_idx = self.g.station_id(target)?;

        let space = self.run(source_idx, Some(target_idx));

        let sp = super::reconstruct_path(
            self.g,
            source_idx,
            target_idx,
            &space.distances,
            &space.previous,
        );
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!("Path found: {}", self.stats);
        } else {
            info!("No path found: {}", self.stats);
        }

        Ok(sp)
    }

    fn run(&mut self, source: NodeIndex, target: Option<NodeIndex>) -> SearchSpace {
        self.stats.init();

        let num_stations = self.g.num_stations();
        let mut distances = vec![UNREACHABLE; num_stations];
        let mut previous = vec![None; num_stations];
        let mut queue = PriorityQueue::with_capacity(num_stations);

        distances[source.index()] = 0.0;
        queue.push(FrontierEntry::new(0.0, source));

        while let Some(FrontierEntry { distance, station }) = queue.pop() {
            // Stale entry, a shorter distance was found after it was queued
            if distance > distances[station.index()] {
                continue;
            }

            self.stats.nodes_settled += 1;

            if Some(station) == target {
                break;
            }

            for edge in self.g.edges_out(station) {
                let new_distance = distance + edge.weight;
                if new_distance < distances[edge.target.index()] {
                    distances[edge.target.index()] = new_distance;
                    previous[edge.target.index()] = Some(station);
                    queue.push(FrontierEntry::new(new_distance, edge.target));
                }
            }
        }
        self.stats.finish();

        SearchSpace {
            distances,
            previous,
        }
    }
}
