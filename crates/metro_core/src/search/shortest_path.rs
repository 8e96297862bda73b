use rustc_hash::FxHashMap;

use crate::constants::{Weight, UNREACHABLE};

/// Route between two stations found by a point to point query.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub stations: Vec<String>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(stations: Vec<String>, weight: Weight) -> Self {
        ShortestPath { stations, weight }
    }
}

/// One row of a shortest path report.
#[derive(Debug, PartialEq, Clone)]
pub struct PathResult {
    pub source: String,
    pub destination: String,
    pub distance: Weight,
}

/// Shortest distances from a single source to every station of the graph.
///
/// Stations are kept in the order they were added to the graph. Stations
/// without a path from the source map to [`UNREACHABLE`].
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: String,
    distances: Vec<(String, Weight)>,
    index: FxHashMap<String, usize>,
}

impl DistanceMap {
    pub(crate) fn new(source: String, distances: Vec<(String, Weight)>) -> Self {
        let index = distances
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        DistanceMap {
            source,
            distances,
            index,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distance to `station`, `None` if the station was not part of the graph.
    pub fn get(&self, station: &str) -> Option<Weight> {
        self.index.get(station).map(|&i| self.distances[i].1)
    }

    pub fn is_reachable(&self, station: &str) -> bool {
        self.get(station).map_or(false, |d| d != UNREACHABLE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> {
        self.distances.iter().map(|(name, d)| (name.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Report rows for every station other than the source.
    pub fn results(&self) -> Vec<PathResult> {
        self.iter()
            .filter(|(name, _)| *name != self.source)
            .map(|(name, distance)| PathResult {
                source: self.source.clone(),
                destination: name.to_string(),
                distance,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a DistanceMap {
    type Item = (&'a str, Weight);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, Weight)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
