use crate::constants::Weight;
use crate::error::{Error, Result};
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::fmt;

/// Default integer type for station indices
pub type DefaultIdx = u32;

/// Station identifier. Only valid for the graph that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// A named stop of the transit network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Station { name: name.into() }
    }
}

/// One direction of a connection as stored in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeIndex, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

/// Neighbour of a station together with the distance to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection<'a> {
    pub station: &'a str,
    pub weight: Weight,
}

/// A station and all of its connections, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct StationConnections<'a> {
    pub station: &'a str,
    pub connections: Vec<Connection<'a>>,
}

/// Undirected weighted transit graph.
///
/// Every connection is stored twice, once in the adjacency list of each
/// endpoint, so the relation is symmetric at all times.
#[derive(Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    station_index: FxHashMap<String, NodeIndex>,
    edges_out: Vec<Vec<Edge>>,
    num_connections: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_stations: usize) -> Self {
        Self {
            stations: Vec::with_capacity(num_stations),
            station_index: FxHashMap::with_capacity_and_hasher(num_stations, Default::default()),
            edges_out: Vec::with_capacity(num_stations),
            num_connections: 0,
        }
    }

    /// Adds a station with no connections.
    ///
    /// If a station with the same name already exists its connections are
    /// dropped (on both ends) and the existing index is returned.
    ///
    /// **Panics** if the Graph is at the maximum number of stations for its
    /// index type
    pub fn add_station(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = name.into();

        if let Some(&station_idx) = self.station_index.get(&name) {
            warn!("Station {name} already exists, its connections are reset");
            self.clear_connections(station_idx);
            return station_idx;
        }

        let station_idx = NodeIndex::new(self.stations.len());

        assert!(
            NodeIndex::end() != station_idx,
            "Maximum number of stations for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        debug!("Adding station {name} as {}", station_idx.index());

        // Create new entry in adjacency list for new station
        self.edges_out.push(Vec::new());
        self.station_index.insert(name.clone(), station_idx);
        self.stations.push(Station::new(name));

        station_idx
    }

    /// Connects two existing stations in both directions.
    ///
    /// Nothing is modified if an endpoint is unknown, both endpoints are the
    /// same station or the distance is not a positive finite number.
    pub fn add_connection(&mut self, station_a: &str, station_b: &str, distance: Weight) -> Result<()> {
        let a = self.station_id(station_a)?;
        let b = self.station_id(station_b)?;

        if a == b {
            return Err(Error::SelfConnection {
                name: station_a.to_string(),
            });
        }
        if !(distance.is_finite() && distance > 0.0) {
            return Err(Error::InvalidWeight { weight: distance });
        }

        debug!("Connecting {station_a} <=> {station_b} ({distance})");

        self.edges_out[a.index()].push(Edge::new(b, distance));
        self.edges_out[b.index()].push(Edge::new(a, distance));
        self.num_connections += 1;

        Ok(())
    }

    fn clear_connections(&mut self, station_idx: NodeIndex) {
        let removed = std::mem::take(&mut self.edges_out[station_idx.index()]);
        for edge in &removed {
            self.edges_out[edge.target.index()].retain(|e| e.target != station_idx);
        }
        self.num_connections -= removed.len();
    }

    /// Looks up the index of a station by name.
    pub fn station_id(&self, name: &str) -> Result<NodeIndex> {
        self.station_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_station(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.station_index.contains_key(name)
    }

    pub fn station(&self, station_idx: NodeIndex) -> Option<&Station> {
        self.stations.get(station_idx.index())
    }

    /// Returns the station names in insertion order
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.name.as_str())
    }

    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected connections
    pub fn num_connections(&self) -> usize {
        self.num_connections
    }

    /// Returns the neighbours of `name` in the order they were connected.
    pub fn neighbors(&self, name: &str) -> Result<impl Iterator<Item = Connection<'_>> + '_> {
        let station_idx = self.station_id(name)?;
        Ok(self.connections_of(station_idx))
    }

    /// Returns the full adjacency relation, one entry per station.
    pub fn connections(&self) -> impl Iterator<Item = StationConnections<'_>> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(move |(i, station)| StationConnections {
                station: station.name.as_str(),
                connections: self.connections_of(NodeIndex::new(i)).collect(),
            })
    }

    fn connections_of(&self, station_idx: NodeIndex) -> impl Iterator<Item = Connection<'_>> + '_ {
        self.edges_out[station_idx.index()]
            .iter()
            .map(move |edge| Connection {
                station: self.stations[edge.target.index()].name.as_str(),
                weight: edge.weight,
            })
    }

    pub(crate) fn edges_out(&self, station_idx: NodeIndex) -> &[Edge] {
        &self.edges_out[station_idx.index()]
    }

    pub(crate) fn degree(&self, station_idx: NodeIndex) -> usize {
        self.edges_out[station_idx.index()].len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MetroMap:\t#Stations: {}, #Connections: {}",
            self.num_stations(),
            self.num_connections()
        )
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.connections().map(|c| (c.station, c.connections)))
            .finish()
    }
}
