//! Sample network of the Dehradun metro used when no other data is supplied.
use log::info;

use crate::{constants::Weight, error::Result, graph::Graph};

pub const STATIONS: [&str; 19] = [
    "CLOCK TOWER",
    "DILARAM CHOWK",
    "BB",
    "CENTERIO MALL",
    "KRISHAN NAGAR CHOWK",
    "RAJ BHAWAN",
    "ISBT",
    "BALLUPUR CHOWK",
    "ONGC",
    "VASANT VIHAR",
    "PANDITWADI",
    "IMA",
    "MB",
    "PREM NAGER",
    "PHULSANI",
    "NANDI KI CHOWKI",
    "PONDHA",
    "KANDOLI",
    "UPES",
];

/// Connections with their distance in km
pub const CONNECTIONS: [(&str, &str, Weight); 22] = [
    ("CLOCK TOWER", "BB", 10.0),
    ("CLOCK TOWER", "DILARAM CHOWK", 19.0),
    ("BB", "KRISHAN NAGAR CHOWK", 13.0),
    ("KRISHAN NAGAR CHOWK", "BALLUPUR CHOWK", 19.0),
    ("BALLUPUR CHOWK", "ISBT", 75.0),
    ("BALLUPUR CHOWK", "VASANT VIHAR", 25.0),
    ("VASANT VIHAR", "PANDITWADI", 22.0),
    ("PANDITWADI", "IMA", 18.0),
    ("IMA", "MB", 10.0),
    ("MB", "PREM NAGER", 5.0),
    ("IMA", "PREM NAGER", 23.0),
    ("PREM NAGER", "NANDI KI CHOWKI", 24.0),
    ("NANDI KI CHOWKI", "PHULSANI", 50.0),
    ("DILARAM CHOWK", "CENTERIO MALL", 28.0),
    ("CENTERIO MALL", "RAJ BHAWAN", 13.0),
    ("RAJ BHAWAN", "ONGC", 42.0),
    ("ONGC", "BALLUPUR CHOWK", 25.0),
    ("ONGC", "PHULSANI", 40.0),
    ("PHULSANI", "PONDHA", 20.0),
    ("NANDI KI CHOWKI", "PONDHA", 36.0),
    ("PONDHA", "KANDOLI", 30.0),
    ("KANDOLI", "UPES", 30.0),
];

/// Builds the sample network.
pub fn default_network() -> Result<Graph> {
    let mut g = Graph::with_capacity(STATIONS.len());
    load_default_network(&mut g)?;
    Ok(g)
}

/// Adds the sample stations and connections to an existing graph.
///
/// Stations already present in `g` are reset, see [`Graph::add_station`].
pub fn load_default_network(g: &mut Graph) -> Result<()> {
    for station in STATIONS {
        g.add_station(station);
    }
    for (a, b, distance) in CONNECTIONS {
        g.add_connection(a, b, distance)?;
    }
    info!("Loaded default network: {g}");
    Ok(())
}
