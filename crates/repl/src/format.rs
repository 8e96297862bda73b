//! Text rendering of graph and query results for the terminal.
use metro_core::{
    constants::{Weight, UNREACHABLE},
    graph::Graph,
    search::shortest_path::{DistanceMap, ShortestPath},
};

pub fn distance(d: Weight) -> String {
    if d == UNREACHABLE {
        "unreachable".to_string()
    } else {
        format!("{:.1} KM", d)
    }
}

pub fn stations(g: &Graph) -> String {
    if g.num_stations() == 0 {
        return "No stations".to_string();
    }
    g.stations()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn metro_map(g: &Graph) -> String {
    if g.num_stations() == 0 {
        return "No stations".to_string();
    }
    g.connections()
        .enumerate()
        .map(|(i, c)| {
            let connections = c
                .connections
                .iter()
                .map(|n| format!("{} ({})", n.station, distance(n.weight)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}. {}: {}", i + 1, c.station, connections)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn distance_table(dm: &DistanceMap) -> String {
    let rows = dm.results();
    let width = rows
        .iter()
        .map(|r| r.destination.len())
        .chain(["Destination".len()])
        .max()
        .unwrap_or_default();

    let mut out = format!("From {}\n{:<width$}  Distance\n", dm.source(), "Destination");
    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            row.destination,
            distance(row.distance)
        ));
    }
    out.trim_end().to_string()
}

pub fn route(sp: &ShortestPath) -> String {
    format!("{} ({})", sp.stations.join(" -> "), distance(sp.weight))
}
