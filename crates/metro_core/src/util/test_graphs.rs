use crate::graph::Graph;

fn graph_with(stations: &[&str], connections: &[(&str, &str, f64)]) -> Graph {
    let mut g = Graph::with_capacity(stations.len());
    for s in stations {
        g.add_station(*s);
    }
    for (a, b, w) in connections {
        g.add_connection(a, b, *w).unwrap();
    }
    g
}

pub fn generate_simple_graph() -> Graph {
    //   A --10-- B
    //    \       |
    //     30     5
    //      \     |
    //       ---- C
    graph_with(
        &["A", "B", "C"],
        &[("A", "B", 10.0), ("B", "C", 5.0), ("A", "C", 30.0)],
    )
}

pub fn generate_disconnected_graph() -> Graph {
    // A --7-- B     C
    graph_with(&["A", "B", "C"], &[("A", "B", 7.0)])
}

/// Stations "0" .. "n-1", each connected to the next with distance 1
pub fn generate_chain_graph(n: usize) -> Graph {
    let mut g = Graph::with_capacity(n);
    for i in 0..n {
        g.add_station(i.to_string());
    }
    for i in 1..n {
        g.add_connection(&(i - 1).to_string(), &i.to_string(), 1.0)
            .unwrap();
    }
    g
}

pub fn generate_complex_graph() -> Graph {
    graph_with(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"],
        &[
            ("A", "B", 3.0),
            ("A", "C", 5.0),
            ("A", "K", 3.0),
            ("B", "D", 5.0),
            ("B", "C", 3.0),
            ("C", "D", 2.0),
            ("C", "J", 2.0),
            ("D", "J", 4.0),
            ("D", "E", 7.0),
            ("E", "J", 3.0),
            ("E", "F", 6.0),
            ("F", "H", 2.0),
            ("F", "G", 4.0),
            ("G", "H", 3.0),
            ("G", "I", 5.0),
            ("H", "I", 3.0),
            ("H", "J", 2.0),
            ("I", "J", 4.0),
            ("I", "K", 6.0),
            ("J", "K", 3.0),
        ],
    )
}
