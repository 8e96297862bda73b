use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} stations settled in {:?}",
            self.nodes_settled,
            self.duration.unwrap_or_default()
        )
    }
}

/// Average number of connections per station. Zero for an empty graph.
pub fn average_degree(g: &Graph) -> f64 {
    if g.num_stations() == 0 {
        return 0.0;
    }
    let sum: usize = (0..g.num_stations())
        .map(|i| g.degree(NodeIndex::new(i)))
        .sum();
    sum as f64 / g.num_stations() as f64
}

/// Station with the most connections, if any.
pub fn busiest_station(g: &Graph) -> Option<(&str, usize)> {
    g.connections()
        .map(|c| (c.station, c.connections.len()))
        .max_by_key(|(_, degree)| *degree)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        search::dijkstra::Dijkstra,
        statistics::{average_degree, busiest_station},
        util::test_graphs::{generate_chain_graph, generate_simple_graph},
    };

    use super::SearchStats;

    #[test]
    fn stats_work() {
        let g = generate_chain_graph(10);

        let mut d = Dijkstra::new(&g);
        d.shortest_paths("0").unwrap();

        assert!(d.stats.duration.is_some());
        assert_eq!(d.stats.nodes_settled, 10);
    }

    #[test]
    fn stats_display_without_run() {
        let stats = SearchStats::default();
        assert_eq!(stats.to_string(), "Stats: 0 stations settled in 0ns");
    }

    #[test]
    fn degree_statistics() {
        let g = generate_simple_graph();

        // A-B, B-C, A-C
        assert_abs_diff_eq!(average_degree(&g), 2.0);
        assert_eq!(busiest_station(&g).map(|(_, d)| d), Some(2));

        let g = generate_chain_graph(3);
        assert_abs_diff_eq!(average_degree(&g), 4.0 / 3.0);
        assert_eq!(busiest_station(&g), Some(("1", 2)));
    }

    #[test]
    fn degree_statistics_on_empty_graph() {
        let g = crate::graph::Graph::new();
        assert_abs_diff_eq!(average_degree(&g), 0.0);
        assert_eq!(busiest_station(&g), None);
    }
}
