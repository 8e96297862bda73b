//! Crate to store a transit network and compute shortest distances on it.
//!
//! # Basic usage
//! ```
//! use metro_core::prelude::*;
//!
//! let mut g = Graph::new();
//! g.add_station("A");
//! g.add_station("B");
//! g.add_station("C");
//!
//! g.add_connection("A", "B", 10.0)?;
//! g.add_connection("B", "C", 5.0)?;
//! g.add_connection("A", "C", 30.0)?;
//!
//! let mut dijkstra = Dijkstra::new(&g);
//! let distances = dijkstra.shortest_paths("A")?;
//!
//! assert_eq!(distances.get("C"), Some(15.0));
//! # Ok::<(), metro_core::error::Error>(())
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
