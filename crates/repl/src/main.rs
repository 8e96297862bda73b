//! Interactive shell around `metro_core`
mod cli;
mod format;

use log::{info, warn};
use metro_core::prelude::*;
use metro_core::statistics::{average_degree, busiest_station};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }

    fn info(&self) -> String {
        let mut out = format!(
            "{}\nAverage connections per station: {:.2}",
            self.graph,
            average_degree(&self.graph)
        );
        if let Some((station, degree)) = busiest_station(&self.graph) {
            out.push_str(&format!("\nBusiest station: {station} ({degree} connections)"));
        }
        out
    }

    fn add_station(&mut self, name: &str) -> String {
        if self.graph.contains(name) {
            warn!("Resetting station {name}");
            self.graph.add_station(name);
            format!("Station {name} already existed, its connections were removed")
        } else {
            self.graph.add_station(name);
            format!("Added station {name}")
        }
    }

    fn add_connection(&mut self, a: &str, b: &str, distance: Weight) -> String {
        match self.graph.add_connection(a, b, distance) {
            Ok(()) => format!("Connected {a} <=> {b} ({})", format::distance(distance)),
            Err(e) => format!("Invalid input: {e}"),
        }
    }

    fn shortest_paths(&self, source: &str) -> String {
        let mut dijkstra = Dijkstra::new(&self.graph);
        match dijkstra.shortest_paths(source) {
            Ok(dm) => format!("{}\n{}", format::distance_table(&dm), dijkstra.stats),
            Err(e) => format!("Invalid input: {e}"),
        }
    }

    fn path(&self, source: &str, target: &str) -> String {
        let mut dijkstra = Dijkstra::new(&self.graph);
        match dijkstra.path(source, target) {
            Ok(Some(sp)) => format::route(&sp),
            Ok(None) => format!("No path from {source} to {target}"),
            Err(e) => format!("Invalid input: {e}"),
        }
    }
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.info()))
}

fn list_stations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format::stations(&context.graph)))
}

fn show_map(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format::metro_map(&context.graph)))
}

fn add_station(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.add_station(arg(&args, "name"))))
}

fn add_connection(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let distance = args.get_one::<f64>("distance").copied().unwrap_or_default();
    Ok(Some(context.add_connection(
        arg(&args, "a"),
        arg(&args, "b"),
        distance,
    )))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.shortest_paths(arg(&args, "src"))))
}

fn run_path(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.path(arg(&args, "src"), arg(&args, "dst"))))
}

fn station_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).required(true).help(help)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::parse();

    // Init Graph
    let graph = if cli.empty {
        Graph::new()
    } else {
        default_network()?
    };
    info!("{graph}");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Metro")
        .with_version("v0.1.0")
        .with_description("Edit a metro map and query shortest distances. Quote names containing spaces.")
        .with_banner("Welcome to Metro")
        .with_history(cli.history, cli.history_size)
        .with_command(Command::new("info").about("Print map info"), info)
        .with_command(
            Command::new("stations").about("List all stations"),
            list_stations,
        )
        .with_command(
            Command::new("map").about("List all stations with their connections"),
            show_map,
        )
        .with_command(
            Command::new("add-station")
                .arg(station_arg("name", "Name of the new station"))
                .about("Add a station. Re-adding an existing station removes its connections"),
            add_station,
        )
        .with_command(
            Command::new("add-connection")
                .arg(station_arg("a", "First station"))
                .arg(station_arg("b", "Second station"))
                .arg(
                    Arg::new("distance")
                        .value_parser(value_parser!(f64))
                        .required(true)
                        .help("Distance in km"),
                )
                .about("Connect two existing stations in both directions"),
            add_connection,
        )
        .with_command(
            Command::new("dijkstra")
                .arg(station_arg("src", "Source station"))
                .about("Calculate the shortest distance to every station using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("path")
                .arg(station_arg("src", "Source station"))
                .arg(station_arg("dst", "Destination station"))
                .about("Calculate the shortest route between two stations"),
            run_path,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{e}"))
}
