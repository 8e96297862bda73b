use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive shell to edit a metro map and query shortest distances", long_about = None)]
pub struct Cli {
    /// Start with an empty map instead of the default network
    #[arg(long, default_value = "false")]
    pub empty: bool,

    /// File to store the command history in
    #[arg(long, value_name = "path", default_value = ".metro_history")]
    pub history: PathBuf,

    /// Number of commands kept in the history
    #[arg(long, value_name = "n", default_value = "100")]
    pub history_size: usize,
}

pub fn parse() -> Cli {
    Cli::parse()
}
