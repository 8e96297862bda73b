pub mod default_network;
#[cfg(test)]
pub mod test_graphs;
