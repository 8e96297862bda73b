use thiserror::Error;

use crate::constants::Weight;

/// Convenient result alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the graph store and the shortest path solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Raised when an operation references a station that was never added.
    #[error("unknown station: {name}")]
    UnknownStation { name: String },

    /// Raised when a connection distance is not a positive, finite number.
    #[error("invalid distance {weight}: must be a positive number")]
    InvalidWeight { weight: Weight },

    /// Raised when both endpoints of a connection are the same station.
    #[error("station {name} cannot be connected to itself")]
    SelfConnection { name: String },
}

impl Error {
    pub(crate) fn unknown_station(name: &str) -> Self {
        Error::UnknownStation {
            name: name.to_string(),
        }
    }
}
