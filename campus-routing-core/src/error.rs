use thiserror::Error;

/// Which end of a route request a snapping failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// No routable node within the snap radius of a query point. A legitimate
    /// outcome of a route request, not a fault.
    #[error("No path node found near the {0} point")]
    NoNearbyNode(Endpoint),
    /// The snapped endpoints are not connected in the routing graph.
    #[error("No path exists between the selected nodes")]
    NoPath,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is an expected routing outcome that should be
    /// reported to the requester rather than treated as a server fault.
    pub fn is_routing_outcome(&self) -> bool {
        matches!(self, Error::NoNearbyNode(_) | Error::NoPath)
    }
}
