#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArtistError {
    #[error("expected a graph of type {expected}")]
    NotAGraph { expected: &'static str },

    #[error("graph plotting is supported only on Cairo backends (got {backend})")]
    UnsupportedBackend { backend: String },

    #[error("invalid bounding box ({left}, {top}, {width}, {height}): {reason}")]
    InvalidBoundingBox {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        reason: &'static str,
    },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
}

// Lets an already-built `BoundingBox` go through the same `TryInto` path as a tuple.
impl From<std::convert::Infallible> for ArtistError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
