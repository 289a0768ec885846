use thiserror::Error;

/// Errors reported by [`Container`] and by traversal positions.
///
/// Every failing operation leaves its receiver untouched.
///
/// [`Container`]: crate::Container
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("item not found in container")]
    NotFound,
    #[error("cannot create {strategy} on an empty container")]
    InvalidState { strategy: &'static str },
    #[error("position {progress} is out of bounds for a traversal of length {len}")]
    OutOfBounds { progress: usize, len: usize },
    #[error("offset {offset} from position {progress} leaves a traversal of length {len}")]
    OffsetOutOfRange {
        progress: usize,
        offset: isize,
        len: usize,
    },
    #[error("range start {start} is after its end {end}")]
    ReversedRange { start: usize, end: usize },
    #[error("positions belong to different traversals")]
    ForeignPosition,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
