use std::fmt;

/// Input rejected before triangulation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// Two points share exactly the same coordinates.
    DuplicatePoint { first: usize, second: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePoint { first, second } => {
                write!(f, "points {first} and {second} are coincident")
            }
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for InvalidInput {}
