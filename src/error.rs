use thiserror::Error;

/// Errors raised by the cube engine. All of these are contract violations by
/// the caller; none of them are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubeError {
    #[error("coordinate has {found} components, but the space is {expected}-dimensional")]
    InvalidDimensionality { expected: usize, found: usize },

    #[error("coordinate component {0} is at the edge of the integer range")]
    CoordinateOutOfRange(isize),

    #[error("{0} is not a valid generation count; must be non-negative")]
    InvalidGenerationCount(i64),

    #[error("a space must have at least one dimension")]
    ZeroDimensions,

    #[error("can't embed a 2D grid in a {0}-dimensional space")]
    GridNeedsTwoDimensions(usize),
}
