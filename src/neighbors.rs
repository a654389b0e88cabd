//! Moore neighborhoods in any number of dimensions.

use std::iter;

use itertools::Itertools;

use crate::coordinate::Coordinate;

/// Every offset with components in `{-1, 0, 1}` except the all-zero one.
/// There are `3^dimensions - 1` of them, in no particular order.
pub fn neighbor_offsets(dimensions: usize) -> impl Iterator<Item = Coordinate> {
    iter::repeat(-1..=1)
        .take(dimensions)
        .multi_cartesian_product()
        .filter(|offset| offset.iter().any(|&component| component != 0))
        .map(Coordinate::from_vec)
}

/// The neighbor offsets for one dimensionality, computed once and reused for
/// every cell of a generation.
#[derive(Debug, Clone)]
pub(crate) struct Neighborhood {
    offsets: Vec<Coordinate>,
}

impl Neighborhood {
    pub fn new(dimensions: usize) -> Self {
        Neighborhood {
            offsets: neighbor_offsets(dimensions).collect(),
        }
    }

    /// The coordinates of every neighbor of `center`, whose components must
    /// all be strictly inside the range of `isize`.
    pub fn around<'a>(&'a self, center: &'a [isize]) -> impl Iterator<Item = Coordinate> + 'a {
        self.offsets.iter().map(move |offset| {
            center
                .iter()
                .zip(offset)
                .map(|(&base, &delta)| base + delta)
                .collect()
        })
    }
}
