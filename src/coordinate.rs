//! Lattice coordinates and axis-aligned bounding boxes over them.

use std::ops::RangeInclusive;

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

/// A cell position in a D-dimensional integer lattice. Axes are identified
/// by index, so the same type serves every dimensionality; up to 4 axes are
/// stored inline.
pub type Coordinate = SmallVec<[isize; 4]>;

/// The values a coordinate component may take. The extremes of `isize` are
/// excluded so that every neighbor of a valid cell is representable.
pub const COMPONENT_RANGE: RangeInclusive<isize> = (isize::MIN + 1)..=(isize::MAX - 1);

/// True if every component of `coord` is within [`COMPONENT_RANGE`].
pub fn in_range(coord: &[isize]) -> bool {
    coord
        .iter()
        .all(|component| COMPONENT_RANGE.contains(component))
}

/// The all-zero coordinate with the given number of axes.
pub fn origin(dimensions: usize) -> Coordinate {
    smallvec![0; dimensions]
}

/// An inclusive, axis-aligned hyper-rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// The single-cell box at the origin.
    pub fn origin(dimensions: usize) -> Self {
        Self::single(&origin(dimensions))
    }

    pub fn single(coord: &[isize]) -> Self {
        Bounds {
            min: coord.iter().copied().collect(),
            max: coord.iter().copied().collect(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.min.len()
    }

    /// Grow the box, per axis, until it contains `coord`.
    pub fn include(&mut self, coord: &[isize]) {
        debug_assert_eq!(coord.len(), self.dimensions());

        self.min
            .iter_mut()
            .zip(self.max.iter_mut())
            .zip(coord)
            .for_each(|((min, max), &value)| {
                *min = (*min).min(value);
                *max = (*max).max(value);
            });
    }

    pub fn contains(&self, coord: &[isize]) -> bool {
        coord.len() == self.dimensions()
            && coord
                .iter()
                .zip(self.min.iter().zip(&self.max))
                .all(|(value, (min, max))| min <= value && value <= max)
    }

    /// A copy of this box, grown by `margin` on both ends of every axis, but
    /// never past the edges of [`COMPONENT_RANGE`].
    pub fn expanded(&self, margin: isize) -> Self {
        let (&lowest, &highest) = (COMPONENT_RANGE.start(), COMPONENT_RANGE.end());

        Bounds {
            min: self
                .min
                .iter()
                .map(|&min| min.saturating_sub(margin).max(lowest))
                .collect(),
            max: self
                .max
                .iter()
                .map(|&max| max.saturating_add(margin).min(highest))
                .collect(),
        }
    }

    /// The number of lattice cells inside the box, saturating at
    /// `usize::MAX`.
    pub fn volume(&self) -> usize {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(&min, &max)| (max.wrapping_sub(min) as usize).saturating_add(1))
            .fold(1, usize::saturating_mul)
    }

    /// Every coordinate inside the box, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.clone().into_cells()
    }

    /// Like [`cells`](Bounds::cells), but consumes the box.
    pub fn into_cells(self) -> impl Iterator<Item = Coordinate> {
        self.min
            .into_iter()
            .zip(self.max)
            .map(|(min, max)| min..=max)
            .multi_cartesian_product()
            .map(Coordinate::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn include_grows_each_axis_independently() {
        let mut bounds = Bounds::single(&[1, 1, 1]);
        bounds.include(&[-2, 3, 1]);
        bounds.include(&[0, 0, 5]);

        assert_eq!(bounds.min.as_slice(), &[-2, 0, 1]);
        assert_eq!(bounds.max.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn cells_cover_the_volume_exactly() {
        let bounds = Bounds::origin(3).expanded(1);
        let cells: HashSet<Coordinate> = bounds.cells().collect();

        assert_eq!(bounds.volume(), 27);
        assert_eq!(cells.len(), 27);
        assert!(cells.iter().all(|cell| bounds.contains(cell)));
        assert!(!bounds.contains(&[2, 0, 0]));
    }

    #[test]
    fn expanded_stops_at_component_range() {
        let bounds = Bounds {
            min: smallvec![isize::MIN + 1, -4],
            max: smallvec![isize::MAX - 1, 4],
        };
        let grown = bounds.expanded(1);

        assert_eq!(grown.min.as_slice(), &[isize::MIN + 1, -5]);
        assert_eq!(grown.max.as_slice(), &[isize::MAX - 1, 5]);
        assert_eq!(grown.volume(), usize::MAX);
    }

    #[test]
    fn in_range_rejects_extremes() {
        assert!(in_range(&[isize::MIN + 1, 0, isize::MAX - 1]));
        assert!(!in_range(&[isize::MIN, 0, 0]));
        assert!(!in_range(&[0, 0, isize::MAX]));
    }
}
