//! Sparse storage for an unbounded lattice of active cells.

use std::collections::HashSet;

use crate::{
    coordinate::{Bounds, Coordinate, COMPONENT_RANGE},
    error::CubeError,
};

/// A D-dimensional lattice where only active cells are stored. Every
/// coordinate that was never activated reads as inactive.
///
/// Alongside the cells the space tracks the tight bounding box of everything
/// ever activated. Cells are never deactivated; each generation is built as a
/// fresh space instead.
#[derive(Debug, Clone)]
pub struct SparseSpace {
    dimensions: usize,
    cells: HashSet<Coordinate>,
    bounds: Bounds,
}

impl SparseSpace {
    /// Create a space with no active cells. Its bounds are the origin.
    pub fn empty(dimensions: usize) -> Result<Self, CubeError> {
        match dimensions {
            0 => Err(CubeError::ZeroDimensions),
            dimensions => Ok(SparseSpace {
                dimensions,
                cells: HashSet::new(),
                bounds: Bounds::origin(dimensions),
            }),
        }
    }

    /// An empty space with the same dimensionality as this one.
    pub(crate) fn empty_like(&self) -> Self {
        SparseSpace {
            dimensions: self.dimensions,
            cells: HashSet::new(),
            bounds: Bounds::origin(self.dimensions),
        }
    }

    /// Create a space and activate every coordinate in `cells`.
    pub fn from_cells<I, C>(dimensions: usize, cells: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[isize]>,
    {
        let mut space = Self::empty(dimensions)?;
        cells
            .into_iter()
            .try_for_each(|cell| space.set_active(cell.as_ref()))?;
        Ok(space)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn is_active(&self, coord: &[isize]) -> bool {
        self.cells.contains(coord)
    }

    /// Mark a coordinate active, growing the bounds to include it. Activating
    /// an already active coordinate changes nothing. Components must lie in
    /// [`COMPONENT_RANGE`].
    pub fn set_active(&mut self, coord: &[isize]) -> Result<(), CubeError> {
        if coord.len() != self.dimensions {
            return Err(CubeError::InvalidDimensionality {
                expected: self.dimensions,
                found: coord.len(),
            });
        }

        if let Some(&component) = coord
            .iter()
            .find(|&&component| !COMPONENT_RANGE.contains(&component))
        {
            return Err(CubeError::CoordinateOutOfRange(component));
        }

        if !self.is_active(coord) {
            self.activate(Coordinate::from_slice(coord));
        }

        Ok(())
    }

    /// Insert a coordinate already known to have the right length.
    pub(crate) fn activate(&mut self, coord: Coordinate) {
        debug_assert_eq!(coord.len(), self.dimensions);

        // The origin bounds of an empty space are a placeholder, not an
        // observed cell, so the first activation replaces them.
        match self.cells.is_empty() {
            true => self.bounds = Bounds::single(&coord),
            false => self.bounds.include(&coord),
        }

        self.cells.insert(coord);
    }

    pub fn count_active(&self) -> usize {
        self.cells.len()
    }

    /// The per-axis minimum and maximum over every activated cell, or the
    /// origin for both if nothing was ever activated. Once a cell is active
    /// the box fits the cells tightly, so it need not contain the origin.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Every active cell, in no particular order.
    pub fn active_cells(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.cells.iter()
    }

    /// True if both spaces contain exactly the same active cells.
    pub fn same_cells(&self, other: &SparseSpace) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}
