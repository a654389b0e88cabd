//! Computing one generation from the previous one.
//!
//! A cell's next state depends only on itself and its neighbors in the
//! previous generation, which is never modified. The next generation is
//! always a brand new space.

use std::collections::HashSet;

use itertools::Either;
use log::trace;
use rayon::prelude::*;

use crate::{
    coordinate::{in_range, Coordinate},
    neighbors::Neighborhood,
    space::SparseSpace,
};

/// Which cells to evaluate when computing a generation. Both produce the
/// same result; they differ only in how many guaranteed-dead cells they
/// visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Every cell in the bounding box, grown by one along every axis.
    BoundingBox,

    /// Only active cells and cells adjacent to an active cell.
    Frontier,
}

impl Default for Scan {
    fn default() -> Self {
        Scan::BoundingBox
    }
}

/// The fixed life rule: an active cell survives with 2 or 3 active
/// neighbors, and an inactive cell becomes active with exactly 3.
pub fn next_state(active: bool, active_neighbors: usize) -> bool {
    match (active, active_neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

fn count_active_neighbors(
    space: &SparseSpace,
    neighborhood: &Neighborhood,
    cell: &[isize],
) -> usize {
    neighborhood
        .around(cell)
        .filter(|neighbor| space.is_active(neighbor))
        // The rule can't tell 4 from anything larger
        .take(4)
        .count()
}

fn lives(space: &SparseSpace, neighborhood: &Neighborhood, cell: &[isize]) -> bool {
    next_state(
        space.is_active(cell),
        count_active_neighbors(space, neighborhood, cell),
    )
}

/// The cells that might be active in the next generation. Every other cell
/// is inactive now and has no active neighbors, or lies outside
/// [`COMPONENT_RANGE`](crate::coordinate::COMPONENT_RANGE) and can't become
/// active.
fn candidates<'a>(
    space: &'a SparseSpace,
    neighborhood: &'a Neighborhood,
    scan: Scan,
) -> impl Iterator<Item = Coordinate> + 'a {
    match scan {
        Scan::BoundingBox => {
            let region = space.bounds().expanded(1);
            trace!("scanning {} cells of {:?}", region.volume(), region);

            Either::Left(region.into_cells())
        }
        Scan::Frontier => {
            let mut interesting: HashSet<Coordinate> = space.active_cells().cloned().collect();
            interesting.extend(
                space
                    .active_cells()
                    .flat_map(|cell| neighborhood.around(cell))
                    .filter(|cell| in_range(cell)),
            );
            trace!("scanning {} frontier cells", interesting.len());

            Either::Right(interesting.into_iter())
        }
    }
}

/// Compute the next generation on the current thread.
pub fn step(space: &SparseSpace, scan: Scan) -> SparseSpace {
    let neighborhood = Neighborhood::new(space.dimensions());

    let survivors = candidates(space, &neighborhood, scan)
        .filter(|cell| lives(space, &neighborhood, cell));

    collect_generation(space, survivors)
}

/// Compute the next generation, evaluating cells on the rayon thread pool.
/// Always agrees with [`step`].
pub fn par_step(space: &SparseSpace, scan: Scan) -> SparseSpace {
    let neighborhood = Neighborhood::new(space.dimensions());

    let candidates: Vec<Coordinate> = candidates(space, &neighborhood, scan).collect();

    let survivors: Vec<Coordinate> = candidates
        .into_par_iter()
        .filter(|cell| lives(space, &neighborhood, cell))
        .collect();

    collect_generation(space, survivors)
}

fn collect_generation(
    previous: &SparseSpace,
    survivors: impl IntoIterator<Item = Coordinate>,
) -> SparseSpace {
    let mut next = previous.empty_like();
    survivors.into_iter().for_each(|cell| next.activate(cell));
    next
}
