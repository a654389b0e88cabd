use std::convert::TryFrom;

use log::debug;

use crate::{
    error::CubeError,
    space::SparseSpace,
    step::{par_step, step, Scan},
};

/// Runs a fixed-dimensionality automaton for some number of generations.
///
/// The simulator only ever holds the current generation. Every generation it
/// hands back is a fresh space, so callers may keep any of them around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    dimensions: usize,
    scan: Scan,
    parallel: bool,
}

impl Simulator {
    pub fn new(dimensions: usize) -> Self {
        Simulator {
            dimensions,
            scan: Scan::default(),
            parallel: false,
        }
    }

    pub fn with_scan(self, scan: Scan) -> Self {
        Simulator { scan, ..self }
    }

    /// Evaluate each generation on the rayon thread pool.
    pub fn with_parallel(self, parallel: bool) -> Self {
        Simulator { parallel, ..self }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn check_dimensions(&self, space: &SparseSpace) -> Result<(), CubeError> {
        match space.dimensions() == self.dimensions {
            true => Ok(()),
            false => Err(CubeError::InvalidDimensionality {
                expected: self.dimensions,
                found: space.dimensions(),
            }),
        }
    }

    fn advance(&self, space: &SparseSpace) -> SparseSpace {
        match self.parallel {
            true => par_step(space, self.scan),
            false => step(space, self.scan),
        }
    }

    /// Compute the single generation after `space`.
    pub fn step(&self, space: &SparseSpace) -> Result<SparseSpace, CubeError> {
        self.check_dimensions(space)?;
        Ok(self.advance(space))
    }

    /// Step `generations` times starting from `initial`, which is left
    /// untouched. Zero generations returns a copy of `initial`.
    pub fn run(&self, initial: &SparseSpace, generations: i64) -> Result<SparseSpace, CubeError> {
        let generations = usize::try_from(generations)
            .map_err(|_| CubeError::InvalidGenerationCount(generations))?;
        self.check_dimensions(initial)?;

        let mut space = initial.clone();

        for generation in 1..=generations {
            space = self.advance(&space);
            debug!(
                "{}D generation {}: {} active cells",
                self.dimensions,
                generation,
                space.count_active()
            );
        }

        Ok(space)
    }

    pub fn count_active(&self, space: &SparseSpace) -> usize {
        space.count_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // .#.
    // ..#
    // ###
    fn glider(dimensions: usize) -> SparseSpace {
        let cells = vec![[1isize, 0], [2, 1], [0, 2], [1, 2], [2, 2]];
        let mut space = SparseSpace::empty(dimensions).unwrap();

        for [x, y] in cells {
            let mut coord = vec![0; dimensions];
            coord[0] = x;
            coord[1] = y;
            space.set_active(&coord).unwrap();
        }

        space
    }

    #[test]
    fn worked_example_3d() {
        let initial = glider(3);
        assert_eq!(initial.count_active(), 5);

        let simulator = Simulator::new(3);
        let last = simulator.run(&initial, 6).unwrap();
        assert_eq!(simulator.count_active(&last), 112);
    }

    #[test]
    fn worked_example_4d() {
        let simulator = Simulator::new(4);
        let last = simulator.run(&glider(4), 6).unwrap();
        assert_eq!(simulator.count_active(&last), 848);
    }

    #[test]
    fn worked_example_every_configuration() {
        for &scan in &[Scan::BoundingBox, Scan::Frontier] {
            for &parallel in &[false, true] {
                let simulator = Simulator::new(3).with_scan(scan).with_parallel(parallel);
                let last = simulator.run(&glider(3), 6).unwrap();
                assert_eq!(last.count_active(), 112, "{:?}", simulator);
            }
        }
    }

    #[test]
    fn worked_example_first_generation() {
        let next = Simulator::new(3).step(&glider(3)).unwrap();
        assert_eq!(next.count_active(), 11);
    }

    #[test]
    fn zero_generations_is_identity() {
        let initial = glider(3);
        let last = Simulator::new(3).run(&initial, 0).unwrap();

        assert!(last.same_cells(&initial));
    }

    #[test]
    fn negative_generations_are_rejected() {
        let initial = glider(3);
        let result = Simulator::new(3).run(&initial, -1);

        assert_eq!(result.unwrap_err(), CubeError::InvalidGenerationCount(-1));
        assert!(initial.same_cells(&glider(3)));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let simulator = Simulator::new(4);
        assert_eq!(simulator.dimensions(), 4);

        assert_eq!(
            simulator.run(&glider(3), 6).unwrap_err(),
            CubeError::InvalidDimensionality {
                expected: 4,
                found: 3
            }
        );
        assert!(simulator.step(&glider(3)).is_err());
    }

    #[test]
    fn past_generations_are_unaffected() {
        let simulator = Simulator::new(3);
        let first = simulator.step(&glider(3)).unwrap();
        let snapshot = first.clone();

        let _later = simulator.run(&first, 3).unwrap();
        assert!(first.same_cells(&snapshot));
    }
}
