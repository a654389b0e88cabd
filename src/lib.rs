//! A life-like cellular automaton over an unbounded integer lattice of any
//! dimensionality, as seen in the "Conway Cubes" puzzle of Advent of Code,
//! 2020.
//!
//! A [`SparseSpace`] stores the active cells of one generation. The
//! [`Simulator`] applies the fixed rule (survive on 2 or 3 active neighbors,
//! activate on exactly 3) to produce each following generation as a new
//! space.

pub mod coordinate;
mod error;
pub mod neighbors;
pub mod pattern;
mod simulator;
mod space;
pub mod step;

pub use coordinate::{Bounds, Coordinate};
pub use error::CubeError;
pub use neighbors::neighbor_offsets;
pub use pattern::{parse_pattern, Pattern};
pub use simulator::Simulator;
pub use space::SparseSpace;
pub use step::Scan;
