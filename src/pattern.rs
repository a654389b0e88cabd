//! Loading the initial 2D pattern of active cells from puzzle input.

use anyhow::Context;
use gridly::prelude::*;
use gridly_grids::VecGrid;
use nom::{
    branch::alt,
    character::complete::{char, line_ending, multispace0, space0},
    multi::many1,
    sequence::{delimited, preceded},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{self, final_parser},
    multi::parse_separated_terminated,
    parser_ext::ParserExt,
};

use crate::{coordinate::origin, error::CubeError, space::SparseSpace};

fn parse_cell(input: &str) -> IResult<&str, bool, ErrorTree<&str>> {
    alt((char('#').value(true), char('.').value(false)))
        .context("cell")
        .parse(input)
}

fn parse_row(input: &str) -> IResult<&str, Vec<bool>, ErrorTree<&str>> {
    delimited(space0, many1(parse_cell), space0)
        .context("row")
        .parse(input)
}

fn parse_rows(input: &str) -> Result<Vec<Vec<bool>>, ErrorTree<final_parser::Location>> {
    final_parser(
        preceded(
            multispace0,
            parse_separated_terminated(
                parse_row,
                line_ending,
                multispace0.all_consuming(),
                Vec::new,
                |mut rows, row| {
                    rows.push(row);
                    rows
                },
            ),
        )
        .context("grid"),
    )(input)
}

/// A rectangular 2D pattern of cells, each active or inactive.
#[derive(Debug, Clone)]
pub struct Pattern {
    cells: VecGrid<bool>,
}

/// Parse a grid of `#` (active) and `.` (inactive) cells, one row per line.
/// Every row must be the same length.
pub fn parse_pattern(input: &str) -> anyhow::Result<Pattern> {
    let rows = parse_rows(input).context("Failed to parse grid")?;
    let cells = VecGrid::new_from_rows(rows).context("Grid rows have different lengths")?;

    Ok(Pattern { cells })
}

impl Pattern {
    /// The (row, column) position of every active cell.
    pub fn active_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells
            .rows()
            .iter()
            .flat_map(|row| row.iter_with_locations())
            .filter(|&(_, &active)| active)
            .map(|(location, _)| (location.row.0, location.column.0))
    }

    /// Embed the pattern in a new space: rows along axis 0, columns along axis
    /// 1, and 0 on every other axis.
    pub fn seed(&self, dimensions: usize) -> Result<SparseSpace, CubeError> {
        if dimensions < 2 {
            return Err(CubeError::GridNeedsTwoDimensions(dimensions));
        }

        let mut space = SparseSpace::empty(dimensions)?;
        let mut coord = origin(dimensions);

        for (row, column) in self.active_cells() {
            coord[0] = row;
            coord[1] = column;
            space.set_active(&coord)?;
        }

        Ok(space)
    }
}
