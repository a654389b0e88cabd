use std::{
    fs,
    io::{self, Read},
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use conway_cubes::{parse_pattern, Pattern, Scan, Simulator};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SolutionPartError {
    #[error("Failed to parse part: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Part; must be 1 or 2")]
    BadPart(u8),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionPart {
    part1,
    part2,
}

impl SolutionPart {
    /// Part 1 simulates cubes in 3 dimensions; part 2 adds a fourth.
    fn dimensions(self) -> usize {
        match self {
            SolutionPart::part1 => 3,
            SolutionPart::part2 => 4,
        }
    }
}

impl FromStr for SolutionPart {
    type Err = SolutionPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1 => Ok(SolutionPart::part1),
            2 => Ok(SolutionPart::part2),
            value => Err(SolutionPartError::BadPart(value)),
        }
    }
}

/// Lucretiel's Conway Cubes simulator, from the Advent of Code, 2020.
#[derive(Debug, StructOpt)]
struct Args {
    /// Part 1 or Part 2? If omitted, both parts are solved.
    #[structopt(short, long)]
    pub part: Option<SolutionPart>,

    /// Simulate this many dimensions instead of a puzzle part
    #[structopt(short, long, conflicts_with = "part")]
    pub dimensions: Option<usize>,

    /// How many generations to simulate
    #[structopt(short, long, default_value = "6", allow_hyphen_values = true)]
    pub generations: i64,

    /// Only evaluate cells near active cells, instead of the whole bounding
    /// box
    #[structopt(long)]
    pub frontier: bool,

    /// Evaluate each generation on a thread pool
    #[structopt(long)]
    pub parallel: bool,

    /// Log more details; may be repeated
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    /// The file from which to read input. If omitted, we read from stdin.
    pub input: Option<PathBuf>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn scan(&self) -> Scan {
        match self.frontier {
            true => Scan::Frontier,
            false => Scan::BoundingBox,
        }
    }

    /// The dimensionalities to solve, in output order
    fn all_dimensions(&self) -> Vec<usize> {
        match (self.dimensions, self.part) {
            (Some(dimensions), _) => vec![dimensions],
            (None, Some(part)) => vec![part.dimensions()],
            (None, None) => vec![
                SolutionPart::part1.dimensions(),
                SolutionPart::part2.dimensions(),
            ],
        }
    }
}

fn solve(args: &Args, pattern: &Pattern, dimensions: usize) -> anyhow::Result<usize> {
    let initial = pattern
        .seed(dimensions)
        .with_context(|| format!("Failed to build a {}D space", dimensions))?;

    let simulator = Simulator::new(dimensions)
        .with_scan(args.scan())
        .with_parallel(args.parallel);

    info!(
        "simulating {} generations in {} dimensions from {} active cells",
        args.generations,
        simulator.dimensions(),
        initial.count_active()
    );

    let last = simulator
        .run(&initial, args.generations)
        .with_context(|| format!("Failed to simulate {}D space", dimensions))?;

    Ok(simulator.count_active(&last))
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::from_args();

    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("Failed to install logger")?;

    let mut input = String::new();

    match args.input {
        Some(ref path) => {
            let mut file = fs::File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;

            file.read_to_string(&mut input)
                .with_context(|| format!("Failed to read from input file '{}'", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
        }
    }

    let pattern = parse_pattern(&input).context("Failed to load initial cubes")?;

    for dimensions in args.all_dimensions() {
        println!("{}", solve(&args, &pattern, dimensions)?);
    }

    Ok(())
}
