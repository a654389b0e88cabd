use conway_cubes::{parse_pattern, CubeError, Scan, Simulator};

const EXAMPLE: &str = "
.#.
..#
###
";

fn boot(dimensions: usize, scan: Scan, parallel: bool) -> usize {
    let pattern = parse_pattern(EXAMPLE).expect("Error parsing example");
    let initial = pattern.seed(dimensions).expect("Error seeding space");
    assert_eq!(initial.count_active(), 5);

    let simulator = Simulator::new(dimensions)
        .with_scan(scan)
        .with_parallel(parallel);
    let last = simulator.run(&initial, 6).expect("Error running simulation");

    simulator.count_active(&last)
}

#[test]
fn part1_example() {
    assert_eq!(boot(3, Scan::BoundingBox, false), 112);
}

#[test]
fn part2_example() {
    assert_eq!(boot(4, Scan::BoundingBox, false), 848);
}

#[test]
fn part2_example_frontier_parallel() {
    assert_eq!(boot(4, Scan::Frontier, true), 848);
}

#[test]
fn seeded_space_rejects_other_dimensionality() {
    let pattern = parse_pattern(EXAMPLE).expect("Error parsing example");
    let initial = pattern.seed(3).expect("Error seeding space");

    assert_eq!(
        Simulator::new(4).run(&initial, 1).unwrap_err(),
        CubeError::InvalidDimensionality {
            expected: 4,
            found: 3
        }
    );
}
