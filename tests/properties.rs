use prime_pyramid::graph::{triangular, Location};
use prime_pyramid::source::Values;
use prime_pyramid::{is_prime, topological_order, ReportPolicy, Solver, SolverConfig};
use proptest::prelude::*;

/// Splits a flat row-major sequence into rows.
fn rows_of(values: &[i64]) -> Vec<Vec<i64>> {
    let mut rows = Vec::new();
    let mut rest = values;
    let mut width = 1;
    while !rest.is_empty() {
        let (row, tail) = rest.split_at(width);
        rows.push(row.to_vec());
        rest = tail;
        width += 1;
    }
    rows
}

/// Best sum of a top-to-bottom path through non-prime cells starting at `(r, c)`.
fn brute_force(rows: &[Vec<i64>], r: usize, c: usize) -> Option<i64> {
    let value = rows[r][c];
    if is_prime(value) {
        return None;
    }
    if r + 1 == rows.len() {
        return Some(value);
    }
    let below = [brute_force(rows, r + 1, c), brute_force(rows, r + 1, c + 1)];
    below.into_iter().flatten().max().map(|best| best + value)
}

fn pyramid(max_rows: usize, cell: impl Strategy<Value = i64> + Clone) -> impl Strategy<Value = (usize, Vec<i64>)> {
    (1..=max_rows).prop_flat_map(move |rows| {
        (Just(rows), proptest::collection::vec(cell.clone(), triangular(rows)))
    })
}

fn non_prime_cell() -> impl Strategy<Value = i64> + Clone {
    let pool: Vec<i64> = (0..200).filter(|&n| !is_prime(n)).collect();
    proptest::sample::select(pool)
}

proptest! {
    #[test]
    fn all_non_prime_pyramids_match_brute_force((rows, values) in pyramid(7, non_prime_cell())) {
        let expected = brute_force(&rows_of(&values), 0, 0);
        let outcome = Solver::default().solve(rows, Values::new(values)).unwrap();
        prop_assert_eq!(outcome.maximum_sum, expected);
    }

    #[test]
    fn sink_only_policy_matches_brute_force((rows, values) in pyramid(7, 0i64..60)) {
        let expected = brute_force(&rows_of(&values), 0, 0);
        let solver = Solver::new(SolverConfig::default().with_report(ReportPolicy::StrictSink));
        let outcome = solver.solve(rows, Values::new(values)).unwrap();
        prop_assert_eq!(outcome.maximum_sum, expected);
    }

    #[test]
    fn chosen_paths_avoid_primes((rows, values) in pyramid(8, 0i64..60)) {
        let solver = Solver::default();
        let dag = solver.build(rows, Values::new(values)).unwrap();
        let outcome = solver.resolve(&dag).unwrap();

        if let Some(sum) = outcome.maximum_sum {
            prop_assert!(outcome.path.iter().all(|cell| !is_prime(cell.value)));
            prop_assert_eq!(outcome.path.iter().map(|cell| cell.value).sum::<i64>(), sum);

            // Consecutive cells are one row apart and adjacent.
            prop_assert_eq!(outcome.path[0].row, 1);
            for pair in outcome.path.windows(2) {
                prop_assert_eq!(pair[1].row, pair[0].row + 1);
                prop_assert!(pair[1].column == pair[0].column || pair[1].column == pair[0].column + 1);
            }
        }
    }

    #[test]
    fn prime_cells_are_never_entered((rows, values) in pyramid(8, 0i64..60)) {
        let dag = Solver::default().build(rows, Values::new(values)).unwrap();
        let shape = dag.shape();
        for edge in dag.edges() {
            if let Some(Location::Cell { .. }) = shape.locate(edge.to) {
                let value = dag.cell_value(edge.to).unwrap();
                prop_assert!(!is_prime(value), "edge enters prime cell {}", value);
            }
        }
    }

    #[test]
    fn resolution_is_idempotent((rows, values) in pyramid(8, 0i64..60)) {
        let solver = Solver::default();
        let dag = solver.build(rows, Values::new(values)).unwrap();
        prop_assert_eq!(solver.resolve(&dag).unwrap(), solver.resolve(&dag).unwrap());
    }

    #[test]
    fn orders_are_topological((rows, values) in pyramid(9, 0i64..60)) {
        let dag = Solver::default().build(rows, Values::new(values)).unwrap();
        let order = topological_order(&dag);
        prop_assert!(order.is_valid_for(&dag));
    }
}
