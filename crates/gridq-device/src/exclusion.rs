//! Interaction exclusion within a moment.
//!
//! Simultaneous interactions on links that touch neighbouring sites interfere,
//! even when the two operations share no site. Two interactions `a` and `b`
//! conflict iff some site of `a` is adjacent to some site of `b`. Only
//! interactions take part; rotations, phases and measurements never conflict.

use gridq_ir::{GridQubit, Moment, Operation};
use tracing::debug;

use crate::error::{DeviceError, DeviceResult};

fn grid_sites(operation: &Operation) -> impl Iterator<Item = &GridQubit> {
    operation.qubits().iter().filter_map(|q| q.as_grid())
}

/// Whether `a` and `b` are interactions touching neighbouring sites. Symmetric.
pub fn conflicts(a: &Operation, b: &Operation) -> bool {
    if !a.is_interaction() || !b.is_interaction() {
        return false;
    }
    grid_sites(a).any(|p| grid_sites(b).any(|q| p.is_adjacent(q)))
}

/// Whether `operation` conflicts with at least one of `others`.
pub fn conflicts_with_any<'a>(
    operation: &Operation,
    others: impl IntoIterator<Item = &'a Operation>,
) -> bool {
    others.into_iter().any(|other| conflicts(operation, other))
}

/// Indices of the first conflicting pair in `moment`, scanning pairs
/// `(i, j)` with `i < j` in lexicographic order.
///
/// Quadratic in the number of interactions, which is at most half the
/// number of sites.
pub fn find_conflict(moment: &Moment) -> Option<(usize, usize)> {
    let interactions: Vec<(usize, &Operation)> = moment
        .iter()
        .enumerate()
        .filter(|(_, op)| op.is_interaction())
        .collect();

    interactions.iter().enumerate().find_map(|(n, &(i, a))| {
        interactions[n + 1..]
            .iter()
            .find(|&&(_, b)| conflicts(a, b))
            .map(|&(j, _)| (i, j))
    })
}

/// Fail with [`DeviceError::AdjacentInteraction`] on the first conflicting pair.
pub fn validate_moment(moment: &Moment) -> DeviceResult<()> {
    match find_conflict(moment) {
        Some((i, j)) => {
            let (first, second) = (&moment.operations[i], &moment.operations[j]);
            debug!("adjacent interactions {first} and {second}");
            Err(DeviceError::AdjacentInteraction {
                first: first.clone(),
                second: second.clone(),
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    fn cz(a: (i32, i32), b: (i32, i32)) -> Operation {
        Operation::cz(q(a.0, a.1), q(b.0, b.1)).unwrap()
    }

    #[test]
    fn test_parallel_links_conflict() {
        // (0,0)-(0,1) and (1,0)-(1,1) are disjoint but adjacent across rows.
        let a = cz((0, 0), (0, 1));
        let b = cz((1, 0), (1, 1));
        assert!(conflicts(&a, &b));
        assert!(conflicts(&b, &a));
    }

    #[test]
    fn test_distant_links_do_not_conflict() {
        let a = cz((0, 0), (0, 1));
        let b = cz((2, 0), (2, 1));
        let c = cz((0, 3), (0, 4));
        assert!(!conflicts(&a, &b));
        assert!(!conflicts(&a, &c));
        // Diagonal neighbours are not adjacent.
        let d = cz((1, 2), (1, 3));
        assert!(!conflicts(&a, &d));
    }

    #[test]
    fn test_non_interactions_never_conflict() {
        let a = cz((0, 0), (0, 1));
        let x = Operation::phase(0.5, q(1, 1)).unwrap();
        let m = Operation::measure("m", [q(1, 0), q(1, 1)]).unwrap();
        assert!(!conflicts(&a, &x));
        assert!(!conflicts(&x, &a));
        assert!(!conflicts(&a, &m));
        assert!(!conflicts_with_any(&a, [&x, &m]));
        assert!(conflicts_with_any(&a, [&x, &cz((1, 0), (1, 1))]));
    }

    #[test]
    fn test_partial_interactions_take_part() {
        let a = Operation::interaction(0.5, q(0, 0), q(0, 1)).unwrap();
        assert!(conflicts(&a, &cz((1, 1), (1, 2))));
    }

    #[test]
    fn test_validate_moment() {
        let bad = Moment::from_operations([cz((0, 0), (0, 1)), cz((1, 0), (1, 1))]).unwrap();
        assert!(matches!(
            validate_moment(&bad),
            Err(DeviceError::AdjacentInteraction { .. })
        ));

        let good = Moment::from_operations([
            cz((0, 0), (0, 1)),
            Operation::phase(0.5, q(1, 1)).unwrap(),
        ])
        .unwrap();
        assert!(validate_moment(&good).is_ok());
        assert!(validate_moment(&Moment::new()).is_ok());
    }

    #[test]
    fn test_first_conflict_reported() {
        let moment = Moment::from_operations([
            cz((0, 0), (0, 1)),
            Operation::phase(0.5, q(5, 5)).unwrap(),
            cz((3, 0), (3, 1)),
            cz((4, 0), (4, 1)),
            cz((1, 0), (1, 1)),
        ])
        .unwrap();
        // (0, 4) precedes (2, 3) lexicographically.
        assert_eq!(find_conflict(&moment), Some((0, 4)));

        match validate_moment(&moment) {
            Err(DeviceError::AdjacentInteraction { first, second }) => {
                assert_eq!(first, moment.operations[0]);
                assert_eq!(second, moment.operations[4]);
            }
            other => panic!("Expected AdjacentInteraction, got {other:?}"),
        }
    }

    fn arb_link() -> impl Strategy<Value = Operation> {
        (-5_i32..5, -5_i32..5, any::<bool>()).prop_map(|(r, c, horizontal)| {
            let b = if horizontal { q(r, c + 1) } else { q(r + 1, c) };
            Operation::cz(q(r, c), b).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_conflict_symmetric(a in arb_link(), b in arb_link()) {
            prop_assert_eq!(conflicts(&a, &b), conflicts(&b, &a));
        }
    }
}
