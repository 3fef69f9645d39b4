use std::collections::VecDeque;

use log::debug;

use crate::error::SolveError;
use crate::solver::graph::Graph;
use crate::types::Classification;

/// Residual tolerance for the Gauss-Seidel sweep.
const TOLERANCE: f64 = 1e-12;
/// Sweep cap; hitting it without converging is a `SolveFailure`.
const MAX_SWEEPS: usize = 100_000;

/// Solves the rank vector: classified states are pinned to their
/// classification value, contested states satisfy
/// `k * rank[i] = Σ rank[succ]` over the raw successor list (multiplicity
/// preserved), i.e. each contested rank is the mean of its successors'.
///
/// Contested states with no path to any classified state form closed
/// components whose rows would leave the system singular; they are detected
/// by backward reachability and pinned to 0.5 instead. The remaining
/// subsystem is diagonally dominant with every row anchored through some
/// path, so the Gauss-Seidel iteration converges; non-convergence within
/// the sweep cap is reported as `SolveFailure` rather than returning
/// unconverged ranks.
pub fn compute_ranks(graph: &Graph, classes: &[Classification]) -> Result<Vec<f64>, SolveError> {
    let n = classes.len();
    debug_assert_eq!(n, graph.state_count());

    // Backward reachability from every classified state: contested states
    // never marked here cannot escape their component.
    let mut anchored = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    for (i, class) in classes.iter().enumerate() {
        if *class != Classification::Contested {
            anchored[i] = true;
            queue.push_back(i);
        }
    }
    while let Some(i) = queue.pop_front() {
        for &p in &graph.parents[i] {
            if !anchored[p] {
                anchored[p] = true;
                queue.push_back(p);
            }
        }
    }

    // Pinned values for classified states; 0.5 is both the starting guess
    // for solved rows and the final value for closed contested components.
    let mut ranks: Vec<f64> = classes.iter().map(|c| c.value().unwrap_or(0.5)).collect();

    let rows: Vec<usize> = (0..n)
        .filter(|&i| classes[i] == Classification::Contested && anchored[i])
        .collect();
    let pinned = n - rows.len();
    debug!("rank solve: {} contested rows, {} pinned states", rows.len(), pinned);

    for row in &rows {
        if graph.successors[*row].is_empty() {
            return Err(SolveError::SolveFailure(format!(
                "contested state {row} has no successors; system is singular"
            )));
        }
    }

    for sweep in 0..MAX_SWEEPS {
        let mut residual = 0.0f64;
        for &i in &rows {
            let succ = &graph.successors[i];
            let sum: f64 = succ.iter().map(|&c| ranks[c]).sum();
            let next = sum / succ.len() as f64;
            let delta = (next - ranks[i]).abs();
            if delta > residual {
                residual = delta;
            }
            ranks[i] = next;
        }
        if residual <= TOLERANCE {
            debug!("rank solve converged after {} sweeps", sweep + 1);
            return Ok(ranks);
        }
    }

    Err(SolveError::SolveFailure(format!(
        "no convergence within {MAX_SWEEPS} sweeps"
    )))
}
