use std::collections::VecDeque;

use crate::error::SolveError;
use crate::hands::HandSet;
use crate::index::StateIndexer;
use crate::solver::graph::Graph;
use crate::types::Classification;

/// Retrograde fixpoint classification over the move graph.
///
/// Terminal states are labelled by inspection, then forced outcomes
/// propagate backwards through `parents` until the work queue empties.
/// A state is `Win` as soon as one child is `Loss`; `Loss` only when every
/// child is `Win`; anything else stays `Contested`. The all-zero draw state
/// is a fixed point and never enters the queue.
///
/// The queue runs to a true fixpoint with no iteration cap, and membership
/// is tracked with an O(1) pending marker per state.
pub fn classify(hands: &HandSet, graph: &Graph) -> Result<Vec<Classification>, SolveError> {
    let indexer = StateIndexer::new(hands);
    let n = indexer.state_count();
    debug_assert_eq!(n, graph.state_count());

    let mut classes = vec![Classification::Contested; n];
    if n > 0 {
        classes[0] = Classification::Draw;
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut pending = vec![false; n];

    // Terminal seeds: no children means one side has no live hand left.
    for i in 1..n {
        if !graph.children[i].is_empty() {
            continue;
        }
        let state = indexer.index_to_state(i)?;
        classes[i] = if state.player.sum() == 0 {
            Classification::Loss
        } else {
            Classification::Win
        };
        for &p in &graph.parents[i] {
            if !pending[p] {
                pending[p] = true;
                queue.push_back(p);
            }
        }
    }

    while let Some(i) = queue.pop_front() {
        pending[i] = false;

        let mut any_loss = false;
        let mut all_win = true;
        for &c in &graph.children[i] {
            match classes[c] {
                Classification::Loss => any_loss = true,
                Classification::Win => {}
                _ => all_win = false,
            }
        }
        let next = if any_loss {
            Classification::Win
        } else if all_win {
            Classification::Loss
        } else {
            Classification::Contested
        };

        if next != classes[i] {
            classes[i] = next;
            for &p in &graph.parents[i] {
                if !pending[p] {
                    pending[p] = true;
                    queue.push_back(p);
                }
            }
        }
    }

    Ok(classes)
}
