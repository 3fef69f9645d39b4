use std::hash::BuildHasherDefault;

use hashbrown::HashSet as HbHashSet;

use crate::error::SolveError;
use crate::hands::HandSet;
use crate::index::StateIndexer;
use crate::moves::successors;
use crate::rules::Rules;

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastSet = HbHashSet<usize, FastHasher>;

/// The full move graph over the dense state index space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Raw one-move successor indices, multiplicity preserved, in move
    /// generation order. Empty for terminal states.
    pub successors: Vec<Vec<usize>>,
    /// Deduplicated successors, sorted ascending.
    pub children: Vec<Vec<usize>>,
    /// Exact inverse of `children`: `j ∈ children[i] ⟺ i ∈ parents[j]`.
    pub parents: Vec<Vec<usize>>,
}

impl Graph {
    #[inline]
    pub fn state_count(&self) -> usize {
        self.children.len()
    }

    /// Verifies the children/parents inverse invariant. Quadratic in edge
    /// count; meant for construction-time checks and tests.
    pub fn is_symmetric(&self) -> bool {
        let n = self.state_count();
        if self.parents.len() != n || self.successors.len() != n {
            return false;
        }
        for (i, kids) in self.children.iter().enumerate() {
            for &j in kids {
                if j >= n || !self.parents[j].contains(&i) {
                    return false;
                }
            }
        }
        for (j, folks) in self.parents.iter().enumerate() {
            for &i in folks {
                if i >= n || !self.children[i].contains(&j) {
                    return false;
                }
            }
        }
        true
    }
}

/// Builds forward and backward adjacency by running the move generator over
/// every index. `children`/`parents` entries are unique per pair `(i, j)`;
/// the raw successor lists keep duplicates for the rank solve.
pub fn build_graph(hands: &HandSet, rules: &Rules) -> Result<Graph, SolveError> {
    let indexer = StateIndexer::new(hands);
    let n = indexer.state_count();

    let mut raw: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut parents: Vec<Vec<usize>> = vec![Vec::new(); n];

    let mut seen: FastSet = FastSet::default();
    for i in 0..n {
        let state = indexer.index_to_state(i)?;
        let succ_states = successors(&state, hands, rules);

        let mut succ = Vec::with_capacity(succ_states.len());
        for s in &succ_states {
            succ.push(indexer.state_to_index(s)?);
        }

        seen.clear();
        let mut kids: Vec<usize> = Vec::with_capacity(succ.len());
        for &c in &succ {
            if seen.insert(c) {
                kids.push(c);
            }
        }
        kids.sort_unstable();
        for &c in &kids {
            // i ascends, so parent lists come out sorted as well
            parents[c].push(i);
        }
        children[i] = kids;
        raw[i] = succ;
    }

    let graph = Graph {
        successors: raw,
        children,
        parents,
    };
    // Debug builds re-verify the inverse invariant; release builds rely on
    // the construction above (parents are only ever written from a child
    // insertion) plus the symmetry tests in the suite.
    debug_assert!(graph.is_symmetric());
    Ok(graph)
}
