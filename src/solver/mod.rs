use log::{debug, info};

use crate::error::SolveError;
use crate::hands::HandSet;
use crate::index::StateIndexer;
use crate::rules::Rules;
use crate::types::{Classification, State};

pub mod classify;
pub mod graph;
pub mod rank;

pub use graph::{build_graph, Graph};

/// Everything the pipeline computes for one ruleset, published as a single
/// immutable object once the whole solve completes. Re-solving with
/// different rules just produces a new `Solved`; nothing is shared or
/// partially invalidated.
#[derive(Debug, Clone)]
pub struct Solved {
    pub rules: Rules,
    pub hand_set: HandSet,
    pub graph: Graph,
    pub classes: Vec<Classification>,
    pub ranks: Vec<f64>,
}

impl Solved {
    #[inline]
    pub fn state_count(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn indexer(&self) -> StateIndexer<'_> {
        StateIndexer::new(&self.hand_set)
    }

    pub fn classification_of(&self, state: &State) -> Result<Classification, SolveError> {
        let i = self.indexer().state_to_index(state)?;
        Ok(self.classes[i])
    }

    pub fn rank_of(&self, state: &State) -> Result<f64, SolveError> {
        let i = self.indexer().state_to_index(state)?;
        Ok(self.ranks[i])
    }
}

/// Runs the full pipeline for one ruleset: hand-set generation, graph
/// build, retrograde classification, rank solve. Synchronous and
/// single-threaded; either the whole result is produced or an error is
/// returned with nothing published.
pub fn solve(rules: Rules) -> Result<Solved, SolveError> {
    let hand_set = HandSet::generate(rules.fingers)?;
    let n = hand_set.len() * hand_set.len();
    debug!(
        "solving fingers={} switching={} skipping={} ({} states)",
        rules.fingers, rules.switching, rules.skipping, n
    );

    let graph = build_graph(&hand_set, &rules)?;
    debug!(
        "graph built: {} edges",
        graph.children.iter().map(Vec::len).sum::<usize>()
    );

    let classes = classify::classify(&hand_set, &graph)?;
    let ranks = rank::compute_ranks(&graph, &classes)?;

    info!(
        "solved {} states (fingers={} switching={} skipping={})",
        n, rules.fingers, rules.switching, rules.skipping
    );
    Ok(Solved {
        rules,
        hand_set,
        graph,
        classes,
        ranks,
    })
}
