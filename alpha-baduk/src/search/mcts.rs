use baduk::{GameState, Move};
use log::debug;

use super::{
    node::{Branch, NodeId, SearchTree},
    noise::apply_dirichlet,
};
use crate::{
    agent::Agent,
    config::SearchConfig,
    encoder::Encoder,
    evaluator::{EvalError, Evaluator},
    experience::ExperienceCollector,
};

/// Statistics-guided tree search over an evaluator's priors.
///
/// Every call to [`search`](Self::search) builds a fresh tree: rounds
/// descend by upper confidence bound, expand one node with an
/// evaluator query, and back the value up with a sign flip per level.
/// The most visited root branch wins. With a collector attached, each
/// searched position is recorded together with its root visit counts.
pub struct ZeroAgent<E: Evaluator> {
    evaluator: E,
    encoder: Encoder,
    pub config: SearchConfig,
    pub collector: Option<ExperienceCollector>,
}

impl<E: Evaluator> ZeroAgent<E> {
    pub fn new(evaluator: E, board_size: u8) -> Self {
        ZeroAgent {
            evaluator,
            encoder: Encoder::new(board_size),
            config: SearchConfig::default(),
            collector: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_collector(&mut self, collector: ExperienceCollector) {
        self.collector = Some(collector);
    }

    pub fn take_collector(&mut self) -> Option<ExperienceCollector> {
        self.collector.take()
    }

    /// Search the position and pick the most visited move.
    pub fn search(&mut self, state: &GameState) -> Result<Move, EvalError> {
        assert!(!state.is_over(), "cannot search a finished game");

        let mut tree = SearchTree::new();
        let root = self.create_node(&mut tree, state.clone(), None)?;

        for _ in 0..self.config.rounds {
            // Walk down along the best branches to an unexpanded one.
            let mut id = root;
            let unexpanded = loop {
                let node = tree.node(id);
                match node.select_branch(self.config.exploration) {
                    None => break None,
                    Some(index) => match node.branches[index].child {
                        Some(child) => id = child,
                        None => break Some(index),
                    },
                }
            };

            match unexpanded {
                Some(index) => {
                    let node = tree.node(id);
                    let mov = node.branches[index].mov;
                    let next_state = node
                        .state
                        .play_move(mov)
                        .expect("branch moves are legal by construction");
                    let child = self.create_node(&mut tree, next_state, Some(id))?;
                    tree.node_mut(id).branches[index].child = Some(child);
                    let value = -tree.node(child).value;
                    backup(&mut tree, id, index, value);
                }
                None => {
                    // The descent ran into a terminal node. Report its
                    // concrete outcome to the path above once more.
                    let value = tree.node(id).value;
                    if let Some((parent, index)) = parent_branch(&tree, id) {
                        backup(&mut tree, parent, index, -value);
                    }
                }
            }
        }

        let root_node = tree.node(root);
        let best = root_node
            .branches
            .iter()
            .max_by_key(|branch| branch.visit_count)
            .expect("root of an unfinished game has at least one branch");

        if let Some(collector) = &mut self.collector {
            let mut visit_counts = vec![0; self.encoder.num_moves()];
            for branch in &root_node.branches {
                visit_counts[self.encoder.move_index(branch.mov)] = branch.visit_count;
            }
            collector.record_decision(self.encoder.encode(state), visit_counts);
        }

        debug!(
            "searched {} rounds over {} nodes, playing {}",
            self.config.rounds,
            tree.len(),
            best.mov
        );
        Ok(best.mov)
    }

    /// Add a node for `state` to the tree. Terminal positions get
    /// their true outcome as value and no branches; everything else is
    /// priced by the evaluator, with one branch per legal move. Noise
    /// lands on the root's priors only.
    fn create_node(
        &self,
        tree: &mut SearchTree,
        state: GameState,
        parent: Option<NodeId>,
    ) -> Result<NodeId, EvalError> {
        if state.is_over() {
            let value = if state.winner() == Some(state.next_player()) {
                1.0
            } else {
                -1.0
            };
            return Ok(tree.add_node(state, value, parent, Vec::new()));
        }

        let encoded = self.encoder.encode(&state);
        let evaluation = self.evaluator.evaluate(&encoded)?;
        let mut priors = evaluation.priors;
        assert_eq!(
            priors.len(),
            self.encoder.num_moves(),
            "evaluator must cover every move index"
        );
        if parent.is_none() {
            apply_dirichlet(&mut priors, self.config.dirichlet_noise, self.config.noise_ratio);
        }

        let branches = priors
            .iter()
            .enumerate()
            .filter_map(|(index, &prior)| {
                let mov = self.encoder.decode_move_index(index);
                state.is_valid_move(mov).then(|| Branch::new(mov, prior))
            })
            .collect();
        Ok(tree.add_node(state, evaluation.value, parent, branches))
    }
}

/// Add a visit along the path from `branch` of `id` up to the root,
/// negating the value at each level to switch perspective.
fn backup(tree: &mut SearchTree, id: NodeId, branch: usize, value: f32) {
    let mut id = id;
    let mut branch = branch;
    let mut value = value;
    loop {
        let node = tree.node_mut(id);
        node.total_visit_count += 1;
        node.branches[branch].visit_count += 1;
        node.branches[branch].total_value += value;
        value = -value;
        match parent_branch(tree, id) {
            Some((parent, index)) => {
                id = parent;
                branch = index;
            }
            None => break,
        }
    }
}

/// The parent of `id` and the index of the branch pointing at it.
fn parent_branch(tree: &SearchTree, id: NodeId) -> Option<(NodeId, usize)> {
    let parent = tree.node(id).parent?;
    let index = tree
        .node(parent)
        .branches
        .iter()
        .position(|branch| branch.child == Some(id))
        .expect("child nodes are linked from a parent branch");
    Some((parent, index))
}

impl<E: Evaluator> Agent for ZeroAgent<E> {
    fn select_move(&mut self, state: &GameState) -> Result<Move, EvalError> {
        self.search(state)
    }
}
