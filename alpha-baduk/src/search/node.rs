use baduk::{GameState, Move};

/// Handle to a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// One move out of a node. Carries the evaluator's prior and the visit
/// statistics the selection formula reads. `child` stays `None` until
/// the branch is expanded.
#[derive(Clone, Debug)]
pub struct Branch {
    pub mov: Move,
    pub prior: f32,
    pub visit_count: u32,
    pub total_value: f32,
    pub child: Option<NodeId>,
}

impl Branch {
    pub fn new(mov: Move, prior: f32) -> Self {
        Branch {
            mov,
            prior,
            visit_count: 0,
            total_value: 0.0,
            child: None,
        }
    }

    /// Average backed-up value of this branch, zero while unvisited.
    pub fn expected_value(&self) -> f32 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_value / self.visit_count as f32
        }
    }
}

/// A search node: one position plus a branch per legal move.
///
/// `value` is from the perspective of the player to move in `state`.
/// Terminal positions keep no branches; their value is the true game
/// outcome instead of an evaluator's guess.
#[derive(Clone, Debug)]
pub struct Node {
    pub state: GameState,
    pub value: f32,
    pub parent: Option<NodeId>,
    pub total_visit_count: u32,
    pub branches: Vec<Branch>,
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        self.branches.is_empty()
    }
}

/// Arena of nodes for one search. The root is always the first node
/// added.
#[derive(Clone, Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        SearchTree::default()
    }

    pub fn root() -> NodeId {
        NodeId(0)
    }

    pub fn add_node(
        &mut self,
        state: GameState,
        value: f32,
        parent: Option<NodeId>,
        branches: Vec<Branch>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            value,
            parent,
            total_visit_count: 1,
            branches,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
