use super::node::{Branch, Node};

/// U(s, a) = Q(s, a) + c * P(s, a) * sqrt(N(s)) / (1 + N(s, a))
fn branch_score(node: &Node, branch: &Branch, exploration: f32) -> f32 {
    branch.expected_value()
        + exploration * branch.prior * (node.total_visit_count as f32).sqrt()
            / (1.0 + branch.visit_count as f32)
}

impl Node {
    /// Index of the branch with the best upper confidence bound, or
    /// `None` on a terminal node.
    pub fn select_branch(&self, exploration: f32) -> Option<usize> {
        self.branches
            .iter()
            .enumerate()
            .map(|(index, branch)| (branch_score(self, branch, exploration), index))
            .max_by(|(a, _), (b, _)| a.partial_cmp(b).expect("tried comparing nan"))
            .map(|(_, index)| index)
    }
}
