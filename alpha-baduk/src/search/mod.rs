mod mcts;
mod node;
mod noise;
mod ucb;

pub use mcts::ZeroAgent;
pub use node::{Branch, Node, NodeId, SearchTree};
