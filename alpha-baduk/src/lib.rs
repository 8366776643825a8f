pub mod search;

pub mod config;
pub mod encoder;
pub mod evaluator;
pub mod tensor;

pub mod agent;
pub mod experience;
pub mod policy;
pub mod self_play;
pub mod termination;
