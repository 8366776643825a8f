use std::mem;

use crate::tensor::Tensor;

/// One training example: an encoded position, the root visit counts
/// of the search run there, and the final reward from the perspective
/// of the player who moved.
#[derive(Clone, Debug)]
pub struct Example {
    pub state: Tensor,
    pub visit_counts: Vec<u32>,
    pub reward: f32,
}

/// Gathers one agent's decisions while it plays. Decisions accumulate
/// per episode and become [`Example`]s once the episode's reward is
/// known.
#[derive(Clone, Debug, Default)]
pub struct ExperienceCollector {
    states: Vec<Tensor>,
    visit_counts: Vec<Vec<u32>>,
    examples: Vec<Example>,
}

impl ExperienceCollector {
    pub fn new() -> Self {
        ExperienceCollector::default()
    }

    /// Drop anything recorded for an unfinished episode.
    pub fn begin_episode(&mut self) {
        self.states.clear();
        self.visit_counts.clear();
    }

    pub fn record_decision(&mut self, state: Tensor, visit_counts: Vec<u32>) {
        self.states.push(state);
        self.visit_counts.push(visit_counts);
    }

    /// Turn the episode's decisions into examples carrying `reward`.
    pub fn complete_episode(&mut self, reward: f32) {
        let states = mem::take(&mut self.states);
        let visit_counts = mem::take(&mut self.visit_counts);
        self.examples.extend(
            states
                .into_iter()
                .zip(visit_counts)
                .map(|(state, visit_counts)| Example {
                    state,
                    visit_counts,
                    reward,
                }),
        );
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }
}

/// A flat batch of completed examples, ready for a trainer.
#[derive(Clone, Debug, Default)]
pub struct ExperienceBuffer {
    pub examples: Vec<Example>,
}

/// Merge the examples of several collectors into one buffer.
pub fn combine_experience(collectors: Vec<ExperienceCollector>) -> ExperienceBuffer {
    ExperienceBuffer {
        examples: collectors
            .into_iter()
            .flat_map(|collector| collector.examples)
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decision() -> (Tensor, Vec<u32>) {
        (Tensor::zeros(1, 2, 2), vec![3, 1, 0, 0, 4])
    }

    #[test]
    fn completing_an_episode_rewards_every_decision() {
        let mut collector = ExperienceCollector::new();
        collector.begin_episode();
        let (state, visit_counts) = decision();
        collector.record_decision(state, visit_counts.clone());
        collector.record_decision(Tensor::zeros(1, 2, 2), vec![0, 0, 8, 0, 0]);
        collector.complete_episode(1.0);

        let examples = collector.examples();
        assert_eq!(examples.len(), 2);
        assert!(examples.iter().all(|example| example.reward == 1.0));
        assert_eq!(examples[0].visit_counts, visit_counts);
    }

    #[test]
    fn beginning_an_episode_discards_unfinished_work() {
        let mut collector = ExperienceCollector::new();
        let (state, visit_counts) = decision();
        collector.record_decision(state, visit_counts);

        collector.begin_episode();
        let (state, visit_counts) = decision();
        collector.record_decision(state, visit_counts);
        collector.complete_episode(-1.0);

        assert_eq!(collector.examples().len(), 1);
        assert_eq!(collector.examples()[0].reward, -1.0);
    }

    #[test]
    fn episodes_accumulate_across_completions() {
        let mut collector = ExperienceCollector::new();
        for reward in [1.0, -1.0] {
            collector.begin_episode();
            let (state, visit_counts) = decision();
            collector.record_decision(state, visit_counts);
            collector.complete_episode(reward);
        }
        assert_eq!(collector.examples().len(), 2);
        assert_eq!(collector.examples()[0].reward, 1.0);
        assert_eq!(collector.examples()[1].reward, -1.0);
    }

    #[test]
    fn combining_collectors_flattens_their_examples() {
        let mut first = ExperienceCollector::new();
        let (state, visit_counts) = decision();
        first.record_decision(state, visit_counts);
        first.complete_episode(1.0);

        let mut second = ExperienceCollector::new();
        for _ in 0..2 {
            let (state, visit_counts) = decision();
            second.record_decision(state, visit_counts);
        }
        second.complete_episode(-1.0);

        let buffer = combine_experience(vec![first, second]);
        assert_eq!(buffer.examples.len(), 3);
        assert_eq!(buffer.examples[0].reward, 1.0);
        assert_eq!(buffer.examples[2].reward, -1.0);
    }
}
