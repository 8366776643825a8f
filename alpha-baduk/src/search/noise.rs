use rand_distr::{Dirichlet, Distribution};

/// Blend Dirichlet noise into a prior vector in place. A ratio of zero
/// or less leaves the priors untouched.
pub fn apply_dirichlet(priors: &mut [f32], alpha: f32, ratio: f32) {
    if ratio <= 0.0 {
        return;
    }
    let dirichlet = Dirichlet::new(&vec![alpha; priors.len()]).unwrap();
    let samples = dirichlet.sample(&mut rand::thread_rng());
    for (prior, noise) in priors.iter_mut().zip(samples) {
        *prior = noise * ratio + *prior * (1.0 - ratio);
    }
}
