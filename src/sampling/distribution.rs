/// A value distribution over the unit interval.
///
/// Variants know their own mean so traders can form expectations without
/// sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Uniform over [0, 1).
    Uniform,
    /// Gaussian around the midpoint, clamped into [0, 1).
    Gauss { sigma: f64 },
}

impl Distribution {
    /// One sample in [0, 1).
    pub fn sample(&self, rng: &mut SmallRng) -> f64 {
        match self {
            Self::Uniform => rng.random::<f64>(),
            Self::Gauss { sigma } => Normal::new(0.5, *sigma)
                .expect("sigma is finite and non-negative")
                .sample(rng)
                .clamp(0.0, 1.0 - f64::EPSILON),
        }
    }

    /// Clamping is symmetric around the midpoint, so every variant stays
    /// centered.
    pub fn mean(&self) -> f64 {
        match self {
            Self::Uniform => 0.5,
            Self::Gauss { .. } => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_the_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(42);
        for distribution in [Distribution::Uniform, Distribution::Gauss { sigma: 0.3 }] {
            for _ in 0..1000 {
                let x = distribution.sample(&mut rng);
                assert!(x >= 0.0);
                assert!(x < 1.0);
            }
        }
    }

    #[test]
    fn pinned_gauss_is_the_midpoint() {
        let mut rng = SmallRng::seed_from_u64(42);
        let distribution = Distribution::Gauss { sigma: 0.0 };
        assert!(distribution.sample(&mut rng) == 0.5);
    }

    #[test]
    fn means_are_centered() {
        assert!(Distribution::Uniform.mean() == 0.5);
        assert!(Distribution::Gauss { sigma: 0.2 }.mean() == 0.5);
    }
}

use rand::Rng;
use rand::rngs::SmallRng;
use rand_distr::Distribution as _;
use rand_distr::Normal;
