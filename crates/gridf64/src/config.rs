use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{GridError, Result};

/// Settings for populating grids and vectors with uniform random values.
///
/// Values are drawn from the half-open range `[low, high)`. With a `seed` the
/// sequence is reproducible; without one the thread-local generator is used.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RandomFill {
    pub low: f64,
    pub high: f64,
    pub seed: Option<u64>,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            seed: None,
        }
    }
}

impl RandomFill {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            seed: None,
        }
    }

    /// Sample from `[0, high)`.
    pub fn up_to(high: f64) -> Self {
        Self::new(0.0, high)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite()
            || !self.high.is_finite()
            || self.low > self.high
            || !(self.high - self.low).is_finite()
        {
            log::debug!("rejected random fill range [{}, {})", self.low, self.high);
            return Err(GridError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Draw `n` values according to this configuration.
    pub(crate) fn sample_n(&self, n: usize) -> Result<Vec<f64>> {
        self.validate()?;
        if self.low == self.high {
            log::warn!(
                "random fill range [{}, {}) is empty, every value will be {}",
                self.low,
                self.high,
                self.low
            );
            return Ok(vec![self.low; n]);
        }

        let dist = Uniform::new(self.low, self.high);
        let values = match self.seed {
            Some(seed) => draw(&mut StdRng::seed_from_u64(seed), &dist, n),
            None => draw(&mut thread_rng(), &dist, n),
        };
        Ok(values)
    }
}

fn draw<R: Rng>(rng: &mut R, dist: &Uniform<f64>, n: usize) -> Vec<f64> {
    (0..n).map(|_| dist.sample(rng)).collect()
}

impl FromStr for RandomFill {
    type Err = String;

    /// Parse `"low..high"` or `"low..high@seed"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (range, seed) = match s.split_once('@') {
            Some((range, seed)) => {
                let seed = seed
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| format!("Invalid seed '{}': {}", seed, e))?;
                (range, Some(seed))
            }
            None => (s, None),
        };

        let (low, high) = range
            .split_once("..")
            .ok_or_else(|| format!("Expected a range like '0..1', got '{}'", s))?;
        let low = low
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid lower bound '{}': {}", low, e))?;
        let high = high
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid upper bound '{}': {}", high, e))?;

        let fill = RandomFill { low, high, seed };
        fill.validate().map_err(|e| e.to_string())?;
        Ok(fill)
    }
}
