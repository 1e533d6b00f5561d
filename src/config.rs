use {
  crate::{
    error::{Error, Result},
    solver::GreedyDiskCover
  },
  rand::SeedableRng,
  rand_pcg::Pcg64
};

/// Run parameters of one drilling plan.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
  /// Disk radius in pixels.
  pub radius: u32,
  /// Number of drilling points to place.
  pub drills: usize,
  /// Random candidates evaluated per drilling point.
  pub trials: u32,
  /// Fixed seed for a reproducible plan, OS entropy otherwise.
  pub seed: Option<u64>,
  pub parallel: bool
}

impl Default for Config {
  fn default() -> Self {
    Self {
      radius: 25,
      drills: 64,
      trials: 700,
      seed: None,
      parallel: false
    }
  }
}

impl Config {
  pub fn solver(&self) -> Result<GreedyDiskCover> {
    Ok(GreedyDiskCover::new(self.radius, self.drills, self.trials)?
      .parallel(self.parallel))
  }

  pub fn rng(&self) -> Pcg64 {
    match self.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    }
  }

  /// Seed actually used: the configured one, or a fresh random one that is stored back so it
  /// can be reported and reused.
  pub fn resolve_seed(&mut self) -> u64 {
    *self.seed.get_or_insert_with(rand::random)
  }
}

impl TryFrom<Config> for GreedyDiskCover {
  type Error = Error;

  fn try_from(config: Config) -> Result<Self> {
    config.solver()
  }
}
