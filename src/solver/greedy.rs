use {
  crate::{
    error::{Error, Result},
    geometry::{Disk, GridSize, P2},
    grid::IntensityGrid,
    plan::DrillingPlan
  },
  super::Selection,
  log::{debug, trace},
  num_traits::{PrimInt, Unsigned},
  rand::Rng
};

/// Greedy randomized disk cover.
///
/// Every step samples `trials` random centers, keeps the disk covering the largest intensity
/// mass of the working grid, and zeroes it out so that later steps move to uncovered regions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GreedyDiskCover {
  radius: u32,
  count: usize,
  trials: u32,
  parallel: bool
}

impl GreedyDiskCover {
  pub fn new(radius: u32, count: usize, trials: u32) -> Result<Self> {
    if radius == 0 {
      return Err(Error::InvalidParameter { name: "radius", value: 0 });
    }
    if trials == 0 {
      return Err(Error::InvalidParameter { name: "trials", value: 0 });
    }
    Ok(Self { radius, count, trials, parallel: false })
  }

  /// Score the trials of each step on the rayon pool. Produces the same plan as the
  /// sequential path for the same random source.
  pub fn parallel(mut self, value: bool) -> Self {
    self.parallel = value;
    self
  }

  pub fn radius(&self) -> u32 { self.radius }
  pub fn count(&self) -> usize { self.count }
  pub fn trials(&self) -> u32 { self.trials }

  /// Unbounded iterator over greedy steps. It owns a private copy of `grid`, the input is
  /// never modified.
  pub fn iter<'r, T, R>(&self, grid: &IntensityGrid<T>, rng: &'r mut R) -> Result<CoverIter<'r, T, R>>
    where T: PrimInt + Unsigned + Send + Sync,
          R: Rng
  {
    grid.validate()?;
    Ok(CoverIter {
      working: grid.clone(),
      rng,
      radius: self.radius,
      trials: self.trials,
      parallel: self.parallel,
      candidates: Vec::with_capacity(self.trials as usize)
    })
  }

  /// Run `count` greedy steps. The plan always holds exactly `count` points.
  pub fn select<T, R>(&self, grid: &IntensityGrid<T>, rng: &mut R) -> Result<DrillingPlan>
    where T: PrimInt + Unsigned + Send + Sync,
          R: Rng
  {
    Ok(self.iter(grid, rng)?
      .take(self.count)
      .enumerate()
      .map(|(i, selection)| {
        if selection.score == 0 {
          debug!("#{}: no candidate covers any intensity, falling back to {:?}", i, selection.center);
        } else {
          debug!("#{}: {:?} covers {}", i, selection.center, selection.score);
        }
        selection.center
      })
      .collect())
  }
}

/// Uniform center on a non-empty grid. Both bounds are inclusive, `x` is drawn before `y`.
pub(crate) fn sample_center(rng: &mut impl Rng, size: GridSize) -> P2 {
  let x = rng.gen_range(0..=size.width - 1);
  let y = rng.gen_range(0..=size.height - 1);
  P2::new(x, y)
}

pub struct CoverIter<'r, T, R> {
  working: IntensityGrid<T>,
  rng: &'r mut R,
  radius: u32,
  trials: u32,
  parallel: bool,
  candidates: Vec<P2>
}

impl<'r, T, R> CoverIter<'r, T, R>
  where T: PrimInt + Unsigned + Send + Sync,
        R: Rng
{
  /// Working grid with every selected disk zeroed out so far.
  pub fn working_grid(&self) -> &IntensityGrid<T> {
    &self.working
  }

  fn sample_candidates(&mut self) {
    let size = self.working.size();
    let rng = &mut *self.rng;
    self.candidates.clear();
    self.candidates.extend((0..self.trials).map(|_| sample_center(&mut *rng, size)));
  }

  /// First candidate with the strictly highest positive score.
  fn best_sequential(&self) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for &center in &self.candidates {
      let score = self.working.coverage(&Disk::new(center, self.radius));
      if score > best.map_or(0, |b| b.score) {
        trace!("{:?} covers {}", center, score);
        best = Some(Selection { center, score });
      }
    }
    best
  }

  /// Same result as `best_sequential`, ties resolved by trial index.
  fn best_parallel(&self) -> Option<Selection> {
    use rayon::prelude::*;

    let working = &self.working;
    let radius = self.radius;
    self.candidates.par_iter()
      .enumerate()
      .map(|(i, &center)| (i, Selection {
        center,
        score: working.coverage(&Disk::new(center, radius))
      }))
      .filter(|(_, selection)| selection.score > 0)
      .reduce_with(|a, b| {
        if b.1.score > a.1.score || (b.1.score == a.1.score && b.0 < a.0) { b } else { a }
      })
      .map(|(_, selection)| selection)
  }
}

impl<'r, T, R> Iterator for CoverIter<'r, T, R>
  where T: PrimInt + Unsigned + Send + Sync,
        R: Rng
{
  type Item = Selection;

  fn next(&mut self) -> Option<Selection> {
    self.sample_candidates();
    let best = if self.parallel {
      self.best_parallel()
    } else {
      self.best_sequential()
    };
    // nothing to remove when every candidate scored zero
    Some(match best {
      Some(selection) => {
        self.working.clear(&Disk::new(selection.center, self.radius));
        selection
      }
      None => Selection::default()
    })
  }
}
