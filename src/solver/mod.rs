pub mod greedy;
pub use greedy::{GreedyDiskCover, CoverIter};

use crate::geometry::P2;


/// Outcome of one greedy step: the chosen center and the intensity mass it removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
  pub center: P2,
  pub score: u64
}

impl Default for Selection {
  /// Reported when no candidate covers any intensity.
  fn default() -> Self {
    Self {
      center: P2::origin(),
      score: 0
    }
  }
}
