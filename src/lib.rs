//! Greedy placement of drilling points over the bright regions of a grayscale raster.
//!
//! A plan is built in [`solver`]: every step samples a number of random disk centers, keeps
//! the disk covering the most intensity, and zeroes it out on a private working copy of the
//! grid, so that the next step moves on to uncovered regions.
//!
//! # Basic usage
//! ```
//! # use {
//! #   drilling_plan::{
//! #     error::Result,
//! #     grid::IntensityGrid,
//! #     solver::GreedyDiskCover,
//! #   },
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! // a bright square in the middle of a dark 64x64 image
//! let grid = IntensityGrid::<u8>::from_fn(64, 64, |p| {
//!   if (24..40).contains(&p.x) && (24..40).contains(&p.y) { 255 } else { 0 }
//! });
//!
//! // radius 8, four points, 500 random candidates per point
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let plan = GreedyDiskCover::new(8, 4, 500)?
//!   .select(&grid, &mut rng)?;
//!
//! assert_eq!(plan.len(), 4);
//! print!("{}", plan); // "x y" per line
//! #   Ok(())
//! # }
//! ```
//! Steps can also be consumed lazily, together with the covered intensity:
//! ```
//! # use {
//! #   drilling_plan::{error::Result, grid::IntensityGrid, solver::GreedyDiskCover},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! # let grid = IntensityGrid::<u8>::from_fn(32, 32, |p| (p.x * 8) as u8);
//! # let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! GreedyDiskCover::new(4, 0, 100)?
//!   .iter(&grid, &mut rng)?
//!   .take_while(|selection| selection.score > 0)
//!   .take(10)
//!   .for_each(|selection| println!("{:?} -> {}", selection.center, selection.score));
//! #   Ok(())
//! # }
//! ```
//! If no candidate of a step covers any intensity, the step reports `(0, 0)` with a zero
//! score, so a plan always holds exactly the requested number of points.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod solver;
pub mod plan;
pub mod config;
pub mod util;
#[cfg(feature = "drawing")]
pub mod drawing;
