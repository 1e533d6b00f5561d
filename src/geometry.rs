//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y` grows
//! downwards, one unit per pixel.

use euclid::{Point2D, Box2D, Size2D};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<u32, PixelSpace>;
pub type GridSize = Size2D<u32, PixelSpace>;

/// Filled circle on the pixel lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disk {
  pub center: P2,
  pub radius: u32
}

impl Disk {
  pub fn new(center: P2, radius: u32) -> Self {
    Self { center, radius }
  }

  /// Euclidean distance to the center is at most `radius`.
  #[inline]
  pub fn contains(&self, pixel: P2) -> bool {
    // u128: a u32 radius squared plus two squared offsets does not fit u64
    let dx = pixel.x.abs_diff(self.center.x) as u128;
    let dy = pixel.y.abs_diff(self.center.y) as u128;
    let r = self.radius as u128;
    dx * dx + dy * dy <= r * r
  }

  /// Half-open bounding box, clipped to `[0, size)`.
  pub fn bounding_box(&self, size: GridSize) -> Box2D<u32, PixelSpace> {
    let r = self.radius;
    Box2D::new(
      Point2D::new(
        self.center.x.saturating_sub(r).min(size.width),
        self.center.y.saturating_sub(r).min(size.height)
      ),
      Point2D::new(
        self.center.x.saturating_add(r).saturating_add(1).min(size.width),
        self.center.y.saturating_add(r).saturating_add(1).min(size.height)
      )
    )
  }

  /// All pixels of a `size` grid covered by the disk, row by row.
  pub fn pixels(&self, size: GridSize) -> impl Iterator<Item = P2> {
    let disk = *self;
    let bounding_box = self.bounding_box(size);
    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| P2::new(x, y))
      .filter(move |pixel| disk.contains(*pixel))
  }
}
