use {
  crate::{
    error::{Error, Result},
    geometry::{Disk, GridSize, P2}
  },
  num_traits::{PrimInt, Unsigned}
};


/// Row-major 2D raster of non-negative intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid<T = u8> {
  data: Vec<T>,
  size: GridSize
}

impl<T: PrimInt + Unsigned> IntensityGrid<T> {
  /// All-zero grid.
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      data: vec![T::zero(); width as usize * height as usize],
      size: GridSize::new(width, height)
    }
  }

  pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
    let expected = width as usize * height as usize;
    if data.len() != expected {
      return Err(Error::GridSize { expected, actual: data.len() });
    }
    Ok(Self { data, size: GridSize::new(width, height) })
  }

  pub fn from_fn(width: u32, height: u32, f: impl Fn(P2) -> T) -> Self {
    let data = itertools::iproduct!(0..height, 0..width)
      .map(|(y, x)| f(P2::new(x, y)))
      .collect();
    Self { data, size: GridSize::new(width, height) }
  }

  pub fn size(&self) -> GridSize { self.size }
  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn as_slice(&self) -> &[T] { &self.data }

  /// Fails on an empty grid, which has nothing to sample from.
  pub fn validate(&self) -> Result<()> {
    if self.size.is_empty() {
      return Err(Error::InvalidDimension {
        width: self.size.width,
        height: self.size.height
      });
    }
    Ok(())
  }

  #[inline]
  fn offset(&self, pixel: P2) -> Option<usize> {
    (pixel.x < self.size.width && pixel.y < self.size.height)
      .then(|| pixel.y as usize * self.size.width as usize + pixel.x as usize)
  }

  pub fn get(&self, pixel: P2) -> Option<T> {
    self.offset(pixel).map(|i| self.data[i])
  }

  pub fn get_mut(&mut self, pixel: P2) -> Option<&mut T> {
    self.offset(pixel).map(move |i| &mut self.data[i])
  }

  /// Sum of intensities under `disk`.
  pub fn coverage(&self, disk: &Disk) -> u64 {
    let width = self.size.width as usize;
    disk.pixels(self.size)
      .map(|p| self.data[p.y as usize * width + p.x as usize]
        .to_u64()
        .unwrap_or(u64::MAX))
      .fold(0, u64::saturating_add)
  }

  /// Zero every cell under `disk`.
  pub fn clear(&mut self, disk: &Disk) {
    let width = self.size.width as usize;
    disk.pixels(self.size)
      .for_each(|p| self.data[p.y as usize * width + p.x as usize] = T::zero());
  }

  pub fn total(&self) -> u64 {
    self.data.iter()
      .map(|v| v.to_u64().unwrap_or(u64::MAX))
      .fold(0, u64::saturating_add)
  }

  pub fn is_zero(&self) -> bool {
    self.data.iter().all(|v| v.is_zero())
  }

  /// Heap size of the intensity buffer.
  pub fn size_in_bytes(&self) -> usize {
    self.data.len() * std::mem::size_of::<T>()
  }
}

#[cfg(feature = "drawing")]
impl From<&image::GrayImage> for IntensityGrid<u8> {
  fn from(image: &image::GrayImage) -> Self {
    let (width, height) = image.dimensions();
    Self {
      data: image.as_raw().clone(),
      size: GridSize::new(width, height)
    }
  }
}

/// Decode an image file into 8-bit luma intensities. Color images are converted.
#[cfg(feature = "drawing")]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<(IntensityGrid<u8>, image::GrayImage)> {
  let path = path.as_ref();
  let image = image::open(path)
    .map_err(|source| Error::Decode { path: path.to_owned(), source })?
    .to_luma8();
  Ok(((&image).into(), image))
}
