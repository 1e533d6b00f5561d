use {
  crate::{
    error::{Error, Result},
    geometry::{Disk, GridSize},
    plan::DrillingPlan
  },
  image::{GrayImage, Pixel, Rgba, RgbaImage},
  std::path::Path
};


pub const DISK_TINT: Rgba<u8> = Rgba([255, 96, 32, 255]);
pub const CENTER_MARK: Rgba<u8> = Rgba([32, 255, 64, 255]);

/// Preview of a plan: `image` as background, every drilled disk tinted, centers marked.
pub fn draw_plan(image: &GrayImage, plan: &DrillingPlan, radius: u32) -> RgbaImage {
  let (width, height) = image.dimensions();
  let size = GridSize::new(width, height);
  let mut canvas = RgbaImage::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgba());

  plan.iter().for_each(|&center| {
    Disk::new(center, radius)
      .pixels(size)
      .for_each(|pixel| {
        let pixel = canvas.get_pixel_mut(pixel.x, pixel.y);
        *pixel = pixel.map2(&DISK_TINT, |p1, p2| ((p1 as u16 + p2 as u16) / 2) as u8);
      });
    if center.x < width && center.y < height {
      canvas.put_pixel(center.x, center.y, CENTER_MARK);
    }
  });
  canvas
}

/// Render [`draw_plan`] and save it, format chosen by the extension of `path`.
pub fn save_preview(image: &GrayImage, plan: &DrillingPlan, radius: u32, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  draw_plan(image, plan, radius)
    .save(path)
    .map_err(|source| Error::Encode { path: path.to_owned(), source })
}
