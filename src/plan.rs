use {
  crate::{
    error::{Error, Result},
    geometry::P2
  },
  std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf}
  }
};

/// Extension stripped from the input path before the plan suffix is appended.
pub const INPUT_EXTENSION: &str = "png";
pub const PLAN_SUFFIX: &str = "_drilling_plan.txt";

/// Drilling points in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillingPlan {
  points: Vec<P2>
}

impl DrillingPlan {
  pub fn points(&self) -> &[P2] { &self.points }
  pub fn len(&self) -> usize { self.points.len() }
  pub fn is_empty(&self) -> bool { self.points.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &P2> {
    self.points.iter()
  }

  /// One `x y` line per point.
  pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
    for point in &self.points {
      writeln!(out, "{} {}", point.x, point.y)?;
    }
    out.flush()
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    File::create(path)
      .and_then(|file| self.write_to(BufWriter::new(file)))
      .map_err(|source| Error::Write { path: path.to_owned(), source })
  }
}

impl FromIterator<P2> for DrillingPlan {
  fn from_iter<I: IntoIterator<Item = P2>>(iter: I) -> Self {
    Self { points: iter.into_iter().collect() }
  }
}

impl From<Vec<P2>> for DrillingPlan {
  fn from(points: Vec<P2>) -> Self {
    Self { points }
  }
}

impl Display for DrillingPlan {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.points.iter()
      .try_for_each(|point| writeln!(f, "{} {}", point.x, point.y))
  }
}

/// `scan.png` -> `scan_drilling_plan.txt`. Other extensions are kept:
/// `scan.jpg` -> `scan.jpg_drilling_plan.txt`. Non UTF-8 paths are kept byte for byte.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
  let input = input.as_ref();
  let stem = if input.extension() == Some(OsStr::new(INPUT_EXTENSION)) {
    input.with_extension("")
  } else {
    input.to_owned()
  };
  let mut path = stem.into_os_string();
  path.push(PLAN_SUFFIX);
  path.into()
}
