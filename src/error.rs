use {
  std::path::PathBuf,
  thiserror::Error
};

#[derive(Debug, Error)]
pub enum Error {
  /// Grid has no cells to sample from.
  #[error("invalid grid dimension: {width}x{height}, both sides must be at least 1")]
  InvalidDimension { width: u32, height: u32 },

  #[error("invalid parameter: {name} = {value}, must be positive")]
  InvalidParameter { name: &'static str, value: u64 },

  #[error("grid buffer holds {actual} values, expected {expected}")]
  GridSize { expected: usize, actual: usize },

  #[cfg(feature = "drawing")]
  #[error("unable to decode {path:?}")]
  Decode {
    path: PathBuf,
    #[source] source: image::ImageError
  },

  #[cfg(feature = "drawing")]
  #[error("unable to encode {path:?}")]
  Encode {
    path: PathBuf,
    #[source] source: image::ImageError
  },

  #[error("unable to write {path:?}")]
  Write {
    path: PathBuf,
    #[source] source: std::io::Error
  },
}

impl Error {
  /// Process exit code reported by the command line tool. `2` is taken by usage errors.
  pub fn exit_code(&self) -> u8 {
    match self {
      #[cfg(feature = "drawing")]
      Error::Decode { .. } => 3,
      Error::InvalidDimension { .. }
      | Error::InvalidParameter { .. }
      | Error::GridSize { .. } => 4,
      #[cfg(feature = "drawing")]
      Error::Encode { .. } => 5,
      Error::Write { .. } => 5,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
