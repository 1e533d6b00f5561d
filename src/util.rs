/// Evaluate an expression and log how long it took.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    ::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable byte count, as in `1.50 MiB`.
pub fn human_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::BINARY)
    .unwrap_or_else(|e| e)
}
