use {
  drilling_plan::{
    geometry::{Disk, P2},
    grid,
    plan,
    solver::GreedyDiskCover
  },
  anyhow::Result,
  image::{GrayImage, Luma},
  rand::SeedableRng,
  std::{
    fs,
    path::{Path, PathBuf},
    process::Command
  }
};

const BIN: &str = env!("CARGO_BIN_EXE_drilling-plan");

fn scratch_dir(name: &str) -> Result<PathBuf> {
  let dir = std::env::temp_dir()
    .join(format!("drilling_plan_{}_{}", name, std::process::id()));
  fs::create_dir_all(&dir)?;
  Ok(dir)
}

/// Two bright spots on a dark background.
fn write_scan(path: &Path) -> Result<()> {
  GrayImage::from_fn(120, 80, |x, y| {
    let p = P2::new(x, y);
    if Disk::new(P2::new(30, 40), 12).contains(p) || Disk::new(P2::new(90, 25), 10).contains(p) {
      Luma([255])
    } else {
      Luma([0])
    }
  }).save(path)?;
  Ok(())
}

fn parse_points(text: &str) -> Vec<(u32, u32)> {
  text.lines()
    .map(|line| {
      let mut it = line.split(' ').map(|v| v.parse::<u32>().unwrap());
      let point = (it.next().unwrap(), it.next().unwrap());
      assert!(it.next().is_none(), "{:?}", line);
      point
    })
    .collect()
}

#[test] fn load_select_save() -> Result<()> {
  let dir = scratch_dir("library")?;
  let input = dir.join("scan.png");
  write_scan(&input)?;

  let (grid, _) = grid::load(&input)?;
  assert_eq!((grid.width(), grid.height()), (120, 80));

  let mut rng = rand_pcg::Pcg64::seed_from_u64(17);
  let plan = GreedyDiskCover::new(10, 6, 700)?.select(&grid, &mut rng)?;
  let output = plan::output_path(&input);
  assert_eq!(output, dir.join("scan_drilling_plan.txt"));
  plan.save(&output)?;

  let points = parse_points(&fs::read_to_string(&output)?);
  assert_eq!(points.len(), 6);
  assert_eq!(points, plan.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
  Ok(())
}

#[test] fn cli_writes_plan_next_to_input() -> Result<()> {
  let dir = scratch_dir("cli")?;
  let input = dir.join("scan.png");
  let preview = dir.join("preview.png");
  write_scan(&input)?;

  let status = Command::new(BIN)
    .arg(&input)
    .args(["--radius", "8", "--drills", "5", "--trials", "300", "--seed", "3"])
    .arg("--preview").arg(&preview)
    .status()?;
  assert!(status.success());

  let first = fs::read_to_string(dir.join("scan_drilling_plan.txt"))?;
  assert_eq!(parse_points(&first).len(), 5);
  assert!(first.ends_with('\n'));
  assert!(preview.exists());

  // same seed, same plan, parallel scoring included
  let output = dir.join("again.txt");
  let status = Command::new(BIN)
    .arg(&input)
    .args(["-r", "8", "-n", "5", "-t", "300", "-s", "3", "--parallel", "-o"])
    .arg(&output)
    .status()?;
  assert!(status.success());
  assert_eq!(fs::read_to_string(&output)?, first);
  Ok(())
}

#[test] fn cli_failures_have_distinct_exit_codes() -> Result<()> {
  let dir = scratch_dir("failures")?;
  let input = dir.join("scan.png");
  write_scan(&input)?;

  let missing_arg = Command::new(BIN).output()?;
  assert_eq!(missing_arg.status.code(), Some(2));
  assert!(!missing_arg.stderr.is_empty());

  let undecodable = dir.join("garbage.png");
  fs::write(&undecodable, b"not an image")?;
  let status = Command::new(BIN).arg(&undecodable).status()?;
  assert_eq!(status.code(), Some(3));

  let status = Command::new(BIN).arg(dir.join("absent.png")).status()?;
  assert_eq!(status.code(), Some(3));

  let status = Command::new(BIN).arg(&input).args(["--radius", "0"]).status()?;
  assert_eq!(status.code(), Some(4));

  let status = Command::new(BIN).arg(&input).args(["--trials", "0"]).status()?;
  assert_eq!(status.code(), Some(4));

  let status = Command::new(BIN)
    .arg(&input)
    .args(["-n", "1"])
    .arg("-o").arg(dir.join("no_such_dir").join("plan.txt"))
    .status()?;
  assert_eq!(status.code(), Some(5));
  Ok(())
}

#[test] fn cli_reports_drawn_seed_by_default() -> Result<()> {
  let dir = scratch_dir("seed")?;
  let input = dir.join("scan.png");
  write_scan(&input)?;

  let first = dir.join("first.txt");
  let run = Command::new(BIN)
    .arg(&input)
    .args(["-n", "3", "-t", "200", "-o"]).arg(&first)
    .env_remove("RUST_LOG")
    .output()?;
  assert!(run.status.success());
  let stderr = String::from_utf8(run.stderr)?;
  let seed = stderr
    .split("using ")
    .nth(1)
    .and_then(|rest| rest.split_whitespace().next())
    .expect("seed is reported without -v")
    .to_string();

  let again = dir.join("again.txt");
  let status = Command::new(BIN)
    .arg(&input)
    .args(["-n", "3", "-t", "200", "-s", seed.as_str(), "-o"]).arg(&again)
    .status()?;
  assert!(status.success());
  assert_eq!(fs::read_to_string(&again)?, fs::read_to_string(&first)?);
  Ok(())
}

#[test] fn cli_accepts_radius_beyond_the_image() -> Result<()> {
  let dir = scratch_dir("huge_radius")?;
  let input = dir.join("scan.png");
  let output = dir.join("plan.txt");
  write_scan(&input)?;

  let status = Command::new(BIN)
    .arg(&input)
    .args(["-r", "4000000000", "-n", "1", "-t", "3", "-s", "1", "-o"]).arg(&output)
    .status()?;
  assert_eq!(status.code(), Some(0));
  assert_eq!(parse_points(&fs::read_to_string(&output)?).len(), 1);
  Ok(())
}
