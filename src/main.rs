use {
  drilling_plan::{
    config::Config,
    drawing,
    error::Error,
    grid,
    plan,
    profile,
    solver::GreedyDiskCover,
    util::human_size
  },
  anyhow::Result,
  clap::{ArgAction, Parser},
  log::{error, info, warn, LevelFilter},
  std::{path::PathBuf, process::ExitCode}
};

#[derive(Parser, Debug)]
#[command(
  name = "drilling-plan",
  about = "Place drilling points over the bright regions of a grayscale image",
  version
)]
struct Cli {
  /// Input image, converted to grayscale
  input: PathBuf,

  /// Disk radius in pixels
  #[arg(short, long, default_value_t = Config::default().radius)]
  radius: u32,

  /// Number of drilling points
  #[arg(short = 'n', long, default_value_t = Config::default().drills)]
  drills: usize,

  /// Random candidates per drilling point
  #[arg(short, long, default_value_t = Config::default().trials)]
  trials: u32,

  /// Seed for a reproducible plan
  #[arg(short, long)]
  seed: Option<u64>,

  /// Output text file [default: <input without .png>_drilling_plan.txt]
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Also write a PNG preview of the selected disks
  #[arg(long)]
  preview: Option<PathBuf>,

  /// Score candidates on all cores
  #[arg(long)]
  parallel: bool,

  /// More logging, repeatable
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

impl Cli {
  fn config(&self) -> Config {
    Config {
      radius: self.radius,
      drills: self.drills,
      trials: self.trials,
      seed: self.seed,
      parallel: self.parallel
    }
  }
}

fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace
  };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let mut config = cli.config();
  let solver = GreedyDiskCover::try_from(config)?;
  let seed = config.resolve_seed();
  if cli.seed.is_none() {
    warn!("no --seed given, using {}", seed);
  }

  let (grid, image) = grid::load(&cli.input)?;
  info!(
    "{:?}: {}x{}, working grid {}",
    cli.input, grid.width(), grid.height(), human_size(grid.size_in_bytes())
  );
  info!(
    "radius = {}, drills = {}, trials = {}, seed = {}, parallel = {}",
    solver.radius(), solver.count(), solver.trials(), seed, config.parallel
  );

  let mut rng = config.rng();
  let plan = profile!("select", solver.select(&grid, &mut rng)?);

  let output = cli.output.clone()
    .unwrap_or_else(|| plan::output_path(&cli.input));
  plan.save(&output)?;
  info!("{} points written to {:?}", plan.len(), output);

  if let Some(preview) = &cli.preview {
    drawing::save_preview(&image, &plan, solver.radius(), preview)?;
    info!("preview written to {:?}", preview);
  }
  Ok(())
}

/// Exit code of the innermost crate error, `1` for anything else.
fn exit_code(err: &anyhow::Error) -> u8 {
  err.chain()
    .find_map(|cause| cause.downcast_ref::<Error>())
    .map_or(1, Error::exit_code)
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logger(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("{:#}", err);
      ExitCode::from(exit_code(&err))
    }
  }
}
