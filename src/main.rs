use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use survivalsim_lib::app::{HeadlessApp, RunOptions};
use survivalsim_lib::model::config::AppConfig;
use survivalsim_lib::model::history::HistoryLogger;
use survivalsim_lib::model::metrics::init_logging;
use survivalsim_lib::model::world::World;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path (missing file means defaults)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to run (0 = until Ctrl-C)
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Override the founding bot count
    #[arg(long)]
    bots: Option<usize>,

    /// Override the initial food count
    #[arg(long)]
    food: Option<usize>,

    /// Frames per second, at most 240 (0 = unpaced, default = config target_fps)
    #[arg(long)]
    fps: Option<u64>,

    /// Append events as JSON lines to this file
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// Print the status line every N ticks (0 = never)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Stop as soon as the last bot dies
    #[arg(long)]
    stop_on_extinction: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(bots) = args.bots {
        config.world.initial_population = bots;
    }
    if let Some(food) = args.food {
        config.world.initial_food = food;
    }
    config.validate()?;

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let options = RunOptions {
        max_ticks: args.ticks,
        fps: args.fps.unwrap_or(config.target_fps),
        report_every: args.report_every,
        stop_on_extinction: args.stop_on_extinction,
    };
    options.validate()?;
    let logger = match &args.event_log {
        Some(path) => HistoryLogger::new_at(path)?,
        None => HistoryLogger::new_dummy(),
    };

    let world = World::new(config)?;
    println!("{}", world.status_line());

    let mut app = HeadlessApp::new(world, logger, options);
    app.shutdown.listen_for_ctrl_c();

    let stats = app.run().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
