//! Hippodrome race CLI
//!
//! Run a horse race on the console, seeded for replay or live on the wall clock.

use clap::Parser;
use hippodrome_env::{RaceContext, SystemContext};
use hippodrome_sim::{announce_winner, render_standings, render_track};
use hippodrome_sim::{ConfigError, RaceConfig, RaceResult, RaceRunner, SimContext};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Hippodrome horse race
#[derive(Parser, Debug)]
#[command(name = "hippodrome")]
#[command(about = "Race a field of horses and announce the winner", long_about = None)]
struct Args {
    /// Seed for a replayable race (0 = live race on the wall clock)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of steps in the race
    #[arg(short = 'n', long, default_value = "100")]
    steps: u32,

    /// Pause between steps in milliseconds
    #[arg(short, long, default_value = "200")]
    tick_ms: u64,

    /// JSON roster file (defaults to the classic seven-horse field)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Do not draw the track after every step
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output of the final result
    #[arg(long)]
    json: bool,
}

fn build_config(args: &Args) -> Result<RaceConfig, ConfigError> {
    let mut config = RaceConfig::default()
        .with_seed(args.seed)
        .with_steps(args.steps)
        .with_tick(Duration::from_millis(args.tick_ms));

    if let Some(path) = &args.roster {
        info!("Loading roster from {}", path.display());
        config = config.with_roster(RaceConfig::load_roster(path)?);
    }

    Ok(config)
}

/// Runs the race and returns its result with the winner announcement.
fn race<C: RaceContext>(
    context: C,
    config: &RaceConfig,
    show_track: bool,
) -> Result<(RaceResult, String), ConfigError> {
    let mut runner = RaceRunner::from_config(context, config)?;
    let result = runner.run_with(|_, hippodrome| {
        if show_track {
            print!("{}", render_track(hippodrome));
        }
    });
    let announcement = announce_winner(runner.hippodrome().winner());
    Ok((result, announcement))
}

fn main() {
    let args = Args::parse();

    // Initialize logging (stderr, so --json stays parseable)
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let show_track = !args.quiet && !args.json;
    let outcome = if config.seed == 0 {
        race(SystemContext::new(), &config, show_track)
    } else {
        race(SimContext::new(config.seed), &config, show_track)
    };

    let (result, announcement) = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", announcement);
        println!();
        print!("{}", render_standings(&result.standings));
    }
}
