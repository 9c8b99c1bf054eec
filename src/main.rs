//! Piramit - CLI
//!
//! Daily Turkish word pyramid with TUI and text modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use piramit::{
    commands::{
        load_stats, reveal_daily, reveal_endless, run_simple, run_simulation, share_for_date,
    },
    config::{GlobalArgs, Settings},
    engine::{
        EndlessPool,
        calendar::{day_number, parse_date_key, today},
        draw_endless_seed,
    },
    interactive::run_play,
    logging::{LogTarget, init_tracing},
    output::{print_reveal, print_simulation_result, print_stats},
};
use rand::Rng;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "piramit",
    about = "Daily Turkish word pyramid: six hidden words, one pool of 30 lives",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play endless puzzles from a pool: random, doga, gunluk, nesne
        #[arg(short, long)]
        endless: Option<EndlessPool>,
    },

    /// Simple text mode without the TUI
    Simple {
        /// Play endless puzzles from a pool: random, doga, gunluk, nesne
        #[arg(short, long)]
        endless: Option<EndlessPool>,
    },

    /// Print the share text of a stored daily result
    Share {
        /// Date of the result, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show aggregate statistics of daily games
    Stats,

    /// Show the words and letter mapping behind a puzzle
    Reveal {
        /// Daily puzzle number (default: today)
        #[arg(short, long, conflicts_with = "endless")]
        day: Option<i32>,

        /// Reveal an endless puzzle from this pool instead
        #[arg(short, long)]
        endless: Option<EndlessPool>,

        /// Endless puzzle seed (default: random)
        #[arg(short, long, requires = "endless")]
        seed: Option<i32>,
    },

    /// Play random games in parallel and report score statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed of the first game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Endless pool to draw puzzles from
        #[arg(short, long, default_value = "random")]
        endless: EndlessPool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli.global);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { endless: None });

    // The TUI owns the terminal, so its logs go to a file
    let target = match command {
        Commands::Play { .. } => LogTarget::File(settings.log_file()),
        _ => LogTarget::Stderr,
    };
    init_tracing(&settings.log_filter, &target)?;
    debug!(data_dir = %settings.data_dir.display(), "settings resolved");

    match command {
        Commands::Play { endless } => run_play(&settings, endless),
        Commands::Simple { endless } => run_simple(&settings, endless),
        Commands::Share { date } => run_share_command(&settings, date.as_deref()),
        Commands::Stats => run_stats_command(&settings),
        Commands::Reveal { day, endless, seed } => {
            run_reveal_command(&settings, day, endless, seed)
        }
        Commands::Simulate {
            count,
            seed,
            endless,
        } => {
            run_simulate_command(count, seed, endless);
            Ok(())
        }
    }
}

fn run_share_command(settings: &Settings, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(key) => parse_date_key(key)
            .ok_or_else(|| anyhow!("Invalid date '{key}', expected YYYY-MM-DD"))?,
        None => today(),
    };
    let store = settings.open_store()?;
    let tracker = settings.tracker();
    let text = share_for_date(&store, date, &tracker)?;
    println!("{text}");
    tracker.end_session();
    Ok(())
}

fn run_stats_command(settings: &Settings) -> Result<()> {
    let store = settings.open_store()?;
    let stats = load_stats(&store).context("reading statistics")?;
    print_stats(&stats);
    Ok(())
}

fn run_reveal_command(
    settings: &Settings,
    day: Option<i32>,
    endless: Option<EndlessPool>,
    seed: Option<i32>,
) -> Result<()> {
    let report = match endless {
        Some(pool) => {
            let seed = seed.unwrap_or_else(|| draw_endless_seed(&mut rand::rng()));
            reveal_endless(pool, seed)
        }
        None => {
            let catalog = settings
                .daily_catalog()
                .context("loading the daily catalog")?;
            reveal_daily(&catalog, day.unwrap_or_else(|| day_number(today())))
        }
    };
    print_reveal(&report);
    Ok(())
}

fn run_simulate_command(count: usize, seed: Option<u64>, pool: EndlessPool) {
    let start_seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {count} random games from pool '{pool}' (seed {start_seed})...");

    let result = run_simulation(count, start_seed, pool, true);
    print_simulation_result(&result);
}
