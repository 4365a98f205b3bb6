use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossgrid::candidates::ClueList;
use crossgrid::options::{DEFAULT_ATTEMPTS, DEFAULT_SCRATCH_SIZE, DEFAULT_TIME_BUDGET};
use crossgrid::{generate_layout, LayoutError, LayoutOptions, LayoutStatus};

/// Crossword layout generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Clue list file with one `ANSWER;clue` per line (`-` reads stdin)
    clue_list: String,

    /// Seed for the attempt shuffles (random if omitted; the chosen seed is logged)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of placement attempts
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Side length of the scratch grid
    #[arg(long, default_value_t = DEFAULT_SCRATCH_SIZE)]
    scratch_size: usize,

    /// Wall-clock budget in milliseconds (0 disables it)
    #[arg(short, long, default_value_t = DEFAULT_TIME_BUDGET * 1000)]
    time_budget_ms: u64,

    /// Print the layout as JSON instead of a grid and clue list
    #[arg(long)]
    json: bool,
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], printing any error (with code and help for
/// layout errors) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSGRID_DEBUG").is_ok();
    crossgrid::logging::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(layout_err) = e.downcast_ref::<LayoutError>() {
            eprintln!("Error: {}", layout_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Parse CLI arguments.
/// 2. Load the clue list from disk or stdin.
/// 3. Build the layout.
/// 4. Print it on stdout, diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let clue_list = if cli.clue_list == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        ClueList::parse_from_str(&text)
    } else {
        ClueList::load_from_path(&cli.clue_list)?
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");

    let budget = (cli.time_budget_ms > 0).then(|| Duration::from_millis(cli.time_budget_ms));
    let options = LayoutOptions::default()
        .with_seed(seed)
        .with_attempts(cli.attempts)
        .with_scratch_size(cli.scratch_size)
        .with_time_budget(budget);

    let t_layout = Instant::now();
    let layout = generate_layout(&clue_list.clues, &options)?;
    let layout_secs = t_layout.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print!("{layout}");
    }

    let stats = &layout.stats;
    match &stats.status {
        LayoutStatus::AllPlaced => eprintln!("✓ All words placed"),
        LayoutStatus::AttemptsExhausted => {
            eprintln!("⚠️  Left out {} word(s): {}", stats.unplaced.len(), stats.unplaced.join(", "));
        }
        LayoutStatus::TimedOut { elapsed } => {
            eprintln!(
                "⚠️  Timed out after {:.1}s; left out {} word(s): {}",
                elapsed.as_secs_f64(),
                stats.unplaced.len(),
                stats.unplaced.join(", ")
            );
        }
    }

    eprintln!(
        "Read {} clue(s); placed {} entr{} on a {}x{} grid in {:.3}s (attempt {} of {}, score {:.2}).",
        clue_list.clues.len(),
        layout.entries.len(),
        if layout.entries.len() == 1 { "y" } else { "ies" },
        layout.grid.height(),
        layout.grid.width(),
        layout_secs,
        stats.winning_attempt + 1,
        stats.attempts_run,
        stats.score.total
    );

    Ok(())
}
