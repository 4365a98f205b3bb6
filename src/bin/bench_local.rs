//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the layout engine on a few fixed word sets.
//! - Runs each case several times with a fixed seed and reports the median.
//! - Prints how many words each case placed, so quality regressions show up
//!   next to speed regressions.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - More attempts per layout:       `cargo run --bin bench_local --release -- -a 10`
//! - Print the winning grids:        `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - Use the same machine and `--release` for comparable numbers.
//! - Cases live in `get_cases()` below.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use crossgrid::{generate_layout, ClueInput, LayoutOptions};
use std::hint::black_box;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Placement attempts per layout
    #[arg(short = 'a', long, default_value_t = crossgrid::options::DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Seed shared by every run
    #[arg(short = 's', long, default_value_t = 2024)]
    seed: u64,

    /// Print the winning grid of each case
    #[arg(short = 'p', long = "print")]
    print_grids: bool,
}

struct Case {
    name: &'static str,
    answers: &'static [&'static str],
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "music (6)", answers: &["jazz", "rock", "beat", "jam", "band", "keys"] },
        Case {
            name: "orchestra (10)",
            answers: &["orchestra", "trumpet", "cello", "oboe", "harp", "tuba", "piano", "violin", "flute", "timpani"],
        },
        Case {
            name: "space (14)",
            answers: &[
                "asteroid", "galaxy", "nebula", "comet", "orbit", "saturn", "mercury", "venus", "meteor",
                "eclipse", "quasar", "pulsar", "telescope", "satellite",
            ],
        },
        Case {
            name: "long words",
            answers: &[
                "constellation", "photosynthesis", "architecture", "thunderstorm", "kaleidoscope", "marshmallow",
                "encyclopedia", "hippopotamus", "trampoline", "chrysanthemum", "watermelon", "lighthouse",
            ],
        },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() {
    let cli = Cli::parse();
    let options = LayoutOptions::default()
        .with_seed(cli.seed)
        .with_attempts(cli.attempts)
        .with_time_budget(None);

    for (idx, case) in get_cases().iter().enumerate() {
        let clues: Vec<ClueInput> = case.answers.iter().map(|a| ClueInput::new(*a, *a)).collect();
        eprintln!("\n[{:02}] {}", idx + 1, case.name);

        if let Err(e) = generate_layout(&clues, &options) {
            eprintln!("  ✗ {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for _ in 0..cli.num_repeats.max(1) {
            let t = Instant::now();
            let result = generate_layout(black_box(&clues), &options);
            times.push(t.elapsed().as_secs_f64());
            last = result.ok();
        }

        let med = median(times);
        match last {
            Some(layout) => {
                eprintln!(
                    "  → median {:.4}s; {} entries from {} answers, {}x{} grid, score {:.2}",
                    med,
                    layout.entries.len(),
                    case.answers.len(),
                    layout.grid.height(),
                    layout.grid.width(),
                    layout.stats.score.total
                );
                if cli.print_grids {
                    println!("{}\n{}", case.name, layout.grid);
                }
            }
            None => eprintln!("  → median {med:.4}s; no layout"),
        }
    }
}
