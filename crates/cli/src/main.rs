//! # tessera
//!
//! Terminal front end for the tessera engine: play interactively with
//! engine hints, watch the engine play, run headless batches, or report
//! on a disagreement log.

mod input;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tessera_analysis::{append_record, load_log, summarize, worst, Disagreement};
use tessera_core::{Board, Direction};
use tessera_engine::{Session, SpawnConfig, Status};
use tessera_eval::{fitness, Score};
use tessera_search::{run_batch, score_cmp, LookaheadSearch};

use input::{key_for, parse_input, Key, RawModeGuard};

#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Play 2048 in the terminal or run engine experiments")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively with per-direction fitness hints
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Append a record here whenever your move differs from the engine's
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },
    /// Let the engine play one game, printing each position
    Auto {
        #[command(flatten)]
        game: GameArgs,
        /// Stop after this many moves (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_turns: u32,
    },
    /// Run a batch of headless games and report aggregate outcomes
    Stats {
        #[command(flatten)]
        game: GameArgs,
        /// Number of games, seeded seed, seed+1, ...
        #[arg(short, long, default_value = "100")]
        episodes: u32,
        /// Stop each game after this many moves (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_turns: u32,
    },
    /// Summarize a disagreement log written by `play --log`
    Analyze {
        /// JSON-lines disagreement log
        #[arg(value_name = "FILE")]
        log: PathBuf,
        /// Show the n records with the largest fitness deficits
        #[arg(long, default_value = "3")]
        worst: usize,
    },
}

#[derive(Args, Debug)]
struct GameArgs {
    /// Random seed for deterministic runs
    #[arg(short, long, default_value = "42")]
    seed: u64,
    /// Lookahead depth for the engine (0 = greedy)
    #[arg(short, long, default_value = "0")]
    depth: u32,
    /// Tile spawn preset
    #[arg(long, value_enum, default_value = "standard")]
    spawn: SpawnPreset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpawnPreset {
    /// A four-tile one spawn in ten
    Standard,
    /// A four-tile one spawn in five
    FourHeavy,
}

impl SpawnPreset {
    fn config(self) -> SpawnConfig {
        match self {
            SpawnPreset::Standard => SpawnConfig::standard(),
            SpawnPreset::FourHeavy => SpawnConfig::four_heavy(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Play { game, log } => run_play(&game, log.as_deref()),
        Command::Auto { game, max_turns } => run_auto(&game, max_turns),
        Command::Stats { game, episodes, max_turns } => run_stats(&game, episodes, max_turns),
        Command::Analyze { log, worst } => run_analyze(&log, worst),
    }
}

fn run_play(game: &GameArgs, log: Option<&Path>) -> anyhow::Result<()> {
    let search = LookaheadSearch::new(game.depth);
    let mut session = Session::with_config(game.seed, game.spawn.config());

    let _raw = RawModeGuard::new();
    let mut stdin = std::io::stdin();
    let mut buffer = [0u8; 3];

    draw(&session, &search);

    loop {
        let bytes_read = stdin.read(&mut buffer).unwrap_or(0);
        if bytes_read == 0 {
            continue;
        }
        match parse_input(&buffer[..bytes_read]) {
            Key::Move(direction) => {
                if session.status() == Status::Lost {
                    continue;
                }
                let before = session.board();
                let turn = session.turn();
                if session.apply(direction).is_some() {
                    if let Some(path) = log {
                        log_disagreement(path, &search, before, turn, direction);
                    }
                    draw(&session, &search);
                    announce_if_lost(&mut session);
                } else if session.check_lost() {
                    // Rejected because nothing moves anywhere
                    draw(&session, &search);
                    announce_if_lost(&mut session);
                }
            }
            Key::AutoPick => {
                if session.status() == Status::Lost {
                    continue;
                }
                match search.best_move(&session.board()) {
                    Some((direction, _)) => {
                        let _ = session.apply(direction);
                        draw(&session, &search);
                        announce_if_lost(&mut session);
                    }
                    None => announce_if_lost(&mut session),
                }
            }
            Key::Quit => break,
            Key::None => {}
        }
    }

    println!();
    Ok(())
}

fn draw(session: &Session, search: &LookaheadSearch) {
    let board = session.board();
    print!("\x1b[2J\x1b[H"); // clear screen, cursor home
    println!("=== tessera ===");
    println!("wasd / arrows: move | p: engine move | q: quit\n");
    print!("{board}");
    println!("sum={}, fitness={}", board.tile_sum(), fitness(&board));
    println!("{}", hint_line(&board, search));
}

/// One line of per-direction fitness deltas, best first, in the shape
/// `a: +9  d: +9  s: +0  w: -inf`.
fn hint_line(board: &Board, search: &LookaheadSearch) -> String {
    let base = fitness(board);
    let mut futures: Vec<(Direction, Score)> = search
        .evaluate_directions(board)
        .into_iter()
        .map(|eval| (eval.direction, eval.fitness.unwrap_or(f64::NEG_INFINITY)))
        .collect();
    futures.sort_by(|a, b| score_cmp(a.1, b.1));
    let hints: Vec<String> = futures
        .into_iter()
        .map(|(direction, score)| format!("{}: {:+}", key_for(direction), score - base))
        .collect();
    hints.join("  ")
}

fn log_disagreement(
    path: &Path,
    search: &LookaheadSearch,
    board: Board,
    turn: u32,
    human: Direction,
) {
    let engine = match search.best_move(&board) {
        Some((engine, _)) => engine,
        None => return,
    };
    if engine == human {
        return;
    }
    let record = Disagreement {
        turn,
        board,
        human,
        engine,
        scores: Disagreement::snapshot(search.evaluate_directions(&board)),
    };
    if let Err(err) = append_record(path, &record) {
        eprintln!("disagreement log: {err}");
    }
}

fn announce_if_lost(session: &mut Session) {
    if session.check_lost() {
        println!(
            "*** game over: sum={} after {} turns ***",
            session.board().tile_sum(),
            session.turn()
        );
        println!("press q to quit");
    }
}

fn run_auto(game: &GameArgs, max_turns: u32) -> anyhow::Result<()> {
    let search = LookaheadSearch::new(game.depth);
    let mut session = Session::with_config(game.seed, game.spawn.config());

    print_position(&session);
    loop {
        if max_turns > 0 && session.turn() >= max_turns {
            break;
        }
        match search.best_move(&session.board()) {
            Some((direction, _)) => {
                if session.apply(direction).is_none() {
                    break;
                }
                println!("{direction}");
                print_position(&session);
            }
            None => {
                session.check_lost();
                break;
            }
        }
    }

    let board = session.board();
    println!("=== run over ===");
    println!("turns={}", session.turn());
    println!("lost={}", session.status() == Status::Lost);
    println!("final_sum={}", board.tile_sum());
    println!("max_tile={}", 1u64 << board.max_exponent());
    Ok(())
}

fn print_position(session: &Session) {
    let board = session.board();
    print!("{board}");
    println!("sum={}, fitness={}", board.tile_sum(), fitness(&board));
    println!("----------------");
}

fn run_stats(game: &GameArgs, episodes: u32, max_turns: u32) -> anyhow::Result<()> {
    let search = LookaheadSearch::new(game.depth);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {elapsed_precise} | {msg}")?);
    pb.set_message(format!("{episodes} episodes at depth {}", search.depth));
    pb.enable_steady_tick(Duration::from_millis(120));

    let outcome = run_batch(game.seed, episodes, game.spawn.config(), &search, max_turns);
    pb.finish_and_clear();

    println!("=== batch results ===");
    println!("episodes={}", outcome.episodes);
    println!("seed={}", game.seed);
    println!("depth={}", search.depth);
    println!("mean_turns={:.2}", outcome.mean_turns);
    println!("mean_sum={:.2}", outcome.mean_tile_sum);
    println!("best_sum={}", outcome.best_tile_sum);
    println!("best_tile={}", 1u64 << outcome.best_exponent);

    let mut counts: Vec<(u8, u32)> = outcome.exponent_counts.into_iter().collect();
    counts.sort_by_key(|&(exponent, _)| exponent);
    print!("tile_distribution=");
    for (i, (exponent, count)) in counts.iter().enumerate() {
        if i > 0 {
            print!(",");
        }
        print!("{}:{}", 1u64 << exponent, count);
    }
    println!();
    Ok(())
}

fn run_analyze(log: &Path, show_worst: usize) -> anyhow::Result<()> {
    let loaded = load_log(log).with_context(|| format!("reading {}", log.display()))?;
    let report = summarize(&loaded.records, loaded.skipped);

    println!("=== disagreement report ===");
    println!("records={}", report.records);
    println!("skipped={}", report.skipped);
    println!("scored={}", report.scored);
    println!("mean_deficit={:.2}", report.mean_deficit);
    println!("minor={} moderate={} major={}", report.minor, report.moderate, report.major);

    for record in worst(&loaded.records, show_worst) {
        println!();
        println!(
            "turn {}: played {}, engine picked {} (deficit {:.1})",
            record.turn,
            record.human,
            record.engine,
            record.deficit().unwrap_or(0.0)
        );
        print!("{}", record.board);
    }
    Ok(())
}
