//! Tournament CLI
//!
//! Run matches between Reversi engines and save the results.

use clap::{Parser, Subcommand};
use classical_engine::SearchConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tournament::{
    create_engine, MatchConfig, MatchRunner, TournamentConfig, TournamentError, TournamentResults,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", version, about = "Reversi engine match runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines
    ///
    /// Engines: random, classical[:D], minimax[:D], alphabeta[:D] with D in 1-5
    Match {
        engine1: String,
        engine2: String,
        /// Number of games to play
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        /// Search configuration TOML shared by both engines
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the results as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Random plies before the engines take over
        #[arg(long, default_value_t = 0)]
        opening_plies: u32,
        /// Seed for the random openings
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Keep engine1 on Black for every game
        #[arg(long)]
        no_alternate: bool,
        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the default search configuration as TOML
    Config,
}

struct MatchArgs {
    engine1: String,
    engine2: String,
    base: SearchConfig,
    match_config: MatchConfig,
    output: Option<PathBuf>,
}

fn run_match(args: MatchArgs) -> Result<(), TournamentError> {
    let mut engine1 = create_engine(&args.engine1, &args.base)?;
    let mut engine2 = create_engine(&args.engine2, &args.base)?;

    println!("=== Match: {} vs {} ===", args.engine1, args.engine2);
    println!(
        "Games: {}, {} vs {}",
        args.match_config.num_games,
        engine1.name(),
        engine2.name()
    );
    println!();

    let runner = MatchRunner::new(args.match_config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        args.engine1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!("Average disc margin: {:+.1}", result.disc_margin());

    if let Some(path) = args.output {
        let config = runner.config();
        let mut results = TournamentResults::new(
            &format!("{} vs {}", args.engine1, args.engine2),
            vec![args.engine1.clone(), args.engine2.clone()],
            TournamentConfig {
                games_per_match: config.num_games,
                alternate_colors: config.alternate_colors,
                opening_plies: config.opening_plies,
            },
        );
        results.add_match(&args.engine1, &args.engine2, result);
        println!();
        results.print_report();
        results.save(&path)?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}

fn run(cli: Cli) -> Result<(), TournamentError> {
    match cli.command {
        Command::Match {
            engine1,
            engine2,
            games,
            config,
            output,
            opening_plies,
            seed,
            no_alternate,
            quiet,
        } => {
            let base = match config {
                Some(path) => SearchConfig::load(&path)?,
                None => SearchConfig::default(),
            };
            run_match(MatchArgs {
                engine1,
                engine2,
                base,
                match_config: MatchConfig {
                    num_games: games,
                    alternate_colors: !no_alternate,
                    opening_plies,
                    seed,
                    verbose: !quiet,
                },
                output,
            })
        }
        Command::Config => {
            print!("{}", SearchConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
