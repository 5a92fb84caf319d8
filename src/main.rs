//! `war` - play War against HAL from the terminal.

use std::io::{self, BufRead, Write};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use war_game::core::{WarConfig, WarError};
use war_game::events::{GameObserver, NullObserver};
use war_game::rules::WarGameBuilder;
use war_game::ui::ConsoleObserver;

#[derive(Parser, Debug)]
#[command(name = "war", about = "Play the card game War against HAL")]
struct Args {
    /// Your name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Shuffle seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,

    /// Skip the "press ENTER" prompt
    #[arg(short = 'y', long)]
    no_wait: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] WarError),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("war_game=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Hello opponent. I am HAL. Welcome and lets go to WAR!");
    if !args.no_wait {
        print!("\nPress ENTER to begin");
        io::stdout().flush()?;
        read_line(&mut input)?;
    }

    let player_name = match args.name {
        Some(name) => name,
        None => {
            print!("Please enter your name: ");
            io::stdout().flush()?;
            read_line(&mut input)?
        }
    };

    let config = WarConfig {
        seed: args.seed,
        max_rounds: args.max_rounds,
        ..WarConfig::new(player_name)
    };
    let mut game = WarGameBuilder::from_config(config).build()?;
    tracing::info!(seed = game.seed(), "replay with --seed {}", game.seed());

    let mut console = ConsoleObserver::stdout();
    let mut silent = NullObserver;
    let observer: &mut dyn GameObserver = if args.quiet {
        &mut silent
    } else {
        &mut console
    };
    let summary = game.run(observer);

    if args.quiet {
        match &summary.winner_name {
            Some(name) => println!("{name} is the WINNER after {} rounds", summary.rounds),
            None => println!("DRAW after {} rounds", summary.rounds),
        }
    }
    if summary.cycled {
        println!("The hands repeated after {} rounds; scored by card count.", summary.rounds);
    }
    if summary.hit_round_cap {
        println!("Stopped at the {}-round limit.", summary.rounds);
    }
    println!("Seed: {}", game.seed());

    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
