use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dice_mafia::core::{Direction, MatchConfig};
use dice_mafia::game::{instructions, ConsoleReporter, MatchBuilder};
use dice_mafia::Console;

/// Play a match of Mafia dice in the terminal.
#[derive(Parser)]
#[command(name = "dice-mafia", about = "Play Mafia dice against people and computers")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "dice-mafia.toml")]
    config: PathBuf,

    /// Number of players (2-8); asked interactively when absent
    #[arg(long)]
    players: Option<usize>,

    /// Number of human players; asked interactively when absent
    #[arg(long)]
    humans: Option<usize>,

    /// Override the number of rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for seating and dice
    #[arg(long)]
    seed: Option<u64>,

    /// Direction computers choose when they open: 1 or -1
    #[arg(long, allow_hyphen_values = true)]
    direction: Option<String>,

    /// Use config values instead of asking for missing counts
    #[arg(long)]
    no_prompt: bool,

    /// Write the match event log as NDJSON to this file
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", MatchConfig::default_toml());
        return Ok(());
    }

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rounds) = cli.rounds {
        config.max_rounds = rounds;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(direction) = cli.direction.as_deref() {
        config.auto_direction = Direction::parse(direction)
            .with_context(|| format!("invalid direction '{direction}' (expected 1 or -1)"))?;
    }

    println!("{}", instructions(&config));

    let console = Console::stdio().shared();
    config.player_count = match cli.players {
        Some(n) => n,
        None if cli.no_prompt => config.player_count,
        None => console
            .borrow_mut()
            .ask_player_count()
            .context("reading the number of players")?,
    };
    config.human_count = match cli.humans {
        Some(n) => n,
        None if cli.no_prompt => config.human_count.min(config.player_count),
        None => console
            .borrow_mut()
            .ask_human_count(config.player_count)
            .context("reading the number of human players")?,
    };
    config.validate().context("invalid match settings")?;

    let has_humans = config.human_count > 0;
    let mut game = MatchBuilder::new(config)
        .console(console.clone())
        .observer(ConsoleReporter::stdout())
        .build()
        .context("setting up the match")?;

    let outcome = game.play().context("playing the match")?;

    if let Some(path) = &cli.events {
        let file = File::create(path)
            .with_context(|| format!("creating event log {}", path.display()))?;
        game.events()
            .write_ndjson(BufWriter::new(file))
            .with_context(|| format!("writing event log {}", path.display()))?;
        println!("Event log written to {}", path.display());
    }

    println!(
        "Rounds played: {}. Winners: {}",
        outcome.rounds_played,
        outcome
            .result
            .winners()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    if has_humans {
        console
            .borrow_mut()
            .pause("Press ENTER to quit")
            .context("waiting for ENTER")?;
    }
    Ok(())
}
