use anyhow::{Context, Result};
use clap::Parser;
use holdem_showdown::cards::parse_cards;
use holdem_showdown::game::{evaluate, Player};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Evaluate a Texas Hold'em showdown.")]
struct Cli {
    /// Community cards, e.g. "AS KD 7H 4S 2C".
    #[arg(long, short)]
    board: String,
    /// A player as ID=CARDS, e.g. p1=9D,3C. Repeat once per player.
    #[arg(long = "player", short, value_parser = parse_player, required = true)]
    players: Vec<Player>,
    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
    /// Log verbosity: -v for debug, -vv for trace.
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_player(s: &str) -> Result<Player, String> {
    let (id, hole) = s.split_once('=').ok_or_else(|| format!("expected ID=CARDS, got '{s}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing player id in '{s}'"));
    }
    let hole = parse_cards(hole).map_err(|e| e.to_string())?;
    Ok(Player::new(id, hole))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).format_target(false).format_timestamp_millis().init();

    let board = parse_cards(&cli.board).context("invalid board")?;
    let outcome = evaluate(&board, &cli.players)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for result in &outcome.players {
            println!("{:<8} {}", result.id, result.best);
        }
        let label = if outcome.is_split() { "split" } else { "winner" };
        println!("{label}: {}", outcome.winners.join(", "));
    }
    Ok(())
}
