use battleship_agent::{init_logging, run_match, Agent, MatchOutcome};
use clap::Parser;
use log::info;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Run locally refereed Battleship matches between two heuristic agents")]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mut p1, mut p2) = match cli.seed {
        Some(seed) => (Agent::seeded(seed), Agent::seeded(seed.wrapping_add(1))),
        None => (Agent::new(), Agent::new()),
    };

    let mut wins = [0u32; 2];
    let mut outcomes: Vec<MatchOutcome> = Vec::with_capacity(cli.games as usize);
    for game in 0..cli.games {
        let outcome = run_match(&mut p1, &mut p2, ["player1", "player2"])?;
        info!("game {}: {:?}", game + 1, outcome);
        if let Some(winner) = outcome.winner {
            wins[winner] += 1;
        }
        outcomes.push(outcome);
    }

    let summary = json!({
        "games": cli.games,
        "wins": { "player1": wins[0], "player2": wins[1] },
        "outcomes": outcomes,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
