use std::time::Duration;

use broadside::{
    cli, init_logging, simulate, ChannelSink, GameConfig, Session, StandardGame,
};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause before the bot fires, in milliseconds")]
        bot_delay_ms: u64,
        #[arg(long, default_value_t = 30, help = "Seconds into the battle before forfeit is offered")]
        forfeit_delay_secs: u64,
        #[arg(long, default_value_t = 10_000, help = "Random placement attempts per ship (0 = unbounded)")]
        max_attempts: u32,
    },
    /// Play a headless random-vs-bot game and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            bot_delay_ms,
            forfeit_delay_secs,
            max_attempts,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig {
                max_placement_attempts: (max_attempts > 0).then_some(max_attempts),
                bot_delay: Duration::from_millis(bot_delay_ms),
                forfeit_unlock_delay: Duration::from_secs(forfeit_delay_secs),
                ..GameConfig::default()
            };
            let game = StandardGame::with_config(config, rng).map_err(|e| anyhow::anyhow!(e))?;
            let (sink, events) = ChannelSink::new();
            info!("starting interactive game");
            cli::run(Session::new(game, sink), events).await?;
        }
        Commands::Sim { seed } => {
            let report = simulate(seed).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
