//! sim-runner: headless run driver for the skystrike engine.
//!
//! Usage:
//!   sim-runner --seed 12345 --seconds 60 --fps 60
//!   sim-runner --seed 12345 --seconds 60 --json

use std::env;
use std::str::FromStr;

use anyhow::Result;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::enums::GamePhase;
use skystrike_sim::engine::{GameConfig, GameEngine};
use skystrike_sim::highscore::MemoryScoreStore;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let seconds = parse_arg(&args, "--seconds", 30.0f32);
    let fps = parse_arg(&args, "--fps", 60.0f32).max(1.0);
    let json = args.iter().any(|a| a == "--json");

    if !json {
        println!("skystrike sim-runner");
        println!("  seed:    {seed}");
        println!("  seconds: {seconds}");
        println!("  fps:     {fps}");
        println!();
    }

    let mut engine = GameEngine::new(
        GameConfig {
            seed,
            ..Default::default()
        },
        Box::new(MemoryScoreStore::default()),
    );
    engine.queue_command(PlayerCommand::Start);

    let dt = 1.0 / fps;
    let frames = (seconds * fps).ceil() as u64;
    let mut last = engine.tick(0.0);
    for frame in 0..frames {
        last = engine.tick(dt);
        if engine.phase() == GamePhase::GameOver {
            log::info!("run ended at frame {frame}");
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&last)?);
    } else {
        println!("final state:");
        println!("  phase:     {:?}", engine.phase());
        println!("  sim time:  {:.2}s ({} ticks)", last.time.elapsed_secs, last.time.tick);
        println!("  score:     {}", engine.score());
        println!("  best:      {}", engine.high_score());
        println!("  enemies:   {}", last.enemies.len());
        println!("  bullets:   {}", last.bullets.len());
        println!("  pickups:   {}", last.pickups.len());
    }

    Ok(())
}

fn parse_arg<T: FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
