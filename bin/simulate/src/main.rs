//! Simulate Binary
//!
//! Plays a bot-vs-bot match through the referee, or runs one bot through a
//! practice drill, and reports the statistics.
//!
//! Options: --start, --legs, --double-out, --home, --away, --seed, --drill, --json
mod args;
mod drill;
mod game;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rbd_core::log();
    let args = args::Args::parse();
    match args.drill {
        Some(drill) => drill::run(drill, &args),
        None => game::run(&args).await,
    }
}
