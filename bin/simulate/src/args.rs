use clap::Parser;
use clap::ValueEnum;
use rbd_core::Score;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated darts through the scoring engine", long_about = None)]
pub struct Args {
    /// Starting score: 301 or 501.
    #[arg(long, default_value_t = 501)]
    pub start: Score,
    /// Legs needed to win the match.
    #[arg(long, default_value_t = 3)]
    pub legs: u8,
    /// Require a double or the bullseye to finish.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub double_out: bool,
    /// Skill tier of the home bot (20, 25, 35, ..., 95).
    #[arg(long, default_value_t = 75)]
    pub home: u8,
    /// Skill tier of the away bot.
    #[arg(long, default_value_t = 55)]
    pub away: u8,
    /// Seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Run the home bot through a practice drill instead of a match.
    #[arg(long, value_enum)]
    pub drill: Option<Drill>,
    /// Print every published snapshot as a JSON line.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drill {
    Finish,
    Clock,
    Jdc,
    Bobs,
}
