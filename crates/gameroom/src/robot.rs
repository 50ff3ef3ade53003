use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rbd_board::Dart;
use rbd_core::Score;
use rbd_players::Bot;
use rbd_players::Level;
use rbd_players::Profile;

/// A simulated player.
pub struct Robot {
    bot: Bot,
    rng: SmallRng,
}

impl Robot {
    pub fn new(profile: Profile, seed: u64) -> Self {
        Self {
            bot: Bot::new(profile),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn bot(&self) -> Bot {
        self.bot
    }
}

impl From<Level> for Robot {
    fn from(level: Level) -> Self {
        Self::new(Profile::from(level), rand::random())
    }
}

#[async_trait::async_trait]
impl Player for Robot {
    async fn throw(&mut self, remaining: Score, double_out: bool) -> Vec<Dart> {
        let throws = self.bot.visit(remaining, double_out, &mut self.rng);
        log::trace!("[robot {}] {} from {}", self.bot.profile(), throws, remaining);
        throws.into()
    }
}
