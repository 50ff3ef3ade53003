use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// A scored round of Bob's 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct BobsRound {
    target: u8,
    hits: u8,
    scored: Score,
    lost: Score,
}

impl BobsRound {
    fn new(target: u8, darts: &[Dart]) -> Self {
        let hits = darts
            .iter()
            .filter(|d| d.segment().number() == Some(target))
            .map(|d| d.multiplier())
            .sum::<u8>();
        let target_points = target as Score;
        Self {
            target,
            hits,
            scored: hits as Score * target_points,
            lost: (3 - hits as Score) * target_points,
        }
    }
    pub fn target(&self) -> u8 {
        self.target
    }
    /// Sum of multipliers on the target number.
    pub fn hits(&self) -> u8 {
        self.hits
    }
    pub fn scored(&self) -> Score {
        self.scored
    }
    /// Negative once hits exceed three.
    pub fn lost(&self) -> Score {
        self.lost
    }
    pub fn net(&self) -> Score {
        self.scored - self.lost
    }
}

/// Bob's 27.
///
/// The score starts at 27 and the target at 1. Each round of three darts
/// scores the target for every hit, counting multipliers, and loses it for
/// every hit short of three. The target moves on every round. Dropping to
/// zero or below costs a life and resets the score to 27; losing the last
/// life fails the session. Playing past 20 completes it.
#[derive(Debug, Clone)]
pub struct Bobs {
    score: Score,
    lives: u8,
    target: u8,
    history: Vec<BobsRound>,
    progress: Progress,
}

impl Default for Bobs {
    fn default() -> Self {
        Self {
            score: BOBS_START,
            lives: BOBS_LIVES,
            target: 1,
            history: Vec::new(),
            progress: Progress::Active,
        }
    }
}

impl Bobs {
    pub fn new() -> Self {
        Self::default()
    }
    /// Scores one round at the current target.
    pub fn record(&mut self, darts: &[Dart]) -> Result<BobsRound, DrillError> {
        self.progress.ensure("Bob's 27")?;
        if darts.len() > DARTS_PER_VISIT {
            return Err(DrillError::Validation(format!(
                "a round has at most {} darts, got {}",
                DARTS_PER_VISIT,
                darts.len()
            )));
        }
        let round = BobsRound::new(self.target, darts);
        self.history.push(round);
        self.score += round.net();
        if self.score <= 0 {
            self.lives -= 1;
            match self.lives {
                0 => self.progress = Progress::Failed,
                n => {
                    log::debug!("bob's 27 life lost on {}, {} left", self.target, n);
                    self.score = BOBS_START;
                }
            }
        }
        self.target += 1;
        if self.progress.is_active() && self.target > LAST_NUMBER {
            self.progress = Progress::Completed;
        }
        if !self.progress.is_active() {
            log::info!("bob's 27 {} on {}", self.progress, self.score);
        }
        Ok(round)
    }
    /// Describes the state after the last round.
    pub fn message(&self) -> String {
        match (self.progress, self.history.last()) {
            (Progress::Completed, _) => format!("Bob's 27 complete! Final score: {}", self.score),
            (Progress::Failed, _) => "Game over! No lives remaining.".to_string(),
            (Progress::Active, None) => format!("Start on D1 with {}", self.score),
            (Progress::Active, Some(round)) => format!(
                "{}/3 hits on {}. Net: {:+}",
                round.hits, round.target, round.net()
            ),
        }
    }
}

impl Bobs {
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn lives(&self) -> u8 {
        self.lives
    }
    /// The number the next round is played at.
    pub fn target(&self) -> u8 {
        self.target
    }
    pub fn progress(&self) -> Progress {
        self.progress
    }
    pub fn history(&self) -> &[BobsRound] {
        &self.history
    }
    /// Multiplier hits over darts thrown, as a percentage.
    pub fn accuracy(&self) -> Probability {
        let hits = self.history.iter().map(|r| r.hits as u32).sum::<u32>();
        match self.history.len() {
            0 => 0.,
            n => 100. * hits as Probability / (n * DARTS_PER_VISIT) as Probability,
        }
    }
    /// Longest run of consecutive rounds with at least one hit.
    pub fn streak(&self) -> usize {
        self.history
            .iter()
            .fold((0, 0), |(best, run), round| match round.hits {
                0 => (best, 0),
                _ => (best.max(run + 1), run + 1),
            })
            .0
    }
    pub fn grade(&self) -> Grade {
        Grade::banded(
            self.score,
            &[
                (1000, Grade::Expert),
                (700, Grade::Advanced),
                (500, Grade::Intermediate),
                (300, Grade::Beginner),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn darts(labels: &str) -> Vec<Dart> {
        Dart::parse(labels).unwrap()
    }

    #[test]
    fn three_singles_on_one() {
        let mut bobs = Bobs::new();
        let round = bobs.record(&darts("S1 S1 S1")).unwrap();
        assert_eq!(round.hits(), 3);
        assert_eq!(round.scored(), 3);
        assert_eq!(round.lost(), 0);
        assert_eq!(round.net(), 3);
        assert_eq!(bobs.score(), 30);
        assert_eq!(bobs.target(), 2);
    }

    #[test]
    fn doubles_count_twice() {
        let mut bobs = Bobs::new();
        let round = bobs.record(&darts("D1 MISS MISS")).unwrap();
        assert_eq!(round.hits(), 2);
        assert_eq!(round.net(), 2 - 1);
        assert_eq!(bobs.score(), 28);
    }

    #[test]
    fn life_lost_and_reset() {
        let mut bobs = Bobs::new();
        let blank = darts("MISS MISS MISS");
        for _ in 0..3 {
            bobs.record(&blank).unwrap();
        }
        assert_eq!(bobs.score(), 9);
        bobs.record(&blank).unwrap();
        assert_eq!(bobs.lives(), BOBS_LIVES - 1);
        assert_eq!(bobs.score(), BOBS_START);
        assert_eq!(bobs.target(), 5);
        assert_eq!(bobs.progress(), Progress::Active);
    }

    #[test]
    fn last_life_fails() {
        let mut bobs = Bobs::new();
        let blank = darts("MISS MISS MISS");
        while bobs.progress().is_active() {
            bobs.record(&blank).unwrap();
        }
        assert_eq!(bobs.progress(), Progress::Failed);
        assert_eq!(bobs.lives(), 0);
        assert!(bobs.target() <= LAST_NUMBER);
        assert!(bobs.record(&blank).is_err());
        assert_eq!(bobs.streak(), 0);
        assert_eq!(bobs.accuracy(), 0.);
    }

    #[test]
    fn past_twenty_completes() {
        let mut bobs = Bobs::new();
        for n in 1..=LAST_NUMBER {
            bobs.record(&darts(&format!("D{n} D{n} D{n}"))).unwrap();
        }
        assert_eq!(bobs.progress(), Progress::Completed);
        assert_eq!(bobs.lives(), BOBS_LIVES);
        assert_eq!(bobs.streak(), 20);
        assert!(bobs.score() > 1000);
        assert_eq!(bobs.grade(), Grade::Expert);
        assert!(bobs.message().contains("complete"));
    }

    #[test]
    fn streak_breaks_on_blank_round() {
        let mut bobs = Bobs::new();
        bobs.record(&darts("S1")).unwrap();
        bobs.record(&darts("S2 S2")).unwrap();
        bobs.record(&darts("MISS")).unwrap();
        bobs.record(&darts("S4")).unwrap();
        assert_eq!(bobs.streak(), 2);
        assert_eq!(bobs.history().len(), 4);
    }
}
