use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rbd_board::Checkout;
use rbd_board::Dart;
use rbd_core::*;
use rbd_gameplay::Outcome;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// One visit at a finish-training target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Attempt {
    target: Score,
    number: usize,
    darts: Vec<Dart>,
    success: bool,
}

impl Attempt {
    pub fn target(&self) -> Score {
        self.target
    }
    /// 1-based visit number at this target.
    pub fn number(&self) -> usize {
        self.number
    }
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }
    pub fn success(&self) -> bool {
        self.success
    }
}

/// What a recorded visit did to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub success: bool,
    pub completed: bool,
    pub next: Option<Score>,
    pub message: String,
}

/// Attempts and successes at one target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub attempts: usize,
    pub successes: usize,
}

/// Finish training.
///
/// Targets are drawn uniformly from the finishable scores in the configured
/// range, never repeating until every one has been issued, at which point
/// the issued set is cleared and drawing starts over. Each target gets a
/// fixed number of visits, or fewer if it is checked out early. A visit
/// succeeds when it checks the target out under the same rules as a match.
/// The session completes once [`FINISH_TARGETS`] targets have been played.
#[derive(Debug, Clone)]
pub struct Finish {
    pool: Vec<Score>,
    issued: BTreeSet<Score>,
    visits: usize,
    double_out: bool,
    target: Score,
    attempt: usize,
    played: usize,
    history: Vec<Attempt>,
    progress: Progress,
    rng: SmallRng,
}

impl Finish {
    /// A session seeded from the thread-local generator.
    pub fn new(min: Score, max: Score, visits: usize, double_out: bool) -> Result<Self, DrillError> {
        Self::seeded(min, max, visits, double_out, rand::random())
    }
    /// A session whose target sequence is fixed by `seed`.
    pub fn seeded(
        min: Score,
        max: Score,
        visits: usize,
        double_out: bool,
        seed: u64,
    ) -> Result<Self, DrillError> {
        if visits == 0 {
            return Err(DrillError::Configuration(
                "at least one visit per target is required".into(),
            ));
        }
        let pool = (min..=max)
            .filter(|r| Checkout::finishable(*r))
            .collect::<Vec<_>>();
        if pool.is_empty() {
            return Err(DrillError::Configuration(format!(
                "no checkout exists between {} and {}",
                min, max
            )));
        }
        let mut session = Self {
            pool,
            issued: BTreeSet::new(),
            visits,
            double_out,
            target: 0,
            attempt: 1,
            played: 0,
            history: Vec::new(),
            progress: Progress::Active,
            rng: SmallRng::seed_from_u64(seed),
        };
        session.target = session.draw();
        log::debug!("finish training over {} targets, first {}", session.pool.len(), session.target);
        Ok(session)
    }
    /// Scores one visit at the current target.
    pub fn record(&mut self, darts: &[Dart]) -> Result<Feedback, DrillError> {
        self.progress.ensure("finish training")?;
        if darts.len() > DARTS_PER_VISIT {
            return Err(DrillError::Validation(format!(
                "a visit has at most {} darts, got {}",
                DARTS_PER_VISIT,
                darts.len()
            )));
        }
        let success = Outcome::resolve(self.target, darts, self.double_out).is_checkout();
        self.history.push(Attempt {
            target: self.target,
            number: self.attempt,
            darts: darts.to_vec(),
            success,
        });
        self.attempt += 1;
        if !success && self.attempt <= self.visits {
            return Ok(Feedback {
                success,
                completed: false,
                next: None,
                message: format!("Attempt {}/{} on {}", self.attempt, self.visits, self.target),
            });
        }
        self.played += 1;
        if self.played >= FINISH_TARGETS {
            self.progress = Progress::Completed;
            let stats = self.stats();
            return Ok(Feedback {
                success,
                completed: true,
                next: None,
                message: format!(
                    "Session complete: {}/{} checked out",
                    stats.successes, stats.attempts
                ),
            });
        }
        self.target = self.draw();
        self.attempt = 1;
        Ok(Feedback {
            success,
            completed: false,
            next: Some(self.target),
            message: self.advice(),
        })
    }
    /// Names the current target and up to two ways to check it out.
    pub fn advice(&self) -> String {
        let routes = Checkout::routes(self.target)
            .iter()
            .take(2)
            .map(|&route| Checkout::describe(route))
            .collect::<Vec<_>>();
        match routes.is_empty() {
            true => format!("Moving to {}", self.target),
            false => format!("Moving to {}. Try {}", self.target, routes.join(" or ")),
        }
    }
    /// Draws an unissued target, clearing the issued set once it covers the pool.
    fn draw(&mut self) -> Score {
        if self.issued.len() >= self.pool.len() {
            self.issued.clear();
        }
        let fresh = self
            .pool
            .iter()
            .copied()
            .filter(|r| !self.issued.contains(r))
            .collect::<Vec<_>>();
        let target = fresh[self.rng.random_range(0..fresh.len())];
        self.issued.insert(target);
        target
    }
}

impl Finish {
    pub fn target(&self) -> Score {
        self.target
    }
    /// 1-based visit number about to be thrown at the current target.
    pub fn attempt(&self) -> usize {
        self.attempt
    }
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn played(&self) -> usize {
        self.played
    }
    pub fn progress(&self) -> Progress {
        self.progress
    }
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }
    pub fn stats(&self) -> FinishStats {
        let by_target = self.history.iter().fold(
            BTreeMap::<Score, Record>::new(),
            |mut map, attempt| {
                let record = map.entry(attempt.target).or_default();
                record.attempts += 1;
                record.successes += attempt.success as usize;
                map
            },
        );
        FinishStats {
            attempts: self.history.len(),
            successes: self.history.iter().filter(|a| a.success).count(),
            by_target,
        }
    }
}

/// Summary of a finish-training session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishStats {
    pub attempts: usize,
    pub successes: usize,
    pub by_target: BTreeMap<Score, Record>,
}

impl FinishStats {
    /// Successful visits as a percentage of all visits.
    pub fn success_rate(&self) -> Probability {
        match self.attempts {
            0 => 0.,
            n => 100. * self.successes as Probability / n as Probability,
        }
    }
    pub fn targets(&self) -> usize {
        self.by_target.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbd_board::Segment;

    fn perfect(target: Score) -> Vec<Dart> {
        Checkout::primary(target)
            .unwrap()
            .iter()
            .copied()
            .map(Dart::from)
            .collect()
    }

    fn blank() -> Vec<Dart> {
        vec![Dart::from(Segment::Miss); 3]
    }

    #[test]
    fn empty_range_rejected() {
        assert!(matches!(
            Finish::seeded(159, 159, 3, true, 0),
            Err(DrillError::Configuration(_))
        ));
        assert!(matches!(
            Finish::seeded(40, 2, 3, true, 0),
            Err(DrillError::Configuration(_))
        ));
        assert!(matches!(
            Finish::seeded(2, 40, 0, true, 0),
            Err(DrillError::Configuration(_))
        ));
    }

    #[test]
    fn targets_stay_in_range() {
        let mut session = Finish::seeded(60, 100, 1, true, 11).unwrap();
        while session.progress().is_active() {
            let target = session.target();
            assert!((60..=100).contains(&target));
            assert!(Checkout::finishable(target));
            session.record(&blank()).unwrap();
        }
    }

    #[test]
    fn targets_do_not_repeat() {
        let mut session = Finish::seeded(2, 40, 1, true, 3).unwrap();
        let mut seen = vec![session.target()];
        while let Some(next) = session.record(&blank()).unwrap().next {
            seen.push(next);
        }
        assert_eq!(seen.len(), FINISH_TARGETS);
        let distinct = seen.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), seen.len());
    }

    #[test]
    fn small_range_recycles() {
        let mut session = Finish::seeded(2, 5, 1, true, 5).unwrap();
        let mut seen = vec![session.target()];
        while let Some(next) = session.record(&blank()).unwrap().next {
            seen.push(next);
        }
        assert_eq!(seen.len(), FINISH_TARGETS);
        assert!(seen[..4].iter().collect::<BTreeSet<_>>().len() == 4);
        assert_eq!(session.progress(), Progress::Completed);
    }

    #[test]
    fn success_advances_early() {
        let mut session = Finish::seeded(2, 170, 3, true, 9).unwrap();
        let first = session.target();
        let feedback = session.record(&perfect(first)).unwrap();
        assert!(feedback.success);
        assert!(feedback.next.is_some());
        assert_eq!(session.attempt(), 1);
        assert_ne!(session.target(), first);
    }

    #[test]
    fn misses_use_every_visit() {
        let mut session = Finish::seeded(2, 170, 3, true, 9).unwrap();
        let first = session.target();
        assert!(session.record(&blank()).unwrap().next.is_none());
        assert!(session.record(&blank()).unwrap().next.is_none());
        assert_eq!(session.target(), first);
        assert_eq!(session.attempt(), 3);
        assert!(session.record(&blank()).unwrap().next.is_some());
    }

    #[test]
    fn non_double_finish_fails() {
        let mut session = Finish::seeded(20, 20, 1, true, 0).unwrap();
        let feedback = session.record(&Dart::parse("S20").unwrap()).unwrap();
        assert!(!feedback.success);
        let mut session = Finish::seeded(20, 20, 1, false, 0).unwrap();
        let feedback = session.record(&Dart::parse("S20").unwrap()).unwrap();
        assert!(feedback.success);
    }

    #[test]
    fn completes_after_ten_targets() {
        let mut session = Finish::seeded(2, 170, 2, true, 1).unwrap();
        let mut visits = 0;
        while session.progress().is_active() {
            let target = session.target();
            match visits % 3 {
                0 => session.record(&perfect(target)).unwrap(),
                _ => session.record(&blank()).unwrap(),
            };
            visits += 1;
        }
        assert_eq!(session.played(), FINISH_TARGETS);
        assert!(session.record(&blank()).is_err());
        let stats = session.stats();
        assert_eq!(stats.attempts, visits);
        assert!(stats.successes > 0);
        assert!(stats.success_rate() > 0. && stats.success_rate() < 100.);
    }

    #[test]
    fn advice_names_routes() {
        let session = Finish::seeded(170, 170, 3, true, 0).unwrap();
        assert_eq!(session.target(), 170);
        assert!(session.advice().contains("T20 T20 BULL"));
    }
}
