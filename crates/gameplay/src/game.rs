use super::*;
use rbd_core::*;

/// The state of a two-participant X01 match.
///
/// `Match` is the core state machine: it knows the scores, the leg in
/// progress, and whose turn it is, and nothing about how it got there beyond
/// what the rules need. It is owned by the caller, who persists it; the
/// engine only computes successors.
///
/// # Lifecycle
///
/// A match is created [`Pending`](Status::Pending), becomes
/// [`Active`](Status::Active) via [`start`](Self::start) with leg 1 open, and
/// becomes [`Completed`](Status::Completed) when either seat reaches the
/// legs-to-win threshold. Transitions are functional: [`apply`](Self::apply)
/// returns a new `Match` inside a [`Transition`] and leaves `self` untouched.
///
/// # Invariants
///
/// - `thrower` is always a seat of this match
/// - remaining scores are never negative and never one
/// - after an accepted visit that does not finish a leg, `thrower` differs
///   from the seat that just threw
/// - `version` increases by exactly one per accepted transition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    id: ID<Self>,
    players: [ID<Participant>; N],
    rules: Rules,
    leg: Leg,
    thrower: Position,
    remaining: [Score; N],
    won: [u8; N],
    status: Status,
    winner: Option<Position>,
    version: u64,
}

/// Construction and lifecycle.
impl Match {
    /// A pending match between two participants.
    pub fn new(players: [ID<Participant>; N], rules: Rules) -> Result<Self, GameError> {
        let rules = rules.validate()?;
        if players[0] == players[1] {
            return Err(GameError::Configuration(
                "a match needs two distinct participants".into(),
            ));
        }
        let id = ID::default();
        let opener = rules.opening().first();
        Ok(Self {
            id,
            players,
            rules,
            leg: Leg::first(id, opener),
            thrower: opener,
            remaining: [rules.points(); N],
            won: [0; N],
            status: Status::Pending,
            winner: None,
            version: 0,
        })
    }
    /// Moves a pending match to active with leg 1 open.
    pub fn start(&self) -> Result<Self, GameError> {
        if self.status != Status::Pending {
            return Err(GameError::Conflict(format!(
                "match {} is already {}",
                self.id, self.status
            )));
        }
        let mut next = self.clone();
        next.status = Status::Active;
        next.version += 1;
        log::debug!("[match {}] started: {}", self.id, self.rules);
        Ok(next)
    }
}

/// Visit application.
impl Match {
    /// Resolves a submission and returns the resulting transition.
    ///
    /// Fails with [`GameError::Conflict`] if the submission was built against
    /// any state other than this one, and with [`GameError::Validation`] if it
    /// carries more than three darts. On error nothing changes.
    pub fn apply(&self, submission: &Submission) -> Result<Transition, GameError> {
        self.admit(submission)?;
        let seat = submission.thrower();
        let outcome = Outcome::resolve(
            self.remaining[seat],
            submission.darts(),
            self.rules.double_out(),
        );
        let mut next = self.clone();
        next.version += 1;
        let order = next.leg.count();
        let visit = Visit::new(
            self.id,
            self.leg.id(),
            seat,
            order,
            submission.darts(),
            &outcome,
        );
        let closed = match outcome.is_checkout() {
            true => Some(next.finish(seat)),
            false => {
                next.remaining[seat] = outcome.remaining();
                next.thrower = Self::other(seat);
                None
            }
        };
        log::trace!("[match {}] {}", self.id, visit);
        Ok(Transition::new(next, visit, closed))
    }
    /// Rejects submissions that do not belong to the current turn.
    fn admit(&self, submission: &Submission) -> Result<(), GameError> {
        if self.status != Status::Active {
            return Err(GameError::Conflict(format!(
                "match {} is {}",
                self.id, self.status
            )));
        }
        if submission.leg() != self.leg.id() {
            return Err(GameError::Conflict(format!(
                "leg {} is not the current leg {}",
                submission.leg(),
                self.leg.id()
            )));
        }
        if submission.version() != self.version {
            return Err(GameError::Conflict(format!(
                "version {} is stale, match is at {}",
                submission.version(),
                self.version
            )));
        }
        if submission.thrower() != self.thrower {
            return Err(GameError::Conflict(format!(
                "P{} threw out of turn, P{} is up",
                submission.thrower(),
                self.thrower
            )));
        }
        if submission.darts().len() > DARTS_PER_VISIT {
            return Err(GameError::Validation(format!(
                "{} darts in one visit",
                submission.darts().len()
            )));
        }
        Ok(())
    }
    /// Closes the current leg for `seat` and either ends the match or opens
    /// the next leg. Returns the closed leg.
    fn finish(&mut self, seat: Position) -> Leg {
        self.leg.close(seat);
        self.won[seat] += 1;
        self.remaining[seat] = 0;
        let closed = self.leg.clone();
        if self.won.iter().any(|&w| w >= self.rules.legs()) {
            self.status = Status::Completed;
            self.winner = Some(seat);
            log::info!("[match {}] won by P{} {:?}", self.id, seat, self.won);
        } else {
            let opener = self.rules.opening().after(self.leg.opener());
            self.leg = self.leg.next(opener);
            self.remaining = [self.rules.points(); N];
            self.thrower = opener;
            log::info!("[match {}] {} ({:?})", self.id, closed, self.won);
        }
        closed
    }
    fn other(seat: Position) -> Position {
        (seat + 1) % N
    }
}

/// History.
impl Match {
    /// Rebuilds the current leg's remaining scores from its visit history.
    ///
    /// Visits from other legs are ignored and the rest are taken in creation
    /// order, so the input may be unsorted.
    pub fn replay(&self, visits: &[Visit]) -> [Score; N] {
        let mut leg = visits
            .iter()
            .filter(|v| v.leg() == self.leg.id())
            .collect::<Vec<_>>();
        leg.sort_by_key(|v| v.order());
        leg.into_iter()
            .fold([self.rules.points(); N], |mut remaining, visit| {
                remaining[visit.thrower()] -= visit.total();
                remaining
            })
    }
}

/// Public state accessors.
impl Match {
    pub fn players(&self) -> [ID<Participant>; N] {
        self.players
    }
    pub fn player(&self, seat: Position) -> ID<Participant> {
        self.players[seat]
    }
    /// Seat of a participant, if they play in this match.
    pub fn seat(&self, player: ID<Participant>) -> Option<Position> {
        self.players.iter().position(|&p| p == player)
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    /// The leg in progress, or the final leg once completed.
    pub fn leg(&self) -> &Leg {
        &self.leg
    }
    /// Seat whose turn it is.
    pub fn thrower(&self) -> Position {
        self.thrower
    }
    pub fn remaining(&self, seat: Position) -> Score {
        self.remaining[seat]
    }
    /// Legs won by a seat.
    pub fn won(&self, seat: Position) -> u8 {
        self.won[seat]
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    /// Optimistic concurrency token.
    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn is_over(&self) -> bool {
        self.status == Status::Completed
    }
}

impl Unique for Match {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} | legs {}-{} | {} {} | P{} to throw",
            self.status,
            self.won[0],
            self.won[1],
            self.remaining[0],
            self.remaining[1],
            self.thrower
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbd_board::Dart;

    fn fresh(rules: Rules) -> Match {
        Match::new([ID::default(), ID::default()], rules)
            .unwrap()
            .start()
            .unwrap()
    }
    fn throw(game: &Match, darts: &str) -> Transition {
        let submission = Submission::current(game, Dart::parse(darts).unwrap());
        game.apply(&submission).unwrap()
    }
    fn short() -> Rules {
        Rules::new(Start::X301, 2, true, Opening::Alternate).unwrap()
    }

    #[test]
    fn pending_until_started() {
        let game = Match::new([ID::default(), ID::default()], Rules::default()).unwrap();
        assert_eq!(game.status(), Status::Pending);
        let submission = Submission::current(&game, Dart::parse("T20").unwrap());
        assert!(game.apply(&submission).unwrap_err().is_conflict());
        assert!(game.start().unwrap().start().is_err());
    }

    #[test]
    fn distinct_participants_required() {
        let id = ID::default();
        assert!(Match::new([id, id], Rules::default()).is_err());
    }

    #[test]
    fn scoring_visit_subtracts_and_flips() {
        let game = fresh(Rules::default());
        let next = throw(&game, "T20 T20 T20");
        assert_eq!(next.game().remaining(0), 321);
        assert_eq!(next.game().remaining(1), 501);
        assert_eq!(next.game().thrower(), 1);
        assert_eq!(next.visit().total(), 180);
        assert_eq!(next.visit().order(), 1);
        assert!(next.closed().is_none());
    }

    #[test]
    fn bust_keeps_score_and_flips() {
        let game = fresh(Rules::default());
        let game = throw(&game, "T20 T20 T20").game().clone();
        let game = throw(&game, "S1").game().clone();
        let game = throw(&game, "T20 T20 T20").game().clone();
        let game = throw(&game, "S1").game().clone();
        assert_eq!(game.remaining(0), 141);
        let next = throw(&game, "T20 T20 T20");
        assert!(next.visit().is_bust());
        assert_eq!(next.game().remaining(0), 141);
        assert_eq!(next.game().thrower(), 1);
    }

    #[test]
    fn stale_submissions_conflict() {
        let game = fresh(Rules::default());
        let stale = Submission::current(&game, Dart::parse("T20").unwrap());
        let game = game.apply(&stale).unwrap().game().clone();
        assert!(game.apply(&stale).unwrap_err().is_conflict());
        let wrong = Submission::new(game.leg().id(), 0, game.version(), vec![]);
        assert!(game.apply(&wrong).unwrap_err().is_conflict());
        let other = Submission::new(ID::default(), 1, game.version(), vec![]);
        assert!(game.apply(&other).unwrap_err().is_conflict());
    }

    #[test]
    fn four_darts_rejected() {
        let game = fresh(Rules::default());
        let submission = Submission::current(&game, Dart::parse("S1 S1 S1 S1").unwrap());
        assert!(matches!(
            game.apply(&submission),
            Err(GameError::Validation(_))
        ));
    }

    #[test]
    fn checkout_opens_next_leg() {
        let game = fresh(short());
        let game = throw(&game, "T20 T20 T20").game().clone(); // 121
        let game = throw(&game, "S1").game().clone();
        let game = throw(&game, "T20 T11 D14").game().clone(); // 0
        assert_eq!(game.won(0), 1);
        assert_eq!(game.leg().sequence(), 2);
        assert_eq!(game.leg().opener(), 1);
        assert_eq!(game.thrower(), 1);
        assert_eq!(game.remaining(0), 301);
        assert_eq!(game.remaining(1), 301);
        assert_eq!(game.status(), Status::Active);
    }

    #[test]
    fn transition_reports_closed_and_opened_legs() {
        let game = fresh(short());
        let game = throw(&game, "T20 T20 T20").game().clone();
        let game = throw(&game, "S1").game().clone();
        let first = game.leg().id();
        let next = throw(&game, "T20 T11 D14");
        let closed = next.closed().unwrap();
        assert_eq!(closed.id(), first);
        assert_eq!(closed.status(), Status::Completed);
        assert_eq!(closed.winner(), Some(0));
        assert_eq!(next.opened().unwrap().sequence(), 2);
        assert!(next.visit().is_checkout());
    }

    #[test]
    fn match_completes_at_threshold() {
        let rules = Rules::new(Start::X301, 1, true, Opening::Alternate).unwrap();
        let game = fresh(rules);
        let game = throw(&game, "T20 T20 T20").game().clone();
        let game = throw(&game, "S1").game().clone();
        let next = throw(&game, "T20 T11 D14");
        assert_eq!(next.game().status(), Status::Completed);
        assert_eq!(next.game().winner(), Some(0));
        assert!(next.opened().is_none());
        let after = Submission::current(next.game(), vec![]);
        assert!(next.game().apply(&after).unwrap_err().is_conflict());
    }

    #[test]
    fn non_double_finish_is_recorded_as_bust() {
        let game = fresh(short());
        let game = throw(&game, "T20 T20 T20").game().clone(); // 121
        let game = throw(&game, "S1").game().clone();
        let next = throw(&game, "T20 T19 S4"); // 121 -> 0 on a single
        assert_eq!(next.visit().bust(), Some(Bust::NoDouble));
        assert_eq!(next.game().remaining(0), 121);
        assert_eq!(next.game().won(0), 0);
        assert_eq!(next.game().thrower(), 1);
    }

    #[test]
    fn fixed_opening_reuses_opener() {
        let rules = Rules::new(Start::X301, 3, true, Opening::Fixed(0)).unwrap();
        let game = fresh(rules);
        let game = throw(&game, "T20 T20 T20").game().clone();
        let game = throw(&game, "S1").game().clone();
        let game = throw(&game, "T20 T11 D14").game().clone();
        assert_eq!(game.thrower(), 0);
    }

    #[test]
    fn thrower_alternates_after_every_open_visit() {
        let mut game = fresh(Rules::default());
        for _ in 0..8 {
            let seat = game.thrower();
            let next = throw(&game, "S5 S5 S5");
            assert!(!next.visit().is_checkout());
            assert_ne!(next.game().thrower(), seat);
            game = next.game().clone();
        }
    }

    #[test]
    fn replay_matches_state() {
        let mut game = fresh(Rules::default());
        let mut visits = Vec::new();
        for darts in ["T20 T20 T20", "S20 S1 S5", "T19 T19 T19", "T20 T20 T20", "T20 S20 S20"] {
            let next = throw(&game, darts);
            visits.push(next.visit().clone());
            game = next.game().clone();
        }
        visits.reverse();
        let replayed = game.replay(&visits);
        assert_eq!(replayed, [game.remaining(0), game.remaining(1)]);
    }

    #[test]
    fn versions_increase_by_one() {
        let game = fresh(Rules::default());
        assert_eq!(game.version(), 1);
        let next = throw(&game, "S20");
        assert_eq!(next.game().version(), 2);
    }
}
