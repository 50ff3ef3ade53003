use super::*;

/// The result of applying one submission to a match.
///
/// - `game` — the next match state, to be persisted in place of the old one
/// - `visit` — the new append-only visit record
/// - `closed` — the leg this visit completed, if it was a checkout
///
/// When a leg closes without ending the match, `game.leg()` is the freshly
/// opened leg.
#[derive(Debug, Clone)]
pub struct Transition {
    game: Match,
    visit: Visit,
    closed: Option<Leg>,
}

impl Transition {
    pub(crate) fn new(game: Match, visit: Visit, closed: Option<Leg>) -> Self {
        Self {
            game,
            visit,
            closed,
        }
    }
    pub fn game(&self) -> &Match {
        &self.game
    }
    pub fn visit(&self) -> &Visit {
        &self.visit
    }
    pub fn closed(&self) -> Option<&Leg> {
        self.closed.as_ref()
    }
    /// The leg created by this transition, if any.
    pub fn opened(&self) -> Option<&Leg> {
        match (&self.closed, self.game.status()) {
            (Some(_), Status::Active) => Some(self.game.leg()),
            _ => None,
        }
    }
    pub fn into_parts(self) -> (Match, Visit, Option<Leg>) {
        (self.game, self.visit, self.closed)
    }
}
