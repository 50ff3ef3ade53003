use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// Flat shapes exchanged with the persistence collaborator.
///
/// These mirror the stored rows one-to-one. The engine never reads them
/// back; they exist so storage and change feeds do not depend on the
/// engine's internal layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub id: ID<Match>,
    pub participant_a: ID<Participant>,
    pub participant_b: ID<Participant>,
    pub current_leg_id: ID<Leg>,
    pub current_thrower: ID<Participant>,
    pub remaining_a: Score,
    pub remaining_b: Score,
    pub legs_won_a: u8,
    pub legs_won_b: u8,
    pub status: Status,
    pub starting_score: Score,
    pub legs_to_win: u8,
    pub double_out: bool,
    pub winner: Option<ID<Participant>>,
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct LegRecord {
    pub id: ID<Leg>,
    pub match_id: ID<Match>,
    pub sequence_number: u32,
    pub status: Status,
    pub winner: Option<ID<Participant>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitRecord {
    pub id: ID<Visit>,
    pub match_id: ID<Match>,
    pub leg_id: ID<Leg>,
    pub thrower: ID<Participant>,
    pub dart1: Option<(Score, u8)>,
    pub dart2: Option<(Score, u8)>,
    pub dart3: Option<(Score, u8)>,
    pub total: Score,
    pub bust: bool,
    pub checkout: bool,
    pub created_order: u32,
}

impl From<&Match> for MatchRecord {
    fn from(game: &Match) -> Self {
        Self {
            id: game.id(),
            participant_a: game.player(0),
            participant_b: game.player(1),
            current_leg_id: game.leg().id(),
            current_thrower: game.player(game.thrower()),
            remaining_a: game.remaining(0),
            remaining_b: game.remaining(1),
            legs_won_a: game.won(0),
            legs_won_b: game.won(1),
            status: game.status(),
            starting_score: game.rules().points(),
            legs_to_win: game.rules().legs(),
            double_out: game.rules().double_out(),
            winner: game.winner().map(|seat| game.player(seat)),
            version: game.version(),
        }
    }
}

impl LegRecord {
    /// Needs the match to translate the winning seat into a participant.
    pub fn new(leg: &Leg, game: &Match) -> Self {
        Self {
            id: leg.id(),
            match_id: leg.game(),
            sequence_number: leg.sequence(),
            status: leg.status(),
            winner: leg.winner().map(|seat| game.player(seat)),
        }
    }
}

impl VisitRecord {
    pub fn new(visit: &Visit, game: &Match) -> Self {
        let dart = |i: usize| visit.darts().get(i).map(|d: &Dart| (d.score(), d.multiplier()));
        Self {
            id: visit.id(),
            match_id: visit.game(),
            leg_id: visit.leg(),
            thrower: game.player(visit.thrower()),
            dart1: dart(0),
            dart2: dart(1),
            dart3: dart(2),
            total: visit.total(),
            bust: visit.is_bust(),
            checkout: visit.is_checkout(),
            created_order: visit.order(),
        }
    }
}
