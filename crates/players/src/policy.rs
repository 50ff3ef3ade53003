use rbd_board::Checkout;
use rbd_board::Segment;
use rbd_core::*;

/// Leaves worth setting up when no finish is on, most comfortable first.
const LEAVES: [Score; 8] = [32, 40, 36, 24, 16, 20, 8, 4];

/// Target selection.
///
/// In priority order: the first dart of a checkout route that fits in the
/// darts still in hand; a double for any even remainder up to 40; the
/// bullseye on 50; otherwise a setup shot. Setup means treble twenty while
/// the remainder is large, else a single that leaves a comfortable double,
/// else the biggest treble that does not leave one or less.
///
/// The policy is re-evaluated before every dart, so a route that is hit as
/// planned is followed dart by dart, and one that is missed is re-planned
/// from the new remainder. Later darts are never taken by position from
/// the route chosen at the start of the visit.
pub struct Policy;

impl Policy {
    pub fn target(remaining: Score, darts: usize) -> Segment {
        if let Some(route) = Checkout::within(remaining, darts) {
            return route[0];
        }
        match remaining {
            2..=40 if remaining % 2 == 0 => Segment::Double((remaining / 2) as u8),
            50 => Segment::Bull,
            _ => Self::setup(remaining),
        }
    }
    fn setup(remaining: Score) -> Segment {
        if remaining >= 62 {
            return Segment::Triple(20);
        }
        LEAVES
            .iter()
            .map(|leave| remaining - leave)
            .find(|single| (1..=20).contains(single))
            .map(|single| Segment::Single(single as u8))
            .or_else(|| {
                (1..=20u8)
                    .rev()
                    .map(Segment::Triple)
                    .find(|treble| remaining - treble.value() >= 2)
            })
            .unwrap_or(Segment::Single(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::*;

    #[test]
    fn follows_routes() {
        assert_eq!(Policy::target(170, 3), Triple(20));
        assert_eq!(Policy::target(50, 1), Bull);
        assert_eq!(Policy::target(32, 1), Double(16));
        assert_eq!(Policy::target(2, 1), Double(1));
    }

    #[test]
    fn two_dart_finish_needs_two_darts() {
        let route = Checkout::within(100, 2).unwrap();
        assert_eq!(Policy::target(100, 2), route[0]);
        assert_eq!(Policy::target(100, 1), Triple(20));
    }

    #[test]
    fn missed_route_is_replanned() {
        let planned = Checkout::within(100, 3).unwrap();
        assert_eq!(planned, &[Triple(20), Double(20)][..]);
        // S20 instead of T20 leaves 80 with two darts
        assert_eq!(Policy::target(80, 2), Triple(20));
        assert_ne!(Policy::target(80, 2), planned[1]);
    }

    #[test]
    fn large_scores_go_treble_twenty() {
        assert_eq!(Policy::target(501, 3), Triple(20));
        assert_eq!(Policy::target(169, 3), Triple(20));
        assert_eq!(Policy::target(180, 3), Triple(20));
    }

    #[test]
    fn setup_leaves_a_double() {
        assert_eq!(Policy::target(45, 1), Single(13));
        assert_eq!(Policy::target(57, 1), Single(17));
        assert_eq!(Policy::target(3, 1), Single(1));
    }

    #[test]
    fn never_aims_to_leave_one() {
        for remaining in 2..=501 {
            for darts in 1..=DARTS_PER_VISIT {
                let target = Policy::target(remaining, darts);
                assert!(remaining - target.value() != 1, "{} {}", remaining, target);
            }
        }
    }
}
