use super::*;
use rbd_board::Segment;
use rbd_core::Score;

/// The effect of one dart on a running remainder.
///
/// This is the single place the bust and finish rules live. The visit
/// resolver folds it over a visit; the bot simulator applies it dart by dart
/// to decide when to stop throwing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still in play with this many points left.
    Open(Score),
    /// The visit is over and scores nothing.
    Bust(Bust),
    /// The leg is won.
    Checkout,
}

impl Step {
    /// Applies a dart landing in `segment` to `running` points left.
    ///
    /// A dart worth nothing changes nothing. Otherwise the remainder going
    /// negative or landing on one busts, and reaching zero finishes unless
    /// double-out is required and the dart was neither a double nor the
    /// bullseye, which also busts.
    pub fn after(running: Score, segment: Segment, double_out: bool) -> Self {
        let value = segment.value();
        if value == 0 {
            return Self::Open(running);
        }
        match running - value {
            left if left < 0 => Self::Bust(Bust::Overshoot),
            1 => Self::Bust(Bust::LeftOne),
            0 if double_out && !segment.is_double() => Self::Bust(Bust::NoDouble),
            0 => Self::Checkout,
            left => Self::Open(left),
        }
    }
    /// True once no further dart in the visit should be thrown.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbd_board::Segment::*;

    #[test]
    fn open_subtracts() {
        assert_eq!(Step::after(501, Triple(20), true), Step::Open(441));
    }
    #[test]
    fn overshoot_busts() {
        assert_eq!(Step::after(41, Triple(15), true), Step::Bust(Bust::Overshoot));
    }
    #[test]
    fn leaving_one_busts() {
        assert_eq!(Step::after(2, Single(1), true), Step::Bust(Bust::LeftOne));
        assert_eq!(Step::after(2, Single(1), false), Step::Bust(Bust::LeftOne));
    }
    #[test]
    fn double_finishes() {
        assert_eq!(Step::after(40, Double(20), true), Step::Checkout);
        assert_eq!(Step::after(50, Bull, true), Step::Checkout);
    }
    #[test]
    fn single_finish_needs_straight_out() {
        assert_eq!(Step::after(20, Single(20), true), Step::Bust(Bust::NoDouble));
        assert_eq!(Step::after(20, Single(20), false), Step::Checkout);
        assert_eq!(Step::after(25, Outer, true), Step::Bust(Bust::NoDouble));
    }
    #[test]
    fn miss_changes_nothing() {
        assert_eq!(Step::after(32, Miss, true), Step::Open(32));
    }
}
