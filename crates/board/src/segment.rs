use rbd_core::Score;

/// A scoring region of the board.
///
/// Numbered variants carry the wedge number `1..=20`. The bulls are modelled
/// as their own variants rather than as `Single(25)` / `Double(25)` so that a
/// treble bull is unrepresentable, but they still report base 25 with
/// multiplier 1 (outer) or 2 (bullseye) so that `value = score * multiplier`
/// holds for every segment.
///
/// # Labels
///
/// - `S20` or `20` — single twenty
/// - `D16` — double sixteen
/// - `T20` — treble twenty
/// - `25` or `OUTER` — outer bull
/// - `BULL`, `DB`, `D25` or `50` — bullseye
/// - `MISS` — off the scoring area
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    Single(u8),
    Double(u8),
    Triple(u8),
    Outer,
    Bull,
    Miss,
}

impl Segment {
    /// Base score before the multiplier (0, 1..=20, or 25).
    pub fn score(&self) -> Score {
        match self {
            Self::Single(n) | Self::Double(n) | Self::Triple(n) => *n as Score,
            Self::Outer | Self::Bull => 25,
            Self::Miss => 0,
        }
    }
    /// 1 single, 2 double, 3 treble.
    pub fn multiplier(&self) -> u8 {
        match self {
            Self::Double(_) | Self::Bull => 2,
            Self::Triple(_) => 3,
            Self::Single(_) | Self::Outer | Self::Miss => 1,
        }
    }
    /// Points scored by this segment.
    pub fn value(&self) -> Score {
        self.score() * self.multiplier() as Score
    }
    /// The wedge number, if this segment lies in a numbered wedge.
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Single(n) | Self::Double(n) | Self::Triple(n) => Some(*n),
            _ => None,
        }
    }
    /// Whether a dart here may legally finish a double-out leg.
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_) | Self::Bull)
    }
    pub fn is_bull(&self) -> bool {
        matches!(self, Self::Outer | Self::Bull)
    }
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss)
    }
    /// Every scoring segment plus the miss.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=20u8)
            .flat_map(|n| [Self::Single(n), Self::Double(n), Self::Triple(n)])
            .chain([Self::Outer, Self::Bull, Self::Miss])
    }
}

/// (score, multiplier) isomorphism, as accepted from throw input.
///
/// A zero score is a miss regardless of multiplier.
impl TryFrom<(Score, u8)> for Segment {
    type Error = SegmentError;
    fn try_from((score, multiplier): (Score, u8)) -> Result<Self, Self::Error> {
        match (score, multiplier) {
            (0, 1..=3) => Ok(Self::Miss),
            (1..=20, 1) => Ok(Self::Single(score as u8)),
            (1..=20, 2) => Ok(Self::Double(score as u8)),
            (1..=20, 3) => Ok(Self::Triple(score as u8)),
            (25, 1) => Ok(Self::Outer),
            (25, 2) => Ok(Self::Bull),
            _ => Err(SegmentError::Throw(score, multiplier)),
        }
    }
}
impl From<Segment> for (Score, u8) {
    fn from(s: Segment) -> Self {
        (s.score(), s.multiplier())
    }
}

/// str isomorphism
impl TryFrom<&str> for Segment {
    type Error = SegmentError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let label = s.trim().to_uppercase();
        match label.as_str() {
            "MISS" | "M" | "0" => return Ok(Self::Miss),
            "25" | "S25" | "OUTER" | "SB" => return Ok(Self::Outer),
            "50" | "D25" | "BULL" | "DB" => return Ok(Self::Bull),
            _ => {}
        }
        let (multiplier, digits) = match label.chars().next() {
            Some('S') => (1, &label[1..]),
            Some('D') => (2, &label[1..]),
            Some('T') => (3, &label[1..]),
            _ => (1, label.as_str()),
        };
        digits
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=20).contains(n))
            .map(|n| Self::try_from((n as Score, multiplier)))
            .unwrap_or_else(|| Err(SegmentError::Label(s.to_string())))
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Single(n) => write!(f, "S{}", n),
            Self::Double(n) => write!(f, "D{}", n),
            Self::Triple(n) => write!(f, "T{}", n),
            Self::Outer => write!(f, "25"),
            Self::Bull => write!(f, "BULL"),
            Self::Miss => write!(f, "MISS"),
        }
    }
}

/// Rejected throw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    Label(String),
    Throw(Score, u8),
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Label(s) => write!(f, "unrecognized segment label: {}", s),
            Self::Throw(s, m) => write!(f, "impossible throw: score {} multiplier {}", s, m),
        }
    }
}

impl std::error::Error for SegmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bull_is_base_twenty_five() {
        assert_eq!(Segment::Bull.score(), 25);
        assert_eq!(Segment::Bull.multiplier(), 2);
        assert_eq!(Segment::Bull.value(), 50);
        assert_eq!(Segment::Outer.value(), 25);
    }

    #[test]
    fn value_is_score_times_multiplier() {
        assert!(Segment::all().all(|s| s.value() == s.score() * s.multiplier() as Score));
    }

    #[test]
    fn parse_labels() {
        assert_eq!(Segment::try_from("T20"), Ok(Segment::Triple(20)));
        assert_eq!(Segment::try_from("d16"), Ok(Segment::Double(16)));
        assert_eq!(Segment::try_from("20"), Ok(Segment::Single(20)));
        assert_eq!(Segment::try_from("S7"), Ok(Segment::Single(7)));
        assert_eq!(Segment::try_from("DB"), Ok(Segment::Bull));
        assert_eq!(Segment::try_from("D25"), Ok(Segment::Bull));
        assert_eq!(Segment::try_from("OUTER"), Ok(Segment::Outer));
        assert_eq!(Segment::try_from("MISS"), Ok(Segment::Miss));
    }

    #[test]
    fn reject_bad_labels() {
        assert!(Segment::try_from("T25").is_err());
        assert!(Segment::try_from("D21").is_err());
        assert!(Segment::try_from("X3").is_err());
        assert!(Segment::try_from("").is_err());
    }

    #[test]
    fn display_parses_back() {
        for segment in Segment::all() {
            let label = segment.to_string();
            assert_eq!(Segment::try_from(label.as_str()), Ok(segment));
        }
    }

    #[test]
    fn throw_input_validation() {
        assert_eq!(Segment::try_from((20, 3)), Ok(Segment::Triple(20)));
        assert_eq!(Segment::try_from((25, 2)), Ok(Segment::Bull));
        assert_eq!(Segment::try_from((0, 2)), Ok(Segment::Miss));
        assert!(Segment::try_from((25, 3)).is_err());
        assert!(Segment::try_from((21, 1)).is_err());
        assert!(Segment::try_from((5, 4)).is_err());
    }

    #[test]
    fn only_doubles_and_bull_finish() {
        assert!(Segment::Double(1).is_double());
        assert!(Segment::Bull.is_double());
        assert!(!Segment::Outer.is_double());
        assert!(!Segment::Triple(20).is_double());
    }
}
