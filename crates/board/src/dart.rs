use super::*;
use rbd_core::Score;

/// One resolved throw.
///
/// The segment is authoritative for scoring. The landing position is kept
/// when the throw came from the geometry resolver (bot throws, or a UI that
/// captured the click), and is absent for darts keyed in by score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Dart {
    segment: Segment,
    position: Option<Point>,
}

impl Dart {
    pub fn segment(&self) -> Segment {
        self.segment
    }
    pub fn position(&self) -> Option<Point> {
        self.position
    }
    pub fn score(&self) -> Score {
        self.segment.score()
    }
    pub fn multiplier(&self) -> u8 {
        self.segment.multiplier()
    }
    pub fn value(&self) -> Score {
        self.segment.value()
    }
    /// Attaches the landing position.
    pub fn at(self, position: Point) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }
    /// Parses a whitespace-separated list of segment labels into darts.
    pub fn parse(s: &str) -> Result<Vec<Self>, SegmentError> {
        s.split_whitespace()
            .map(Segment::try_from)
            .map(|r| r.map(Self::from))
            .collect()
    }
}

impl From<Segment> for Dart {
    fn from(segment: Segment) -> Self {
        Self {
            segment,
            position: None,
        }
    }
}

/// Throw input from any source: base score and multiplier.
impl TryFrom<(Score, u8)> for Dart {
    type Error = SegmentError;
    fn try_from(pair: (Score, u8)) -> Result<Self, Self::Error> {
        Segment::try_from(pair).map(Self::from)
    }
}

impl std::fmt::Display for Dart {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_visit() {
        let darts = Dart::parse("T20 T20 BULL").unwrap();
        assert_eq!(darts.len(), 3);
        assert_eq!(darts.iter().map(Dart::value).sum::<Score>(), 170);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Dart::parse("T20 Q9").is_err());
    }

    #[test]
    fn keyed_darts_have_no_position() {
        let dart = Dart::try_from((19, 3)).unwrap();
        assert_eq!(dart.value(), 57);
        assert!(dart.position().is_none());
    }
}
