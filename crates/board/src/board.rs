use super::*;
use rbd_core::*;

/// Wedge numbers clockwise from the top of a competition board.
pub const WEDGES: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// The geometry resolver.
///
/// Maps aim points to the segment they land in and, inversely, segments to
/// the canonical point a thrower would aim at. Both directions are pure, so
/// human and simulated throws resolve through exactly the same arithmetic.
///
/// Each wedge spans 18° centred on its nominal bearing: the twenty covers
/// `[-9°, 9°)` around straight up, the one covers `[9°, 27°)`, and so on.
pub struct Board;

impl Board {
    /// Resolves a landing point to the segment it scores.
    pub fn resolve(point: Point) -> Segment {
        match Ring::from(point.radius()) {
            Ring::Bull => Segment::Bull,
            Ring::Outer => Segment::Outer,
            Ring::InnerSingle | Ring::OuterSingle => Segment::Single(Self::wedge(point.bearing())),
            Ring::Triple => Segment::Triple(Self::wedge(point.bearing())),
            Ring::Double => Segment::Double(Self::wedge(point.bearing())),
            Ring::Off => Segment::Miss,
        }
    }
    /// Resolves a landing point into a dart that remembers where it landed.
    pub fn throw(point: Point) -> Dart {
        Dart::from(Self::resolve(point)).at(point)
    }
    /// The centroid of a segment: its wedge bearing at the middle of its ring.
    ///
    /// Singles aim at the outer single band, which is the wider target
    /// laterally. The miss maps to a point just outside the double wire.
    pub fn canonical(segment: Segment) -> Point {
        match segment {
            Segment::Bull => Point::default(),
            Segment::Outer => Point::polar(Ring::Outer.middle(), 0.),
            Segment::Single(n) => Point::polar(Ring::OuterSingle.middle(), Self::bearing(n)),
            Segment::Triple(n) => Point::polar(Ring::Triple.middle(), Self::bearing(n)),
            Segment::Double(n) => Point::polar(Ring::Double.middle(), Self::bearing(n)),
            Segment::Miss => Point::polar(DOUBLE_OUTER * 1.1, 0.),
        }
    }
    /// The wedge number under a bearing (degrees clockwise from top).
    pub fn wedge(bearing: Coordinate) -> u8 {
        let shifted = (bearing + WEDGE_DEGREES / 2.).rem_euclid(360.);
        let index = (shifted / WEDGE_DEGREES) as usize;
        WEDGES[index.min(WEDGES.len() - 1)]
    }
    /// The nominal bearing of a wedge number, or straight up for an unknown one.
    pub fn bearing(number: u8) -> Coordinate {
        WEDGES
            .iter()
            .position(|&w| w == number)
            .map(|i| i as Coordinate * WEDGE_DEGREES)
            .unwrap_or(0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_bullseye() {
        assert_eq!(Board::resolve(Point::new(0., 0.)), Segment::Bull);
    }

    #[test]
    fn straight_up_is_twenty() {
        assert_eq!(Board::resolve(Point::new(0., 0.4)), Segment::Single(20));
        assert_eq!(Board::resolve(Point::new(0., 0.6)), Segment::Triple(20));
        assert_eq!(Board::resolve(Point::new(0., 0.98)), Segment::Double(20));
    }

    #[test]
    fn compass_points() {
        assert_eq!(Board::resolve(Point::new(0.8, 0.)), Segment::Single(6));
        assert_eq!(Board::resolve(Point::new(0., -0.8)), Segment::Single(3));
        assert_eq!(Board::resolve(Point::new(-0.8, 0.)), Segment::Single(11));
    }

    #[test]
    fn outside_board_misses() {
        assert_eq!(Board::resolve(Point::new(0., 1.05)), Segment::Miss);
        assert_eq!(Board::resolve(Point::new(0.9, 0.9)), Segment::Miss);
    }

    #[test]
    fn outer_bull_ignores_wedge() {
        let r = Ring::Outer.middle();
        for bearing in [0., 45., 200., 333.] {
            assert_eq!(Board::resolve(Point::polar(r, bearing)), Segment::Outer);
        }
    }

    #[test]
    fn wedges_are_centred() {
        assert_eq!(Board::wedge(0.), 20);
        assert_eq!(Board::wedge(8.9), 20);
        assert_eq!(Board::wedge(351.1), 20);
        assert_eq!(Board::wedge(9.1), 1);
        assert_eq!(Board::wedge(18.), 1);
        assert_eq!(Board::wedge(342.), 5);
    }

    #[test]
    fn canonical_resolves_to_itself() {
        Segment::all()
            .map(|s| (s, Board::canonical(s)))
            .for_each(|(s, p)| assert_eq!(Board::resolve(p), s, "{} at {}", s, p));
    }

    #[test]
    fn throw_keeps_position() {
        let p = Point::new(0., 0.6);
        let dart = Board::throw(p);
        assert_eq!(dart.segment(), Segment::Triple(20));
        assert_eq!(dart.position(), Some(p));
    }
}
