use rbd_core::*;

/// Concentric scoring band, innermost first.
///
/// The band fixes the multiplier and whether the wedge number applies at all:
/// both bulls ignore the wedge, and anything beyond the double wire is a miss.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ring {
    Bull,
    Outer,
    InnerSingle,
    Triple,
    OuterSingle,
    Double,
    Off,
}

impl Ring {
    /// Inner and outer radius of the band.
    pub fn bounds(&self) -> (Coordinate, Coordinate) {
        match self {
            Self::Bull => (0., BULL_RADIUS),
            Self::Outer => (BULL_RADIUS, OUTER_RADIUS),
            Self::InnerSingle => (OUTER_RADIUS, TRIPLE_INNER),
            Self::Triple => (TRIPLE_INNER, TRIPLE_OUTER),
            Self::OuterSingle => (TRIPLE_OUTER, DOUBLE_INNER),
            Self::Double => (DOUBLE_INNER, DOUBLE_OUTER),
            Self::Off => (DOUBLE_OUTER, Coordinate::INFINITY),
        }
    }
    /// Radius halfway across the band, where an aimed dart has the most room.
    pub fn middle(&self) -> Coordinate {
        match self {
            Self::Bull => 0.,
            Self::Off => DOUBLE_OUTER,
            _ => {
                let (lo, hi) = self.bounds();
                (lo + hi) / 2.
            }
        }
    }
}

/// Radius classification. Wires belong to the inner band.
impl From<Coordinate> for Ring {
    fn from(radius: Coordinate) -> Self {
        match radius {
            r if r <= BULL_RADIUS => Self::Bull,
            r if r <= OUTER_RADIUS => Self::Outer,
            r if r <= TRIPLE_INNER => Self::InnerSingle,
            r if r <= TRIPLE_OUTER => Self::Triple,
            r if r <= DOUBLE_INNER => Self::OuterSingle,
            r if r <= DOUBLE_OUTER => Self::Double,
            _ => Self::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middles_classify_to_themselves() {
        for ring in [
            Ring::Bull,
            Ring::Outer,
            Ring::InnerSingle,
            Ring::Triple,
            Ring::OuterSingle,
            Ring::Double,
        ] {
            assert_eq!(Ring::from(ring.middle()), ring);
        }
    }

    #[test]
    fn beyond_double_wire_is_off() {
        assert_eq!(Ring::from(1.0001), Ring::Off);
        assert_eq!(Ring::from(1.0), Ring::Double);
    }
}
