use rbd_core::Coordinate;

/// A position in board-normalized space.
///
/// The origin is the centre of the bullseye, `x` grows to the right and `y`
/// grows upward, so the twenty wedge sits along the positive `y` axis. The
/// outer wire of the double ring has radius 1.0.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    /// Builds a point from a radius and a bearing in degrees,
    /// measured clockwise from straight up.
    pub fn polar(radius: Coordinate, bearing: Coordinate) -> Self {
        let theta = bearing.to_radians();
        Self {
            x: radius * theta.sin(),
            y: radius * theta.cos(),
        }
    }
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    /// Distance from the centre of the board.
    pub fn radius(&self) -> Coordinate {
        self.x.hypot(self.y)
    }
    /// Clockwise angle from straight up, in `[0, 360)` degrees.
    pub fn bearing(&self) -> Coordinate {
        let degrees = self.x.atan2(self.y).to_degrees();
        if degrees < 0. { degrees + 360. } else { degrees }
    }
    /// Offsets this point by the given displacement.
    pub fn shift(self, dx: Coordinate, dy: Coordinate) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
    /// Restricts each axis to `[-bound, bound]`.
    pub fn clamp(self, bound: Coordinate) -> Self {
        Self {
            x: self.x.clamp(-bound, bound),
            y: self.y.clamp(-bound, bound),
        }
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:+.3}, {:+.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearing_is_clockwise_from_top() {
        assert!((Point::new(0., 1.).bearing() - 0.).abs() < 1e-4);
        assert!((Point::new(1., 0.).bearing() - 90.).abs() < 1e-4);
        assert!((Point::new(0., -1.).bearing() - 180.).abs() < 1e-4);
        assert!((Point::new(-1., 0.).bearing() - 270.).abs() < 1e-4);
    }

    #[test]
    fn polar_inverts_bearing() {
        let p = Point::polar(0.5, 123.0);
        assert!((p.radius() - 0.5).abs() < 1e-5);
        assert!((p.bearing() - 123.0).abs() < 1e-3);
    }

    #[test]
    fn clamp_each_axis() {
        let p = Point::new(2.0, -3.0).clamp(0.96);
        assert_eq!(p, Point::new(0.96, -0.96));
    }
}
