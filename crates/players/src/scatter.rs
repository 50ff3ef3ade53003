use super::*;
use rand::Rng;
use rbd_board::Point;
use rbd_core::*;

/// Standard normal pair from two uniforms via the Box–Muller transform.
///
/// `u1` must lie in `(0, 1]` and `u2` in `[0, 1)`.
pub fn box_muller(u1: f32, u2: f32) -> (f32, f32) {
    let radius = (-2. * u1.ln()).sqrt();
    let theta = 2. * std::f32::consts::PI * u2;
    (radius * theta.cos(), radius * theta.sin())
}

/// Gaussian aim error with independent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    sigma: Coordinate,
}

impl Scatter {
    /// One displacement drawn from the given source.
    pub fn sample<R>(&self, rng: &mut R) -> (Coordinate, Coordinate)
    where
        R: Rng + ?Sized,
    {
        let u1 = 1. - rng.random::<f32>();
        let u2 = rng.random::<f32>();
        let (z0, z1) = box_muller(u1, u2);
        (z0 * self.sigma, z1 * self.sigma)
    }
    /// Where a dart aimed at `aim` lands, kept on the board face.
    pub fn land<R>(&self, aim: Point, rng: &mut R) -> Point
    where
        R: Rng + ?Sized,
    {
        let (dx, dy) = self.sample(rng);
        aim.shift(dx, dy).clamp(AIM_CLAMP)
    }
}

impl From<Profile> for Scatter {
    fn from(profile: Profile) -> Self {
        Self {
            sigma: profile.sigma(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn unit_draws() {
        let (x, y) = box_muller(1., 0.);
        assert_eq!((x, y), (0., 0.));
        let (x, y) = box_muller((-0.5f32).exp(), 0.);
        assert!((x - 1.).abs() < 1e-5);
        assert!(y.abs() < 1e-5);
        let (x, y) = box_muller((-0.5f32).exp(), 0.25);
        assert!(x.abs() < 1e-5);
        assert!((y - 1.).abs() < 1e-5);
    }

    #[test]
    fn standard_normal_moments() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let n = 20_000;
        let draws = (0..n)
            .map(|_| {
                let u1 = 1. - rng.random::<f32>();
                let u2 = rng.random::<f32>();
                box_muller(u1, u2).0
            })
            .collect::<Vec<_>>();
        let mean = draws.iter().sum::<f32>() / n as f32;
        let var = draws.iter().map(|z| (z - mean).powi(2)).sum::<f32>() / n as f32;
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.).abs() < 0.1, "variance {}", var);
    }

    #[test]
    fn zero_sigma_stays_put() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let scatter = Scatter::from(Profile::perfect());
        let aim = Point::new(0.3, -0.4);
        assert_eq!(scatter.land(aim, rng), aim);
    }

    #[test]
    fn landing_is_clamped() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let scatter = Scatter::from(Profile::custom(5.).unwrap());
        for _ in 0..100 {
            let p = scatter.land(Point::default(), rng);
            assert!(p.x().abs() <= AIM_CLAMP);
            assert!(p.y().abs() <= AIM_CLAMP);
        }
    }
}
