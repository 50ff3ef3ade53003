use super::*;
use rand::Rng;
use rbd_board::Board;
use rbd_board::Dart;
use rbd_board::Segment;
use rbd_core::*;
use rbd_gameplay::Step;

/// The darts of one simulated visit.
///
/// `total` is the raw sum of what landed. Whether that sum counts is for the
/// visit resolver to decide, exactly as it would for a human's darts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Throws {
    darts: Vec<Dart>,
    total: Score,
}

impl Throws {
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }
    pub fn total(&self) -> Score {
        self.total
    }
}

impl From<Throws> for Vec<Dart> {
    fn from(throws: Throws) -> Self {
        throws.darts
    }
}

impl From<Vec<Dart>> for Throws {
    fn from(darts: Vec<Dart>) -> Self {
        Self {
            total: darts.iter().map(Dart::value).sum(),
            darts,
        }
    }
}

impl std::fmt::Display for Throws {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let darts = self
            .darts
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} ({})", darts, self.total)
    }
}

/// A simulated thrower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bot {
    profile: Profile,
}

impl Bot {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
    pub fn profile(&self) -> Profile {
        self.profile
    }
    /// Throws one dart at `target`.
    pub fn aim<R>(&self, target: Segment, rng: &mut R) -> Dart
    where
        R: Rng + ?Sized,
    {
        let landed = Scatter::from(self.profile).land(Board::canonical(target), rng);
        let dart = Board::throw(landed);
        log::trace!("aimed {:<4} hit {}", target, dart);
        dart
    }
    /// Throws a visit from `remaining`.
    ///
    /// Stops early once a dart busts or finishes under the given double-out
    /// rule, so no dart is thrown that the resolver would discard.
    pub fn visit<R>(&self, remaining: Score, double_out: bool, rng: &mut R) -> Throws
    where
        R: Rng + ?Sized,
    {
        let mut running = remaining;
        let mut darts = Vec::with_capacity(DARTS_PER_VISIT);
        for thrown in 0..DARTS_PER_VISIT {
            let target = Policy::target(running, DARTS_PER_VISIT - thrown);
            let dart = self.aim(target, rng);
            darts.push(dart);
            match Step::after(running, dart.segment(), double_out) {
                Step::Open(left) => running = left,
                Step::Bust(_) | Step::Checkout => break,
            }
        }
        Throws::from(darts)
    }
}

impl From<Level> for Bot {
    fn from(level: Level) -> Self {
        Self::new(Profile::from(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rbd_gameplay::Outcome;

    fn perfect() -> Bot {
        Bot::new(Profile::perfect())
    }

    #[test]
    fn perfect_aim_hits_target() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for segment in Segment::all().filter(|s| !s.is_miss()) {
            assert_eq!(perfect().aim(segment, rng).segment(), segment);
        }
    }

    #[test]
    fn perfect_maximum() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let throws = perfect().visit(501, true, rng);
        assert_eq!(throws.total(), 180);
        assert_eq!(throws.darts().len(), 3);
    }

    #[test]
    fn perfect_checkout_stops_early() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let throws = perfect().visit(100, true, rng);
        assert_eq!(throws.darts().len(), 2);
        assert_eq!(throws.total(), 100);
        assert!(Outcome::resolve(100, throws.darts(), true).is_checkout());
    }

    #[test]
    fn perfect_bull_finish() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let throws = perfect().visit(170, true, rng);
        let labels = throws.darts().iter().map(|d| d.segment()).collect::<Vec<_>>();
        assert_eq!(labels, vec![Segment::Triple(20), Segment::Triple(20), Segment::Bull]);
    }

    /// Replays a fixed cycle of words.
    struct Script(Vec<u32>, usize);

    impl rand::RngCore for Script {
        fn next_u32(&mut self) -> u32 {
            let word = self.0[self.1 % self.0.len()];
            self.1 += 1;
            word
        }
        fn next_u64(&mut self) -> u64 {
            (self.next_u32() as u64) << 32 | self.next_u32() as u64
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst.iter_mut() {
                *byte = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn scripted_noise_lands_exactly() {
        // uniforms 0.5 then 0.0: a push of sigma * sqrt(2 ln 2) along +x
        let ref mut rng = Script(vec![0x8000_0000, 0], 0);
        let bot = Bot::new(Profile::custom(0.1).unwrap());
        let dart = bot.aim(Segment::Triple(20), rng);
        let landed = dart.position().unwrap();
        let push = 0.1 * (2. * std::f32::consts::LN_2).sqrt();
        let aim = Board::canonical(Segment::Triple(20));
        assert!((landed.x() - push).abs() < 1e-5);
        assert!((landed.y() - aim.y()).abs() < 1e-5);
        assert_eq!(dart.segment(), Segment::Triple(1));
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let bot = Bot::new(Profile::custom(0.1).unwrap());
        let a = bot.aim(Segment::Triple(20), &mut SmallRng::seed_from_u64(11));
        let b = bot.aim(Segment::Triple(20), &mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn seeded_bots_repeat() {
        let bot = Bot::from(Level::weakest());
        let a = bot.visit(501, true, &mut SmallRng::seed_from_u64(42));
        let b = bot.visit(501, true, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn never_throws_past_the_end() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let bot = Bot::from(Level::weakest());
        for remaining in 2..=170 {
            let throws = bot.visit(remaining, true, rng);
            let outcome = Outcome::resolve(remaining, throws.darts(), true);
            assert_eq!(outcome.counted(), throws.darts().len());
            assert!(throws.darts().len() <= DARTS_PER_VISIT);
        }
    }

    #[test]
    fn darts_remember_landing() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let throws = Bot::from(Level::strongest()).visit(301, false, rng);
        assert!(throws.darts().iter().all(|d| d.position().is_some()));
    }
}
