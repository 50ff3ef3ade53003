use super::*;
use rbd_board::Checkout;
use rbd_core::*;
use std::collections::HashMap;

/// Scoring statistics for one seat over a visit history.
///
/// Busts count their darts but score nothing. The first-nine average uses
/// the seat's first three visits of every leg. A checkout attempt is any
/// visit that began on a score finishable in one visit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    visits: u32,
    darts: u32,
    points: i32,
    nine_darts: u32,
    nine_points: i32,
    best: Score,
    tons: u32,
    ton_forties: u32,
    maximums: u32,
    best_checkout: Score,
    attempts: u32,
    checkouts: u32,
}

impl Tally {
    /// Accumulates the visits thrown by `seat`, in any input order.
    pub fn of(visits: &[Visit], seat: Position) -> Self {
        let mut mine = visits
            .iter()
            .filter(|v| v.thrower() == seat)
            .collect::<Vec<_>>();
        mine.sort_by_key(|v| v.order());
        let mut opened = HashMap::<ID<Leg>, u32>::new();
        mine.into_iter().fold(Self::default(), |mut tally, visit| {
            let nth = opened.entry(visit.leg()).or_default();
            *nth += 1;
            if *nth <= 3 {
                tally.nine_darts += visit.darts().len() as u32;
                tally.nine_points += visit.total() as i32;
            }
            tally.absorb(visit);
            tally
        })
    }
    fn absorb(&mut self, visit: &Visit) {
        let total = visit.total();
        self.visits += 1;
        self.darts += visit.darts().len() as u32;
        self.points += total as i32;
        self.best = self.best.max(total);
        match total {
            MAX_VISIT => self.maximums += 1,
            140.. => self.ton_forties += 1,
            100.. => self.tons += 1,
            _ => {}
        }
        if Checkout::finishable(visit.prior()) {
            self.attempts += 1;
        }
        if visit.is_checkout() {
            self.checkouts += 1;
            self.best_checkout = self.best_checkout.max(total);
        }
    }
}

impl Tally {
    pub fn visits(&self) -> u32 {
        self.visits
    }
    pub fn darts(&self) -> u32 {
        self.darts
    }
    pub fn points(&self) -> i32 {
        self.points
    }
    /// Points per three darts.
    pub fn average(&self) -> f32 {
        Self::per_three(self.points, self.darts)
    }
    /// Points per three darts over each leg's first nine darts.
    pub fn first_nine(&self) -> f32 {
        Self::per_three(self.nine_points, self.nine_darts)
    }
    /// Highest visit total.
    pub fn best(&self) -> Score {
        self.best
    }
    /// Visits of 100 to 139.
    pub fn tons(&self) -> u32 {
        self.tons
    }
    /// Visits of 140 to 179.
    pub fn ton_forties(&self) -> u32 {
        self.ton_forties
    }
    /// Visits of 180.
    pub fn maximums(&self) -> u32 {
        self.maximums
    }
    pub fn best_checkout(&self) -> Score {
        self.best_checkout
    }
    pub fn checkouts(&self) -> u32 {
        self.checkouts
    }
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
    /// Checkouts as a percentage of attempts.
    pub fn checkout_rate(&self) -> Probability {
        match self.attempts {
            0 => 0.,
            n => 100. * self.checkouts as Probability / n as Probability,
        }
    }
    fn per_three(points: i32, darts: u32) -> f32 {
        match darts {
            0 => 0.,
            n => 3. * points as f32 / n as f32,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "avg {:.2} | first 9 {:.2} | 180s {} | 140+ {} | 100+ {} | best out {} | out {:.1}%",
            self.average(),
            self.first_nine(),
            self.maximums,
            self.ton_forties,
            self.tons,
            self.best_checkout,
            self.checkout_rate()
        )
    }
}
