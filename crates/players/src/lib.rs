//! Simulated throwers.
//!
//! A bot picks a target the way a competent player would, aims at that
//! segment's canonical point, and misses by Gaussian noise scaled to its
//! skill. The landing point is resolved by the same geometry as any other
//! throw, so simulated darts are indistinguishable from entered ones.
//!
//! ## Skill
//!
//! - [`Level`] — The nine calibrated skill tiers
//! - [`Profile`] — Aim dispersion, from a tier or a custom sigma
//!
//! ## Throwing
//!
//! - [`Policy`] — Target selection from remaining score and darts in hand
//! - [`Scatter`] — Box–Muller aim error over any [`rand::Rng`]
//! - [`Bot`] — Throws complete visits
//! - [`Throws`] — The darts of one simulated visit
mod bot;
mod level;
mod policy;
mod profile;
mod scatter;

pub use bot::*;
pub use level::*;
pub use policy::*;
pub use profile::*;
pub use scatter::*;
