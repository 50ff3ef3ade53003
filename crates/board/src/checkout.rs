use super::*;
use rbd_core::Score;

/// An ordered sequence of one to three targets that finishes a leg.
pub type Route = &'static [Segment];

/// The checkout advisory table.
///
/// Keyed by remaining score `2..=170`. Each entry lists alternative routes in
/// preference order; index 0 is the primary suggestion. Every route ends on a
/// double or the bullseye. Remainders with no three-dart finish (the bogey
/// numbers 159, 162, 163, 165, 166, 168, 169, and anything above 170) have no
/// entry.
pub struct Checkout;

impl Checkout {
    /// All routes for a remaining score, best first. Empty if unfinishable.
    pub fn routes(remaining: Score) -> &'static [Route] {
        TABLE
            .binary_search_by_key(&remaining, |(r, _)| *r)
            .map(|i| TABLE[i].1)
            .unwrap_or(&[])
    }
    /// The preferred route, if any.
    pub fn primary(remaining: Score) -> Option<Route> {
        Self::routes(remaining).first().copied()
    }
    /// The preferred route that fits within the given number of darts.
    pub fn within(remaining: Score, darts: usize) -> Option<Route> {
        Self::routes(remaining)
            .iter()
            .find(|route| route.len() <= darts)
            .copied()
    }
    /// Whether a single visit can finish from here.
    pub fn finishable(remaining: Score) -> bool {
        !Self::routes(remaining).is_empty()
    }
    /// Every (remaining, routes) entry in ascending order.
    pub fn entries() -> impl Iterator<Item = (Score, &'static [Route])> {
        TABLE.iter().copied()
    }
    /// Space-separated labels, e.g. `"T20 T20 BULL"`.
    pub fn describe(route: Route) -> String {
        route
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use Segment::*;

#[rustfmt::skip]
static TABLE: &[(Score, &[Route])] = &[
    (2, &[&[Double(1)]]),
    (3, &[&[Single(1), Double(1)]]),
    (4, &[&[Double(2)], &[Single(2), Double(1)], &[Double(1), Double(1)]]),
    (5, &[&[Single(1), Double(2)], &[Single(3), Double(1)], &[Triple(1), Double(1)]]),
    (6, &[&[Double(3)], &[Single(2), Double(2)], &[Single(4), Double(1)]]),
    (7, &[&[Single(3), Double(2)], &[Single(1), Double(3)], &[Triple(1), Double(2)]]),
    (8, &[&[Double(4)], &[Single(2), Double(3)], &[Single(4), Double(2)]]),
    (9, &[&[Single(1), Double(4)], &[Single(3), Double(3)], &[Triple(1), Double(3)]]),
    (10, &[&[Double(5)], &[Single(2), Double(4)], &[Single(4), Double(3)]]),
    (11, &[&[Single(3), Double(4)], &[Triple(1), Double(4)], &[Single(1), Double(5)]]),
    (12, &[&[Double(6)], &[Single(4), Double(4)], &[Single(2), Double(5)]]),
    (13, &[&[Single(5), Double(4)], &[Single(1), Double(6)], &[Single(3), Double(5)]]),
    (14, &[&[Double(7)], &[Single(2), Double(6)], &[Single(6), Double(4)]]),
    (15, &[&[Single(7), Double(4)], &[Single(3), Double(6)], &[Triple(1), Double(6)]]),
    (16, &[&[Double(8)], &[Single(4), Double(6)], &[Single(8), Double(4)]]),
    (17, &[&[Single(1), Double(8)], &[Single(5), Double(6)], &[Single(9), Double(4)]]),
    (18, &[&[Double(9)], &[Single(2), Double(8)], &[Single(6), Double(6)]]),
    (19, &[&[Single(3), Double(8)], &[Triple(1), Double(8)], &[Single(1), Double(9)]]),
    (20, &[&[Double(10)], &[Single(4), Double(8)], &[Single(2), Double(9)]]),
    (21, &[&[Single(5), Double(8)], &[Single(1), Double(10)], &[Single(3), Double(9)]]),
    (22, &[&[Double(11)], &[Single(2), Double(10)], &[Single(6), Double(8)]]),
    (23, &[&[Single(7), Double(8)], &[Single(3), Double(10)], &[Triple(1), Double(10)]]),
    (24, &[&[Double(12)], &[Single(4), Double(10)], &[Single(8), Double(8)]]),
    (25, &[&[Single(9), Double(8)], &[Single(1), Double(12)], &[Single(5), Double(10)]]),
    (26, &[&[Double(13)], &[Single(2), Double(12)], &[Single(6), Double(10)]]),
    (27, &[&[Single(11), Double(8)], &[Single(3), Double(12)], &[Triple(1), Double(12)]]),
    (28, &[&[Double(14)], &[Single(4), Double(12)], &[Single(8), Double(10)]]),
    (29, &[&[Single(13), Double(8)], &[Single(5), Double(12)], &[Single(9), Double(10)]]),
    (30, &[&[Double(15)], &[Single(6), Double(12)], &[Triple(2), Double(12)]]),
    (31, &[&[Single(15), Double(8)], &[Single(7), Double(12)], &[Single(11), Double(10)]]),
    (32, &[&[Double(16)], &[Single(8), Double(12)], &[Single(12), Double(10)]]),
    (33, &[&[Single(1), Double(16)], &[Single(9), Double(12)], &[Triple(3), Double(12)]]),
    (34, &[&[Double(17)], &[Single(2), Double(16)], &[Single(10), Double(12)]]),
    (35, &[&[Single(3), Double(16)], &[Triple(1), Double(16)], &[Single(11), Double(12)]]),
    (36, &[&[Double(18)], &[Single(4), Double(16)], &[Single(12), Double(12)]]),
    (37, &[&[Single(5), Double(16)], &[Single(1), Double(18)], &[Single(13), Double(12)]]),
    (38, &[&[Double(19)], &[Single(6), Double(16)], &[Triple(2), Double(16)]]),
    (39, &[&[Single(7), Double(16)], &[Single(3), Double(18)], &[Triple(1), Double(18)]]),
    (40, &[&[Double(20)], &[Single(8), Double(16)], &[Single(4), Double(18)]]),
    (41, &[&[Single(9), Double(16)], &[Single(1), Double(20)], &[Triple(3), Double(16)]]),
    (42, &[&[Single(10), Double(16)], &[Single(2), Double(20)], &[Single(6), Double(18)]]),
    (43, &[&[Single(3), Double(20)], &[Triple(1), Double(20)], &[Single(11), Double(16)]]),
    (44, &[&[Single(12), Double(16)], &[Single(4), Double(20)], &[Triple(4), Double(16)]]),
    (45, &[&[Single(13), Double(16)], &[Single(5), Double(20)], &[Single(9), Double(18)]]),
    (46, &[&[Single(6), Double(20)], &[Triple(2), Double(20)], &[Single(14), Double(16)]]),
    (47, &[&[Single(15), Double(16)], &[Single(7), Double(20)], &[Triple(5), Double(16)]]),
    (48, &[&[Single(16), Double(16)], &[Single(8), Double(20)], &[Single(12), Double(18)]]),
    (49, &[&[Single(9), Double(20)], &[Triple(3), Double(20)], &[Single(17), Double(16)]]),
    (50, &[&[Bull], &[Single(10), Double(20)], &[Single(18), Double(16)]]),
    (51, &[&[Single(11), Double(20)], &[Single(19), Double(16)], &[Single(15), Double(18)]]),
    (52, &[&[Single(12), Double(20)], &[Triple(4), Double(20)], &[Single(20), Double(16)]]),
    (53, &[&[Single(13), Double(20)], &[Triple(7), Double(16)], &[Single(17), Double(18)]]),
    (54, &[&[Single(14), Double(20)], &[Single(18), Double(18)], &[Triple(6), Double(18)]]),
    (55, &[&[Single(15), Double(20)], &[Triple(5), Double(20)], &[Single(19), Double(18)]]),
    (56, &[&[Single(16), Double(20)], &[Triple(8), Double(16)], &[Single(20), Double(18)]]),
    (57, &[&[Single(17), Double(20)], &[Outer, Double(16)], &[Triple(7), Double(18)]]),
    (58, &[&[Single(18), Double(20)], &[Triple(6), Double(20)], &[Triple(14), Double(8)]]),
    (59, &[&[Single(19), Double(20)], &[Triple(9), Double(16)], &[Triple(13), Double(10)]]),
    (60, &[&[Single(20), Double(20)], &[Triple(8), Double(18)], &[Triple(12), Double(12)]]),
    (61, &[&[Outer, Double(18)], &[Triple(7), Double(20)], &[Triple(15), Double(8)]]),
    (62, &[&[Triple(10), Double(16)], &[Triple(14), Double(10)], &[Single(12), Bull]]),
    (63, &[&[Triple(13), Double(12)], &[Triple(9), Double(18)], &[Single(13), Bull]]),
    (64, &[&[Triple(16), Double(8)], &[Triple(8), Double(20)], &[Single(14), Bull]]),
    (65, &[&[Outer, Double(20)], &[Triple(11), Double(16)], &[Triple(15), Double(10)]]),
    (66, &[&[Triple(10), Double(18)], &[Triple(14), Double(12)], &[Single(16), Bull]]),
    (67, &[&[Triple(17), Double(8)], &[Triple(9), Double(20)], &[Single(17), Bull]]),
    (68, &[&[Triple(20), Double(4)], &[Triple(12), Double(16)], &[Triple(16), Double(10)]]),
    (69, &[&[Triple(19), Double(6)], &[Triple(11), Double(18)], &[Triple(15), Double(12)]]),
    (70, &[&[Triple(18), Double(8)], &[Triple(10), Double(20)], &[Single(20), Bull]]),
    (71, &[&[Triple(13), Double(16)], &[Triple(17), Double(10)], &[Triple(7), Bull]]),
    (72, &[&[Triple(16), Double(12)], &[Triple(12), Double(18)], &[Triple(14), Double(15)]]),
    (73, &[&[Triple(19), Double(8)], &[Triple(11), Double(20)], &[Triple(13), Double(17)]]),
    (74, &[&[Triple(14), Double(16)], &[Triple(18), Double(10)], &[Triple(8), Bull]]),
    (75, &[&[Triple(17), Double(12)], &[Triple(13), Double(18)], &[Outer, Bull]]),
    (76, &[&[Triple(20), Double(8)], &[Triple(12), Double(20)], &[Triple(14), Double(17)]]),
    (77, &[&[Triple(19), Double(10)], &[Triple(15), Double(16)], &[Triple(9), Bull]]),
    (78, &[&[Triple(18), Double(12)], &[Triple(14), Double(18)], &[Triple(16), Double(15)]]),
    (79, &[&[Triple(19), Double(11)], &[Triple(13), Double(20)], &[Triple(15), Double(17)]]),
    (80, &[&[Triple(20), Double(10)], &[Triple(16), Double(16)], &[Triple(10), Bull]]),
    (81, &[&[Triple(19), Double(12)], &[Triple(15), Double(18)], &[Triple(17), Double(15)]]),
    (82, &[&[Bull, Double(16)], &[Triple(14), Double(20)], &[Triple(16), Double(17)]]),
    (83, &[&[Triple(17), Double(16)], &[Triple(11), Bull], &[Triple(15), Double(19)]]),
    (84, &[&[Triple(20), Double(12)], &[Triple(16), Double(18)], &[Triple(18), Double(15)]]),
    (85, &[&[Triple(15), Double(20)], &[Triple(17), Double(17)], &[Triple(19), Double(14)]]),
    (86, &[&[Triple(18), Double(16)], &[Triple(12), Bull], &[Triple(16), Double(19)]]),
    (87, &[&[Triple(17), Double(18)], &[Triple(19), Double(15)], &[Triple(15), Single(2), Double(20)]]),
    (88, &[&[Triple(20), Double(14)], &[Triple(16), Double(20)], &[Triple(18), Double(17)]]),
    (89, &[&[Triple(19), Double(16)], &[Triple(13), Bull], &[Triple(17), Double(19)]]),
    (90, &[&[Triple(20), Double(15)], &[Triple(18), Double(18)], &[Bull, Double(20)]]),
    (91, &[&[Triple(17), Double(20)], &[Triple(19), Double(17)], &[Triple(16), Single(3), Double(20)]]),
    (92, &[&[Triple(20), Double(16)], &[Triple(14), Bull], &[Triple(18), Double(19)]]),
    (93, &[&[Triple(19), Double(18)], &[Triple(17), Single(2), Double(20)], &[Triple(16), Single(5), Double(20)]]),
    (94, &[&[Triple(18), Double(20)], &[Triple(20), Double(17)], &[Triple(17), Single(3), Double(20)]]),
    (95, &[&[Triple(19), Double(19)], &[Triple(15), Bull], &[Triple(18), Single(1), Double(20)]]),
    (96, &[&[Triple(20), Double(18)], &[Triple(18), Single(2), Double(20)], &[Triple(17), Single(5), Double(20)]]),
    (97, &[&[Triple(19), Double(20)], &[Triple(18), Single(3), Double(20)], &[Triple(17), Single(6), Double(20)]]),
    (98, &[&[Triple(20), Double(19)], &[Triple(16), Bull], &[Triple(19), Single(1), Double(20)]]),
    (99, &[&[Triple(19), Single(10), Double(16)], &[Triple(19), Single(2), Double(20)], &[Triple(18), Single(5), Double(20)]]),
    (100, &[&[Triple(20), Double(20)], &[Bull, Bull], &[Triple(19), Single(3), Double(20)]]),
    (101, &[&[Triple(17), Bull], &[Triple(20), Single(1), Double(20)], &[Triple(19), Single(4), Double(20)]]),
    (102, &[&[Triple(20), Single(10), Double(16)], &[Triple(20), Single(2), Double(20)], &[Triple(19), Single(5), Double(20)]]),
    (103, &[&[Triple(19), Single(10), Double(18)], &[Triple(20), Single(3), Double(20)], &[Triple(19), Single(6), Double(20)]]),
    (104, &[&[Triple(18), Bull], &[Triple(20), Single(4), Double(20)], &[Triple(19), Single(7), Double(20)]]),
    (105, &[&[Triple(20), Single(13), Double(16)], &[Triple(20), Single(5), Double(20)], &[Triple(19), Single(8), Double(20)]]),
    (106, &[&[Triple(20), Single(10), Double(18)], &[Triple(20), Single(6), Double(20)], &[Triple(19), Single(9), Double(20)]]),
    (107, &[&[Triple(19), Bull], &[Triple(20), Single(7), Double(20)], &[Triple(19), Single(10), Double(20)]]),
    (108, &[&[Triple(20), Single(16), Double(16)], &[Triple(20), Single(8), Double(20)], &[Triple(19), Single(11), Double(20)]]),
    (109, &[&[Triple(20), Single(19), Double(15)], &[Triple(20), Single(9), Double(20)], &[Triple(19), Single(12), Double(20)]]),
    (110, &[&[Triple(20), Bull], &[Triple(20), Single(10), Double(20)], &[Triple(19), Single(13), Double(20)]]),
    (111, &[&[Triple(20), Single(19), Double(16)], &[Triple(20), Single(11), Double(20)], &[Triple(19), Single(14), Double(20)]]),
    (112, &[&[Triple(20), Single(12), Double(20)], &[Triple(19), Single(15), Double(20)], &[Triple(18), Single(18), Double(20)]]),
    (113, &[&[Triple(20), Single(13), Double(20)], &[Triple(19), Single(16), Double(20)], &[Triple(18), Single(19), Double(20)]]),
    (114, &[&[Triple(20), Single(14), Double(20)], &[Triple(19), Single(17), Double(20)], &[Triple(18), Single(20), Double(20)]]),
    (115, &[&[Triple(20), Single(15), Double(20)], &[Triple(19), Single(18), Double(20)], &[Triple(18), Triple(7), Double(20)]]),
    (116, &[&[Triple(20), Single(16), Double(20)], &[Triple(19), Single(19), Double(20)], &[Triple(17), Outer, Double(20)]]),
    (117, &[&[Triple(20), Single(17), Double(20)], &[Triple(19), Single(20), Double(20)], &[Triple(20), Outer, Double(16)]]),
    (118, &[&[Triple(20), Single(18), Double(20)], &[Triple(19), Triple(7), Double(20)], &[Triple(18), Triple(8), Double(20)]]),
    (119, &[&[Triple(19), Triple(12), Double(13)], &[Triple(20), Single(19), Double(20)], &[Triple(18), Outer, Double(20)]]),
    (120, &[&[Triple(20), Single(20), Double(20)], &[Triple(20), Triple(8), Double(18)], &[Triple(19), Triple(9), Double(18)]]),
    (121, &[&[Triple(20), Triple(11), Double(14)], &[Triple(20), Triple(7), Double(20)], &[Triple(19), Triple(8), Double(20)]]),
    (122, &[&[Triple(18), Triple(20), Double(4)], &[Triple(19), Outer, Double(20)], &[Triple(20), Triple(10), Double(16)]]),
    (123, &[&[Triple(19), Triple(16), Double(9)], &[Triple(20), Triple(9), Double(18)], &[Triple(19), Triple(10), Double(18)]]),
    (124, &[&[Triple(20), Triple(16), Double(8)], &[Triple(20), Triple(8), Double(20)], &[Triple(19), Triple(9), Double(20)]]),
    (125, &[&[Outer, Triple(20), Double(20)], &[Triple(20), Triple(11), Double(16)], &[Triple(19), Triple(12), Double(16)]]),
    (126, &[&[Triple(19), Triple(19), Double(6)], &[Triple(20), Triple(10), Double(18)], &[Triple(19), Triple(11), Double(18)]]),
    (127, &[&[Triple(20), Triple(17), Double(8)], &[Triple(20), Triple(9), Double(20)], &[Triple(19), Triple(10), Double(20)]]),
    (128, &[&[Triple(18), Triple(14), Double(16)], &[Triple(20), Triple(12), Double(16)], &[Triple(19), Triple(13), Double(16)]]),
    (129, &[&[Triple(19), Triple(16), Double(12)], &[Triple(20), Triple(11), Double(18)], &[Triple(19), Triple(12), Double(18)]]),
    (130, &[&[Triple(20), Triple(20), Double(5)], &[Triple(20), Triple(10), Double(20)], &[Triple(19), Triple(11), Double(20)]]),
    (131, &[&[Triple(20), Triple(13), Double(16)], &[Triple(19), Triple(14), Double(16)], &[Triple(18), Triple(15), Double(16)]]),
    (132, &[&[Triple(20), Triple(16), Double(12)], &[Triple(20), Triple(12), Double(18)], &[Triple(19), Triple(13), Double(18)]]),
    (133, &[&[Triple(20), Triple(19), Double(8)], &[Triple(20), Triple(11), Double(20)], &[Triple(19), Triple(12), Double(20)]]),
    (134, &[&[Triple(20), Triple(14), Double(16)], &[Triple(19), Triple(15), Double(16)], &[Triple(18), Triple(16), Double(16)]]),
    (135, &[&[Triple(20), Triple(17), Double(12)], &[Triple(20), Triple(13), Double(18)], &[Triple(19), Triple(14), Double(18)]]),
    (136, &[&[Triple(20), Triple(20), Double(8)], &[Triple(20), Triple(12), Double(20)], &[Triple(19), Triple(13), Double(20)]]),
    (137, &[&[Triple(20), Triple(19), Double(10)], &[Triple(20), Triple(15), Double(16)], &[Triple(19), Triple(16), Double(16)]]),
    (138, &[&[Triple(20), Triple(18), Double(12)], &[Triple(20), Triple(14), Double(18)], &[Triple(19), Triple(15), Double(18)]]),
    (139, &[&[Triple(20), Triple(13), Double(20)], &[Triple(19), Triple(14), Double(20)], &[Triple(18), Triple(15), Double(20)]]),
    (140, &[&[Triple(20), Triple(20), Double(10)], &[Triple(20), Triple(16), Double(16)], &[Triple(19), Triple(17), Double(16)]]),
    (141, &[&[Triple(20), Triple(19), Double(12)], &[Triple(20), Triple(15), Double(18)], &[Triple(19), Triple(16), Double(18)]]),
    (142, &[&[Triple(20), Triple(14), Double(20)], &[Triple(19), Triple(15), Double(20)], &[Triple(18), Triple(16), Double(20)]]),
    (143, &[&[Triple(20), Triple(17), Double(16)], &[Triple(19), Triple(18), Double(16)], &[Triple(20), Triple(11), Bull]]),
    (144, &[&[Triple(20), Triple(20), Double(12)], &[Triple(20), Triple(16), Double(18)], &[Triple(19), Triple(17), Double(18)]]),
    (145, &[&[Triple(20), Triple(15), Double(20)], &[Triple(19), Triple(16), Double(20)], &[Triple(18), Triple(17), Double(20)]]),
    (146, &[&[Triple(20), Triple(18), Double(16)], &[Triple(19), Triple(19), Double(16)], &[Triple(20), Triple(12), Bull]]),
    (147, &[&[Triple(20), Triple(17), Double(18)], &[Triple(19), Triple(18), Double(18)], &[Triple(20), Triple(19), Double(15)]]),
    (148, &[&[Triple(20), Triple(16), Double(20)], &[Triple(19), Triple(17), Double(20)], &[Triple(18), Triple(18), Double(20)]]),
    (149, &[&[Triple(20), Triple(19), Double(16)], &[Triple(20), Triple(13), Bull], &[Triple(19), Triple(14), Bull]]),
    (150, &[&[Triple(20), Triple(18), Double(18)], &[Triple(19), Triple(19), Double(18)], &[Triple(20), Triple(20), Double(15)]]),
    (151, &[&[Triple(20), Triple(17), Double(20)], &[Triple(19), Triple(18), Double(20)], &[Triple(20), Triple(19), Double(17)]]),
    (152, &[&[Triple(20), Triple(20), Double(16)], &[Triple(20), Triple(14), Bull], &[Triple(19), Triple(15), Bull]]),
    (153, &[&[Triple(20), Triple(19), Double(18)]]),
    (154, &[&[Triple(20), Triple(18), Double(20)], &[Triple(19), Triple(19), Double(20)], &[Triple(20), Triple(20), Double(17)]]),
    (155, &[&[Triple(20), Triple(19), Double(19)], &[Triple(20), Triple(15), Bull], &[Triple(19), Triple(16), Bull]]),
    (156, &[&[Triple(20), Triple(20), Double(18)]]),
    (157, &[&[Triple(20), Triple(19), Double(20)], &[Triple(19), Bull, Bull]]),
    (158, &[&[Triple(20), Triple(20), Double(19)], &[Triple(20), Triple(16), Bull], &[Triple(19), Triple(17), Bull]]),
    (160, &[&[Triple(20), Triple(20), Double(20)], &[Triple(20), Bull, Bull]]),
    (161, &[&[Triple(20), Triple(17), Bull], &[Triple(19), Triple(18), Bull]]),
    (164, &[&[Triple(20), Triple(18), Bull], &[Triple(19), Triple(19), Bull]]),
    (167, &[&[Triple(20), Triple(19), Bull]]),
    (170, &[&[Triple(20), Triple(20), Bull]]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_sum_to_remaining() {
        for (remaining, routes) in Checkout::entries() {
            for route in routes {
                let total = route.iter().map(Segment::value).sum::<Score>();
                assert_eq!(total, remaining, "{}", Checkout::describe(route));
            }
        }
    }

    #[test]
    fn routes_finish_on_a_double() {
        for (_, routes) in Checkout::entries() {
            for route in routes {
                assert!((1..=3).contains(&route.len()));
                assert!(route.last().is_some_and(Segment::is_double));
            }
        }
    }

    #[test]
    fn routes_never_leave_one() {
        for (remaining, routes) in Checkout::entries() {
            for route in routes {
                let mut left = remaining;
                for segment in &route[..route.len() - 1] {
                    left -= segment.value();
                    assert!(left >= 2, "{} leaves {}", remaining, left);
                }
            }
        }
    }

    #[test]
    fn bogey_numbers_are_absent() {
        for bogey in [159, 162, 163, 165, 166, 168, 169, 171, 180, 501, 1, 0, -4] {
            assert!(Checkout::routes(bogey).is_empty());
            assert!(!Checkout::finishable(bogey));
        }
    }

    #[test]
    fn everything_else_is_covered() {
        let bogeys = [159, 162, 163, 165, 166, 168, 169];
        for r in 2..=170 {
            assert_eq!(Checkout::finishable(r), !bogeys.contains(&r), "{}", r);
        }
    }

    #[test]
    fn table_is_sorted() {
        assert!(TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn big_fish() {
        assert_eq!(Checkout::describe(Checkout::primary(170).unwrap()), "T20 T20 BULL");
        assert_eq!(Checkout::describe(Checkout::primary(100).unwrap()), "T20 D20");
        assert_eq!(Checkout::describe(Checkout::primary(32).unwrap()), "D16");
    }

    #[test]
    fn within_respects_darts_left() {
        assert_eq!(Checkout::within(40, 1), Some(&[Double(20)][..]));
        assert!(Checkout::within(100, 1).is_none());
        assert_eq!(Checkout::within(100, 2).map(|r| r.len()), Some(2));
    }
}
