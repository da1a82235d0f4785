use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point in play-area coordinates (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle. Containment is half-open on the far edges, so two
/// rectangles that share an edge never both claim a point on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// Square of side `side` centred on `center`.
    pub fn centered(center: Point, side: f32) -> Self {
        let half = side / 2.0;
        Rect::new(center.x - half, center.y - half, side, side)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn mid(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }
}

/// Screen dimensions plus the two layout constants every game shares.
///
/// The bottom `height * zone_fraction` pixels are reserved for drop zones;
/// items at rest live in the margin-inset rectangle above that strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub zone_fraction: f32,
}

pub const DEFAULT_MARGIN: f32 = 50.0;
pub const DEFAULT_ZONE_FRACTION: f32 = 0.2;
const CLEAR_ATTEMPTS: usize = 64;

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        PlayArea {
            width,
            height,
            margin: DEFAULT_MARGIN,
            zone_fraction: DEFAULT_ZONE_FRACTION,
        }
    }

    /// Height of the drop-zone strip along the bottom edge.
    pub fn zone_height(&self) -> f32 {
        self.height * self.zone_fraction
    }

    /// Top edge of the drop-zone strip.
    pub fn zone_top(&self) -> f32 {
        self.height - self.zone_height()
    }

    /// Inclusive bounds `(min_x, max_x, min_y, max_y)` of the rest region.
    pub fn rest_bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.margin,
            self.width - self.margin,
            self.margin,
            self.height - self.margin - self.zone_height(),
        )
    }

    /// Whether `p` is a legal resting position (bounds inclusive).
    pub fn is_rest_position(&self, p: Point) -> bool {
        let (min_x, max_x, min_y, max_y) = self.rest_bounds();
        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
    }

    /// Uniform random rest position. A degenerate axis collapses to its lower
    /// bound instead of panicking; `SessionConfig::validate` rejects such
    /// layouts up front.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Point {
        let (min_x, max_x, min_y, max_y) = self.rest_bounds();
        let x = if max_x > min_x { rng.gen_range(min_x..=max_x) } else { min_x };
        let y = if max_y > min_y { rng.gen_range(min_y..=max_y) } else { min_y };
        Point::new(x, y)
    }

    /// Random rest position outside every rectangle in `blocked`.
    ///
    /// Gives up after `CLEAR_ATTEMPTS` samples and keeps the last one, so a
    /// layout whose zones cover the whole rest region still terminates.
    pub fn random_position_clear_of<R: Rng>(&self, rng: &mut R, blocked: &[Rect]) -> Point {
        let mut p = self.random_position(rng);
        for _ in 1..CLEAR_ATTEMPTS {
            if !blocked.iter().any(|r| r.contains(p)) {
                break;
            }
            p = self.random_position(rng);
        }
        p
    }

    /// Clamp a drag location so the item never leaves the margin-inset screen.
    /// The zone strip stays reachable.
    pub fn clamp_drag(&self, p: Point) -> Point {
        let max_x = (self.width - self.margin).max(self.margin);
        let max_y = (self.height - self.margin).max(self.margin);
        Point::new(p.x.clamp(self.margin, max_x), p.y.clamp(self.margin, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.99, 9.99)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.01, 5.0)));
    }

    #[test]
    fn random_positions_stay_in_rest_region() {
        let area = PlayArea::new(800.0, 1000.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = area.random_position(&mut rng);
            assert!(area.is_rest_position(p), "{p:?} escaped the rest region");
            assert!(p.y <= 1000.0 - 50.0 - 200.0);
        }
    }

    #[test]
    fn degenerate_area_does_not_panic() {
        let area = PlayArea::new(80.0, 80.0);
        let mut rng = StdRng::seed_from_u64(1);
        let p = area.random_position(&mut rng);
        assert_eq!(p, Point::new(50.0, 50.0));
    }

    #[test]
    fn clear_positions_avoid_blocked_corners() {
        let area = PlayArea::new(800.0, 1000.0);
        let blocked = [
            Rect::centered(Point::new(50.0, 50.0), 80.0),
            Rect::centered(Point::new(750.0, 50.0), 80.0),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let p = area.random_position_clear_of(&mut rng, &blocked);
            assert!(area.is_rest_position(p));
            assert!(!blocked.iter().any(|r| r.contains(p)), "{p:?} landed in a blocked rect");
        }
    }

    #[test]
    fn fully_blocked_rest_region_still_terminates() {
        let area = PlayArea::new(800.0, 1000.0);
        let everything = [Rect::new(0.0, 0.0, 800.0, 1000.0)];
        let mut rng = StdRng::seed_from_u64(9);
        let p = area.random_position_clear_of(&mut rng, &everything);
        assert!(area.is_rest_position(p));
    }

    #[test]
    fn drag_clamp_keeps_zone_strip_reachable() {
        let area = PlayArea::new(800.0, 1000.0);
        let p = area.clamp_drag(Point::new(-20.0, 990.0));
        assert_eq!(p, Point::new(50.0, 950.0));
        assert!(p.y > area.zone_top());
    }
}
