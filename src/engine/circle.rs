//! Minimum enclosing circle
//!
//! Randomized incremental construction (Welzl). The input is shuffled with a
//! fixed seed so the same points always produce the same circle.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::stats::Point;

const SHUFFLE_SEED: u64 = 0x5eed_c1c1e;
const EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.center.distance(p) <= self.radius + EPSILON * self.radius.max(1.0)
    }

    fn from_two(a: Point, b: Point) -> Self {
        let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        Self::new(center, a.distance(&b) / 2.0)
    }

    fn from_three(a: Point, b: Point, c: Point) -> Self {
        let (bx, by) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
        let (cx, cy) = ((c.x - a.x) as f64, (c.y - a.y) as f64);
        let d = 2.0 * (bx * cy - by * cx);

        if d.abs() < f64::EPSILON {
            // Collinear: the widest pair spans the others
            return [Self::from_two(a, b), Self::from_two(a, c), Self::from_two(b, c)]
                .into_iter()
                .fold(Self::from_two(a, b), |best, candidate| {
                    if candidate.radius > best.radius {
                        candidate
                    } else {
                        best
                    }
                });
        }

        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let ux = (cy * b2 - by * c2) / d;
        let uy = (bx * c2 - cx * b2) / d;
        let center = Point::new((ux + a.x as f64) as f32, (uy + a.y as f64) as f32);
        Self::new(center, center.distance(&a))
    }
}

/// Smallest circle containing every point; a zero-radius circle at the
/// origin for empty input
pub fn min_enclosing_circle(points: &[Point]) -> Circle {
    let mut pts = points.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(SHUFFLE_SEED);
    pts.shuffle(&mut rng);

    let Some(&first) = pts.first() else {
        return Circle::new(Point::new(0.0, 0.0), 0.0);
    };

    let mut circle = Circle::new(first, 0.0);
    for i in 1..pts.len() {
        if circle.contains(&pts[i]) {
            continue;
        }
        circle = Circle::new(pts[i], 0.0);
        for j in 0..i {
            if circle.contains(&pts[j]) {
                continue;
            }
            circle = Circle::from_two(pts[i], pts[j]);
            for k in 0..j {
                if !circle.contains(&pts[k]) {
                    circle = Circle::from_three(pts[i], pts[j], pts[k]);
                }
            }
        }
    }
    circle
}
