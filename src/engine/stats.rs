//! Basic statistics over f32 samples
//!
//! Variance and covariance are population statistics (divide by n).

/// A 2-D sample taken from two features at the same time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// `y = a * x + b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f32,
    pub b: f32,
}

impl Line {
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    pub fn f(&self, x: f32) -> f32 {
        self.a * x + self.b
    }
}

pub fn mean(xs: &[f32]) -> f32 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f32>() / xs.len() as f32
}

pub fn variance(xs: &[f32]) -> f32 {
    covariance(xs, xs)
}

pub fn covariance(xs: &[f32], ys: &[f32]) -> f32 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mx = mean(xs);
    let my = mean(ys);
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f32>()
        / n as f32
}

/// Pearson correlation; 0 when either sample has no variance
pub fn pearson(xs: &[f32], ys: &[f32]) -> f32 {
    let denom = (variance(xs) * variance(ys)).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    covariance(xs, ys) / denom
}

/// Least-squares line through the points
pub fn linear_reg(points: &[Point]) -> Line {
    let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
    let var_x = variance(&xs);
    let a = if var_x == 0.0 {
        0.0
    } else {
        covariance(&xs, &ys) / var_x
    };
    Line::new(a, mean(&ys) - a * mean(&xs))
}

/// Vertical distance between a point and a line
pub fn dev(p: Point, line: &Line) -> f32 {
    (line.f(p.x) - p.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_mean_and_variance() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!(close(mean(&xs), 2.5));
        assert!(close(variance(&xs), 1.25));
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let zs = [8.0, 6.0, 4.0, 2.0];
        assert!(close(pearson(&xs, &ys), 1.0));
        assert!(close(pearson(&xs, &zs), -1.0));
    }

    #[test]
    fn test_pearson_constant_column_is_zero() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_linear_reg_recovers_line() {
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new(i as f32, 3.0 * i as f32 + 1.0))
            .collect();
        let line = linear_reg(&points);
        assert!(close(line.a, 3.0));
        assert!(close(line.b, 1.0));
        assert!(close(dev(Point::new(2.0, 10.0), &line), 3.0));
    }
}
