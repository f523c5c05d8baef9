//! Geometry helpers shared by the SVG charts

use std::f64::consts::PI;

/// Maps a value domain linearly onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 || !value.is_finite() {
            return self.r0;
        }
        self.r0 + (value - self.d0) / span * (self.r1 - self.r0)
    }
}

/// Round step (1, 2, 2.5 or 5 times a power of ten) giving about `count` intervals
fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Axis ticks covering `[min, max]`, always including 0 when the range spans it.
///
/// An empty or flat range yields `[0, 1]` so that charts without data still
/// get a valid axis.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (min, max) = (min.min(0.0), max.max(0.0));
    if !(max - min).is_finite() || max - min <= 0.0 {
        return vec![0.0, 1.0];
    }
    let step = nice_step(max - min, count);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut i = 0;
    loop {
        let t = start + step * i as f64;
        if t > end + step * 1e-9 {
            break;
        }
        // clean up float noise like 0.30000000000000004
        ticks.push((t / step).round() * step);
        i += 1;
    }
    ticks
}

/// Min and max over finite values, `(0, 0)` when there are none
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

/// Point on a circle; angle 0 points up, clockwise
pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Start/end angles of donut slices proportional to `values`.
/// Non-positive values get an empty slice.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 && *v > 0.0 {
                v / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// SVG path of a donut slice between two angles
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // a full circle cannot be drawn as a single arc
    let end = if end - start >= 2.0 * PI {
        start + 2.0 * PI - 1e-4
    } else {
        end
    };
    let large = if end - start > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        x0, y0, outer, outer, large, x1, y1, x2, y2, inner, inner, large, x3, y3
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(50.0), 150.0);
        assert_eq!(scale.map(100.0), 0.0);

        let flat = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(flat.map(5.0), 0.0);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(3.0, 9.0, 4), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(nice_ticks(-15.0, 30.0, 3), vec![-20.0, 0.0, 20.0, 40.0]);
        assert_eq!(nice_ticks(0.0, 0.0, 5), vec![0.0, 1.0]);
    }

    #[test]
    fn test_extent_ignores_non_finite() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.0]), (-1.0, 7.0));
        assert_eq!(extent(Vec::<f64>::new()), (0.0, 0.0));
    }

    #[test]
    fn test_slice_angles() {
        let slices = slice_angles(&[1.0, 1.0, 2.0, -3.0]);
        assert_eq!(slices[0], (0.0, PI / 2.0));
        assert_eq!(slices[1], (PI / 2.0, PI));
        assert_eq!(slices[2], (PI, 2.0 * PI));
        assert_eq!(slices[3].0, slices[3].1);
        assert!(slice_angles(&[0.0, 0.0]).iter().all(|(a, b)| a == b));
    }

    #[test]
    fn test_polar() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
        let (x, y) = polar(100.0, 100.0, 50.0, PI / 2.0);
        assert!((x - 150.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
    }
}
