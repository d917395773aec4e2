//! Monotone cubic interpolation for the smooth and area line styles.
//!
//! Tangents follow the Fritsch-Carlson scheme used by the usual "monotone X"
//! curve: the interpolant passes through every point and never leaves the
//! value range of two neighbouring points.

/// Interpolate `points` (sorted by x) with `samples` segments between each pair.
pub fn monotone_curve(points: &[(f64, f64)], samples: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || samples < 2 {
        return points.to_vec();
    }

    let tangents = tangents(points);
    let mut out = Vec::with_capacity((points.len() - 1) * samples + 1);

    for i in 0..points.len() - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = x1 - x0;
        // Bezier control points of the Hermite segment
        let c1 = (x0 + dx / 3.0, y0 + dx * tangents[i] / 3.0);
        let c2 = (x1 - dx / 3.0, y1 - dx * tangents[i + 1] / 3.0);

        for step in 0..samples {
            let t = step as f64 / samples as f64;
            out.push(cubic_bezier((x0, y0), c1, c2, (x1, y1), t));
        }
    }

    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut m = vec![0.0; n];

    for i in 1..n - 1 {
        m[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    m[0] = end_tangent(points[0], points[1], m[1]);
    m[n - 1] = end_tangent(points[n - 2], points[n - 1], m[n - 2]);
    m
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

fn end_tangent(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn cubic_bezier(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}
