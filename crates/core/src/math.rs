//! Vector helpers shared by movement, AI and hit resolution.

use glam::Vec2;

/// Returns the unit vector pointing along `v`.
///
/// A zero-length input uses a divisor of 1 instead of faulting, so the
/// result is the zero vector.
///
/// # Examples
/// ```
/// use bonk_arena_core::math::normalize;
/// use glam::Vec2;
///
/// let n = normalize(Vec2::new(3.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-6);
/// assert!((n.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    let len = if len > 0.0 && len.is_finite() { len } else { 1.0 };
    let out = v / len;
    if out.is_finite() {
        out
    } else {
        Vec2::ZERO
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamps a circle centre so the circle stays inside `[0, width] x [0, height]`.
///
/// When the circle is wider than the extent on an axis it is centred on that
/// axis.
pub fn clamp_inside(p: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(p.x, radius, width),
        clamp_axis(p.y, radius, height),
    )
}

fn clamp_axis(v: f32, radius: f32, extent: f32) -> f32 {
    let lo = radius;
    let hi = extent - radius;
    if hi < lo {
        return extent * 0.5;
    }
    if v.is_nan() {
        return lo;
    }
    v.clamp(lo, hi)
}

/// Whether `target` lies inside the cone around `dir` whose half-width has
/// cosine `cos_half_arc`.
///
/// Compares the normalized dot product against the cosine directly, so no
/// inverse trigonometry is needed. `dir` must already be a unit vector.
pub fn within_arc(dir: Vec2, target: Vec2, cos_half_arc: f32) -> bool {
    dir.dot(normalize(target)) >= cos_half_arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_degenerate_vector() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize(Vec2::new(f32::NAN, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let n = normalize(Vec2::new(-10.0, 10.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_inside_respects_radius() {
        let p = clamp_inside(Vec2::new(-50.0, 900.0), 10.0, 100.0, 200.0);
        assert_eq!(p, Vec2::new(10.0, 190.0));

        let inside = Vec2::new(40.0, 60.0);
        assert_eq!(clamp_inside(inside, 10.0, 100.0, 200.0), inside);
    }

    #[test]
    fn clamp_inside_centres_oversized_circle() {
        let p = clamp_inside(Vec2::new(3.0, 3.0), 60.0, 100.0, 200.0);
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 60.0);
    }

    #[test]
    fn within_arc_uses_cosine_threshold() {
        let cos_45 = std::f32::consts::FRAC_PI_4.cos();
        assert!(within_arc(Vec2::X, Vec2::new(10.0, 0.0), cos_45));
        assert!(within_arc(Vec2::X, Vec2::new(10.0, 9.0), cos_45));
        assert!(!within_arc(Vec2::X, Vec2::new(0.0, 10.0), cos_45));
        assert!(!within_arc(Vec2::X, Vec2::new(-10.0, 0.0), cos_45));
    }
}
