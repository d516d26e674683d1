//! 2D vector helpers shared by the physics core and the overlay geometry

use std::f64::consts::PI;

use glam::{DMat2, DVec2};

/// Real- and screen-space vectors are plain `glam` double vectors.
/// Addition, subtraction, scaling, dot products and lengths come from glam.
pub type Vector2 = DVec2;

/// Angle of a vector in (-π, π], with the sandbox's own conventions:
///
/// - `x == 0` resolves to `+π` when `y > 0` and to `-π` otherwise
/// - `x < 0` returns `atan(y/x) + π`
/// - `x > 0` returns `atan(y/x)`
///
/// This is not `f64::atan2`. Arrow orientation depends on these exact
/// branches, so keep them as they are.
pub fn atan2_extended(v: Vector2) -> f64 {
    if v.x == 0.0 {
        if v.y > 0.0 {
            PI
        } else {
            -PI
        }
    } else if v.x < 0.0 {
        (v.y / v.x).atan() + PI
    } else {
        (v.y / v.x).atan()
    }
}

/// The matrix `[[cos θ, sin θ], [-sin θ, cos θ]]` (rows).
pub fn rotation_matrix(theta: f64) -> DMat2 {
    let (sin, cos) = theta.sin_cos();
    // glam takes columns
    DMat2::from_cols(DVec2::new(cos, -sin), DVec2::new(sin, cos))
}

/// Applies [`rotation_matrix`] to a column vector. In a y-up frame this turns
/// `v` clockwise by `theta`.
pub fn rotate(v: Vector2, theta: f64) -> Vector2 {
    rotation_matrix(theta) * v
}

/// Row-vector product `v · R(θ)`, i.e. the transpose of [`rotate`].
/// Screen-space polygons are stored as rows and rotated this way.
pub fn rotate_row(v: Vector2, theta: f64) -> Vector2 {
    rotation_matrix(theta).transpose() * v
}

/// Unit arrow pointing along +y, tail at the origin and tip at (0, 1).
const ARROW_SHAPE: [[f64; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 7.0],
    [2.0, 7.0],
    [0.0, 11.0],
    [-2.0, 7.0],
    [-1.0, 7.0],
];

/// Screen-space polygon of an arrow from `tail` to `tip`.
///
/// The shape is scaled to the tail→tip length, rotated by
/// `atan2_extended(tip - tail) - π/2` and moved onto the tail.
pub fn arrow_polygon(tail: Vector2, tip: Vector2) -> [Vector2; 6] {
    let spine = tip - tail;
    let theta = atan2_extended(spine);
    let scale = spine.length();

    ARROW_SHAPE.map(|[x, y]| {
        let unit = DVec2::new(x, y) / 11.0;
        scale * rotate_row(unit, theta - PI / 2.0) + tail
    })
}

/// Upper-right corner bracket of a unit box, in units of the box half-size.
const BRACKET_SHAPE: [[f64; 2]; 6] = [
    [7.0, 10.0],
    [10.0, 10.0],
    [10.0, 7.0],
    [9.0, 7.0],
    [9.0, 9.0],
    [7.0, 9.0],
];

/// The four corner brackets framing a disk of `radius` around `center`,
/// ordered upper-right, upper-left, lower-left, lower-right.
pub fn corner_brackets(center: Vector2, radius: f64) -> [[Vector2; 6]; 4] {
    let upper_right = BRACKET_SHAPE.map(|[x, y]| DVec2::new(x, y) / 10.0);
    let quadrants = [
        upper_right,
        upper_right.map(|p| DVec2::new(-p.y, p.x)),
        upper_right.map(|p| -p),
        upper_right.map(|p| DVec2::new(p.y, -p.x)),
    ];

    quadrants.map(|bracket| bracket.map(|p| center + radius * p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn atan2_extended_vertical_axis_branches() {
        assert_eq!(atan2_extended(DVec2::new(0.0, 2.0)), PI);
        assert_eq!(atan2_extended(DVec2::new(0.0, -2.0)), -PI);
        assert_eq!(atan2_extended(DVec2::ZERO), -PI);
    }

    #[test]
    fn atan2_extended_half_planes() {
        assert_abs_diff_eq!(atan2_extended(DVec2::new(1.0, 1.0)), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2_extended(DVec2::new(1.0, -1.0)), -FRAC_PI_4, epsilon = 1e-12);
        // left half-plane adds π to the principal arctangent
        let upper_left = atan2_extended(DVec2::new(-1.0, 1.0));
        assert_abs_diff_eq!(upper_left, 3.0 * FRAC_PI_4, epsilon = 1e-12);
        let lower_left = atan2_extended(DVec2::new(-1.0, -1.0));
        assert_abs_diff_eq!(lower_left, 5.0 * FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn rotate_is_clockwise_in_y_up_frame() {
        let v = rotate(DVec2::X, PI / 2.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_row_undoes_rotate() {
        let v = DVec2::new(3.0, -2.0);
        let back = rotate_row(rotate(v, 0.7), 0.7);
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-12);
    }

    #[test]
    fn arrow_reaches_its_tip() {
        for tip in [DVec2::new(130.0, 40.0), DVec2::new(60.0, 90.0), DVec2::new(50.0, -30.0)] {
            let tail = DVec2::new(100.0, 100.0);
            let polygon = arrow_polygon(tail, tip);
            assert_abs_diff_eq!(polygon[0].x, tail.x, epsilon = 1e-9);
            assert_abs_diff_eq!(polygon[0].y, tail.y, epsilon = 1e-9);
            assert_abs_diff_eq!(polygon[3].x, tip.x, epsilon = 1e-9);
            assert_abs_diff_eq!(polygon[3].y, tip.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn brackets_sit_in_each_quadrant() {
        let center = DVec2::new(5.0, 5.0);
        let [ur, ul, ll, lr] = corner_brackets(center, 2.0);
        assert_abs_diff_eq!(ur[1].x, 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ur[1].y, 7.0, epsilon = 1e-12);
        assert!(ul.iter().all(|p| p.x < center.x && p.y > center.y));
        assert!(ll.iter().all(|p| p.x < center.x && p.y < center.y));
        assert!(lr.iter().all(|p| p.x > center.x && p.y < center.y));
    }
}
