// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newton's method for polishing an intersection of two curves.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{BezCurve, ParamCurve, ParamCurveDeriv, Root, RootKind, Tolerances};

/// A Newton iteration that did not land on both curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonFailure {
    /// The last parameter on the first curve.
    pub s: f64,
    /// The last parameter on the second curve.
    pub t: f64,
    /// Distance between the two curve points at `(s, t)`.
    pub residual: f64,
}

/// Perform one Newton step on `curve1(s) - curve2(t) = 0`.
///
/// Returns `None` when the Jacobian is singular, which happens when the two
/// tangents are parallel (or one of them vanishes).
pub fn newton_refine(s: f64, curve1: &BezCurve, t: f64, curve2: &BezCurve) -> Option<(f64, f64)> {
    step(s, curve1, &curve1.deriv(), t, curve2, &curve2.deriv())
}

fn step(
    s: f64,
    curve1: &BezCurve,
    deriv1: &BezCurve,
    t: f64,
    curve2: &BezCurve,
    deriv2: &BezCurve,
) -> Option<(f64, f64)> {
    let func_val = curve2.eval(t) - curve1.eval(s);
    if func_val.x == 0.0 && func_val.y == 0.0 {
        return Some((s, t));
    }
    // Jacobian columns are B1'(s) and -B2'(t).
    let d1 = deriv1.eval(s).to_vec2();
    let d2 = -deriv2.eval(t).to_vec2();
    let det = d1.cross(d2);
    if det == 0.0 || det.abs() <= f64::EPSILON * d1.hypot() * d2.hypot() {
        return None;
    }
    let delta_s = func_val.cross(d2) / det;
    let delta_t = d1.cross(func_val) / det;
    Some((s + delta_s, t + delta_t))
}

/// Iterate Newton's method from `(s, t)` until it converges.
///
/// Iteration stops after a step smaller than `tol.newton_convergence`, when
/// the Jacobian becomes singular, or after `tol.max_newton_iterations`
/// steps. The result is accepted if the two curve points are within
/// `tol.newton_residual` of each other, relative to the size of the curves.
///
/// A root is reported as [`RootKind::Tangent`] when the curve derivatives
/// are (nearly) parallel there, or when the iteration only converged
/// linearly, which is the signature of a double root.
pub fn full_newton(
    s: f64,
    curve1: &BezCurve,
    t: f64,
    curve2: &BezCurve,
    tol: &Tolerances,
) -> Result<Root, NewtonFailure> {
    let deriv1 = curve1.deriv();
    let deriv2 = curve2.deriv();
    let (mut s, mut t) = (s, t);
    let mut prev_step = f64::INFINITY;
    let mut linear_steps = 0;
    for _ in 0..tol.max_newton_iterations {
        let Some((new_s, new_t)) = step(s, curve1, &deriv1, t, curve2, &deriv2) else {
            break;
        };
        let size = (new_s - s).abs().max((new_t - t).abs());
        s = new_s;
        t = new_t;
        if !(s.is_finite() && t.is_finite()) {
            break;
        }
        if size <= tol.newton_convergence {
            break;
        }
        let ratio = size / prev_step;
        if (0.35..=0.65).contains(&ratio) {
            linear_steps += 1;
        } else {
            linear_steps = 0;
        }
        prev_step = size;
    }
    let p1 = curve1.eval(s);
    let p2 = curve2.eval(t);
    let residual = p1.distance(p2);
    let extent = curve1
        .bounding_box()
        .union(curve2.bounding_box())
        .extent()
        .max(f64::MIN_POSITIVE);
    if !(residual <= tol.newton_residual * extent) {
        return Err(NewtonFailure { s, t, residual });
    }
    let d1 = deriv1.eval(s).to_vec2();
    let d2 = deriv2.eval(t).to_vec2();
    let scale = d1.hypot() * d2.hypot();
    let tangent =
        scale == 0.0 || d1.cross(d2).abs() < tol.tangent_threshold * scale || linear_steps >= 2;
    let kind = if tangent {
        RootKind::Tangent
    } else {
        RootKind::Transversal
    };
    Ok(Root { s, t, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola() -> BezCurve {
        // y = x² over x in [-1, 1], x = 2s - 1.
        BezCurve::new([(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)])
    }

    #[test]
    fn single_step_on_lines_is_exact() {
        let l1 = BezCurve::new([(0.0, 0.0), (2.0, 2.0)]);
        let l2 = BezCurve::new([(0.0, 2.0), (2.0, 0.0)]);
        let (s, t) = newton_refine(0.1, &l1, 0.9, &l2).unwrap();
        assert!((s - 0.5).abs() < 1e-15);
        assert!((t - 0.5).abs() < 1e-15);
    }

    #[test]
    fn parallel_lines_are_singular() {
        let l1 = BezCurve::new([(0.0, 0.0), (2.0, 2.0)]);
        let l2 = BezCurve::new([(0.0, 1.0), (2.0, 3.0)]);
        assert!(newton_refine(0.5, &l1, 0.5, &l2).is_none());
    }

    #[test]
    fn transversal_root() {
        let line = BezCurve::new([(-1.0, 0.25), (1.0, 0.25)]);
        let root = full_newton(0.7, &parabola(), 0.8, &line, &Tolerances::default()).unwrap();
        assert!((root.s - 0.75).abs() < 1e-14, "{root:?}");
        assert!((root.t - 0.75).abs() < 1e-14, "{root:?}");
        assert_eq!(root.kind, RootKind::Transversal);
    }

    #[test]
    fn tangent_root() {
        let line = BezCurve::new([(-1.0, 0.0), (1.0, 0.0)]);
        let root = full_newton(0.5001, &parabola(), 0.4999, &line, &Tolerances::default()).unwrap();
        assert!((root.s - 0.5).abs() < 1e-6, "{root:?}");
        assert!((root.t - 0.5).abs() < 1e-6, "{root:?}");
        assert_eq!(root.kind, RootKind::Tangent);
    }

    #[test]
    fn near_miss_fails() {
        // The line passes below the parabola's vertex; Newton cannot settle.
        let line = BezCurve::new([(-1.0, -0.01), (1.0, -0.01)]);
        let failure = full_newton(0.5, &parabola(), 0.5, &line, &Tolerances::default()).unwrap_err();
        assert!(failure.residual > 1e-4);
    }
}
