// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Bézier curves of arbitrary degree.

use core::ops::Range;

use smallvec::SmallVec;

use crate::{Line, ParamCurve, ParamCurveDeriv, Point, Rect};

/// Control points of a curve; cubics and below stay inline.
pub type Nodes = SmallVec<[Point; 4]>;

/// A planar Bézier curve given by its control points.
///
/// The degree is one less than the number of control points. A curve with a
/// single control point is a constant, which is what the derivative of a
/// line looks like.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezCurve {
    nodes: Nodes,
}

impl BezCurve {
    /// Create a new curve from its control points.
    pub fn new<P: Into<Point>>(nodes: impl IntoIterator<Item = P>) -> BezCurve {
        BezCurve {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new curve from a slice of control points.
    pub fn from_nodes(nodes: &[Point]) -> BezCurve {
        BezCurve {
            nodes: SmallVec::from_slice(nodes),
        }
    }

    /// The control points.
    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// The degree of the curve.
    #[inline]
    pub fn degree(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The line connecting the first and last control points.
    #[inline]
    pub fn chord(&self) -> Line {
        Line::new(self.start(), self.end())
    }

    /// Bounding box of the control points.
    ///
    /// By the convex hull property, this encloses the curve.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::bounding(&self.nodes).unwrap_or_default()
    }

    /// Whether the other curve has the same control points in reverse order.
    pub fn is_reverse_of(&self, other: &BezCurve) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.nodes.iter().eq(other.nodes.iter().rev())
    }

    /// Split the curve at parameter `t` with de Casteljau's algorithm.
    ///
    /// The first curve covers `[0, t]` and the second `[t, 1]`, each
    /// reparametrized over `[0, 1]`.
    pub fn split_at(&self, t: f64) -> (BezCurve, BezCurve) {
        let n = self.nodes.len();
        if n == 0 {
            return (self.clone(), self.clone());
        }
        let mut work = self.nodes.clone();
        let mut left = Nodes::with_capacity(n);
        let mut right = Nodes::with_capacity(n);
        left.push(work[0]);
        right.push(work[n - 1]);
        for level in 1..n {
            for i in 0..n - level {
                work[i] = work[i].lerp(work[i + 1], t);
            }
            left.push(work[0]);
            right.push(work[n - 1 - level]);
        }
        right.reverse();
        (BezCurve { nodes: left }, BezCurve { nodes: right })
    }
}

impl ParamCurve for BezCurve {
    /// Evaluate with de Casteljau's algorithm.
    fn eval(&self, t: f64) -> Point {
        let mut work = self.nodes.clone();
        let n = work.len();
        for level in 1..n {
            for i in 0..n - level {
                work[i] = work[i].lerp(work[i + 1], t);
            }
        }
        work.first().copied().unwrap_or(Point::ZERO)
    }

    fn subsegment(&self, range: Range<f64>) -> BezCurve {
        let (t0, t1) = (range.start, range.end);
        let (_, tail) = self.split_at(t0);
        if t0 == 1.0 {
            return tail;
        }
        tail.split_at((t1 - t0) / (1.0 - t0)).0
    }

    #[inline]
    fn subdivide(&self) -> (BezCurve, BezCurve) {
        self.split_at(0.5)
    }

    #[inline]
    fn start(&self) -> Point {
        self.nodes.first().copied().unwrap_or(Point::ZERO)
    }

    #[inline]
    fn end(&self) -> Point {
        self.nodes.last().copied().unwrap_or(Point::ZERO)
    }
}

impl ParamCurveDeriv for BezCurve {
    type DerivResult = BezCurve;

    /// The hodograph, one degree lower.
    fn deriv(&self) -> BezCurve {
        let degree = self.degree() as f64;
        let nodes: Nodes = if self.nodes.len() < 2 {
            core::iter::once(Point::ZERO).collect()
        } else {
            self.nodes
                .windows(2)
                .map(|w| (degree * (w[1] - w[0])).to_point())
                .collect()
        };
        BezCurve { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(p0.distance(p1) < epsilon, "{:?} != {:?}", p0, p1);
    }

    fn cubic() -> BezCurve {
        BezCurve::new([(3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (0.5, 1.5)])
    }

    #[test]
    fn eval_matches_bernstein() {
        let c = cubic();
        let p = c.nodes();
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let mt = 1.0 - t;
            let expected = p[0].to_vec2() * (mt * mt * mt)
                + p[1].to_vec2() * (3.0 * mt * mt * t)
                + p[2].to_vec2() * (3.0 * mt * t * t)
                + p[3].to_vec2() * (t * t * t);
            assert_near(c.eval(t), expected.to_point(), 1e-12);
        }
    }

    #[test]
    fn deriv() {
        let c = cubic();
        let deriv = c.deriv();
        assert_eq!(deriv.degree(), 2);

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p0 = c.eval(t - delta);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p0) * (2.0 * delta).recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < 1e-6);
        }
    }

    #[test]
    fn line_deriv_is_constant() {
        let line = BezCurve::new([(0.0, 0.0), (2.0, 1.0)]);
        let d = line.deriv();
        assert_eq!(d.nodes().len(), 1);
        assert_eq!(d.eval(0.3).to_vec2(), Vec2::new(2.0, 1.0));
        assert_eq!(d.deriv().nodes(), &[Point::ZERO]);
    }

    #[test]
    fn split() {
        let c = cubic();
        let (left, right) = c.split_at(0.3);
        assert_near(left.end(), c.eval(0.3), 1e-12);
        assert_near(right.start(), c.eval(0.3), 1e-12);
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            assert_near(left.eval(t), c.eval(0.3 * t), 1e-12);
            assert_near(right.eval(t), c.eval(0.3 + 0.7 * t), 1e-12);
        }
    }

    #[test]
    fn subsegment() {
        let c = cubic();
        let t0 = 0.1;
        let t1 = 0.8;
        let cs = c.subsegment(t0..t1);
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(c.eval(ts), cs.eval(t), 1e-12);
        }
        let (a, b) = c.subdivide();
        assert_eq!(a.end(), b.start());
    }

    #[test]
    fn reverse() {
        let c = cubic();
        let r = BezCurve::new(c.nodes().iter().rev().copied());
        assert!(c.is_reverse_of(&r));
        assert!(!c.is_reverse_of(&c));
        assert_near(r.eval(0.25), c.eval(0.75), 1e-12);
    }
}
