// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments and their closed-form intersection.

use core::ops::Range;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::in_interval;
use crate::{ParamCurve, Point, Vec2};

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

/// The shared stretch of two coincident line segments.
///
/// Each end of the overlap is given as a parameter pair `(s, t)` on the
/// first and second segment respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap {
    /// Parameters where the overlap begins, ordered by `s`.
    pub start: (f64, f64),
    /// Parameters where the overlap ends.
    pub end: (f64, f64),
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The direction vector, `p1 - p0`.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The length of the line.
    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().hypot()
    }

    /// Parameter of the orthogonal projection of `p` onto the infinite line.
    ///
    /// Returns `None` for a zero-length line.
    fn project(&self, p: Point) -> Option<f64> {
        let d = self.delta();
        let d2 = d.hypot2();
        if d2 == 0.0 {
            return None;
        }
        Some((p - self.p0).dot(d) / d2)
    }

    /// Solve for the intersection of two lines.
    ///
    /// Returns parameters `(s, t)` such that `self.eval(s) == other.eval(t)`,
    /// on the infinite lines through each segment; the caller decides whether
    /// values outside `[0, 1]` are acceptable.
    ///
    /// Returns `None` when the lines are parallel: that is when the sine of
    /// the angle between them is at most `parallel_tolerance`. Zero-length
    /// lines are always parallel.
    pub fn segment_intersection(&self, other: &Line, parallel_tolerance: f64) -> Option<(f64, f64)> {
        let delta0 = self.delta();
        let delta1 = other.delta();
        let cross_d0_d1 = delta0.cross(delta1);
        let scale = delta0.hypot() * delta1.hypot();
        if cross_d0_d1 == 0.0 || cross_d0_d1.abs() <= parallel_tolerance * scale {
            return None;
        }
        let start_delta = other.p0 - self.p0;
        let s = start_delta.cross(delta1) / cross_d0_d1;
        let t = start_delta.cross(delta0) / cross_d0_d1;
        Some((s, t))
    }

    /// Whether two parallel segments are disjoint.
    ///
    /// Returns `false` when the segments lie on a common line and share at
    /// least one point, `true` when they are separated (either offset from
    /// each other or on a common line without overlap). The distance test is
    /// relative to the length of `self`.
    pub fn parallel_different(&self, other: &Line, parallel_tolerance: f64) -> bool {
        self.collinear_parameters(other, parallel_tolerance)
            .map_or(true, |range| range.start > 1.0 || range.end < 0.0)
    }

    /// The overlap of two coincident segments.
    ///
    /// Returns `None` if the segments are not on a common line or do not
    /// share any point.
    pub fn overlap(&self, other: &Line, parallel_tolerance: f64) -> Option<Overlap> {
        let range = self.collinear_parameters(other, parallel_tolerance)?;
        if range.start > 1.0 || range.end < 0.0 {
            return None;
        }
        let s0 = range.start.max(0.0);
        let s1 = range.end.min(1.0);
        let t_at = |s: f64| {
            other
                .project(self.eval(s))
                .map_or(0.0, |t| t.clamp(0.0, 1.0))
        };
        Some(Overlap {
            start: (s0, t_at(s0)),
            end: (s1, t_at(s1)),
        })
    }

    /// Parameter range that `other` covers on `self`, when both lie on a
    /// common line.
    fn collinear_parameters(&self, other: &Line, parallel_tolerance: f64) -> Option<Range<f64>> {
        let delta0 = self.delta();
        let length0 = delta0.hypot();
        if length0 == 0.0 {
            // A point; it is only "on" the other line if the two coincide.
            if other.length() == 0.0 {
                return (self.p0 == other.p0).then_some(0.0..0.0);
            }
            let t = other.project(self.p0)?;
            let on_line = other.distance_to_line(self.p0) <= parallel_tolerance * other.length();
            return (on_line && in_interval(t, 0.0, 1.0)).then_some(0.0..0.0);
        }
        let tolerance = parallel_tolerance * length0;
        if self.distance_to_line(other.p0) > tolerance || self.distance_to_line(other.p1) > tolerance {
            return None;
        }
        let a = self.project(other.p0)?;
        let b = self.project(other.p1)?;
        Some(a.min(b)..a.max(b))
    }

    /// Distance of `p` from the infinite line through `self`.
    fn distance_to_line(&self, p: Point) -> f64 {
        let d = self.delta();
        let length = d.hypot();
        if length == 0.0 {
            return p.distance(self.p0);
        }
        d.cross(p - self.p0).abs() / length
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        Line {
            p0: self.eval(range.start),
            p1: self.eval(range.end),
        }
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARALLEL: f64 = 1e-12;

    #[test]
    fn crossing() {
        let l0 = Line::new((0.0, 0.0), (2.0, 2.0));
        let l1 = Line::new((0.0, 2.0), (2.0, 0.0));
        let (s, t) = l0.segment_intersection(&l1, PARALLEL).unwrap();
        assert!((s - 0.5).abs() < 1e-15);
        assert!((t - 0.5).abs() < 1e-15);
        assert!(l0.eval(s).distance(l1.eval(t)) < 1e-15);
    }

    #[test]
    fn crossing_outside_segments() {
        let l0 = Line::new((0.0, 0.0), (1.0, 0.0));
        let l1 = Line::new((3.0, -1.0), (3.0, 1.0));
        let (s, t) = l0.segment_intersection(&l1, PARALLEL).unwrap();
        assert!((s - 3.0).abs() < 1e-15);
        assert!((t - 0.5).abs() < 1e-15);
    }

    #[test]
    fn parallel_lines() {
        let l0 = Line::new((0.0, 0.0), (1.0, 1.0));
        let l1 = Line::new((0.0, 1.0), (1.0, 2.0));
        assert!(l0.segment_intersection(&l1, PARALLEL).is_none());
        assert!(l0.parallel_different(&l1, PARALLEL));
        assert!(l0.overlap(&l1, PARALLEL).is_none());
    }

    #[test]
    fn collinear_disjoint() {
        let l0 = Line::new((0.0, 0.0), (1.0, 0.0));
        let l1 = Line::new((2.0, 0.0), (3.0, 0.0));
        assert!(l0.segment_intersection(&l1, PARALLEL).is_none());
        assert!(l0.parallel_different(&l1, PARALLEL));
    }

    #[test]
    fn collinear_overlapping() {
        let l0 = Line::new((0.0, 0.0), (4.0, 0.0));
        let l1 = Line::new((3.0, 0.0), (1.0, 0.0));
        assert!(!l0.parallel_different(&l1, PARALLEL));
        let overlap = l0.overlap(&l1, PARALLEL).unwrap();
        assert_eq!(overlap.start, (0.25, 1.0));
        assert_eq!(overlap.end, (0.75, 0.0));
    }

    #[test]
    fn collinear_touching_at_endpoint() {
        let l0 = Line::new((0.0, 0.0), (1.0, 0.0));
        let l1 = Line::new((1.0, 0.0), (2.0, 0.0));
        assert!(!l0.parallel_different(&l1, PARALLEL));
        let overlap = l0.overlap(&l1, PARALLEL).unwrap();
        assert_eq!(overlap.start, (1.0, 0.0));
        assert_eq!(overlap.end, (1.0, 0.0));
    }

    #[test]
    fn containing_segment() {
        let l0 = Line::new((1.0, 1.0), (2.0, 2.0));
        let l1 = Line::new((0.0, 0.0), (3.0, 3.0));
        assert!(!l0.parallel_different(&l1, PARALLEL));
        assert!(!l1.parallel_different(&l0, PARALLEL));
    }

    #[test]
    fn zero_length() {
        let point = Line::new((1.0, 1.0), (1.0, 1.0));
        let l1 = Line::new((0.0, 0.0), (3.0, 3.0));
        assert!(point.segment_intersection(&l1, PARALLEL).is_none());
        assert!(!point.parallel_different(&l1, PARALLEL));
        let off = Line::new((1.0, 2.0), (1.0, 2.0));
        assert!(off.parallel_different(&l1, PARALLEL));
    }
}
