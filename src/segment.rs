// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-arcs of the input curves.

use crate::linearize::linearization_error;
use crate::{BezCurve, Line, ParamCurve, Rect};

/// A piece of one of the input curves.
///
/// The segment covers the parameter interval `[start, end]` of the
/// original curve and carries its own control points, so it can be split
/// further without going back to the original.
#[derive(Clone, Debug)]
pub struct CurveSegment {
    curve: BezCurve,
    start: f64,
    end: f64,
    error: f64,
}

impl CurveSegment {
    /// The segment covering the whole curve.
    pub fn root(curve: BezCurve) -> CurveSegment {
        CurveSegment::new(curve, 0.0, 1.0)
    }

    fn new(curve: BezCurve, start: f64, end: f64) -> CurveSegment {
        let error = linearization_error(curve.nodes());
        CurveSegment {
            curve,
            start,
            end,
            error,
        }
    }

    /// The control points of this piece.
    #[inline]
    pub fn curve(&self) -> &BezCurve {
        &self.curve
    }

    /// Start of the covered interval on the original curve.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the covered interval on the original curve.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The linearization error of this piece.
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// The line between the endpoints.
    #[inline]
    pub fn chord(&self) -> Line {
        self.curve.chord()
    }

    /// Bounding box of the control points.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.curve.bounding_box()
    }

    /// Whether the segment is close enough to its chord to be treated as a
    /// line.
    ///
    /// The error is compared against `tolerance` times the chord length.
    /// Exactly linear pieces qualify even when the chord is degenerate.
    #[inline]
    pub fn is_linear(&self, tolerance: f64) -> bool {
        self.error == 0.0 || self.error <= tolerance * self.chord().length()
    }

    /// Map a parameter of this piece onto the original curve.
    #[inline]
    pub fn to_global(&self, local: f64) -> f64 {
        (1.0 - local) * self.start + local * self.end
    }

    /// Halve the segment with de Casteljau's algorithm.
    pub fn subdivide(&self) -> (CurveSegment, CurveSegment) {
        let (left, right) = self.curve.subdivide();
        let mid = 0.5 * (self.start + self.end);
        (
            CurveSegment::new(left, self.start, mid),
            CurveSegment::new(right, mid, self.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdivide_tracks_interval() {
        let curve = BezCurve::new([(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let root = CurveSegment::root(curve.clone());
        assert_eq!(root.error(), 1.0);
        let (left, right) = root.subdivide();
        assert_eq!((left.start(), left.end()), (0.0, 0.5));
        assert_eq!((right.start(), right.end()), (0.5, 1.0));
        // Halving a quadratic quarters its second differences.
        assert_eq!(left.error(), 0.25);
        let (_, lr) = left.subdivide();
        assert_eq!((lr.start(), lr.end()), (0.25, 0.5));
        assert_eq!(lr.to_global(0.5), 0.375);
        assert!(lr.curve().eval(0.5).distance(curve.eval(0.375)) < 1e-15);
    }

    #[test]
    fn linear_relative_to_chord() {
        let line = CurveSegment::root(BezCurve::new([(0.0, 0.0), (5.0, 5.0)]));
        assert!(line.is_linear(0.0));
        let flat = CurveSegment::root(BezCurve::new([(0.0, 0.0), (1.0, 1e-8), (2.0, 0.0)]));
        // error = 0.25 * 2e-8, chord = 2
        assert!(flat.is_linear(1e-8));
        assert!(!flat.is_linear(1e-9));
    }
}
