// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a pair of curve segments once they look like lines.

use arrayvec::ArrayVec;

use crate::bbox::{bbox_line_intersect, BoxIntersection};
use crate::common::{in_interval, wiggle_interval};
use crate::newton::full_newton;
use crate::segment::CurveSegment;
use crate::{BezCurve, Overlap, Root, Tolerances};

/// Which member of a candidate pair to split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Split the segment of the first curve only.
    First,
    /// Split the segment of the second curve only.
    Second,
    /// Split both segments, producing four new pairs.
    Both,
}

/// A candidate that has no isolated intersection point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degeneracy {
    /// The segments are straight and lie on top of each other. The overlap,
    /// in parameters of the original curves, is reported when it has
    /// positive length.
    Coincident(Option<Overlap>),
    /// Newton's method did not settle on a common point.
    NoConvergence,
}

/// The fate of one candidate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// A verified intersection of the original curves.
    Root(Root),
    /// The segments are not linear enough yet.
    Subdivide(Side),
    /// The segments cannot meet.
    Disjoint,
    /// No unique answer exists for this pair.
    Degenerate(Degeneracy),
}

/// Two segments, one from each curve, that might intersect.
#[derive(Clone, Debug)]
pub struct CandidatePair {
    /// The piece of the first curve.
    pub first: CurveSegment,
    /// The piece of the second curve.
    pub second: CurveSegment,
}

impl CandidatePair {
    /// The pair covering both curves entirely.
    pub fn root(curve1: BezCurve, curve2: BezCurve) -> CandidatePair {
        CandidatePair {
            first: CurveSegment::root(curve1),
            second: CurveSegment::root(curve2),
        }
    }

    /// Halve the requested members, returning the new pairs.
    ///
    /// Children are ordered by ascending parameter on the first curve, then
    /// on the second.
    pub fn split(&self, side: Side) -> ArrayVec<CandidatePair, 4> {
        let mut children = ArrayVec::new();
        let pair = |first: &CurveSegment, second: &CurveSegment| CandidatePair {
            first: first.clone(),
            second: second.clone(),
        };
        match side {
            Side::First => {
                let (a, b) = self.first.subdivide();
                children.push(pair(&a, &self.second));
                children.push(pair(&b, &self.second));
            }
            Side::Second => {
                let (a, b) = self.second.subdivide();
                children.push(pair(&self.first, &a));
                children.push(pair(&self.first, &b));
            }
            Side::Both => {
                let (a1, b1) = self.first.subdivide();
                let (a2, b2) = self.second.subdivide();
                children.push(pair(&a1, &a2));
                children.push(pair(&a1, &b2));
                children.push(pair(&b1, &a2));
                children.push(pair(&b1, &b2));
            }
        }
        children
    }
}

/// Decide what to do with a candidate pair.
///
/// Pieces that are not yet linear ask to be split; a curved piece facing a
/// linear one is first checked against the line. When both are linear the
/// chords are intersected, the hit is checked against both bounding boxes,
/// and the result is polished with Newton's method on the original curves
/// `curve1` and `curve2`.
pub fn from_linearized(
    first: &CurveSegment,
    second: &CurveSegment,
    curve1: &BezCurve,
    curve2: &BezCurve,
    tol: &Tolerances,
) -> Resolution {
    let linear1 = first.is_linear(tol.linearization);
    let linear2 = second.is_linear(tol.linearization);
    match (linear1, linear2) {
        (false, false) => Resolution::Subdivide(Side::Both),
        (true, false) => {
            if line_misses(second, first) {
                Resolution::Disjoint
            } else {
                Resolution::Subdivide(Side::Second)
            }
        }
        (false, true) => {
            if line_misses(first, second) {
                Resolution::Disjoint
            } else {
                Resolution::Subdivide(Side::First)
            }
        }
        (true, true) => solve_linearized(first, second, curve1, curve2, tol),
    }
}

/// Whether the chord of `linear` provably misses the box of `curved`.
fn line_misses(curved: &CurveSegment, linear: &CurveSegment) -> bool {
    bbox_line_intersect(curved.curve().nodes(), &linear.chord(), linear.error())
        == BoxIntersection::Disjoint
}

fn solve_linearized(
    first: &CurveSegment,
    second: &CurveSegment,
    curve1: &BezCurve,
    curve2: &BezCurve,
    tol: &Tolerances,
) -> Resolution {
    let line1 = first.chord();
    let line2 = second.chord();
    let Some((s, t)) = line1.segment_intersection(&line2, tol.parallel) else {
        return solve_parallel(first, second, curve1, curve2, tol);
    };
    let exact = first.error() == 0.0 && second.error() == 0.0;
    // Straight lines get no leeway beyond rounding.
    let slack = if exact {
        tol.wiggle
    } else {
        tol.line_param_slack
    };
    let on_segments = in_interval(s, -slack, 1.0 + slack) && in_interval(t, -slack, 1.0 + slack);
    if !on_segments && exact {
        return Resolution::Disjoint;
    }
    if line_misses(first, second) || line_misses(second, first) {
        return Resolution::Disjoint;
    }
    let s = s.clamp(0.0, 1.0);
    let t = t.clamp(0.0, 1.0);
    match refine(first.to_global(s), curve1, second.to_global(t), curve2, tol) {
        Resolution::Degenerate(Degeneracy::NoConvergence) if !on_segments => {
            // The guess came from outside both segments; nothing suggests a
            // root here.
            Resolution::Disjoint
        }
        resolution => resolution,
    }
}

fn solve_parallel(
    first: &CurveSegment,
    second: &CurveSegment,
    curve1: &BezCurve,
    curve2: &BezCurve,
    tol: &Tolerances,
) -> Resolution {
    let line1 = first.chord();
    let line2 = second.chord();
    let Some(overlap) = line1.overlap(&line2, tol.parallel) else {
        return Resolution::Disjoint;
    };
    // Collinear pieces that only share an endpoint meet at a single point.
    if overlap.end.0 - overlap.start.0 <= tol.wiggle {
        let (s, t) = overlap.start;
        return refine(first.to_global(s), curve1, second.to_global(t), curve2, tol);
    }
    if first.error() == 0.0 && second.error() == 0.0 {
        let to_global = |(s, t): (f64, f64)| (first.to_global(s), second.to_global(t));
        return Resolution::Degenerate(Degeneracy::Coincident(Some(Overlap {
            start: to_global(overlap.start),
            end: to_global(overlap.end),
        })));
    }
    Resolution::Subdivide(Side::Both)
}

/// Polish a guess on the original curves and keep it if it lands in range.
fn refine(s: f64, curve1: &BezCurve, t: f64, curve2: &BezCurve, tol: &Tolerances) -> Resolution {
    match full_newton(s, curve1, t, curve2, tol) {
        Ok(root) => match (wiggle_interval(root.s, tol.wiggle), wiggle_interval(root.t, tol.wiggle)) {
            (Some(s), Some(t)) => Resolution::Root(Root { s, t, ..root }),
            _ => Resolution::Disjoint,
        },
        Err(failure) => {
            log::trace!(
                "newton did not converge near ({}, {}), residual {:e}",
                failure.s,
                failure.t,
                failure.residual
            );
            Resolution::Degenerate(Degeneracy::NoConvergence)
        }
    }
}
