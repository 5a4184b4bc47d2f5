// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersecting two Bézier curves by recursive subdivision.

use alloc::vec::Vec;
use core::cmp::Ordering;

use log::{debug, trace};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::bbox::{bbox_intersect, BoxIntersection};
use crate::candidate::{from_linearized, CandidatePair, Degeneracy, Resolution};
use crate::{BezCurve, CurveId, IntersectionError, Overlap, ParamCurve, Point, Tolerances, Workspace};

/// How the two curves meet at a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootKind {
    /// The curves cross at a nonzero angle.
    Transversal,
    /// The curves touch with (nearly) parallel tangents.
    Tangent,
}

/// A point where the two curves meet.
///
/// A root does not record which candidate pair it was refined from. Two
/// roots within [`Tolerances::root_dedup`] of each other in both parameters
/// are the same root, whichever subdivision path found them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Root {
    /// Parameter on the first curve, in `[0, 1]`.
    pub s: f64,
    /// Parameter on the second curve, in `[0, 1]`.
    pub t: f64,
    /// Whether the curves cross or touch here.
    pub kind: RootKind,
}

/// Overall outcome of an intersection search.
///
/// Variants are ordered by priority: when several problems occur during one
/// search, the greatest one is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Every candidate was resolved; the roots are complete.
    Success,
    /// Newton's method failed on at least one candidate that looked like a
    /// genuine hit, so a root may be missing.
    NoConvergence,
    /// The curves share a stretch rather than meeting at isolated points.
    Coincident,
    /// The candidate ceiling was reached before the search finished.
    TooManySubdivisions,
}

/// Everything learned about the intersection of two curves, besides the
/// roots themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Whether the roots are complete.
    pub status: Status,
    /// The number of candidate pairs examined.
    pub candidates: usize,
    /// A shared stretch of the two curves, when one was found.
    pub overlap: Option<Overlap>,
}

/// The result of intersecting two curves.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersections {
    /// The roots, sorted by `s` and then by `t`.
    pub roots: Vec<Root>,
    /// Whether the roots are complete.
    pub status: Status,
    /// The number of candidate pairs examined.
    pub candidates: usize,
    /// A shared stretch of the two curves, when one was found.
    pub overlap: Option<Overlap>,
}

impl Intersections {
    fn new(roots: Vec<Root>, summary: Summary) -> Intersections {
        Intersections {
            roots,
            status: summary.status,
            candidates: summary.candidates,
            overlap: summary.overlap,
        }
    }

    /// Whether the search ran to completion without degeneracies.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Success
    }

    /// The points of intersection, evaluated on the first curve.
    pub fn points<'a>(&'a self, curve1: &'a BezCurve) -> impl Iterator<Item = Point> + 'a {
        self.roots.iter().map(move |root| curve1.eval(root.s))
    }
}

impl Workspace {
    /// Intersect two curves given by their control points.
    ///
    /// The roots are written to `roots`, which is cleared first; the
    /// candidate storage of the workspace is reused between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if either curve has fewer than two control points or
    /// a control point that is not finite. No work is done in that case.
    pub fn intersect(
        &mut self,
        nodes1: &[Point],
        nodes2: &[Point],
        tol: &Tolerances,
        roots: &mut Vec<Root>,
    ) -> Result<Summary, IntersectionError> {
        validate(nodes1, CurveId::First)?;
        validate(nodes2, CurveId::Second)?;
        roots.clear();
        let curve1 = BezCurve::from_nodes(nodes1);
        let curve2 = BezCurve::from_nodes(nodes2);

        if let Some(overlap) = identical_overlap(&curve1, &curve2) {
            debug!("control polygons coincide, skipping subdivision");
            return Ok(Summary {
                status: Status::Coincident,
                candidates: 0,
                overlap: Some(overlap),
            });
        }

        let mut status = Status::Success;
        let mut overlap = None;
        let mut processed = 0;
        self.candidates.clear();
        self.candidates
            .push(CandidatePair::root(curve1.clone(), curve2.clone()));
        while let Some(pair) = self.candidates.pop() {
            if processed == tol.max_candidates {
                debug!(
                    "gave up after {processed} candidates, {} still pending",
                    self.candidates.len() + 1
                );
                status = status.max(Status::TooManySubdivisions);
                break;
            }
            processed += 1;
            if bbox_intersect(pair.first.curve().nodes(), pair.second.curve().nodes())
                == BoxIntersection::Disjoint
            {
                continue;
            }
            match from_linearized(&pair.first, &pair.second, &curve1, &curve2, tol) {
                Resolution::Root(root) => {
                    trace!("root at s = {}, t = {} ({:?})", root.s, root.t, root.kind);
                    add_root(roots, root, tol.root_dedup);
                }
                Resolution::Subdivide(side) => {
                    // Reversed so that the lowest parameters are popped first.
                    self.candidates.extend(pair.split(side).into_iter().rev());
                    self.high_water = self.high_water.max(self.candidates.len());
                }
                Resolution::Disjoint => {}
                Resolution::Degenerate(Degeneracy::Coincident(found)) => {
                    status = status.max(Status::Coincident);
                    overlap = overlap.or(found);
                }
                Resolution::Degenerate(Degeneracy::NoConvergence) => {
                    status = status.max(Status::NoConvergence);
                }
            }
        }
        self.candidates.clear();
        roots.sort_by(compare_roots);
        debug!(
            "{} roots after {processed} candidates, status {status:?}",
            roots.len()
        );
        Ok(Summary {
            status,
            candidates: processed,
            overlap,
        })
    }

    /// Intersect two curves, returning freshly allocated roots.
    ///
    /// # Errors
    ///
    /// See [`Workspace::intersect`].
    pub fn intersections(
        &mut self,
        nodes1: &[Point],
        nodes2: &[Point],
        tol: &Tolerances,
    ) -> Result<Intersections, IntersectionError> {
        let mut roots = Vec::new();
        let summary = self.intersect(nodes1, nodes2, tol, &mut roots)?;
        Ok(Intersections::new(roots, summary))
    }
}

/// Intersect two planar Bézier curves.
///
/// Uses the default [`Tolerances`] and a workspace shared by the whole
/// process, which stays allocated until
/// [`free_curve_intersections_workspace`](crate::free_curve_intersections_workspace)
/// is called.
///
/// # Errors
///
/// Returns an error if either curve has fewer than two control points or a
/// control point that is not finite.
#[cfg(feature = "std")]
pub fn curve_intersections(
    nodes1: &[Point],
    nodes2: &[Point],
) -> Result<Intersections, IntersectionError> {
    curve_intersections_with(nodes1, nodes2, &Tolerances::default())
}

/// Intersect two planar Bézier curves with custom tolerances.
///
/// # Errors
///
/// See [`curve_intersections`].
#[cfg(feature = "std")]
pub fn curve_intersections_with(
    nodes1: &[Point],
    nodes2: &[Point],
    tol: &Tolerances,
) -> Result<Intersections, IntersectionError> {
    crate::workspace::with_shared(|workspace| workspace.intersections(nodes1, nodes2, tol))
}

/// Intersect two curves given as flat coordinate arrays.
///
/// Each curve is a sequence `x0, y0, x1, y1, ...` of its control points.
/// Only `dimension == 2` is supported.
///
/// # Errors
///
/// Returns an error for an unsupported dimension, a coordinate count that is
/// not a multiple of the dimension, and everything [`curve_intersections`]
/// rejects.
#[cfg(feature = "std")]
pub fn curve_intersections_flat(
    coords1: &[f64],
    coords2: &[f64],
    dimension: usize,
) -> Result<Intersections, IntersectionError> {
    let nodes1 = nodes_from_flat(coords1, dimension, CurveId::First)?;
    let nodes2 = nodes_from_flat(coords2, dimension, CurveId::Second)?;
    curve_intersections(&nodes1, &nodes2)
}

/// Convert flat `x, y` coordinates into control points.
///
/// # Errors
///
/// Returns an error when `dimension` is not two or `coords` does not hold a
/// whole number of points.
pub fn nodes_from_flat(
    coords: &[f64],
    dimension: usize,
    curve: CurveId,
) -> Result<Vec<Point>, IntersectionError> {
    if dimension != 2 {
        return Err(IntersectionError::UnsupportedDimension { curve, dimension });
    }
    if coords.len() % 2 != 0 {
        return Err(IntersectionError::RaggedCoordinates {
            curve,
            len: coords.len(),
        });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

fn validate(nodes: &[Point], curve: CurveId) -> Result<(), IntersectionError> {
    if nodes.len() < 2 {
        return Err(IntersectionError::TooFewNodes {
            curve,
            nodes: nodes.len(),
        });
    }
    match nodes.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(IntersectionError::NonFiniteNode { curve, index }),
        None => Ok(()),
    }
}

/// The overlap of two curves with the same control polygon, if they have
/// one.
fn identical_overlap(curve1: &BezCurve, curve2: &BezCurve) -> Option<Overlap> {
    if curve1 == curve2 {
        Some(Overlap {
            start: (0.0, 0.0),
            end: (1.0, 1.0),
        })
    } else if curve1.is_reverse_of(curve2) {
        Some(Overlap {
            start: (0.0, 1.0),
            end: (1.0, 0.0),
        })
    } else {
        None
    }
}

/// Add a root unless one is already known within `dedup` in both
/// parameters.
fn add_root(roots: &mut Vec<Root>, root: Root, dedup: f64) {
    let existing = roots
        .iter_mut()
        .find(|r| (r.s - root.s).abs() <= dedup && (r.t - root.t).abs() <= dedup);
    match existing {
        Some(r) => {
            if root.kind == RootKind::Tangent {
                r.kind = RootKind::Tangent;
            }
        }
        None => roots.push(root),
    }
}

fn compare_roots(a: &Root, b: &Root) -> Ordering {
    a.s.total_cmp(&b.s).then(a.t.total_cmp(&b.t))
}
