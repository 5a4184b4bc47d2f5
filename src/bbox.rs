// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifying bounding boxes against each other and against lines.

use crate::{Line, Point, Rect};

/// How two bounding boxes (or a box and a line) relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxIntersection {
    /// The interiors overlap.
    Intersection,
    /// The two only touch along their boundary.
    Tangent,
    /// The two are separated, so the enclosed curves cannot meet.
    Disjoint,
}

impl Rect {
    /// Classify the relationship between two boxes.
    ///
    /// Boxes separated along either axis are disjoint; boxes where an edge
    /// of one lies exactly on an edge of the other are tangent. Zero-width
    /// or zero-height boxes are handled the same way, so a horizontal line
    /// crossing the middle of a box is an intersection.
    pub fn classify(&self, other: &Rect) -> BoxIntersection {
        if other.x1 < self.x0 || self.x1 < other.x0 || other.y1 < self.y0 || self.y1 < other.y0 {
            BoxIntersection::Disjoint
        } else if other.x1 == self.x0
            || self.x1 == other.x0
            || other.y1 == self.y0
            || self.y1 == other.y0
        {
            BoxIntersection::Tangent
        } else {
            BoxIntersection::Intersection
        }
    }

    /// Classify this box against the infinite line through `line`.
    ///
    /// A line that separates the corners is an intersection; one that only
    /// passes through a corner or runs along an edge is tangent. A
    /// zero-length line is treated as a point.
    pub fn classify_line(&self, line: &Line) -> BoxIntersection {
        let d = line.delta();
        if d.x == 0.0 && d.y == 0.0 {
            return self.classify_point(line.p0);
        }
        let (min, max) = self
            .corners()
            .iter()
            .map(|&c| d.cross(c - line.p0))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > 0.0 || max < 0.0 {
            BoxIntersection::Disjoint
        } else if min < 0.0 && max > 0.0 {
            BoxIntersection::Intersection
        } else if min == 0.0 && max == 0.0 {
            // The box has collapsed onto the line itself.
            BoxIntersection::Intersection
        } else {
            BoxIntersection::Tangent
        }
    }

    fn classify_point(&self, p: Point) -> BoxIntersection {
        if !self.contains_closed(p) {
            BoxIntersection::Disjoint
        } else if p.x == self.x0 || p.x == self.x1 || p.y == self.y0 || p.y == self.y1 {
            BoxIntersection::Tangent
        } else {
            BoxIntersection::Intersection
        }
    }
}

/// Classify the bounding boxes of two sets of control points.
pub fn bbox_intersect(nodes1: &[Point], nodes2: &[Point]) -> BoxIntersection {
    match (Rect::bounding(nodes1), Rect::bounding(nodes2)) {
        (Some(r1), Some(r2)) => r1.classify(&r2),
        _ => BoxIntersection::Disjoint,
    }
}

/// Classify the bounding box of a set of control points against a line.
///
/// `slack` grows the box in every direction first; pass the linearization
/// error of the curve the line stands in for, so that the test stays
/// conservative.
pub fn bbox_line_intersect(nodes: &[Point], line: &Line, slack: f64) -> BoxIntersection {
    match Rect::bounding(nodes) {
        Some(r) => r.inflate(slack, slack).classify_line(line),
        None => BoxIntersection::Disjoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn boxes() {
        let unit = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let inside = pts(&[(0.25, 0.25), (0.75, 0.75)]);
        let right = pts(&[(1.0, 0.0), (2.0, 1.0)]);
        let corner = pts(&[(1.0, 1.0), (2.0, 2.0)]);
        let far = pts(&[(1.5, 0.0), (2.0, 1.0)]);
        assert_eq!(bbox_intersect(&unit, &inside), BoxIntersection::Intersection);
        assert_eq!(bbox_intersect(&unit, &right), BoxIntersection::Tangent);
        assert_eq!(bbox_intersect(&unit, &corner), BoxIntersection::Tangent);
        assert_eq!(bbox_intersect(&unit, &far), BoxIntersection::Disjoint);
        assert_eq!(bbox_intersect(&far, &unit), BoxIntersection::Disjoint);
    }

    #[test]
    fn degenerate_boxes() {
        let square = pts(&[(0.0, -1.0), (3.0, 1.0)]);
        let horizontal = pts(&[(0.5, 0.0), (2.5, 0.0)]);
        assert_eq!(bbox_intersect(&square, &horizontal), BoxIntersection::Intersection);
        let vertical = pts(&[(1.0, -3.0), (1.0, 3.0)]);
        assert_eq!(bbox_intersect(&horizontal, &vertical), BoxIntersection::Intersection);
        let on_edge = pts(&[(0.5, 1.0), (2.5, 1.0)]);
        assert_eq!(bbox_intersect(&square, &on_edge), BoxIntersection::Tangent);
    }

    #[test]
    fn box_against_line() {
        let unit = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let diagonal = Line::new((0.0, 0.0), (2.0, 2.0));
        assert_eq!(bbox_line_intersect(&unit, &diagonal, 0.0), BoxIntersection::Intersection);
        // The line is unbounded, so a short piece far away still cuts the box.
        let short = Line::new((5.0, 5.0), (6.0, 6.0));
        assert_eq!(bbox_line_intersect(&unit, &short, 0.0), BoxIntersection::Intersection);
        let touching = Line::new((1.0, 0.0), (2.0, 1.0));
        assert_eq!(bbox_line_intersect(&unit, &touching, 0.0), BoxIntersection::Tangent);
        let along_edge = Line::new((0.0, 1.0), (1.0, 1.0));
        assert_eq!(bbox_line_intersect(&unit, &along_edge, 0.0), BoxIntersection::Tangent);
        let away = Line::new((0.0, 2.0), (1.0, 2.0));
        assert_eq!(bbox_line_intersect(&unit, &away, 0.0), BoxIntersection::Disjoint);
        assert_eq!(bbox_line_intersect(&unit, &away, 1.5), BoxIntersection::Intersection);
    }

    #[test]
    fn degenerate_line() {
        let unit = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let point = |x: f64, y: f64| Line::new((x, y), (x, y));
        assert_eq!(bbox_line_intersect(&unit, &point(0.5, 0.5), 0.0), BoxIntersection::Intersection);
        assert_eq!(bbox_line_intersect(&unit, &point(1.0, 0.5), 0.0), BoxIntersection::Tangent);
        assert_eq!(bbox_line_intersect(&unit, &point(2.0, 0.5), 0.0), BoxIntersection::Disjoint);
        let flat = pts(&[(0.0, 0.0), (2.0, 0.0)]);
        let on_it = Line::new((-1.0, 0.0), (5.0, 0.0));
        assert_eq!(bbox_line_intersect(&flat, &on_it, 0.0), BoxIntersection::Intersection);
    }
}
