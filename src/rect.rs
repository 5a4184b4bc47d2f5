// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use crate::Point;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect {
            x0: p0.x,
            y0: p0.y,
            x1: p1.x,
            y1: p1.y,
        }
        .abs()
    }

    /// The smallest rectangle enclosing a set of points.
    ///
    /// Returns `None` for an empty set.
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |r, &p| r.union_pt(p)),
        )
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The larger of width and height.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.width().max(self.height())
    }

    /// The four corners, counter-clockwise starting from `(x0, y0)`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x0, self.y0),
            Point::new(self.x1, self.y0),
            Point::new(self.x1, self.y1),
            Point::new(self.x0, self.y1),
        ]
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Expand a rectangle by a constant amount in both directions.
    pub fn inflate(&self, width: f64, height: f64) -> Rect {
        Rect {
            x0: self.x0 - width,
            y0: self.y0 - height,
            x1: self.x1 + width,
            y1: self.y1 + height,
        }
    }

    /// Whether the point lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains_closed(&self, pt: Point) -> bool {
        self.x0 <= pt.x && pt.x <= self.x1 && self.y0 <= pt.y && pt.y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_points() {
        let pts = [
            Point::new(1.0, 2.0),
            Point::new(-1.0, 5.0),
            Point::new(3.0, 0.5),
        ];
        let r = Rect::bounding(&pts).unwrap();
        assert_eq!(r, Rect::new(-1.0, 0.5, 3.0, 5.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.extent(), 4.5);
        assert!(Rect::bounding(&[]).is_none());
    }

    #[test]
    fn degenerate_box() {
        let r = Rect::bounding(&[Point::new(0.0, 1.0), Point::new(2.0, 1.0)]).unwrap();
        assert_eq!(r.height(), 0.0);
        assert!(r.contains_closed(Point::new(1.0, 1.0)));
        assert!(!r.contains_closed(Point::new(1.0, 1.0 + 1e-12)));
        let grown = r.inflate(0.5, 0.5);
        assert!(grown.contains_closed(Point::new(1.0, 1.25)));
    }
}
