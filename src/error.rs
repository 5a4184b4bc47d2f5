// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalid input to the intersection search.

use core::fmt;

/// Which of the two input curves an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveId {
    /// The first curve, parametrized by `s`.
    First,
    /// The second curve, parametrized by `t`.
    Second,
}

/// Input that is rejected before any subdivision work begins.
///
/// Numerical trouble during the search is not an error; it is reported
/// through [`Status`](crate::Status).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectionError {
    /// A curve needs at least two control points.
    TooFewNodes {
        /// The offending curve.
        curve: CurveId,
        /// How many control points it had.
        nodes: usize,
    },
    /// A control point has a NaN or infinite coordinate.
    NonFiniteNode {
        /// The offending curve.
        curve: CurveId,
        /// Index of the control point.
        index: usize,
    },
    /// Flat coordinates were given with a dimension other than two.
    UnsupportedDimension {
        /// The offending curve.
        curve: CurveId,
        /// The requested dimension.
        dimension: usize,
    },
    /// The number of flat coordinates is not a multiple of the dimension.
    RaggedCoordinates {
        /// The offending curve.
        curve: CurveId,
        /// The number of coordinates.
        len: usize,
    },
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveId::First => write!(f, "first curve"),
            CurveId::Second => write!(f, "second curve"),
        }
    }
}

impl fmt::Display for IntersectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IntersectionError::TooFewNodes { curve, nodes } => {
                write!(f, "{curve} has {nodes} control points, at least 2 are required")
            }
            IntersectionError::NonFiniteNode { curve, index } => {
                write!(f, "control point {index} of the {curve} is not finite")
            }
            IntersectionError::UnsupportedDimension { curve, dimension } => {
                write!(f, "{curve} has dimension {dimension}, only planar curves are supported")
            }
            IntersectionError::RaggedCoordinates { curve, len } => {
                write!(f, "{curve} has {len} coordinates, which is not a whole number of points")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntersectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = IntersectionError::TooFewNodes {
            curve: CurveId::Second,
            nodes: 1,
        };
        assert_eq!(
            err.to_string(),
            "second curve has 1 control points, at least 2 are required"
        );
        let err = IntersectionError::NonFiniteNode {
            curve: CurveId::First,
            index: 2,
        };
        assert_eq!(err.to_string(), "control point 2 of the first curve is not finite");
    }
}
