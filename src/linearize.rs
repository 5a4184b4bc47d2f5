// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding the distance between a curve and its chord.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{Point, Vec2};

/// An upper bound on how far a Bézier curve strays from the line joining its
/// endpoints.
///
/// For a curve `B` of degree `n` with chord `L(t) = (1 - t) B(0) + t B(1)`,
///
/// ```text
/// |B(t) - L(t)| <= n (n - 1) / 8 · max |P[j+2] - 2 P[j+1] + P[j]|
/// ```
///
/// where the maximum is taken separately per coordinate. The second
/// differences of the control points carry the scale of the curve, so the
/// bound is in the same units as the coordinates. Lines and curves with
/// fewer than three control points have zero error.
pub fn linearization_error(nodes: &[Point]) -> f64 {
    if nodes.len() < 3 {
        return 0.0;
    }
    let degree = (nodes.len() - 1) as f64;
    let worst = nodes
        .windows(3)
        .fold(Vec2::ZERO, |worst, w| {
            let second = (w[2] - w[1]) - (w[1] - w[0]);
            Vec2::new(worst.x.max(second.x.abs()), worst.y.max(second.y.abs()))
        });
    if worst == Vec2::ZERO {
        return 0.0;
    }
    0.125 * degree * (degree - 1.0) * worst.hypot()
}
