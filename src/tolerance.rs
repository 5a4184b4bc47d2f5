// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numerical tolerances of the intersection search.

/// Tolerances and limits used while intersecting two curves.
///
/// The defaults suit curves whose coordinates are of moderate magnitude;
/// most thresholds are relative so that scaling both curves does not change
/// the outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// A segment is treated as a line when its linearization error is at
    /// most this fraction of its chord length. Default: 2⁻²².
    pub linearization: f64,
    /// Two lines are parallel when the sine of the angle between them is at
    /// most this value. Also the relative offset below which parallel lines
    /// are considered coincident. Default: 2⁻⁴⁰.
    pub parallel: f64,
    /// Newton iteration stops once a step moves both parameters by less
    /// than this. Default: 2⁻⁴⁰.
    pub newton_convergence: f64,
    /// A refined root is accepted when the distance between the two curve
    /// points is at most this fraction of the curves' extent. Default: 1e-9.
    pub newton_residual: f64,
    /// Maximum number of Newton steps per root. Default: 10.
    pub max_newton_iterations: usize,
    /// Roots closer than this in both parameters are merged. Default: 2⁻²⁰.
    pub root_dedup: f64,
    /// Refined parameters this far outside of `[0, 1]` are snapped onto the
    /// boundary. Default: 2⁻⁴⁵.
    pub wiggle: f64,
    /// Line parameters this far outside of `[0, 1]` still count as a hit on
    /// a nearly linear segment. Default: 2⁻¹⁶.
    pub line_param_slack: f64,
    /// A root is tangent when the sine of the angle between the two
    /// derivatives is below this value. Default: 1e-6.
    pub tangent_threshold: f64,
    /// Safety ceiling on the number of candidate pairs examined by one call.
    /// Default: 65536.
    pub max_candidates: usize,
}

impl Tolerances {
    /// The default tolerances.
    pub const DEFAULT: Tolerances = Tolerances {
        linearization: 2.384185791015625e-7,
        parallel: 9.094947017729282e-13,
        newton_convergence: 9.094947017729282e-13,
        newton_residual: 1e-9,
        max_newton_iterations: 10,
        root_dedup: 9.5367431640625e-7,
        wiggle: 2.842170943040401e-14,
        line_param_slack: 1.52587890625e-5,
        tangent_threshold: 1e-6,
        max_candidates: 1 << 16,
    };

    /// Builder-style setter for the candidate ceiling.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Tolerances {
        self.max_candidates = max_candidates;
        self
    }
}

impl Default for Tolerances {
    #[inline]
    fn default() -> Tolerances {
        Tolerances::DEFAULT
    }
}
