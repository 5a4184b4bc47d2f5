// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of planar Bézier curves.
//!
//! The bezsect library finds every point where two Bézier curves of
//! arbitrary degree meet. Both curves are subdivided until each piece is
//! close enough to a straight line, the pieces are intersected as lines, and
//! each hit is refined with Newton's method on the original curves.
//!
//! Results are given as parameter pairs `(s, t)` on the first and second
//! curve, together with a [`Status`] that says whether the list is
//! complete. Curves that share a stretch, Newton iterations that fail to
//! settle, and searches that hit the candidate ceiling are reported there
//! rather than as errors.
//!
//! # Examples
//!
//! Two parabolas touching at their vertices:
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() {
//! use bezsect::{curve_intersections, Point, RootKind, Status};
//!
//! let first = [Point::new(0.0, 0.0), Point::new(0.5, 1.0), Point::new(1.0, 0.0)];
//! let second = [Point::new(0.0, 1.0), Point::new(0.5, 0.0), Point::new(1.0, 1.0)];
//! let result = curve_intersections(&first, &second).unwrap();
//! assert_eq!(result.status, Status::Success);
//! assert_eq!(result.roots.len(), 1);
//! let root = result.roots[0];
//! assert!((root.s - 0.5).abs() < 1e-9 && (root.t - 0.5).abs() < 1e-9);
//! assert_eq!(root.kind, RootKind::Tangent);
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//! Reusing storage across many searches:
//! ```
//! use bezsect::{Point, Tolerances, Workspace};
//!
//! let line = [Point::new(0.0, 0.0), Point::new(3.0, 0.0)];
//! let cubic = [
//!     Point::new(0.0, -1.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(2.0, -2.0),
//!     Point::new(3.0, 1.0),
//! ];
//! let mut workspace = Workspace::new();
//! let mut roots = Vec::new();
//! let summary = workspace
//!     .intersect(&cubic, &line, &Tolerances::default(), &mut roots)
//!     .unwrap();
//! assert!(summary.status == bezsect::Status::Success);
//! assert_eq!(roots.len(), 3);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. Without `std` there
//! is no process-wide workspace, so [`curve_intersections`] is unavailable;
//! use a [`Workspace`] directly. The crate uses `alloc` regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezsect requires either the `std` or `libm` feature");

extern crate alloc;

pub mod bbox;
mod bezier;
pub mod candidate;
pub mod common;
mod curve_intersections;
mod error;
mod line;
pub mod linearize;
pub mod newton;
mod param_curve;
mod point;
mod rect;
mod segment;
mod tolerance;
mod vec2;
mod workspace;

pub use crate::bezier::*;
pub use crate::curve_intersections::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::segment::*;
pub use crate::tolerance::*;
pub use crate::vec2::*;
pub use crate::workspace::*;
