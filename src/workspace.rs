// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable storage for the intersection search.

use alloc::vec::Vec;

use crate::candidate::CandidatePair;

/// Scratch storage for [`Workspace::intersect`].
///
/// The candidate stack grows to fit the largest search run so far and is
/// kept between calls, so repeated intersections do not reallocate. Only
/// the capacity carries over; every call starts from an empty stack.
#[derive(Debug, Default)]
pub struct Workspace {
    pub(crate) candidates: Vec<CandidatePair>,
    pub(crate) high_water: usize,
}

impl Workspace {
    /// Create an empty workspace.
    #[inline]
    pub const fn new() -> Workspace {
        Workspace {
            candidates: Vec::new(),
            high_water: 0,
        }
    }

    /// The number of pending candidates the workspace can hold without
    /// growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.candidates.capacity()
    }

    /// The largest number of candidates that were pending at once since the
    /// workspace was created or released.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Give the storage back to the allocator.
    pub fn release(&mut self) {
        self.candidates = Vec::new();
        self.high_water = 0;
    }
}

#[cfg(feature = "std")]
static SHARED: std::sync::Mutex<Option<Workspace>> = std::sync::Mutex::new(None);

/// Run `f` with the process-wide workspace, creating it if needed.
#[cfg(feature = "std")]
pub(crate) fn with_shared<R>(f: impl FnOnce(&mut Workspace) -> R) -> R {
    // A panic while searching leaves nothing inconsistent behind; every
    // search starts by clearing the stack.
    let mut guard = SHARED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    f(guard.get_or_insert_with(Workspace::new))
}

/// Release the workspace used by [`curve_intersections`](crate::curve_intersections).
///
/// The next search allocates a fresh one. Calling this again, or before any
/// search, does nothing.
#[cfg(feature = "std")]
pub fn free_curve_intersections_workspace() {
    let mut guard = SHARED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    if guard.take().is_some() {
        log::debug!("released shared intersection workspace");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Tolerances};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn storage_is_reused() {
        let first = pts(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let second = pts(&[(0.0, 1.0), (0.5, 0.0), (1.0, 1.0)]);
        let tol = Tolerances::default();
        let mut ws = Workspace::new();
        assert_eq!(ws.capacity(), 0);
        let mut roots = Vec::new();
        let a = ws.intersect(&first, &second, &tol, &mut roots).unwrap();
        let found = roots.clone();
        let capacity = ws.capacity();
        assert!(capacity > 0);
        assert!(ws.high_water() > 0 && ws.high_water() <= capacity);
        let b = ws.intersect(&first, &second, &tol, &mut roots).unwrap();
        assert_eq!(a, b);
        assert_eq!(found, roots);
        assert_eq!(ws.capacity(), capacity);
        ws.release();
        assert_eq!(ws.capacity(), 0);
        assert_eq!(ws.high_water(), 0);
        let c = ws.intersect(&first, &second, &tol, &mut roots).unwrap();
        assert_eq!(a, c);
        assert_eq!(found, roots);
    }

    #[cfg(feature = "std")]
    #[test]
    fn shared_workspace_round_trip() {
        let first = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let second = pts(&[(0.0, 1.0), (1.0, -1.0), (2.0, 1.0)]);
        free_curve_intersections_workspace();
        free_curve_intersections_workspace();
        let a = crate::curve_intersections(&first, &second).unwrap();
        free_curve_intersections_workspace();
        let b = crate::curve_intersections(&first, &second).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.roots.len(), 2);
    }
}
