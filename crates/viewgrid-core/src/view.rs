#![forbid(unsafe_code)]

//! View identity.
//!
//! Views are named by opaque ids so roster mutations (add/remove/reorder)
//! never invalidate references held by embedders. Ids are allocated by a
//! [`ViewIdGen`] and are unique within it for the life of the process.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Opaque identifier for a view in a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(u64);

impl ViewId {
    /// Raw numeric value, for logging and serialization.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Monotonic allocator for [`ViewId`]s.
///
/// Never yields the same id twice, even across threads.
#[derive(Debug, Default)]
pub struct ViewIdGen {
    next: AtomicU64,
}

impl ViewIdGen {
    /// Create a generator starting at id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> ViewId {
        ViewId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_unique() {
        let g = ViewIdGen::new();
        let a = g.next_id();
        let b = g.next_id();
        let c = g.next_id();
        assert!(a < b && b < c);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn id_display_is_stable() {
        let g = ViewIdGen::new();
        let a = g.next_id();
        assert_eq!(a.to_string(), "view-0");
        assert_eq!(a.raw(), 0);
    }

    #[test]
    fn independent_generators_restart() {
        let g1 = ViewIdGen::new();
        let g2 = ViewIdGen::new();
        assert_eq!(g1.next_id(), g2.next_id());
    }

    #[test]
    fn ids_unique_across_threads() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let g = Arc::new(ViewIdGen::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let g = Arc::clone(&g);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| g.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
