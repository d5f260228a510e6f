//! Interactive region tracking for custom title-bar controls.
//!
//! Any control the embedding application places inside the chrome (window
//! buttons, a search box, a menu) must be excluded from the draggable
//! caption, otherwise clicking it would start a window move. The registry
//! tracks those exclusion regions and answers the single question the
//! hit-test path needs: "does a custom control own this point?"
//!
//! Controls are tracked through weak references: the registry never keeps a
//! destroyed control alive, and a control that goes away without an explicit
//! [`InteractiveRegionRegistry::deregister`] call is pruned on the next
//! mutation rather than dangling forever.
//!
//! # Threading
//!
//! The registry is owned by one window and is normally only touched from
//! the UI thread. The internal lock exists for interior mutability, not as
//! a concurrency guarantee; registration from other threads must be
//! externally synchronized with the embedding application's layout code.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::geometry::{Point, Rect};

/// Bounds query for an interactive region.
///
/// Implemented by embedding-side controls that live inside the chrome.
/// Returning `None` means the control has no geometry yet (not laid out,
/// hidden); such a region never matches a point.
pub trait RegionBounds: Send + Sync {
    /// Current bounds of the region in window-local coordinates.
    fn bounds(&self) -> Option<Rect>;
}

/// A static interactive region with fixed bounds.
///
/// Useful when the excluded area is known up front and never moves, e.g. a
/// fixed window-button strip.
#[derive(Debug)]
pub struct FixedRegion {
    rect: Rect,
}

impl FixedRegion {
    /// Create a fixed region covering `rect`.
    pub fn new(rect: Rect) -> Arc<Self> {
        Arc::new(Self { rect })
    }
}

impl RegionBounds for FixedRegion {
    fn bounds(&self) -> Option<Rect> {
        Some(self.rect)
    }
}

/// Opaque identifier for a registered interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

struct RegionEntry {
    id: RegionId,
    bounds: Weak<dyn RegionBounds>,
}

/// Registry of screen regions that belong to custom controls.
///
/// Insertion is idempotent by identity: registering the same control twice
/// returns the id of the existing entry. Containment is a flat scan in
/// registration order, so when regions overlap (they should not, by
/// construction) the first-registered region wins.
#[derive(Default)]
pub struct InteractiveRegionRegistry {
    entries: RwLock<Vec<RegionEntry>>,
    next_id: RwLock<u64>,
}

impl InteractiveRegionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control's region.
    ///
    /// The registry holds only a weak reference; the control stays owned by
    /// the embedding application. Registering the same `Arc` again is a
    /// no-op that returns the existing id.
    pub fn register<R>(&self, region: &Arc<R>) -> RegionId
    where
        R: RegionBounds + 'static,
    {
        let weak = Arc::downgrade(region) as Weak<dyn RegionBounds>;

        let mut entries = self.entries.write();
        Self::prune_dead(&mut entries);

        if let Some(entry) = entries.iter().find(|e| e.bounds.ptr_eq(&weak)) {
            tracing::trace!(id = entry.id.0, "interactive region already registered");
            return entry.id;
        }

        let id = self.allocate_id();
        tracing::debug!(id = id.0, "registered interactive region");
        entries.push(RegionEntry { id, bounds: weak });
        id
    }

    /// Remove a region by id.
    ///
    /// Called from the owning control's teardown path. Returns `true` if an
    /// entry was removed; deregistering an unknown or already-removed id is
    /// a no-op.
    pub fn deregister(&self, id: RegionId) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Self::prune_dead(&mut entries);
        let removed = entries.len() < before;
        if removed {
            tracing::debug!(id = id.0, "deregistered interactive region");
        }
        removed
    }

    /// Check whether a window-local point lies inside any registered region.
    ///
    /// Runs on the hit-test hot path: a flat containment scan over current
    /// entries, first match wins. Dead controls are skipped (and cleaned up
    /// on the next mutation, not here, to keep this path read-only).
    pub fn contains(&self, point: Point) -> bool {
        self.entries.read().iter().any(|entry| {
            entry
                .bounds
                .upgrade()
                .and_then(|region| region.bounds())
                .is_some_and(|rect| rect.contains(point))
        })
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|e| e.bounds.strong_count() > 0)
            .count()
    }

    /// Whether no live regions are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop entries whose control has been destroyed.
    pub fn prune(&self) {
        Self::prune_dead(&mut self.entries.write());
    }

    fn prune_dead(entries: &mut Vec<RegionEntry>) {
        entries.retain(|e| e.bounds.strong_count() > 0);
    }

    fn allocate_id(&self) -> RegionId {
        let mut next = self.next_id.write();
        *next += 1;
        RegionId(*next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_contains() {
        let registry = InteractiveRegionRegistry::new();
        let region = FixedRegion::new(Rect::new(200.0, 180.0, 100.0, 40.0));
        registry.register(&region);

        assert!(registry.contains(Point::new(250.0, 200.0)));
        assert!(!registry.contains(Point::new(150.0, 200.0)));
    }

    #[test]
    fn test_duplicate_registration_is_noop() {
        let registry = InteractiveRegionRegistry::new();
        let region = FixedRegion::new(Rect::new(0.0, 0.0, 30.0, 30.0));

        let first = registry.register(&region);
        let second = registry.register(&region);

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_regions_get_distinct_ids() {
        let registry = InteractiveRegionRegistry::new();
        // Two controls can transiently share a bounding box; identity, not
        // geometry, distinguishes them.
        let a = FixedRegion::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        let b = FixedRegion::new(Rect::new(0.0, 0.0, 30.0, 30.0));

        assert_ne!(registry.register(&a), registry.register(&b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_deregister() {
        let registry = InteractiveRegionRegistry::new();
        let region = FixedRegion::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        let id = registry.register(&region);

        assert!(registry.deregister(id));
        assert!(!registry.deregister(id));
        assert!(registry.is_empty());
        assert!(!registry.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_destroyed_control_stops_matching() {
        let registry = InteractiveRegionRegistry::new();
        let region = FixedRegion::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        registry.register(&region);
        drop(region);

        assert!(!registry.contains(Point::new(10.0, 10.0)));
        assert!(registry.is_empty());

        registry.prune();
        assert_eq!(registry.entries.read().len(), 0);
    }

    #[test]
    fn test_unlaid_out_region_never_matches() {
        struct Hidden;
        impl RegionBounds for Hidden {
            fn bounds(&self) -> Option<Rect> {
                None
            }
        }

        let registry = InteractiveRegionRegistry::new();
        let region = Arc::new(Hidden);
        registry.register(&region);

        assert!(!registry.contains(Point::new(10.0, 10.0)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_live_control_bounds_are_queried_fresh() {
        struct Movable {
            rect: RwLock<Rect>,
        }
        impl RegionBounds for Movable {
            fn bounds(&self) -> Option<Rect> {
                Some(*self.rect.read())
            }
        }

        let registry = InteractiveRegionRegistry::new();
        let control = Arc::new(Movable {
            rect: RwLock::new(Rect::new(0.0, 0.0, 30.0, 30.0)),
        });
        registry.register(&control);

        assert!(registry.contains(Point::new(10.0, 10.0)));
        *control.rect.write() = Rect::new(100.0, 0.0, 30.0, 30.0);
        assert!(!registry.contains(Point::new(10.0, 10.0)));
        assert!(registry.contains(Point::new(110.0, 10.0)));
    }
}
