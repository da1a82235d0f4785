//! Drag tracking and drop-target detection.
//!
//! The engine knows nothing about scoring. It tracks the one item being
//! dragged, keeps its transient (cosmetic) position, and on release reports
//! which zone, if any, contains the release point. An abandoned drag resolves
//! exactly like a release at the last known point outside every zone.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::game_engine::{
    geometry::{PlayArea, Point},
    models::{ItemId, Zone},
};

/// First zone in declared order whose bounds contain `point`.
///
/// Returns the index into `zones` so callers can refer back to the zone
/// without holding a borrow.
pub fn hit_test(zones: &[Zone], point: Point) -> Option<usize> {
    zones.iter().position(|z| z.bounds.contains(point))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveDrag {
    pub item: ItemId,
    pub point: Point,
}

/// Result of finishing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub item: ItemId,
    pub point: Point,
    /// Index of the matched zone, `None` for "no target".
    pub zone: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    active: Option<ActiveDrag>,
}

impl DragEngine {
    pub fn new() -> Self {
        DragEngine { active: None }
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Move `item` to `point`, starting a drag if none is active.
    ///
    /// Returns `false` (and changes nothing) when another item is already
    /// being dragged.
    pub fn drag_changed(&mut self, area: &PlayArea, item: ItemId, point: Point) -> bool {
        let point = area.clamp_drag(point);
        if let Some(drag) = self.active.as_mut() {
            if drag.item != item {
                trace!(dragging = %drag.item, ignored = %item, "second drag ignored");
                return false;
            }
            drag.point = point;
            return true;
        }
        self.active = Some(ActiveDrag { item, point });
        true
    }

    /// Release `item` at `point` and resolve the target zone.
    ///
    /// A release without a preceding `drag_changed` is accepted (a quick
    /// flick can end before any change event arrives). A release for an item
    /// other than the one being dragged is ignored.
    pub fn drag_ended(&mut self, zones: &[Zone], item: ItemId, point: Point) -> Option<Release> {
        if let Some(drag) = &self.active {
            if drag.item != item {
                return None;
            }
        }
        self.active = None;
        Some(Release { item, point, zone: hit_test(zones, point) })
    }

    /// Abandon the active drag. Resolves as "no target" at the last known
    /// point regardless of what zone that point lies in.
    pub fn drag_cancelled(&mut self, item: ItemId) -> Option<Release> {
        match self.active {
            Some(drag) if drag.item == item => {
                self.active = None;
                Some(Release { item, point: drag.point, zone: None })
            }
            _ => None,
        }
    }

    /// End the drag of `item`, if it is the one in progress. Used when the
    /// item is placed or moved by a direct call rather than a release.
    pub fn release_if(&mut self, item: ItemId) {
        if self.active.map_or(false, |d| d.item == item) {
            self.active = None;
        }
    }

    /// Forget any drag in progress without producing a drop.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
