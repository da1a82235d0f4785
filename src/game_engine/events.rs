//! Gesture events emitted by the render collaborator.
//!
//! The renderer owns the actual gesture recognisers; the core only sees these
//! already-decoded events, one at a time, on the thread that owns the game.

use serde::{Deserialize, Serialize};

use crate::game_engine::{geometry::Point, models::ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    DragChanged { item: ItemId, point: Point },
    DragEnded { item: ItemId, point: Point },
    /// The input layer gave up on a drag (interrupted gesture, app switch).
    DragCancelled { item: ItemId },
    ChoiceMade { is_left: bool },
    FeedbackDismissed,
    ResetRequested,
}

/// A game that can be driven purely by gesture events.
pub trait Playable {
    type Snapshot;

    /// Apply one event. Returns `true` if the visible state changed; events
    /// that do not apply to this game, or arrive while gated, return `false`.
    fn handle(&mut self, event: &GestureEvent) -> bool;

    /// Read-only view for the renderer.
    fn snapshot(&self) -> Self::Snapshot;
}
