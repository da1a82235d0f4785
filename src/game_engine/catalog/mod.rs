//! Built-in content and layouts for the three mini-games.
//!
//! Each module owns one game's static data. Item pools and layouts are plain
//! functions so every session can take a fresh copy.

/// Four category bins across the bottom strip.
pub mod recycle;
/// Trash, home and two reuse stations.
pub mod reuse;
/// Binary-choice scenario deck.
pub mod reduce;

use crate::game_engine::{
    geometry::PlayArea,
    models::{GameKind, Item, Zone},
};

/// Built-in pool for `game`.
pub fn pool(game: GameKind) -> Vec<Item> {
    match game {
        GameKind::Recycle => recycle::items(),
        GameKind::Reuse   => reuse::items(),
    }
}

/// Canonical zone layout for `game` on `area`, in hit-test order.
pub fn layout(game: GameKind, area: &PlayArea) -> Vec<Zone> {
    match game {
        GameKind::Recycle => recycle::zones(area),
        GameKind::Reuse   => reuse::zones(area),
    }
}
