//! Construction-time configuration and validation.
//!
//! Configuration is the only place this crate reports errors. Once a session
//! exists every operation degrades to a no-op instead of failing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game_engine::{
    geometry::PlayArea,
    models::{Classification, GameKind, Item, ItemId, ScenarioCard},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pool is empty")]
    EmptyPool,

    #[error("duplicate item id {0}")]
    DuplicateItem(ItemId),

    #[error("duplicate card id {0}")]
    DuplicateCard(u32),

    #[error("item {id} is not a {game} item")]
    WrongClassification { id: ItemId, game: GameKind },

    #[error("play area {width}x{height} leaves no room for margin {margin} and zone strip")]
    PlayAreaTooSmall { width: f32, height: f32, margin: f32 },

    #[error("zone fraction {0} must lie in [0, 1)")]
    ZoneFraction(f32),
}

/// Everything a session needs besides its content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub area: PlayArea,
    /// `Some` for reproducible shuffles and scatters, `None` for entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    /// Default margin and zone strip on a `width` x `height` screen.
    pub fn new(width: f32, height: f32) -> Self {
        SessionConfig { area: PlayArea::new(width, height), rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.area;
        if !(0.0..1.0).contains(&a.zone_fraction) {
            return Err(ConfigError::ZoneFraction(a.zone_fraction));
        }
        let (min_x, max_x, min_y, max_y) = a.rest_bounds();
        let finite = a.width.is_finite() && a.height.is_finite() && a.margin.is_finite();
        if !finite || a.margin < 0.0 || max_x < min_x || max_y < min_y {
            return Err(ConfigError::PlayAreaTooSmall {
                width: a.width,
                height: a.height,
                margin: a.margin,
            });
        }
        Ok(())
    }
}

/// Check that a pool is non-empty, has unique ids and only holds items of
/// the kind `game` understands.
pub fn validate_pool(game: GameKind, items: &[Item]) -> Result<(), ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            return Err(ConfigError::DuplicateItem(item.id));
        }
        let fits = matches!(
            (game, item.class),
            (GameKind::Recycle, Classification::Category(_))
                | (GameKind::Reuse, Classification::Reusable(_))
        );
        if !fits {
            return Err(ConfigError::WrongClassification { id: item.id, game });
        }
    }
    Ok(())
}

pub fn validate_deck(cards: &[ScenarioCard]) -> Result<(), ConfigError> {
    if cards.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(card.id) {
            return Err(ConfigError::DuplicateCard(card.id));
        }
    }
    Ok(())
}

/// Parse and validate an item pool from a JSON array.
pub fn pool_from_json(game: GameKind, json: &str) -> Result<Vec<Item>, ConfigError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    validate_pool(game, &items)?;
    Ok(items)
}

/// Parse and validate a scenario deck from a JSON array.
pub fn deck_from_json(json: &str) -> Result<Vec<ScenarioCard>, ConfigError> {
    let cards: Vec<ScenarioCard> = serde_json::from_str(json)?;
    validate_deck(&cards)?;
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::session::SortingGame;

    #[test]
    fn pool_loads_from_json() {
        let json = r#"[
            {"id": 1, "name": "Jar", "class": {"reusable": true}, "hints": ["Vase"]},
            {"id": 2, "name": "Peel", "class": {"reusable": false}}
        ]"#;
        let items = pool_from_json(GameKind::Reuse, json).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_reusable());
        assert!(items[1].hints.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 4, "name": "Bottle", "class": {"category": "plastic"}},
            {"id": 4, "name": "Can", "class": {"category": "metal"}}
        ]"#;
        let err = pool_from_json(GameKind::Recycle, json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateItem(ItemId(4))), "got {err}");
    }

    #[test]
    fn wrong_game_kind_is_rejected() {
        let json = r#"[{"id": 1, "name": "Jar", "class": {"reusable": true}}]"#;
        let err = pool_from_json(GameKind::Recycle, json).unwrap_err();
        assert!(matches!(err, ConfigError::WrongClassification { .. }));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        assert!(matches!(deck_from_json("not json"), Err(ConfigError::Json(_))));
        assert!(matches!(deck_from_json("[]"), Err(ConfigError::EmptyPool)));
    }

    #[test]
    fn tiny_play_area_is_rejected() {
        assert!(SessionConfig::new(800.0, 1000.0).validate().is_ok());
        assert!(matches!(
            SessionConfig::new(90.0, 1000.0).validate(),
            Err(ConfigError::PlayAreaTooSmall { .. })
        ));
        let mut cfg = SessionConfig::new(800.0, 1000.0);
        cfg.area.zone_fraction = 1.5;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZoneFraction(_))));
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        for (w, h) in [(f32::INFINITY, 1000.0), (800.0, f32::NAN), (f32::NAN, f32::NAN)] {
            assert!(
                matches!(SessionConfig::new(w, h).validate(), Err(ConfigError::PlayAreaTooSmall { .. })),
                "{w}x{h} accepted"
            );
        }
        let mut cfg = SessionConfig::new(800.0, 1000.0);
        cfg.area.margin = f32::NAN;
        assert!(cfg.validate().is_err());
        let area = SessionConfig::new(f32::INFINITY, 1000.0);
        assert!(SortingGame::new(GameKind::Recycle, area).is_err());
    }
}
