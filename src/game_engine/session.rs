//! Session state for the two drag-and-drop games.
//!
//! A `SortingGame` owns the item pool, the score, the feedback gate and the
//! drag engine. Every transition happens synchronously inside one method
//! call; the renderer reads [`SortingSnapshot`]s and never touches the state.
//!
//! ## Per-game policy
//!
//! | Verdict        | Recycle                  | Reuse                     |
//! |----------------|--------------------------|---------------------------|
//! | Correct        | +1, removed              | +1, removed               |
//! | Wrong bin      | 0, scattered, Failure    | (cannot happen)           |
//! | Incompatible   | (cannot happen)          | −1, scattered, stays      |
//! | Outside zones  | scattered, no feedback   | scattered, no feedback    |

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game_engine::{
    catalog,
    config::{validate_pool, ConfigError, SessionConfig},
    drag::{DragEngine, Release},
    events::{GestureEvent, Playable},
    feedback::FeedbackState,
    geometry::{PlayArea, Point, Rect},
    helpers,
    models::{Feedback, GameKind, Item, ItemId, Outcome, Zone, ZoneRole},
    rules::{judge, Verdict},
};

/// Score deltas applied per verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub correct: i32,
    pub wrong_bin: i32,
    pub incompatible: i32,
}

impl ScoreRules {
    pub fn for_game(game: GameKind) -> Self {
        match game {
            GameKind::Recycle => ScoreRules { correct: 1, wrong_bin: 0, incompatible: 0 },
            GameKind::Reuse   => ScoreRules { correct: 1, wrong_bin: 0, incompatible: -1 },
        }
    }
}

/// One draggable item as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub icon: String,
    pub position: Point,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingSnapshot {
    pub game: GameKind,
    pub score: i32,
    pub items: Vec<ItemView>,
    pub zones: Vec<Zone>,
    pub feedback: Option<Feedback>,
    /// `false` while feedback is on screen.
    pub interaction_enabled: bool,
    pub complete: bool,
}

pub struct SortingGame {
    kind: GameKind,
    config: SessionConfig,
    rules: ScoreRules,
    initial: Vec<Item>,
    items: Vec<Item>,
    zones: Vec<Zone>,
    score: i32,
    feedback: FeedbackState,
    drag: DragEngine,
    rng: StdRng,
}

impl SortingGame {
    /// Built-in pool and canonical layout for `kind`.
    pub fn new(kind: GameKind, config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_pool(kind, config, catalog::pool(kind))
    }

    /// Custom pool on the canonical layout.
    pub fn with_pool(kind: GameKind, config: SessionConfig, items: Vec<Item>) -> Result<Self, ConfigError> {
        let zones = catalog::layout(kind, &config.area);
        Self::with_layout(kind, config, items, zones)
    }

    /// Custom pool and custom zones. Zones are hit-tested in the given order.
    pub fn with_layout(
        kind: GameKind, config: SessionConfig, items: Vec<Item>, zones: Vec<Zone>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_pool(kind, &items)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let mut game = SortingGame {
            kind,
            config,
            rules: ScoreRules::for_game(kind),
            initial: items.clone(),
            items,
            zones,
            score: 0,
            feedback: FeedbackState::Idle,
            drag: DragEngine::new(),
            rng,
        };
        game.scatter_all();
        info!(game = %kind, items = game.items.len(), "sorting session started");
        Ok(game)
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn area(&self) -> &PlayArea {
        &self.config.area
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn rules(&self) -> ScoreRules {
        self.rules
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    /// All items placed. What to show next is the renderer's call.
    pub fn is_complete(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first zone with the given tag.
    pub fn zone_index(&self, tag: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.tag == tag)
    }

    // -- gestures ----------------------------------------------------------

    /// Cosmetic drag update. Ignored while feedback is showing, for unknown
    /// items, and for a second item while another is being dragged.
    pub fn drag_changed(&mut self, id: ItemId, point: Point) -> bool {
        if !self.feedback.is_idle() || self.item(id).is_none() {
            return false;
        }
        self.drag.drag_changed(&self.config.area, id, point)
    }

    /// Release a drag and apply whatever the release point resolves to.
    pub fn drag_ended(&mut self, id: ItemId, point: Point) -> Option<Outcome> {
        if !self.feedback.is_idle() {
            self.drag.clear();
            debug!(item = %id, "drop ignored while feedback is showing");
            return None;
        }
        let release = self.drag.drag_ended(&self.zones, id, point)?;
        self.resolve(release)
    }

    /// Abandoned drag: same as a release outside every zone.
    pub fn drag_cancelled(&mut self, id: ItemId) -> Option<Outcome> {
        let release = self.drag.drag_cancelled(id)?;
        self.resolve(release)
    }

    fn resolve(&mut self, release: Release) -> Option<Outcome> {
        match release.zone {
            Some(zone) => self.place_item(release.item, zone),
            None => self.return_to_field(release.item),
        }
    }

    // -- transitions -------------------------------------------------------

    /// Evaluate `id` dropped on `self.zones()[zone]` and apply the result.
    ///
    /// No-op (`None`) for an unknown or already-placed item, an out-of-range
    /// zone index, or while feedback is showing.
    pub fn place_item(&mut self, id: ItemId, zone: usize) -> Option<Outcome> {
        if !self.feedback.is_idle() {
            return None;
        }
        let idx = self.items.iter().position(|i| i.id == id)?;
        let zone = self.zones.get(zone)?;
        self.drag.release_if(id);
        let verdict = judge(&self.items[idx], zone);
        let outcome = match verdict {
            Verdict::Correct => {
                let item = self.items.remove(idx);
                self.score += self.rules.correct;
                let fb = match self.kind {
                    GameKind::Recycle => helpers::recycled(&item),
                    GameKind::Reuse   => helpers::reused_or_disposed(&item),
                };
                self.feedback.show(fb);
                Outcome::Success
            }
            Verdict::WrongBin => {
                self.score += self.rules.wrong_bin;
                let fb = match zone.role {
                    ZoneRole::Bin(bin) => helpers::wrong_bin(&self.items[idx], bin),
                    _ => helpers::cannot_go_here(&self.items[idx]),
                };
                self.feedback.show(fb);
                self.scatter(idx);
                Outcome::Failure
            }
            Verdict::Incompatible => {
                self.score += self.rules.incompatible;
                self.feedback.show(helpers::cannot_go_here(&self.items[idx]));
                self.scatter(idx);
                Outcome::InvalidAction
            }
        };
        info!(item = %id, ?outcome, score = self.score, remaining = self.items.len(), "item placed");
        Some(outcome)
    }

    /// Send `id` back to a fresh random spot on the field.
    pub fn return_to_field(&mut self, id: ItemId) -> Option<Outcome> {
        if !self.feedback.is_idle() {
            return None;
        }
        let idx = self.items.iter().position(|i| i.id == id)?;
        self.drag.release_if(id);
        self.scatter(idx);
        debug!(item = %id, "no target, item returned to field");
        Some(Outcome::Returned)
    }

    /// Acknowledge the feedback popup.
    pub fn dismiss_feedback(&mut self) -> bool {
        self.feedback.dismiss()
    }

    /// Full pool from the original definitions, fresh positions, zero score.
    pub fn reset(&mut self) {
        self.items = self.initial.clone();
        self.score = 0;
        self.feedback = FeedbackState::Idle;
        self.drag.clear();
        self.scatter_all();
        info!(game = %self.kind, items = self.items.len(), "sorting session reset");
    }

    /// Rest positions never land inside a zone, so an item at rest is never
    /// drawn on top of a station.
    fn scatter(&mut self, idx: usize) {
        let blocked: Vec<Rect> = self.zones.iter().map(|z| z.bounds).collect();
        self.items[idx].position = self.config.area.random_position_clear_of(&mut self.rng, &blocked);
    }

    fn scatter_all(&mut self) {
        for idx in 0..self.items.len() {
            self.scatter(idx);
        }
    }
}

impl Playable for SortingGame {
    type Snapshot = SortingSnapshot;

    fn handle(&mut self, event: &GestureEvent) -> bool {
        match *event {
            GestureEvent::DragChanged { item, point } => self.drag_changed(item, point),
            GestureEvent::DragEnded { item, point } => self.drag_ended(item, point).is_some(),
            GestureEvent::DragCancelled { item } => self.drag_cancelled(item).is_some(),
            GestureEvent::FeedbackDismissed => self.dismiss_feedback(),
            GestureEvent::ResetRequested => {
                self.reset();
                true
            }
            GestureEvent::ChoiceMade { .. } => false,
        }
    }

    fn snapshot(&self) -> SortingSnapshot {
        let active = self.drag.active();
        let items = self
            .items
            .iter()
            .map(|item| {
                let drag = active.filter(|d| d.item == item.id);
                ItemView {
                    id: item.id,
                    name: item.name.clone(),
                    icon: item.icon.clone(),
                    position: drag.map_or(item.position, |d| d.point),
                    dragging: drag.is_some(),
                }
            })
            .collect();
        SortingSnapshot {
            game: self.kind,
            score: self.score,
            items,
            zones: self.zones.clone(),
            feedback: self.feedback.current().cloned(),
            interaction_enabled: self.feedback.is_idle(),
            complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::models::FeedbackKind;

    fn game(kind: GameKind) -> SortingGame {
        SortingGame::new(kind, SessionConfig::new(800.0, 1000.0).with_seed(11)).unwrap()
    }

    #[test]
    fn new_session_scatters_every_item_into_the_rest_region() {
        let g = game(GameKind::Reuse);
        assert_eq!(g.items().len(), 10);
        for item in g.items() {
            assert!(g.area().is_rest_position(item.position), "{} at {:?}", item.name, item.position);
        }
    }

    #[test]
    fn placement_is_gated_until_feedback_is_dismissed() {
        let mut g = game(GameKind::Recycle);
        let metal = g.zone_index("metal").unwrap();
        assert_eq!(g.place_item(ItemId(5), metal), Some(Outcome::Success));
        assert_eq!(g.feedback().kind(), Some(FeedbackKind::Success));

        let paper = g.zone_index("paper").unwrap();
        assert_eq!(g.place_item(ItemId(1), paper), None, "second placement must be blocked");
        assert!(!g.drag_changed(ItemId(1), Point::new(100.0, 100.0)));
        assert_eq!(g.items().len(), 4);

        assert!(g.dismiss_feedback());
        assert_eq!(g.place_item(ItemId(1), paper), Some(Outcome::Success));
        assert_eq!(g.score(), 2);
    }

    #[test]
    fn releases_are_ignored_while_feedback_is_showing() {
        let mut g = game(GameKind::Recycle);
        let metal = g.zone_index("metal").unwrap();
        assert_eq!(g.place_item(ItemId(5), metal), Some(Outcome::Success));

        let paper = g.zone_index("paper").unwrap();
        let on_paper = g.zones()[paper].bounds.mid();
        let before = g.item(ItemId(1)).unwrap().position;
        assert_eq!(g.drag_ended(ItemId(1), on_paper), None);
        assert_eq!(g.drag_cancelled(ItemId(1)), None);
        assert_eq!(g.item(ItemId(1)).unwrap().position, before);
        assert_eq!((g.score(), g.items().len()), (1, 4));
        assert!(!g.snapshot().items.iter().any(|i| i.dragging));

        g.dismiss_feedback();
        assert!(g.drag_changed(ItemId(1), on_paper));
        assert_eq!(g.drag_ended(ItemId(1), on_paper), Some(Outcome::Success));
        assert_eq!(g.score(), 2);
    }

    #[test]
    fn direct_placement_ends_the_drag_of_that_item() {
        let mut g = game(GameKind::Recycle);
        assert!(g.drag_changed(ItemId(4), Point::new(300.0, 300.0)));
        let plastic = g.zone_index("plastic").unwrap();
        assert_eq!(g.place_item(ItemId(4), plastic), Some(Outcome::Success));
        g.dismiss_feedback();
        assert!(g.drag_changed(ItemId(1), Point::new(200.0, 200.0)), "stale drag blocked the next item");

        let mut g = game(GameKind::Reuse);
        assert!(g.drag_changed(ItemId(2), Point::new(300.0, 300.0)));
        let trash = g.zone_index("trash").unwrap();
        assert_eq!(g.place_item(ItemId(2), trash), Some(Outcome::InvalidAction));
        let jar = g.snapshot().items.into_iter().find(|i| i.id == ItemId(2)).unwrap();
        assert!(!jar.dragging);
        assert_eq!(jar.position, g.item(ItemId(2)).unwrap().position);
        assert!(g.area().is_rest_position(jar.position));
    }

    #[test]
    fn direct_return_ends_the_drag_of_that_item() {
        let mut g = game(GameKind::Reuse);
        assert!(g.drag_changed(ItemId(3), Point::new(300.0, 300.0)));
        assert_eq!(g.return_to_field(ItemId(3)), Some(Outcome::Returned));
        assert!(!g.snapshot().items.iter().any(|i| i.dragging));
        assert!(g.drag_changed(ItemId(4), Point::new(200.0, 200.0)));
    }

    #[test]
    fn resting_items_never_sit_on_a_station() {
        let mut g = game(GameKind::Reuse);
        for _ in 0..50 {
            g.reset();
            for item in g.items() {
                assert!(
                    !g.zones().iter().any(|z| z.bounds.contains(item.position)),
                    "{} rests at {:?} inside a zone",
                    item.name,
                    item.position
                );
            }
        }
    }

    #[test]
    fn recycle_success_feedback_carries_tips() {
        let mut g = game(GameKind::Recycle);
        let glass = g.zone_index("glass").unwrap();
        g.place_item(ItemId(3), glass);
        let fb = g.feedback().current().unwrap();
        assert_eq!(fb.hints, vec!["Clean the bottle thoroughly", "Dry it completely"]);
    }

    #[test]
    fn unknown_item_and_zone_are_no_ops() {
        let mut g = game(GameKind::Reuse);
        assert_eq!(g.place_item(ItemId(99), 0), None);
        assert_eq!(g.place_item(ItemId(1), 42), None);
        assert_eq!(g.return_to_field(ItemId(99)), None);
        assert!(!g.drag_changed(ItemId(99), Point::new(100.0, 100.0)));
        assert_eq!(g.score(), 0);
        assert!(g.feedback().is_idle());
    }

    #[test]
    fn drop_outside_zones_returns_item_without_feedback() {
        let mut g = game(GameKind::Reuse);
        assert!(g.drag_changed(ItemId(2), Point::new(400.0, 400.0)));
        assert!(g.snapshot().items.iter().any(|i| i.id == ItemId(2) && i.dragging));
        assert_eq!(g.drag_ended(ItemId(2), Point::new(400.0, 400.0)), Some(Outcome::Returned));
        assert!(g.feedback().is_idle());
        assert_eq!(g.score(), 0);
        let jar = g.item(ItemId(2)).unwrap();
        assert!(g.area().is_rest_position(jar.position));
        assert!(!g.snapshot().items.iter().any(|i| i.dragging));
    }

    #[test]
    fn cancelled_drag_over_a_zone_does_not_place() {
        let mut g = game(GameKind::Reuse);
        // Last known point is inside the trash zone; cancel must not count it.
        g.drag_changed(ItemId(9), Point::new(100.0, 900.0));
        assert_eq!(g.drag_cancelled(ItemId(9)), Some(Outcome::Returned));
        assert!(g.item(ItemId(9)).is_some());
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn station_accepts_reusables() {
        let mut g = game(GameKind::Reuse);
        assert_eq!(g.drag_ended(ItemId(3), Point::new(60.0, 60.0)), Some(Outcome::Success));
        assert_eq!(g.feedback().current().unwrap().hints, vec!["Rags", "Tote Bag", "Quilt"]);
    }

    #[test]
    fn events_drive_the_same_transitions() {
        let mut g = game(GameKind::Recycle);
        let plastic_bin = Point::new(300.0, 900.0);
        assert!(g.handle(&GestureEvent::DragChanged { item: ItemId(4), point: plastic_bin }));
        assert!(g.handle(&GestureEvent::DragEnded { item: ItemId(4), point: plastic_bin }));
        assert!(!g.snapshot().interaction_enabled);
        assert!(!g.handle(&GestureEvent::ChoiceMade { is_left: true }));
        assert!(g.handle(&GestureEvent::FeedbackDismissed));
        assert!(g.snapshot().interaction_enabled);
        assert!(g.handle(&GestureEvent::ResetRequested));
        assert_eq!(g.snapshot().items.len(), 5);
    }
}
