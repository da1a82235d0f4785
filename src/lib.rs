//! # eco_habits
//!
//! Game core for three drag-and-choose mini-games that teach children the
//! "reduce, reuse, recycle" habits.
//!
//! The crate holds the rules and the state only. Drawing, layout styling and
//! the gesture recognisers belong to a render collaborator that feeds
//! [`GestureEvent`]s in and draws the snapshots that come out.
//!
//! ## The games
//!
//! - **Recycle**: drag each item into the paper, plastic, glass or metal bin.
//!   A wrong bin shows "Try again!" and scatters the item back to the field.
//! - **Reuse**: drag reusables home (or onto a craft/garden station) and trash
//!   into the bin. Putting an item somewhere it can never go costs a point
//!   and shows a "Can't go here!" message instead of a plain miss.
//! - **Reduce**: a shuffled deck of two-sided scenario cards; pick the
//!   planet-friendly side.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce every scatter
//!   and shuffle, useful for tests and replays.
//! - **No failure paths at runtime**: stale ids, exhausted decks and gestures
//!   that arrive while feedback is showing are silent no-ops.
//! - **Snapshots**: [`SortingSnapshot`] / [`QuizSnapshot`] are plain
//!   serializable values; [`view_adapter`] turns them into render payloads.
//!
//! ## Quick start
//!
//! ```rust
//! use eco_habits::{GameKind, ItemId, Outcome, Playable, QuizGame, SessionConfig, SortingGame};
//!
//! let config = SessionConfig::new(800.0, 1000.0).with_seed(42);
//! let mut game = SortingGame::new(GameKind::Recycle, config).unwrap();
//!
//! // The plastic bottle (id 4) belongs in the plastic bin.
//! let bin = game.zone_index("plastic").unwrap();
//! assert_eq!(game.place_item(ItemId(4), bin), Some(Outcome::Success));
//! assert_eq!(game.score(), 1);
//! game.dismiss_feedback();
//!
//! let mut quiz = QuizGame::new(Some(7));
//! let side = quiz.current_card().unwrap().correct_is_left;
//! assert_eq!(quiz.choose(side), Some(true));
//! println!("{:?}", quiz.snapshot().phase);
//! ```

pub mod game_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `eco_habits::SortingGame`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    Category, Classification, ConfigError, Feedback, FeedbackKind, FeedbackState, GameKind,
    GestureEvent, Item, ItemId, ItemView, Outcome, PlayArea, Playable, Point, QuizGame,
    QuizPhase, QuizSnapshot, Rect, ScenarioCard, ScoreRules, SessionConfig, SortingGame,
    SortingSnapshot, Zone, ZoneRole,
};
pub use view_adapter::{quiz_frame, sorting_frame};
