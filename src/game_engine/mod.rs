//! Core game engine: drag targets, placement rules, feedback and sessions.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: items, zones, outcomes, feedback, quiz cards |
//! | `geometry` | Points, rectangles and the play area (rest region, drag clamp) |
//! | `deck`     | Fisher-Yates shuffle and a cursor-based card deck |
//! | `drag`     | Single-drag tracking and first-match zone hit testing |
//! | `rules`    | Static placement verdicts per item/zone pair |
//! | `feedback` | Idle / showing gate shared by every game |
//! | `session`  | Recycle and reuse sessions: pool, score, reset |
//! | `quiz`     | Reduce quiz flow: deck, choices, score, reshuffle |
//! | `config`   | Session configuration, pool/deck loading and validation |
//! | `events`   | Gesture events from the renderer and the `Playable` trait |
//! | `helpers`  | Catalog builders and user-facing feedback text |
//! | `catalog`  | Built-in pools, layouts and the reduce deck |

pub mod catalog;
pub mod config;
pub mod deck;
pub mod drag;
pub mod events;
pub mod feedback;
pub mod geometry;
pub mod helpers;
pub mod models;
pub mod quiz;
pub mod rules;
pub mod session;

// Re-export the public API surface so callers can use
// `game_engine::SortingGame` without reaching into sub-modules.
pub use config::{ConfigError, SessionConfig};
pub use events::{GestureEvent, Playable};
pub use feedback::FeedbackState;
pub use geometry::{PlayArea, Point, Rect};
pub use models::{
    Category, Classification, Feedback, FeedbackKind, GameKind, Item, ItemId, Outcome,
    ScenarioCard, Zone, ZoneRole,
};
pub use quiz::{QuizGame, QuizPhase, QuizSnapshot};
pub use session::{ItemView, ScoreRules, SortingGame, SortingSnapshot};
