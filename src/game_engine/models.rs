use std::fmt;
use serde::{Deserialize, Serialize};

use crate::game_engine::geometry::{Point, Rect};

// ---------------------------------------------------------------------------
// Item primitives
// ---------------------------------------------------------------------------

/// Stable identifier of a draggable item within one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Recycling stream a bin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Paper,
    Plastic,
    Glass,
    Metal,
}

impl Category {
    /// Declared bin order, left to right.
    pub const ALL: [Category; 4] = [
        Category::Paper,
        Category::Plastic,
        Category::Glass,
        Category::Metal,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Paper   => write!(f, "paper"),
            Category::Plastic => write!(f, "plastic"),
            Category::Glass   => write!(f, "glass"),
            Category::Metal   => write!(f, "metal"),
        }
    }
}

/// What an item *is*, as far as the rule set cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Recycle game: belongs in the bin of this category.
    Category(Category),
    /// Reuse game: `true` if the item has a second life, `false` for trash.
    Reusable(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Icon name handed through to the renderer untouched.
    #[serde(default)]
    pub icon: String,
    pub class: Classification,
    /// Recycling tips or reuse ideas shown on success. May be empty.
    #[serde(default)]
    pub hints: Vec<String>,
    /// Resting position. Overwritten whenever the pool is scattered.
    #[serde(default)]
    pub position: Point,
}

impl Item {
    pub fn is_reusable(&self) -> bool {
        matches!(self.class, Classification::Reusable(true))
    }
}

// ---------------------------------------------------------------------------
// Drop zones
// ---------------------------------------------------------------------------

/// Semantic role of a drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneRole {
    /// Recycling bin for exactly one category.
    Bin(Category),
    /// Trash: only non-reusable items belong here.
    Disposal,
    /// Home or a reuse station: only reusable items belong here.
    ReuseCapable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Short label, e.g. "paper", "trash", "craft".
    pub tag: String,
    pub role: ZoneRole,
    pub bounds: Rect,
}

impl Zone {
    pub fn new(tag: impl Into<String>, role: ZoneRole, bounds: Rect) -> Self {
        Zone { tag: tag.into(), role, bounds }
    }
}

// ---------------------------------------------------------------------------
// Outcomes and feedback
// ---------------------------------------------------------------------------

/// Which mini-game a sorting session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    Recycle,
    Reuse,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Recycle => write!(f, "Recycle"),
            GameKind::Reuse   => write!(f, "Reuse"),
        }
    }
}

/// Classification of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Right zone. The item leaves the pool.
    Success,
    /// Wrong bin of the right kind (recycle game).
    Failure,
    /// Fundamentally incompatible zone for this item.
    InvalidAction,
    /// Released outside every zone; the item was scattered back to the field.
    Returned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Success,
    Failure,
    InvalidAction,
}

/// Everything the feedback popup needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub title: String,
    pub message: String,
    pub hints_heading: String,
    pub hints: Vec<String>,
}

// ---------------------------------------------------------------------------
// Quiz cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCard {
    pub id: u32,
    pub text_left: String,
    pub text_right: String,
    pub correct_is_left: bool,
    #[serde(default)]
    pub icon_left: String,
    #[serde(default)]
    pub icon_right: String,
}
