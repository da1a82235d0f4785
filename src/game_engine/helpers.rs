//! Shared builder functions for the catalogs and the session feedback.
//!
//! Catalog files list dozens of items and cards; these helpers keep each
//! entry to one line. The feedback builders hold every user-facing string
//! the sorting games produce so the session code only decides *which* one.

use crate::game_engine::{
    geometry::Point,
    models::{Category, Classification, Feedback, FeedbackKind, Item, ItemId, ScenarioCard},
};

/// Recycle-game item.
pub fn recyclable(id: u32, name: &str, icon: &str, category: Category, tips: &[&str]) -> Item {
    item(id, name, icon, Classification::Category(category), tips)
}

/// Reuse-game item. `ideas` is empty for trash.
pub fn reusable(id: u32, name: &str, icon: &str, is_reusable: bool, ideas: &[&str]) -> Item {
    item(id, name, icon, Classification::Reusable(is_reusable), ideas)
}

fn item(id: u32, name: &str, icon: &str, class: Classification, hints: &[&str]) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        icon: icon.to_string(),
        class,
        hints: hints.iter().map(|h| h.to_string()).collect(),
        position: Point::default(),
    }
}

/// One reduce-quiz card.
pub fn card(
    id: u32, left: &str, right: &str, correct_is_left: bool,
    icon_left: &str, icon_right: &str,
) -> ScenarioCard {
    ScenarioCard {
        id,
        text_left: left.to_string(),
        text_right: right.to_string(),
        correct_is_left,
        icon_left: icon_left.to_string(),
        icon_right: icon_right.to_string(),
    }
}

fn feedback(kind: FeedbackKind, title: &str, message: String, heading: &str, hints: Vec<String>) -> Feedback {
    Feedback {
        kind,
        title: title.to_string(),
        message,
        hints_heading: heading.to_string(),
        hints,
    }
}

pub fn recycled(item: &Item) -> Feedback {
    feedback(
        FeedbackKind::Success, "Great Job!", "You recycled this item!".into(),
        "Before recycling:", item.hints.clone(),
    )
}

pub fn wrong_bin(item: &Item, bin: Category) -> Feedback {
    feedback(
        FeedbackKind::Failure, "Oh no!",
        format!("{} doesn't go in the {bin} bin. Try again!", item.name),
        "", Vec::new(),
    )
}

/// Reuse-game success. Disposals carry no ideas.
pub fn reused_or_disposed(item: &Item) -> Feedback {
    let ideas = if item.is_reusable() { item.hints.clone() } else { Vec::new() };
    feedback(
        FeedbackKind::Success, "Great Job!", "You reused/disposed of this item!".into(),
        "You can reuse this for:", ideas,
    )
}

/// Item dropped somewhere it can never belong.
pub fn cannot_go_here(item: &Item) -> Feedback {
    let message = if item.is_reusable() {
        format!("Don't throw away the {}. It can be reused!", item.name)
    } else {
        format!("You can't reuse the {}. Put it in the bin!", item.name)
    };
    feedback(FeedbackKind::InvalidAction, "Can't go here!", message, "", Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_message_names_the_item_and_the_right_place() {
        let jar = reusable(2, "Glass Jar", "jar", true, &["Vase"]);
        let peel = reusable(9, "Banana Peel", "leaf.fill", false, &[]);
        assert!(cannot_go_here(&jar).message.contains("Glass Jar"));
        assert!(cannot_go_here(&jar).message.contains("reused"));
        assert!(cannot_go_here(&peel).message.contains("bin"));
        assert_eq!(cannot_go_here(&peel).kind, FeedbackKind::InvalidAction);
    }

    #[test]
    fn wrong_bin_names_the_bin_and_asks_to_try_again() {
        let bottle = recyclable(4, "Plastic Bottle", "waterbottle", Category::Plastic, &[]);
        let fb = wrong_bin(&bottle, Category::Metal);
        assert_eq!(fb.title, "Oh no!");
        assert_eq!(fb.kind, FeedbackKind::Failure);
        assert_eq!(fb.message, "Plastic Bottle doesn't go in the metal bin. Try again!");
        assert!(fb.hints.is_empty());
    }

    #[test]
    fn disposal_success_shows_no_ideas() {
        let peel = reusable(9, "Banana Peel", "leaf.fill", false, &["ignored"]);
        assert!(reused_or_disposed(&peel).hints.is_empty());
        let jar = reusable(2, "Glass Jar", "jar", true, &["Vase", "Terrarium"]);
        assert_eq!(reused_or_disposed(&jar).hints.len(), 2);
    }
}
