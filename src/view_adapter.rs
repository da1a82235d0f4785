use serde_json::{json, Value};
use crate::game_engine::{
    models::{Category, Feedback, FeedbackKind, Zone, ZoneRole},
    quiz::{QuizPhase, QuizSnapshot},
    session::{ItemView, SortingSnapshot},
};

/// Colour key the renderer maps to its own palette.
fn zone_palette(role: ZoneRole) -> &'static str {
    match role {
        ZoneRole::Bin(Category::Paper)   => "blue",
        ZoneRole::Bin(Category::Plastic) => "yellow",
        ZoneRole::Bin(Category::Glass)   => "green",
        ZoneRole::Bin(Category::Metal)   => "gray",
        ZoneRole::Disposal               => "red",
        ZoneRole::ReuseCapable           => "purple",
    }
}

fn feedback_palette(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Success       => "green",
        FeedbackKind::Failure       => "red",
        FeedbackKind::InvalidAction => "orange",
    }
}

fn zone_entry(z: &Zone) -> Value {
    json!({
        "tag": z.tag,
        "label": z.tag.to_uppercase(),
        "palette": zone_palette(z.role),
        "rect": { "x": z.bounds.x, "y": z.bounds.y, "w": z.bounds.width, "h": z.bounds.height }
    })
}

fn item_entry(i: &ItemView) -> Value {
    json!({
        "id": i.id.0,
        "name": i.name,
        "icon": i.icon,
        "x": i.position.x,
        "y": i.position.y,
        "dragging": i.dragging
    })
}

/// Popup block; `null` when nothing is showing.
fn popup(fb: Option<&Feedback>) -> Value {
    match fb {
        None => Value::Null,
        Some(fb) => {
            let heading = if fb.hints.is_empty() { "" } else { fb.hints_heading.as_str() };
            json!({
                "title": fb.title,
                "message": fb.message,
                "palette": feedback_palette(fb.kind),
                "hints_heading": heading,
                "hints": fb.hints,
                "button": "OK"
            })
        }
    }
}

/// Map a sorting snapshot to the per-frame payload the renderer draws.
pub fn sorting_frame(snap: &SortingSnapshot) -> Value {
    json!({
        "screen": snap.game.to_string().to_lowercase(),
        "score": snap.score,
        "zones": snap.zones.iter().map(zone_entry).collect::<Vec<_>>(),
        "items": snap.items.iter().map(item_entry).collect::<Vec<_>>(),
        "popup": popup(snap.feedback.as_ref()),
        "items_locked": !snap.interaction_enabled,
        "complete": snap.complete
    })
}

/// Map a quiz snapshot to the per-frame payload the renderer draws.
pub fn quiz_frame(snap: &QuizSnapshot) -> Value {
    let view = match snap.phase {
        QuizPhase::Presenting => "card",
        QuizPhase::ShowingFeedback { .. } => "feedback",
        QuizPhase::Finished => "game_over",
    };
    let card = match &snap.card {
        None => Value::Null,
        Some(c) => json!({
            "id": c.id,
            "left":  { "text": c.text_left,  "icon": c.icon_left },
            "right": { "text": c.text_right, "icon": c.icon_right }
        }),
    };
    let overlay = match snap.phase {
        QuizPhase::ShowingFeedback { .. } => popup(snap.feedback.as_ref()),
        _ => Value::Null,
    };
    let button = match snap.phase {
        QuizPhase::ShowingFeedback { .. } => "Move to next question",
        QuizPhase::Finished => "Play Again",
        QuizPhase::Presenting => "",
    };
    json!({
        "screen": "reduce",
        "view": view,
        "score": snap.score,
        "progress": { "index": snap.index, "total": snap.deck_len },
        "card": card,
        "popup": overlay,
        "button": button
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::{
        events::Playable, quiz::QuizGame, session::SortingGame, config::SessionConfig,
        models::{GameKind, ItemId},
    };

    #[test]
    fn sorting_frame_lists_zones_and_items() {
        let game = SortingGame::new(GameKind::Recycle, SessionConfig::new(800.0, 1000.0).with_seed(4)).unwrap();
        let frame = sorting_frame(&game.snapshot());
        assert_eq!(frame["screen"], "recycle");
        assert_eq!(frame["zones"].as_array().unwrap().len(), 4);
        assert_eq!(frame["zones"][0]["label"], "PAPER");
        assert_eq!(frame["items"].as_array().unwrap().len(), 5);
        assert!(frame["popup"].is_null());
        assert_eq!(frame["items_locked"], false);
    }

    #[test]
    fn invalid_action_popup_is_orange() {
        let mut game = SortingGame::new(GameKind::Reuse, SessionConfig::new(800.0, 1000.0).with_seed(4)).unwrap();
        let trash = game.zone_index("trash").unwrap();
        game.place_item(ItemId(2), trash);
        let frame = sorting_frame(&game.snapshot());
        assert_eq!(frame["popup"]["palette"], "orange");
        assert_eq!(frame["items_locked"], true);
    }

    #[test]
    fn quiz_frame_follows_the_phase() {
        let mut quiz = QuizGame::new(Some(8));
        assert_eq!(quiz_frame(&quiz.snapshot())["view"], "card");
        quiz.choose(true);
        let frame = quiz_frame(&quiz.snapshot());
        assert_eq!(frame["view"], "feedback");
        assert!(frame["card"].is_null());
        assert_eq!(frame["button"], "Move to next question");
        assert_eq!(frame["progress"]["index"], 1);
    }
}
