//! Headless playthrough of all three mini-games.
//!
//! Run with: `cargo run --example demo`
//!
//! Every session uses a fixed seed, so the output is deterministic:
//!
//! 1. **Recycle**: drops each item on a wrong bin first, then the right one.
//! 2. **Reuse**: throws a reusable away (penalty), then sorts the whole pool.
//! 3. **Reduce**: answers the first half of the deck correctly and the rest
//!    wrongly, then resets and shows the new first card.
//!
//! The render payload for the last frame of each game is printed as JSON,
//! which is what a real renderer would consume.

use eco_habits::{
    quiz_frame, sorting_frame, Classification, GameKind, GestureEvent, ItemId, Playable, Point,
    QuizGame, QuizPhase, SessionConfig, SortingGame,
};

/// Centre of the zone tagged `tag`.
fn zone_center(game: &SortingGame, tag: &str) -> Point {
    let idx = game.zone_index(tag).unwrap_or(0);
    game.zones()[idx].bounds.mid()
}

/// Drag `item` to `to` through the event surface, report, dismiss.
fn drop_on(game: &mut SortingGame, item: ItemId, to: Point) {
    let name = game.item(item).map(|i| i.name.clone()).unwrap_or_default();
    game.handle(&GestureEvent::DragChanged { item, point: to });
    let outcome = game.drag_ended(item, to);
    let title = game.feedback().current().map(|f| f.title.clone()).unwrap_or_default();
    println!("  {name:<16} -> ({:>5.0},{:>5.0})  {outcome:?}  {title}  score={}", to.x, to.y, game.score());
    game.handle(&GestureEvent::FeedbackDismissed);
}

fn right_tag(class: Classification) -> String {
    match class {
        Classification::Category(cat) => cat.to_string(),
        Classification::Reusable(true) => "home".to_string(),
        Classification::Reusable(false) => "trash".to_string(),
    }
}

fn play_sorting(kind: GameKind, seed: u64) {
    println!("══ {kind} ══");
    let mut game = match SortingGame::new(kind, SessionConfig::new(800.0, 1000.0).with_seed(seed)) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("cannot start {kind}: {err}");
            return;
        }
    };

    let first = game.items()[0].id;
    let miss = match kind {
        GameKind::Recycle => "metal",
        GameKind::Reuse => "trash",
    };
    let wrong = zone_center(&game, miss);
    drop_on(&mut game, first, wrong);
    drop_on(&mut game, first, Point::new(400.0, 400.0));

    while let Some(item) = game.items().first().cloned() {
        let target = zone_center(&game, &right_tag(item.class));
        drop_on(&mut game, item.id, target);
    }
    println!("  complete={} final score={}", game.is_complete(), game.score());
    println!("{}", sorting_frame(&game.snapshot()));
    println!();
}

fn play_quiz(seed: u64) {
    println!("══ Reduce ══");
    let mut quiz = QuizGame::new(Some(seed));
    let half = quiz.deck_len() / 2;
    while let Some(card) = quiz.current_card().cloned() {
        let pick = if quiz.index() < half { card.correct_is_left } else { !card.correct_is_left };
        quiz.handle(&GestureEvent::ChoiceMade { is_left: pick });
        let side = if pick { &card.text_left } else { &card.text_right };
        if let QuizPhase::ShowingFeedback { correct } = quiz.phase() {
            println!("  [{}] {side:<40} {}", if correct { "✓" } else { "✗" }, quiz.score());
        }
        quiz.handle(&GestureEvent::FeedbackDismissed);
    }
    println!("  finished with {}/{}", quiz.score(), quiz.deck_len());
    println!("{}", quiz_frame(&quiz.snapshot()));

    quiz.handle(&GestureEvent::ResetRequested);
    if let Some(card) = quiz.current_card() {
        println!("  after reset: \"{}\" or \"{}\"?", card.text_left, card.text_right);
    }
}

fn main() {
    println!();
    play_sorting(GameKind::Recycle, 42);
    play_sorting(GameKind::Reuse, 42);
    play_quiz(42);
}
