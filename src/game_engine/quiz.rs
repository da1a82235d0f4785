//! Reduce quiz: a shuffled deck of two-sided scenario cards.
//!
//! `choose` scores the current card, advances the cursor and raises feedback
//! in one step. While feedback is visible further choices are ignored;
//! acknowledging it reveals the next card or, past the last card, the
//! finished state.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game_engine::{
    catalog,
    config::{validate_deck, ConfigError},
    deck::Deck,
    events::{GestureEvent, Playable},
    feedback::FeedbackState,
    models::{Feedback, FeedbackKind, ScenarioCard},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Presenting,
    ShowingFeedback { correct: bool },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    /// Card awaiting a choice; `None` while feedback shows or once finished.
    pub card: Option<ScenarioCard>,
    pub index: usize,
    pub deck_len: usize,
    pub score: u32,
    pub feedback: Option<Feedback>,
}

pub struct QuizGame {
    deck: Deck<ScenarioCard>,
    score: u32,
    feedback: FeedbackState,
    last_correct: Option<bool>,
    rng: StdRng,
}

impl QuizGame {
    /// Built-in reduce deck.
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self::build(catalog::reduce::cards(), rng_seed)
    }

    pub fn with_cards(cards: Vec<ScenarioCard>, rng_seed: Option<u64>) -> Result<Self, ConfigError> {
        validate_deck(&cards)?;
        Ok(Self::build(cards, rng_seed))
    }

    fn build(cards: Vec<ScenarioCard>, rng_seed: Option<u64>) -> Self {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let deck = Deck::new_shuffled(cards, &mut rng);
        info!(cards = deck.len(), "quiz started");
        QuizGame { deck, score: 0, feedback: FeedbackState::Idle, last_correct: None, rng }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 0-based position in the deck; equals `deck_len()` once every card
    /// has been answered.
    pub fn index(&self) -> usize {
        self.deck.cursor()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Current shuffle order.
    pub fn cards(&self) -> &[ScenarioCard] {
        self.deck.cards()
    }

    /// Card under the cursor, `None` past the end.
    pub fn current_card(&self) -> Option<&ScenarioCard> {
        self.deck.current()
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn last_correct(&self) -> Option<bool> {
        self.last_correct
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.feedback, self.last_correct) {
            (FeedbackState::Showing(_), Some(correct)) => QuizPhase::ShowingFeedback { correct },
            _ if self.deck.is_exhausted() => QuizPhase::Finished,
            _ => QuizPhase::Presenting,
        }
    }

    /// Answer the current card. Returns whether the choice was correct, or
    /// `None` when there is no card to answer or feedback is still showing.
    pub fn choose(&mut self, is_left: bool) -> Option<bool> {
        if !self.feedback.is_idle() {
            debug!("choice ignored while feedback is showing");
            return None;
        }
        let card = self.deck.current()?;
        let correct = card.correct_is_left == is_left;
        let card_id = card.id;
        if correct {
            self.score += 1;
        }
        self.deck.advance();
        self.last_correct = Some(correct);
        self.feedback.show(quiz_feedback(correct, self.score));
        info!(card = card_id, correct, score = self.score, index = self.deck.cursor(), "choice made");
        if self.deck.is_exhausted() {
            info!(score = self.score, cards = self.deck.len(), "deck exhausted");
        }
        Some(correct)
    }

    /// Hide the feedback and move on to the next card (or the end screen).
    pub fn acknowledge(&mut self) -> bool {
        self.feedback.dismiss()
    }

    /// Fresh shuffle of the full deck, index and score back to zero.
    pub fn reset(&mut self) {
        self.deck.reshuffle(&mut self.rng);
        self.score = 0;
        self.feedback = FeedbackState::Idle;
        self.last_correct = None;
        info!(cards = self.deck.len(), "quiz reset");
    }
}

fn quiz_feedback(correct: bool, score: u32) -> Feedback {
    let (kind, title) = if correct {
        (FeedbackKind::Success, "Good Choice!")
    } else {
        (FeedbackKind::Failure, "Wrong Answer!")
    };
    Feedback {
        kind,
        title: title.to_string(),
        message: format!("Score: {score}"),
        hints_heading: String::new(),
        hints: Vec::new(),
    }
}

impl Playable for QuizGame {
    type Snapshot = QuizSnapshot;

    fn handle(&mut self, event: &GestureEvent) -> bool {
        match *event {
            GestureEvent::ChoiceMade { is_left } => self.choose(is_left).is_some(),
            GestureEvent::FeedbackDismissed => self.acknowledge(),
            GestureEvent::ResetRequested => {
                self.reset();
                true
            }
            GestureEvent::DragChanged { .. }
            | GestureEvent::DragEnded { .. }
            | GestureEvent::DragCancelled { .. } => false,
        }
    }

    fn snapshot(&self) -> QuizSnapshot {
        let phase = self.phase();
        QuizSnapshot {
            phase,
            card: match phase {
                QuizPhase::Presenting => self.current_card().cloned(),
                _ => None,
            },
            index: self.index(),
            deck_len: self.deck_len(),
            score: self.score,
            feedback: self.feedback.current().cloned(),
        }
    }
}
