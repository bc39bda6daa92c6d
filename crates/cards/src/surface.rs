//! Output regions the pipeline writes to.

use std::time::Instant;

use crate::animation::{Entrance, Frame};
use crate::card::Card;

/// The status region and results container of a page.
///
/// The pipeline never reaches for global handles; every entry point gets
/// the surface it mutates as an argument.
pub trait Surface {
    fn set_status(&mut self, text: &str);

    /// Removes every card.
    fn clear_cards(&mut self);

    /// Appends a card after the existing ones.
    fn push_card(&mut self, card: Card);

    fn card_count(&self) -> usize;

    /// Attaches an entrance to the card at `index`. Out-of-range indices
    /// are ignored.
    fn set_entrance(&mut self, index: usize, entrance: Entrance);
}

/// A card on the board together with its entrance, if one was planned.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard {
    pub card: Card,
    entrance: Option<Entrance>,
}

impl PlacedCard {
    /// Visual state at `now`. Cards without an entrance are fully shown.
    pub fn frame_at(&self, now: Instant) -> Frame {
        self.entrance
            .map_or(Frame::VISIBLE, |entrance| entrance.frame_at(now))
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.entrance
            .is_none_or(|entrance| entrance.is_finished(now))
    }
}

/// In-memory [`Surface`] that front ends draw from.
#[derive(Debug, Clone, Default)]
pub struct Board {
    status: String,
    cards: Vec<PlacedCard>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cards(&self) -> &[PlacedCard] {
        &self.cards
    }

    /// Whether any card is still mid-entrance at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|c| !c.is_settled(now))
    }
}

impl Surface for Board {
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn clear_cards(&mut self) {
        self.cards.clear();
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(PlacedCard {
            card,
            entrance: None,
        });
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn set_entrance(&mut self, index: usize, entrance: Entrance) {
        if let Some(placed) = self.cards.get_mut(index) {
            placed.entrance = Some(entrance);
        }
    }
}
