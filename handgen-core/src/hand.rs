use crate::{Card, Rank, Suit};

/// Represents a single player's hand of 13 cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    pub fn new() -> Self {
        Hand {
            cards: Vec::with_capacity(13),
        }
    }

    /// Create a hand from a vector of cards
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    /// Add a card to the hand
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Get all cards in the hand, in the order they were dealt
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the number of cards in the hand
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ranks held in a suit, in dealt order
    pub fn ranks_in_suit(&self, suit: Suit) -> Vec<Rank> {
        self.cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect()
    }

    /// Calculate total High Card Points (HCP)
    /// A=4, K=3, Q=2, J=1
    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.hcp()).sum()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
