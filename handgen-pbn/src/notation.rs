//! PBN deal notation: `"<dealer>:<hand> <hand> <hand> <hand>"`.
//!
//! Each hand is written Spades.Hearts.Diamonds.Clubs with every suit sorted
//! high to low, e.g. `"KQ4.QJ982..AKQ43"` (void diamonds). Hands are listed
//! clockwise starting at the dealer.

use handgen_core::{Card, Deal, Hand, Position, Rank, Suit};
use thiserror::Error;

/// Error type for notation parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("PBN parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

/// Render the ranks of one suit high to low, e.g. `[5, A, T, K]` -> `"AKT5"`.
/// An empty suit renders as an empty string.
pub fn sort_suit(ranks: &[Rank]) -> String {
    let mut ranks = ranks.to_vec();
    ranks.sort_by(|a, b| b.cmp(a));
    ranks.iter().map(|r| r.to_char()).collect()
}

/// Render a hand as `Spades.Hearts.Diamonds.Clubs`
pub fn sort_hand(hand: &Hand) -> String {
    Suit::DISPLAY_ORDER
        .iter()
        .map(|&suit| sort_suit(&hand.ranks_in_suit(suit)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Format a deal with the hands listed clockwise from `dealer`
pub fn format_deal(dealer: Position, deal: &Deal) -> String {
    let hands: Vec<String> = Position::rotation_from(dealer)
        .iter()
        .map(|&pos| sort_hand(deal.hand(pos)))
        .collect();

    format!("{}:{}", dealer.to_char(), hands.join(" "))
}

/// Format a deal as a PBN `[Deal "..."]` tag
pub fn format_deal_tag(dealer: Position, deal: &Deal) -> String {
    format!("[Deal \"{}\"]", format_deal(dealer, deal))
}

/// Parse `"<seat>:<hand> <hand> <hand> <hand>"` back into a deal.
///
/// Returns the first seat and the deal with hands assigned clockwise from it.
/// The seat is exactly one of `N`, `E`, `S`, `W` with nothing around it.
/// Every hand must hold 13 cards and no card may appear twice.
pub fn parse_deal(input: &str) -> Result<(Position, Deal), ParseError> {
    let (seat_str, hands_str) = input
        .split_once(':')
        .ok_or_else(|| ParseError::new("Expected Position:Hands format"))?;

    let first_seat = parse_position(seat_str)?;

    let hand_strs: Vec<&str> = hands_str.split_whitespace().collect();
    if hand_strs.len() != 4 {
        return Err(ParseError::new(format!(
            "Expected 4 hands, got {}",
            hand_strs.len()
        )));
    }

    let mut deal = Deal::new();
    let mut seen: u64 = 0;
    for (pos, hand_str) in Position::rotation_from(first_seat).into_iter().zip(hand_strs) {
        let hand = parse_hand(hand_str)?;
        if hand.len() != 13 {
            return Err(ParseError::new(format!(
                "Hand for {} has {} cards, expected 13",
                pos,
                hand.len()
            )));
        }
        for card in hand.cards() {
            let bit = 1u64 << card.to_index();
            if seen & bit != 0 {
                return Err(ParseError::new(format!("Card {} appears twice", card)));
            }
            seen |= bit;
        }
        *deal.hand_mut(pos) = hand;
    }

    Ok((first_seat, deal))
}

/// Parse a PBN `[Deal "..."]` tag
pub fn parse_deal_tag(input: &str) -> Result<(Position, Deal), ParseError> {
    let content = input
        .trim()
        .strip_prefix("[Deal \"")
        .ok_or_else(|| ParseError::new("Expected [Deal \"...\" format"))?
        .strip_suffix("\"]")
        .ok_or_else(|| ParseError::new("Expected closing \"]"))?;

    parse_deal(content)
}

fn parse_position(s: &str) -> Result<Position, ParseError> {
    s.parse()
        .map_err(|_| ParseError::new(format!("Invalid position: {:?}", s)))
}

/// Parse a hand in format: Spades.Hearts.Diamonds.Clubs
fn parse_hand(s: &str) -> Result<Hand, ParseError> {
    let suit_strs: Vec<&str> = s.split('.').collect();
    if suit_strs.len() != 4 {
        return Err(ParseError::new(format!(
            "Expected 4 suits separated by dots, got {}",
            suit_strs.len()
        )));
    }

    let mut hand = Hand::new();
    for (&suit, suit_str) in Suit::DISPLAY_ORDER.iter().zip(suit_strs) {
        for c in suit_str.chars() {
            let rank = Rank::from_char(c)
                .ok_or_else(|| ParseError::new(format!("Invalid rank character: {}", c)))?;
            hand.add_card(Card::new(suit, rank));
        }
    }

    Ok(hand)
}
