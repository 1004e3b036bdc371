use crate::{Card, DealError, Hand};
use deal_rng::Xoshiro256PlusPlus;
use std::fmt;
use std::str::FromStr;

/// Represents the four positions at a bridge table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Position {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Position {
    /// All positions in clockwise order starting at North
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    /// Get position as a character (N, E, S, W)
    pub fn to_char(&self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    /// Next seat clockwise
    pub fn next(&self) -> Position {
        match self {
            Position::North => Position::East,
            Position::East => Position::South,
            Position::South => Position::West,
            Position::West => Position::North,
        }
    }

    /// The four seats clockwise, starting with `dealer`
    pub fn rotation_from(dealer: Position) -> [Position; 4] {
        let second = dealer.next();
        let third = second.next();
        [dealer, second, third, third.next()]
    }

    /// Conventional dealer for a board: board 1 is North, 2 East, 3 South, 4 West, repeating
    pub fn for_board(board_number: usize) -> Position {
        match board_number.wrapping_sub(1) % 4 {
            0 => Position::North,
            1 => Position::East,
            2 => Position::South,
            _ => Position::West,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Accepts exactly one of "N", "E", "S", "W"
impl FromStr for Position {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Position::North),
            "E" => Ok(Position::East),
            "S" => Ok(Position::South),
            "W" => Ok(Position::West),
            _ => Err(DealError::InvalidArgument(format!(
                "dealer must be one of N, E, S, W (got {:?})",
                s
            ))),
        }
    }
}

/// Represents a complete bridge deal (4 hands of 13 cards each)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub north: Hand,
    pub east: Hand,
    pub south: Hand,
    pub west: Hand,
}

impl Deal {
    /// Create a new empty deal
    pub fn new() -> Self {
        Deal {
            north: Hand::new(),
            east: Hand::new(),
            south: Hand::new(),
            west: Hand::new(),
        }
    }

    /// Get a reference to a hand by position
    pub fn hand(&self, position: Position) -> &Hand {
        match position {
            Position::North => &self.north,
            Position::East => &self.east,
            Position::South => &self.south,
            Position::West => &self.west,
        }
    }

    /// Get a mutable reference to a hand by position
    pub fn hand_mut(&mut self, position: Position) -> &mut Hand {
        match position {
            Position::North => &mut self.north,
            Position::East => &mut self.east,
            Position::South => &mut self.south,
            Position::West => &mut self.west,
        }
    }

    /// Iterate over the hands in N, E, S, W order
    pub fn hands(&self) -> impl Iterator<Item = (Position, &Hand)> + '_ {
        Position::ALL.into_iter().map(move |pos| (pos, self.hand(pos)))
    }

    /// HCP of each hand, indexed N, E, S, W
    pub fn hcp_by_position(&self) -> [u8; 4] {
        Position::ALL.map(|pos| self.hand(pos).hcp())
    }

    /// True if every hand holds 13 cards and the four hands together hold
    /// each of the 52 cards exactly once
    pub fn is_partition(&self) -> bool {
        let mut seen: u64 = 0;
        for (_, hand) in self.hands() {
            if hand.len() != 13 {
                return false;
            }
            for card in hand.cards() {
                let bit = 1u64 << card.to_index();
                if seen & bit != 0 {
                    return false;
                }
                seen |= bit;
            }
        }
        seen == (1u64 << 52) - 1
    }
}

impl Default for Deal {
    fn default() -> Self {
        Self::new()
    }
}

/// Generator for creating random bridge deals
pub struct DealGenerator {
    rng: Xoshiro256PlusPlus,
}

impl DealGenerator {
    /// Create a new deal generator with a given seed
    pub fn new(seed: u64) -> Self {
        DealGenerator {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Create a deal generator seeded from the system clock
    pub fn from_entropy() -> Self {
        DealGenerator {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Generate a random deal using a Fisher-Yates shuffle of a fresh deck.
    ///
    /// Slots 0-12 go to North, 13-25 East, 26-38 South, 39-51 West.
    /// Hands keep the shuffled order; sorting is left to the formatter.
    pub fn generate(&mut self) -> Deal {
        let mut deck = Card::deck();
        self.rng.shuffle(&mut deck);

        let mut deal = Deal::new();
        for (position, run) in Position::ALL.into_iter().zip(deck.chunks_exact(13)) {
            *deal.hand_mut(position) = Hand::from_cards(run.to_vec());
        }
        deal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn test_deal_generation() {
        let mut gen = DealGenerator::new(1);
        let deal = gen.generate();

        for (_, hand) in deal.hands() {
            assert_eq!(hand.len(), 13);
        }

        let total_hcp: u8 = deal.hcp_by_position().iter().sum();
        assert_eq!(total_hcp, 40);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DealGenerator::new(42);
        let mut gen2 = DealGenerator::new(42);

        for _ in 0..5 {
            assert_eq!(gen1.generate(), gen2.generate());
        }
    }

    #[test]
    fn test_different_seeds_different_deals() {
        let mut gen1 = DealGenerator::new(1);
        let mut gen2 = DealGenerator::new(2);

        assert_ne!(gen1.generate(), gen2.generate());
    }

    #[test]
    fn test_consecutive_deals_differ() {
        let mut gen = DealGenerator::new(5);
        let first = gen.generate();
        let second = gen.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_all_cards_distributed() {
        let mut gen = DealGenerator::new(123);
        for _ in 0..200 {
            assert!(gen.generate().is_partition());
        }
    }

    #[test]
    fn test_entropy_generator_partitions() {
        let mut gen = DealGenerator::from_entropy();
        assert!(gen.generate().is_partition());
    }

    #[test]
    fn test_is_partition_rejects_bad_deals() {
        let mut gen = DealGenerator::new(9);
        let good = gen.generate();

        // Duplicate a card: overwrite one of West's cards with one of North's
        let mut duplicated = good.clone();
        let north_card = duplicated.north.cards()[0];
        let mut west_cards = duplicated.west.cards().to_vec();
        west_cards[0] = north_card;
        duplicated.west = Hand::from_cards(west_cards);
        assert!(!duplicated.is_partition());

        // Short hand
        let mut short = good.clone();
        short.east = Hand::from_cards(good.east.cards()[..12].to_vec());
        assert!(!short.is_partition());

        assert!(!Deal::new().is_partition());
    }

    #[test]
    fn test_seed_one_first_deal() {
        let mut gen = DealGenerator::new(1);
        let deal = gen.generate();

        assert_eq!(deal.hcp_by_position(), [11, 16, 4, 9]);
        assert!(deal.east.cards().contains(&Card::new(Suit::Diamonds, Rank::Ace)));
        assert!(deal.north.cards().contains(&Card::new(Suit::Spades, Rank::Ace)));
    }

    #[test]
    fn test_position_rotation() {
        use Position::*;
        assert_eq!(Position::rotation_from(North), [North, East, South, West]);
        assert_eq!(Position::rotation_from(East), [East, South, West, North]);
        assert_eq!(Position::rotation_from(South), [South, West, North, East]);
        assert_eq!(Position::rotation_from(West), [West, North, East, South]);
    }

    #[test]
    fn test_position_for_board() {
        use Position::*;
        let dealers: Vec<Position> = (1..=8).map(Position::for_board).collect();
        assert_eq!(dealers, vec![North, East, South, West, North, East, South, West]);
    }

    #[test]
    fn test_position_parse() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
        for bad in ["", "n", "X", "NE", " N", "N ", "North"] {
            assert!(
                matches!(bad.parse::<Position>(), Err(DealError::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
