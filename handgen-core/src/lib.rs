mod card;
mod deal;
mod error;
mod eval;
mod hand;

pub use card::{Card, Rank, Suit};
pub use deal::{Deal, DealGenerator, Position};
pub use error::DealError;
pub use eval::{is_weak_deal, WEAK_HAND_MAX_HCP};
pub use hand::Hand;
