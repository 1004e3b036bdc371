//! Passed-out board detection.

use crate::Deal;

/// A hand with this many HCP or fewer counts as weak
pub const WEAK_HAND_MAX_HCP: u8 = 11;

/// True when every hand in the deal holds at most [`WEAK_HAND_MAX_HCP`] points,
/// i.e. the board is likely to be passed out.
pub fn is_weak_deal(deal: &Deal) -> bool {
    deal.hands().all(|(_, hand)| hand.hcp() <= WEAK_HAND_MAX_HCP)
}
