//! Random bridge deal generation.
//!
//! Shuffles a fresh deck, deals four hands of 13, optionally throws away
//! boards where nobody holds more than 11 HCP, and renders the survivor in
//! PBN deal notation starting at the dealer:
//!
//! ```text
//! E:9874.KQ.5.AQJ852 AJT52.53.A73.T93 Q6.42.QJT62.K764 K3.AJT9876.K984.
//! ```
//!
//! # Rejection loop
//!
//! Roughly 3% of random deals are weak, so the loop almost always finishes in
//! one or two shuffles. It is still unbounded in principle; [`GeneratorConfig`]
//! caps it at [`DEFAULT_MAX_ATTEMPTS`] and reports
//! [`DealError::GenerationExhausted`] past that.

use handgen_core::DealGenerator;
use handgen_pbn::format_deal;
use log::{debug, trace, warn};

pub use handgen_core::{is_weak_deal, Deal, DealError, Position};

/// Default cap on shuffles per accepted deal when rejecting weak boards
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Settings for a [`RandomHandGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Re-deal boards where every hand has 11 HCP or fewer
    pub reject_weak: bool,
    /// Give up after this many shuffles for one board (`None` = never)
    pub max_attempts: Option<u32>,
}

impl GeneratorConfig {
    /// Default settings with weak-board rejection switched on
    pub fn rejecting_weak() -> Self {
        GeneratorConfig {
            reject_weak: true,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            reject_weak: false,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// Produces formatted random deals, re-dealing weak boards when configured to.
///
/// Each generator owns its own random source; use one per thread.
pub struct RandomHandGenerator {
    deals: DealGenerator,
    config: GeneratorConfig,
    generated: u64,
}

impl RandomHandGenerator {
    /// Create a generator seeded from the system clock
    pub fn new(config: GeneratorConfig) -> Self {
        Self::from_deals(DealGenerator::from_entropy(), config)
    }

    /// Create a generator with a fixed seed; the same seed and config always
    /// produce the same sequence of boards.
    pub fn with_seed(seed: u64, config: GeneratorConfig) -> Self {
        Self::from_deals(DealGenerator::new(seed), config)
    }

    fn from_deals(deals: DealGenerator, config: GeneratorConfig) -> Self {
        RandomHandGenerator {
            deals,
            config,
            generated: 0,
        }
    }

    /// Total shuffles performed so far, rejected ones included
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Deal until a board is accepted.
    pub fn next_deal(&mut self) -> Result<Deal, DealError> {
        let mut attempts: u32 = 0;

        loop {
            let deal = self.deals.generate();
            self.generated += 1;
            attempts += 1;

            if !self.config.reject_weak || !is_weak_deal(&deal) {
                trace!(
                    "accepted deal after {} attempt(s), HCP {:?}",
                    attempts,
                    deal.hcp_by_position()
                );
                return Ok(deal);
            }

            debug!(
                "rejected weak deal (attempt {}), HCP {:?}",
                attempts,
                deal.hcp_by_position()
            );

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    warn!("giving up after {} weak deals in a row", attempts);
                    return Err(DealError::GenerationExhausted { attempts });
                }
            }
        }
    }

    /// Generate one board and format it with the hands listed clockwise from `dealer`
    pub fn generate(&mut self, dealer: Position) -> Result<String, DealError> {
        let deal = self.next_deal()?;
        Ok(format_deal(dealer, &deal))
    }

    /// Generate a board whose dealer follows the usual rotation (board 1 = North)
    pub fn generate_board(&mut self, board_number: usize) -> Result<String, DealError> {
        self.generate(Position::for_board(board_number))
    }
}

/// Generate a single random board for `dealer` ("N", "E", "S" or "W").
///
/// With `reject_weak` set, boards where no hand has more than 11 HCP are
/// re-dealt. Any other dealer code is rejected before dealing.
pub fn generate_random_hand(dealer: &str, reject_weak: bool) -> Result<String, DealError> {
    let dealer: Position = dealer.parse()?;
    let config = GeneratorConfig {
        reject_weak,
        ..GeneratorConfig::default()
    };

    RandomHandGenerator::new(config).generate(dealer)
}

/// Read a loosely-encoded boolean flag ("1"/"0", "true"/"false", "yes"/"no")
pub fn parse_reject_flag(flag: &str) -> Result<bool, DealError> {
    match flag.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" | "" => Ok(false),
        other => Err(DealError::InvalidArgument(format!(
            "expected a boolean flag, got {:?}",
            other
        ))),
    }
}
