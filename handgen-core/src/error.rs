use thiserror::Error;

/// Errors raised while generating a deal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// A caller-supplied value (dealer code, flag, card code) was not recognised
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The weak-deal rejection loop gave up
    #[error("no acceptable deal after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}
