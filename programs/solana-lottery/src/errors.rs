/// Error definitions for the lottery program
///
/// Contains all custom error types that can be returned by the program instructions.
use anchor_lang::prelude::*;

/// Custom error codes for the lottery program
#[error_code]
pub enum LotteryError {
    #[msg("The record at this address has already been initialized.")]
    AlreadyInitialized,
    #[msg("Ticket price must be greater than zero.")]
    InvalidTicketPrice,
    #[msg("The lottery id does not match the lottery account.")]
    LotteryIdMismatch,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("The counter moved since it was read. Re-read the account and retry.")]
    Conflict,
    #[msg("No bump produced a valid program address for these seeds.")]
    DerivationExhausted,
    #[msg("The id counter cannot be advanced any further.")]
    CounterOverflow,
    #[msg("Only the lottery authority can perform this action.")]
    Unauthorized,
    #[msg("Drawing a winner is not supported yet.")]
    DrawNotSupported,
}

impl LotteryError {
    /// Whether a client should resubmit the same instruction after re-reading state.
    ///
    /// Only a stale counter is transient; every other error is a caller or input
    /// error and repeats verbatim on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LotteryError::Conflict)
    }
}

/// Numeric code of an error returned by the program
#[cfg(test)]
pub(crate) fn code_of(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => panic!("expected an anchor error, got {:?}", e),
    }
}
