use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("A poll needs between 2 and 10 options")]
    InvalidOptionCount,
    #[msg("Poll is closed or does not exist")]
    PollClosedOrMissing,
    #[msg("Already voted in this poll")]
    AlreadyVoted,
    #[msg("Invalid option index")]
    InvalidOption,
    #[msg("Poll is already closed")]
    AlreadyClosed,
    #[msg("Only the poll creator can end the poll")]
    NotAuthorized,
    #[msg("Poll title is too long")]
    TitleTooLong,
    #[msg("Option description is too long")]
    OptionTooLong,
    #[msg("Counter overflow")]
    CounterOverflow,
    #[msg("Too many polls requested in one listing")]
    ListingPageTooLarge,
    #[msg("Account is not the expected poll")]
    PollAccountMismatch,
}
