use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{Poll, PollView},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct ReadPoll<'info> {
    /// CHECK: poll PDA for `poll_id`; may not exist, in which case reads
    /// return defaults
    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll_acc: UncheckedAccount<'info>,
}

/// Returns the poll's title, status and tally.
///
/// A poll that was never created reads as an empty, inactive poll rather
/// than an error.
pub fn read_poll(ctx: Context<ReadPoll>, _poll_id: u64) -> Result<PollView> {
    Poll::read_view(&ctx.accounts.poll_acc)
}

/// Returns the poll creator, or the default key if the poll was never created.
pub fn read_poll_creator(ctx: Context<ReadPoll>, _poll_id: u64) -> Result<Pubkey> {
    Poll::read_creator(&ctx.accounts.poll_acc)
}
