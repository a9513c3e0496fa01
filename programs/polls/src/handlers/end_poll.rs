use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{Poll, PollEnded},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct EndPoll<'info> {
    pub caller: Signer<'info>,

    /// CHECK: poll PDA for `poll_id`, decoded by `Poll::end` so that a poll
    /// that was never created reports AlreadyClosed
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll_acc: UncheckedAccount<'info>,
}

/// Closes a poll to further votes.
///
/// Only the poll creator can call this, and only once.
pub fn close_poll(ctx: Context<EndPoll>, poll_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    Poll::end(&ctx.accounts.poll_acc, &caller)?;

    msg!("Ending poll {}", poll_id);

    emit!(PollEnded {
        poll_id,
        closed_by: caller,
    });

    Ok(())
}
