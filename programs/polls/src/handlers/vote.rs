use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{Poll, VoteCast, VoterRecord},
};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    /// CHECK: poll PDA for `poll_id`, decoded by `Poll::cast_vote` so that a poll
    /// that was never created reports PollClosedOrMissing
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll_acc: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + VoterRecord::INIT_SPACE,
        seeds = [VOTER_SEED, poll_acc.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

/// Casts the signer's single vote in a poll.
///
/// The voter record is created on first use and paid for by the voter. If
/// any check fails the transaction is rolled back, record creation included,
/// so the voter can retry with a valid option.
///
/// # Arguments
/// * `poll_id` - The poll to vote in
/// * `option_index` - Zero-based index of the chosen option
pub fn cast_vote(ctx: Context<Vote>, poll_id: u64, option_index: u8) -> Result<()> {
    let voter_record = &mut ctx.accounts.voter_record;
    Poll::cast_vote(&ctx.accounts.poll_acc, voter_record, option_index)?;
    voter_record.bump = ctx.bumps.voter_record;

    let voter = ctx.accounts.voter.key();
    msg!("Vote recorded on poll {} for option {}", poll_id, option_index);

    emit!(VoteCast {
        poll_id,
        option_index,
        voter,
    });

    Ok(())
}
